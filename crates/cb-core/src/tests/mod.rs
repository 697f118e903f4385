mod models;
mod timestamp;
