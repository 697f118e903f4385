mod console_navigator;
mod error;
