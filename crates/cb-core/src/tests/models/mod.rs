mod bot;
mod document_status;
mod identity;
mod session;
mod tenant;
