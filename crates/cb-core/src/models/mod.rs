pub mod ai_provider;
pub mod bot;
pub mod conversation;
pub mod dataset;
pub mod document;
pub mod document_status;
pub mod identity;
pub mod page;
pub mod session;
pub mod settings;
pub mod stats;
pub mod tenant;
