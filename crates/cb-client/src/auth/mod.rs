pub(crate) mod context;
pub(crate) mod endpoints;
pub(crate) mod guard;
pub(crate) mod service;
