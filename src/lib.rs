pub mod config;
pub mod document;
pub mod logging;
pub mod module;
pub mod session;
