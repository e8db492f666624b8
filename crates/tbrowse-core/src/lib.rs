pub mod config;
pub mod error;
pub mod logging;

pub mod browser;
pub mod cache;
pub mod fetch;
pub mod history;
pub mod render;
pub mod url_model;

pub use browser::Browser;
pub use error::BrowseError;
