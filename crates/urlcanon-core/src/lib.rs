pub mod config;
pub mod logging;

pub mod batch;
pub mod processor;
pub mod url_model;

pub use processor::{process, Operation, ProcessError, UrlProcessor};
