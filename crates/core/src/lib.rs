pub mod config;
pub mod document;

pub use config::{Config, LogConfig};
pub use document::*;
