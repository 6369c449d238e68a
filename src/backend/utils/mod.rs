//! Backend utilities.

pub mod config;
pub mod paths;

pub use config::{AppConfig, AuthMode};
