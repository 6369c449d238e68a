//! Backend of the application.

pub mod auth;
pub mod utils;
