//! Frontend module for the `Gatehouse` application.

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
