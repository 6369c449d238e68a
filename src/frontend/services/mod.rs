//! Frontend services for authentication state and navigation decisions.

pub mod context;
pub mod gate;
