//! Views registered in the route table.

pub mod home;
pub mod login;
pub mod not_found;
