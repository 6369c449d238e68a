//! UI components and layouts.

pub mod gate;
