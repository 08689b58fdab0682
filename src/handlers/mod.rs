//! HTTP handlers for the restaurant resource.

pub mod restaurant;
pub use restaurant::*;
