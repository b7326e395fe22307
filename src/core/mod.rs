//! Core traits and third-party matrix interop.

pub mod traits;
pub mod wrappers;
