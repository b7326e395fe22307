//! Configuration for the elimination routines.

pub mod options;
pub use options::EliminationOptions;
