//! Configuration types
//!
//! User settings the companion app delivers and the watch persists.

pub mod types;

pub use types::*;
