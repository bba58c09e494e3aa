//! Shelter ranking module.
//!
//! Orders the shelter catalog by distance from a user position:
//! - `Shelter` - catalog model (static reference data, read-only)
//! - `rank` - stable ascending sort by great-circle distance

pub mod catalog;
pub mod ranker;

pub use catalog::*;
pub use ranker::*;
