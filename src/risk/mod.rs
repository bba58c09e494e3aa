//! Risk scoring module.
//!
//! Converts raw environmental measurements into a risk verdict:
//! - Lenient coercion of caller-supplied fields (blank is not an error)
//! - Fixed-order cumulative scoring with display-ready reasons

pub mod engine;
pub mod input;

pub use engine::*;
pub use input::*;
