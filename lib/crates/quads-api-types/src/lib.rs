//! Wire types for the QUADS v3 self-scheduling API.
//!
//! Shared between the CLI client and its tests. No I/O lives here.

pub mod endpoints;
pub mod types;

pub use types::*;
