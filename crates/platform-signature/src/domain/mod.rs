//! # Domain Layer
//!
//! Hash parsing, session state, outcomes and invariants. No collaborators,
//! no I/O.

pub mod entities;
pub mod errors;
pub mod hashes;
pub mod invariants;

pub use entities::*;
pub use errors::*;
pub use hashes::{parse_wrapping_i32, parse_wrapping_u64, HashInputs};
