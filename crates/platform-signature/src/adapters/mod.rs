//! # Adapters
//!
//! Production implementations of the outbound ports.

pub mod clock;
pub mod fingerprint;

pub use clock::SystemClock;
pub use fingerprint::{FixedDeviceFingerprint, NoLocationFixes};
