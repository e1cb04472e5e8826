//! # Platform Signature
//!
//! Builds the encrypted signature that every authenticated request envelope
//! must carry, and attaches it as a `SEND_ENCRYPTED_SIGNATURE` platform
//! request.
//!
//! ## Architecture
//!
//! Hexagonal (Ports/Adapters):
//! - **Domain Layer** (`domain/`): hash parsing, session state, outcomes, invariants
//! - **Ports Layer** (`ports/`): inbound API, outbound collaborator traits and mocks
//! - **Application Layer** (`application/`): assembler, encryption adapter,
//!   envelope attacher, service
//! - **Adapters** (`adapters/`): system clock, fixed fingerprint sources
//!
//! ## Pipeline
//!
//! ```text
//! envelope + hashes ──► SignatureAssembler ──► EncryptionAdapter ──► attacher
//!        ▲                                                              │
//!        └──────────────── platform request appended ◄──────────────────┘
//! ```
//!
//! ## Outcomes
//!
//! | Situation | Result | Envelope |
//! |-----------|--------|----------|
//! | signed | `Ok(Signed)` | one platform request appended |
//! | no auth ticket | `Ok(Unsigned(NoAuthTicket))` | unchanged |
//! | unparsable hash | `Ok(Unsigned(MalformedHash))` | unchanged |
//! | short hash set, `skip` policy | `Ok(Unsigned(MissingHashes))` | unchanged |
//! | short hash set, `reject` policy | `Err(HashCountMismatch)` | unchanged |
//! | encryption failure | `Err(Encryption)` | unchanged |

#![warn(clippy::all)]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-export public API
pub use adapters::{FixedDeviceFingerprint, NoLocationFixes, SystemClock};
pub use application::{
    attach_encrypted_signature, encrypted_signature_request, AssemblyAbort, EncryptionAdapter,
    PlatformSignatureService, SignatureAssembler,
};
pub use config::{HashCountPolicy, SigningConfig};
pub use domain::entities::{
    AssembledSignature, EncryptedSignature, SessionContext, SessionHash, SignedSummary,
    SigningOutcome, UnsignedReason, SESSION_HASH_LEN, SIGNATURE_FIELD_25,
};
pub use domain::errors::{EncryptionError, HashInputError, SessionHashLengthError, SigningError};
pub use domain::hashes::{parse_wrapping_i32, parse_wrapping_u64, HashInputs};
pub use ports::inbound::PlatformSignatureApi;
pub use ports::outbound::{
    Clock, DeviceFingerprint, EncryptCall, LocationFixSource, MockClock, MockDeviceFingerprint,
    MockEncryptor, MockLocationFixSource, SignatureEncryptor,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
