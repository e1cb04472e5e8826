//! # Signing Errors
//!
//! Error types for the signing pipeline.
//!
//! Only `SigningError` ever reaches a caller as an `Err`. Hash problems that
//! are expected during normal operation are turned into
//! `SigningOutcome::Unsigned` by the service.

use thiserror::Error;

/// A problem with the caller-supplied hash set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HashInputError {
    /// The entry is not a decimal integer
    #[error("Hash at index {index} is not a decimal integer")]
    Malformed { index: usize },

    /// The hash set has fewer entries than the envelope needs
    #[error("Hash set too short: expected {expected} entries, got {actual}")]
    Missing { expected: usize, actual: usize },
}

/// Failure reported by the encryption primitive.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncryptionError {
    /// The primitive itself failed
    #[error("Encryption primitive failed: {0}")]
    Primitive(String),

    /// The primitive returned no bytes for a non-empty signature
    #[error("Encryption primitive returned an empty payload")]
    EmptyOutput,
}

/// The session hash was built from a slice of the wrong length.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Session hash must be {expected} bytes, got {actual}")]
pub struct SessionHashLengthError {
    pub expected: usize,
    pub actual: usize,
}

/// Fatal signing errors. The envelope must not be sent.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SigningError {
    /// Encryption of the assembled signature failed
    #[error("Signature encryption failed: {0}")]
    Encryption(#[from] EncryptionError),

    /// The hash set does not cover every sub-request (strict policy only)
    #[error("Hash set does not cover every sub-request: expected {expected} entries, got {actual}")]
    HashCountMismatch { expected: usize, actual: usize },
}

impl SigningError {
    /// Short label used for metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            SigningError::Encryption(_) => "encryption",
            SigningError::HashCountMismatch { .. } => "hash_count",
        }
    }
}
