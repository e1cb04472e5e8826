//! # Domain Entities
//!
//! Session state, pipeline intermediates and call outcomes.

use rand::RngCore;
use shared_protos::Signature;

use super::errors::SessionHashLengthError;

/// Value the server expects in signature field 25 of every signature.
pub const SIGNATURE_FIELD_25: i64 = -8408506833887075802;

/// Length of the session hash in bytes.
pub const SESSION_HASH_LEN: usize = 16;

// =============================================================================
// Session
// =============================================================================

/// Opaque token that stays constant for one authenticated session.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SessionHash([u8; SESSION_HASH_LEN]);

impl SessionHash {
    /// Create from bytes.
    pub fn from_bytes(bytes: [u8; SESSION_HASH_LEN]) -> Self {
        Self(bytes)
    }

    /// Create from a slice that must be exactly 16 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SessionHashLengthError> {
        let array: [u8; SESSION_HASH_LEN] =
            bytes.try_into().map_err(|_| SessionHashLengthError {
                expected: SESSION_HASH_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(array))
    }

    /// Draw a fresh session hash.
    pub fn random(rng: &mut dyn RngCore) -> Self {
        let mut bytes = [0u8; SESSION_HASH_LEN];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Get inner bytes.
    pub fn as_bytes(&self) -> &[u8; SESSION_HASH_LEN] {
        &self.0
    }
}

// Session hashes identify a client; keep them out of logs.
impl std::fmt::Debug for SessionHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionHash(..)")
    }
}

/// Per-session state read by every signing call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionContext {
    /// Wall-clock time the session started, in milliseconds since the epoch
    pub start_time_ms: u64,
    /// Session hash copied into every signature
    pub session_hash: SessionHash,
}

impl SessionContext {
    /// Create a session context from known values.
    pub fn new(start_time_ms: u64, session_hash: SessionHash) -> Self {
        Self {
            start_time_ms,
            session_hash,
        }
    }

    /// Start a new session now, with a freshly drawn session hash.
    pub fn begin(now_ms: u64, rng: &mut dyn RngCore) -> Self {
        Self::new(now_ms, SessionHash::random(rng))
    }

    /// Milliseconds elapsed between session start and `now_ms`.
    ///
    /// Uses wrapping subtraction so a clock that stepped backwards yields the
    /// same 64-bit pattern a signed subtraction would.
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.wrapping_sub(self.start_time_ms)
    }
}

// =============================================================================
// Pipeline Intermediates
// =============================================================================

/// Fully populated signature, not yet serialized.
///
/// Lives for one signing call only.
#[derive(Clone, Debug, PartialEq)]
pub struct AssembledSignature {
    /// The plaintext signature message
    pub signature: Signature,
    /// Elapsed session time captured with the signature timestamp
    pub elapsed_ms: u64,
}

/// Output of the encryption primitive for one assembled signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncryptedSignature {
    /// Encrypted bytes, opaque to this crate
    pub bytes: Vec<u8>,
    /// Length of the serialized plaintext that was encrypted
    pub plaintext_len: usize,
}

// =============================================================================
// Outcomes
// =============================================================================

/// Why a call returned without signing the envelope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UnsignedReason {
    /// The envelope has no authentication ticket yet
    NoAuthTicket,
    /// A hash entry is not a decimal integer
    MalformedHash { index: usize },
    /// The hash set does not cover every sub-request
    MissingHashes { expected: usize, actual: usize },
}

impl UnsignedReason {
    /// Short label used for metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            UnsignedReason::NoAuthTicket => "no_auth_ticket",
            UnsignedReason::MalformedHash { .. } => "malformed_hash",
            UnsignedReason::MissingHashes { .. } => "missing_hashes",
        }
    }
}

/// Summary of a signature that was attached to an envelope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedSummary {
    /// Signature timestamp
    pub epoch_timestamp_ms: u64,
    /// Elapsed session time passed to the encryption primitive
    pub elapsed_ms: u64,
    /// Number of per-request hashes in the signature
    pub request_hash_count: usize,
    /// Serialized plaintext length
    pub plaintext_len: usize,
    /// Encrypted payload length
    pub encrypted_len: usize,
}

/// Result of a signing call that did not fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SigningOutcome {
    /// Exactly one platform request was appended
    Signed(SignedSummary),
    /// The envelope was left untouched
    Unsigned(UnsignedReason),
}

impl SigningOutcome {
    /// Whether a platform request was appended.
    pub fn is_signed(&self) -> bool {
        matches!(self, SigningOutcome::Signed(_))
    }
}
