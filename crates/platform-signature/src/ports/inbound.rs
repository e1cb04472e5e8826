//! # Inbound Ports (Driving Ports / API)
//!
//! The public API of the signing pipeline.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use shared_protos::RequestEnvelope;

use crate::domain::entities::{SessionContext, SigningOutcome};
use crate::domain::errors::SigningError;

/// Platform Signature API.
///
/// Implementations must be thread-safe (`Send + Sync`). Each call borrows its
/// envelope exclusively; concurrent calls work on distinct envelopes.
pub trait PlatformSignatureApi: Send + Sync {
    /// Sign `envelope` using a generator seeded from OS entropy.
    ///
    /// Returns `Ok(SigningOutcome::Unsigned(_))` when the envelope is not
    /// ready to be signed (no ticket, bad hash input) and leaves it untouched.
    ///
    /// # Errors
    /// * `SigningError::Encryption` - the primitive failed; do not send the envelope
    /// * `SigningError::HashCountMismatch` - short hash set under the strict policy
    fn sign(
        &self,
        session: &SessionContext,
        envelope: &mut RequestEnvelope,
        hashes: &[String],
    ) -> Result<SigningOutcome, SigningError> {
        let mut rng = StdRng::from_entropy();
        self.sign_with_rng(session, envelope, hashes, &mut rng)
    }

    /// Sign `envelope`, drawing every random field from `rng`.
    fn sign_with_rng(
        &self,
        session: &SessionContext,
        envelope: &mut RequestEnvelope,
        hashes: &[String],
        rng: &mut dyn RngCore,
    ) -> Result<SigningOutcome, SigningError>;
}
