//! Platform Signature Service
//!
//! Main service implementing PlatformSignatureApi.
//!
//! Runs the pipeline for one envelope:
//! 1. Assemble (or decide the envelope stays unsigned)
//! 2. Encrypt
//! 3. Attach
//!
//! The envelope is only touched in step 3, so an unsigned outcome or an
//! error always leaves it exactly as the caller passed it in.

use rand::RngCore;
use shared_protos::RequestEnvelope;
use signing_telemetry::metrics;
use tracing::{debug, error, warn};

use crate::application::assembler::{AssemblyAbort, SignatureAssembler};
use crate::application::attacher::attach_encrypted_signature;
use crate::application::encryption::EncryptionAdapter;
use crate::config::{HashCountPolicy, SigningConfig};
use crate::domain::entities::{SessionContext, SignedSummary, SigningOutcome, UnsignedReason};
use crate::domain::errors::{HashInputError, SigningError};
use crate::domain::invariants::{
    invariant_elapsed_from_epoch, invariant_field_25, invariant_request_hash_alignment,
    invariant_sensor_cardinality,
};
use crate::ports::inbound::PlatformSignatureApi;
use crate::ports::outbound::{Clock, DeviceFingerprint, LocationFixSource, SignatureEncryptor};

/// Platform Signature Service
///
/// Owns the collaborators for one authenticated client. Holds no per-call
/// state; every call builds an independent signature.
pub struct PlatformSignatureService<C, D, L, E> {
    assembler: SignatureAssembler<C, D, L>,
    encryption: EncryptionAdapter<E>,
    config: SigningConfig,
}

impl<C, D, L, E> PlatformSignatureService<C, D, L, E>
where
    C: Clock,
    D: DeviceFingerprint,
    L: LocationFixSource,
    E: SignatureEncryptor,
{
    /// Create a new service with default config
    pub fn new(clock: C, device: D, locations: L, encryptor: E) -> Self {
        Self::with_config(clock, device, locations, encryptor, SigningConfig::default())
    }

    /// Create a new service with custom config
    pub fn with_config(
        clock: C,
        device: D,
        locations: L,
        encryptor: E,
        config: SigningConfig,
    ) -> Self {
        Self {
            assembler: SignatureAssembler::new(clock, device, locations),
            encryption: EncryptionAdapter::new(encryptor),
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &SigningConfig {
        &self.config
    }

    /// Start a session against this service's clock.
    pub fn begin_session(&self, rng: &mut dyn RngCore) -> SessionContext {
        SessionContext::begin(self.assembler.clock().now_millis(), rng)
    }

    fn skip(&self, reason: UnsignedReason) -> SigningOutcome {
        debug!(reason = reason.as_label(), "Envelope left unsigned");
        if self.config.record_metrics {
            metrics::record_skipped(reason.as_label());
        }
        SigningOutcome::Unsigned(reason)
    }

    fn fail(&self, err: SigningError) -> SigningError {
        if self.config.record_metrics {
            metrics::record_failure(err.as_label());
        }
        err
    }

    /// Map an aborted assembly onto the caller-visible result.
    fn resolve_abort(&self, abort: AssemblyAbort) -> Result<SigningOutcome, SigningError> {
        match abort {
            AssemblyAbort::NoAuthTicket => Ok(self.skip(UnsignedReason::NoAuthTicket)),
            AssemblyAbort::Hashes(HashInputError::Malformed { index }) => {
                Ok(self.skip(UnsignedReason::MalformedHash { index }))
            }
            AssemblyAbort::Hashes(HashInputError::Missing { expected, actual }) => {
                match self.config.hash_count_policy {
                    HashCountPolicy::Skip => {
                        Ok(self.skip(UnsignedReason::MissingHashes { expected, actual }))
                    }
                    HashCountPolicy::Reject => {
                        warn!(expected, actual, "Hash set does not cover every sub-request");
                        Err(self.fail(SigningError::HashCountMismatch { expected, actual }))
                    }
                }
            }
        }
    }
}

impl<C, D, L, E> PlatformSignatureApi for PlatformSignatureService<C, D, L, E>
where
    C: Clock,
    D: DeviceFingerprint,
    L: LocationFixSource,
    E: SignatureEncryptor,
{
    fn sign_with_rng(
        &self,
        session: &SessionContext,
        envelope: &mut RequestEnvelope,
        hashes: &[String],
        rng: &mut dyn RngCore,
    ) -> Result<SigningOutcome, SigningError> {
        // 1. Assemble
        let assembled = match self.assembler.assemble(session, envelope, hashes, rng) {
            Ok(assembled) => assembled,
            Err(abort) => return self.resolve_abort(abort),
        };

        debug_assert!(invariant_request_hash_alignment(&assembled.signature, envelope));
        debug_assert!(invariant_elapsed_from_epoch(&assembled.signature, session));
        debug_assert!(invariant_field_25(&assembled.signature));
        debug_assert!(invariant_sensor_cardinality(&assembled.signature));

        let epoch_timestamp_ms = assembled.signature.epoch_timestamp_ms;
        let elapsed_ms = assembled.elapsed_ms;
        let request_hash_count = assembled.signature.request_hashes.len();

        // 2. Encrypt
        let encrypted = self.encryption.encrypt(assembled).map_err(|e| {
            error!(error = %e, elapsed_ms, "Signature encryption failed");
            self.fail(SigningError::Encryption(e))
        })?;
        let plaintext_len = encrypted.plaintext_len;

        // 3. Attach
        let encrypted_len = attach_encrypted_signature(envelope, encrypted);

        if self.config.record_metrics {
            metrics::record_attached(encrypted_len);
        }

        debug!(
            request_hashes = request_hash_count,
            plaintext_len,
            encrypted_len,
            platform_requests = envelope.platform_requests.len(),
            "Encrypted signature attached"
        );

        Ok(SigningOutcome::Signed(SignedSummary {
            epoch_timestamp_ms,
            elapsed_ms,
            request_hash_count,
            plaintext_len,
            encrypted_len,
        }))
    }
}
