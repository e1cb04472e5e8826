//! # Signature Assembler
//!
//! Gathers timing, identity, location, sensor and per-request hash data into
//! one `Signature` message.
//!
//! ## Assembly Order
//!
//! 1. Read the clock once; derive elapsed session time from that reading
//! 2. Truncate hash[0] and hash[1] to 32 bits
//! 3. Device info, activity status, location fixes (shared generator)
//! 4. Session hash
//! 5. Field 25
//! 6. At most one sensor update
//! 7. One 64-bit hash per sub-request, in envelope order
//!
//! Any hash problem aborts the whole assembly; no partial signature escapes.

use rand::RngCore;
use shared_protos::{RequestEnvelope, SensorUpdate, Signature};
use tracing::trace;

use crate::domain::entities::{AssembledSignature, SessionContext, SIGNATURE_FIELD_25};
use crate::domain::errors::HashInputError;
use crate::domain::hashes::HashInputs;
use crate::ports::outbound::{Clock, DeviceFingerprint, LocationFixSource};

/// Why assembly stopped before producing a signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssemblyAbort {
    /// The envelope carries no authentication ticket
    NoAuthTicket,
    /// The hash set could not be used
    Hashes(HashInputError),
}

impl From<HashInputError> for AssemblyAbort {
    fn from(err: HashInputError) -> Self {
        AssemblyAbort::Hashes(err)
    }
}

/// Builds signatures from the session collaborators.
pub struct SignatureAssembler<C, D, L> {
    clock: C,
    device: D,
    locations: L,
}

impl<C, D, L> SignatureAssembler<C, D, L>
where
    C: Clock,
    D: DeviceFingerprint,
    L: LocationFixSource,
{
    /// Create an assembler.
    pub fn new(clock: C, device: D, locations: L) -> Self {
        Self {
            clock,
            device,
            locations,
        }
    }

    /// Clock the assembler reads signature timestamps from.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Assemble a signature for `envelope`.
    ///
    /// Consumes entropy from `rng`; does not touch the envelope.
    pub fn assemble<S: AsRef<str>>(
        &self,
        session: &SessionContext,
        envelope: &RequestEnvelope,
        hashes: &[S],
        rng: &mut dyn RngCore,
    ) -> Result<AssembledSignature, AssemblyAbort> {
        if !envelope.has_auth_ticket() {
            return Err(AssemblyAbort::NoAuthTicket);
        }

        let hashes = HashInputs::new(hashes);

        // 1. One clock read feeds both timestamps
        let epoch_timestamp_ms = self.clock.now_millis();
        let elapsed_ms = session.elapsed_ms(epoch_timestamp_ms);

        // 2. Location hashes
        let location_hash_by_token_seed = hashes.location_hash_by_token_seed()?;
        let location_hash = hashes.location_hash()?;

        // 3. Fingerprints, all drawn from the same generator
        let device_info = self.device.device_info();
        let activity_status = self.device.activity_status(rng);
        let location_updates = self
            .locations
            .location_fixes(envelope, epoch_timestamp_ms, rng);

        let mut signature = Signature {
            location_hash_by_token_seed: location_hash_by_token_seed as u32,
            location_hash: location_hash as u32,
            epoch_timestamp_ms,
            timestamp_ms_since_start: elapsed_ms,
            device_info: Some(device_info),
            activity_status: Some(activity_status),
            location_updates,
            // 4. Session hash, verbatim
            session_hash: session.session_hash.as_bytes().to_vec(),
            // 5. Fixed field
            unknown25: SIGNATURE_FIELD_25,
            ..Default::default()
        };

        // 6. Sensor data is optional; an all-default update counts as absent
        if let Some(update) = self.device.sensor_update(epoch_timestamp_ms, rng) {
            if update != SensorUpdate::default() {
                signature.sensor_updates.push(update);
            }
        }

        // 7. Per-request hashes
        signature.request_hashes = hashes.request_hashes(envelope.sub_request_count())?;

        trace!(
            request_hashes = signature.request_hashes.len(),
            location_updates = signature.location_updates.len(),
            sensor_updates = signature.sensor_updates.len(),
            elapsed_ms,
            "Signature assembled"
        );

        Ok(AssembledSignature {
            signature,
            elapsed_ms,
        })
    }
}
