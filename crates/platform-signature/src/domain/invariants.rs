//! Domain invariants for platform signatures
//!
//! Each check holds for every signature the pipeline produces and for every
//! envelope it mutates. The service asserts them in debug builds.

use shared_protos::{PlatformRequest, RequestEnvelope, Signature};

use super::entities::{SessionContext, SIGNATURE_FIELD_25};

/// INVARIANT-1: Request Hash Alignment
/// One request hash per sub-request in the envelope.
pub fn invariant_request_hash_alignment(signature: &Signature, envelope: &RequestEnvelope) -> bool {
    signature.request_hashes.len() == envelope.requests.len()
}

/// INVARIANT-2: Single Clock Read
/// Elapsed time is derived from the recorded epoch timestamp.
pub fn invariant_elapsed_from_epoch(signature: &Signature, session: &SessionContext) -> bool {
    signature.timestamp_ms_since_start == session.elapsed_ms(signature.epoch_timestamp_ms)
}

/// INVARIANT-3: Fixed Field 25
pub fn invariant_field_25(signature: &Signature) -> bool {
    signature.unknown25 == SIGNATURE_FIELD_25
}

/// INVARIANT-4: Sensor Cardinality
/// Zero or one sensor update, never an empty placeholder.
pub fn invariant_sensor_cardinality(signature: &Signature) -> bool {
    match signature.sensor_updates.as_slice() {
        [] => true,
        [update] => *update != Default::default(),
        _ => false,
    }
}

/// INVARIANT-5: Append Only
/// `after` starts with every entry of `before`, unchanged and in order.
pub fn invariant_append_only(before: &[PlatformRequest], after: &[PlatformRequest]) -> bool {
    after.len() >= before.len() && after[..before.len()] == *before
}
