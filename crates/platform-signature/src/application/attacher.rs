//! # Envelope Attacher
//!
//! Wraps encrypted signature bytes twice (payload message, then platform
//! request) and appends the result to the envelope. Existing platform
//! requests are never removed or reordered.

use prost::Message;
use shared_protos::{
    PlatformRequest, PlatformRequestType, RequestEnvelope, SendEncryptedSignatureRequest,
};

use crate::domain::entities::EncryptedSignature;

/// Build the `SEND_ENCRYPTED_SIGNATURE` platform request for `encrypted`.
pub fn encrypted_signature_request(encrypted: &[u8]) -> PlatformRequest {
    let payload = SendEncryptedSignatureRequest {
        encrypted_signature: encrypted.to_vec(),
    };

    PlatformRequest {
        r#type: PlatformRequestType::SendEncryptedSignature as i32,
        request_message: payload.encode_to_vec(),
    }
}

/// Append the signature to `envelope`. Returns the encrypted payload length.
pub fn attach_encrypted_signature(
    envelope: &mut RequestEnvelope,
    encrypted: EncryptedSignature,
) -> usize {
    let encrypted_len = encrypted.bytes.len();
    envelope
        .platform_requests
        .push(encrypted_signature_request(&encrypted.bytes));
    encrypted_len
}
