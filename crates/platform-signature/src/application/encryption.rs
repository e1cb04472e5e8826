//! # Encryption Adapter
//!
//! Serializes an assembled signature and hands it, with the elapsed session
//! time captured during assembly, to the encryption primitive. One call per
//! signature, no retries.

use prost::Message;

use crate::domain::entities::{AssembledSignature, EncryptedSignature};
use crate::domain::errors::EncryptionError;
use crate::ports::outbound::SignatureEncryptor;

/// Wraps the encryption primitive.
pub struct EncryptionAdapter<E> {
    encryptor: E,
}

impl<E: SignatureEncryptor> EncryptionAdapter<E> {
    /// Create an adapter around `encryptor`.
    pub fn new(encryptor: E) -> Self {
        Self { encryptor }
    }

    /// Serialize and encrypt. The assembled signature is consumed.
    ///
    /// # Errors
    /// * `EncryptionError::Primitive` - forwarded from the primitive
    /// * `EncryptionError::EmptyOutput` - the primitive returned nothing
    pub fn encrypt(
        &self,
        assembled: AssembledSignature,
    ) -> Result<EncryptedSignature, EncryptionError> {
        let plaintext = assembled.signature.encode_to_vec();
        let bytes = self.encryptor.encrypt(&plaintext, assembled.elapsed_ms)?;

        if bytes.is_empty() {
            return Err(EncryptionError::EmptyOutput);
        }

        Ok(EncryptedSignature {
            bytes,
            plaintext_len: plaintext.len(),
        })
    }
}
