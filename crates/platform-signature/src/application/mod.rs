//! # Application Layer
//!
//! The three pipeline stages and the service that runs them in order.

pub mod assembler;
pub mod attacher;
pub mod encryption;
pub mod service;

pub use assembler::{AssemblyAbort, SignatureAssembler};
pub use attacher::{attach_encrypted_signature, encrypted_signature_request};
pub use encryption::EncryptionAdapter;
pub use service::PlatformSignatureService;
