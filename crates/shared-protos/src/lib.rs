//! # Shared Protos Crate
//!
//! Protobuf wire messages exchanged with the game-service API.
//!
//! ## Design Principles
//!
//! - **Wire Fidelity**: Field tags and scalar types match the server schema
//!   exactly. Changing a tag or a scalar type changes the encoded bytes.
//! - **Opaque Sub-Messages**: Device, activity, sensor and location messages
//!   are defined here so collaborators can build them; the signing core never
//!   inspects their contents.

pub mod envelope;
pub mod signature;

pub use envelope::{
    AuthTicket, PlatformRequest, PlatformRequestType, Request, RequestEnvelope,
    SendEncryptedSignatureRequest,
};
pub use signature::{ActivityStatus, DeviceInfo, LocationUpdate, SensorUpdate, Signature};

/// Re-exported so downstream crates encode and decode with the same trait.
pub use prost::Message;
