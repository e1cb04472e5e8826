//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that callers use
//! - **Outbound (Driven)**: Collaborators this subsystem needs

pub mod inbound;
pub mod outbound;

pub use inbound::PlatformSignatureApi;
pub use outbound::{
    Clock, DeviceFingerprint, EncryptCall, LocationFixSource, MockClock, MockDeviceFingerprint,
    MockEncryptor, MockLocationFixSource, SignatureEncryptor,
};
