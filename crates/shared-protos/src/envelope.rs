//! # Request Envelope
//!
//! The outer message of every call to the game-service API. It bundles the
//! business-logic sub-requests with side-channel platform requests.

/// Authentication ticket issued by the server after login.
///
/// The signing core only checks for its presence.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuthTicket {
    #[prost(bytes = "vec", tag = "1")]
    pub start: Vec<u8>,
    #[prost(uint64, tag = "2")]
    pub expire_timestamp_ms: u64,
    #[prost(bytes = "vec", tag = "3")]
    pub end: Vec<u8>,
}

/// One business-logic call bundled inside an envelope.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Request {
    #[prost(int32, tag = "1")]
    pub request_type: i32,
    #[prost(bytes = "vec", tag = "2")]
    pub request_message: Vec<u8>,
}

impl Request {
    /// Create a sub-request from its type discriminator and encoded body.
    pub fn new(request_type: i32, request_message: Vec<u8>) -> Self {
        Self {
            request_type,
            request_message,
        }
    }
}

/// Discriminator for platform requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PlatformRequestType {
    MethodUnset = 0,
    SendEncryptedSignature = 6,
    UnknownPtr8 = 8,
}

/// Side-channel entry carried next to the sub-requests.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PlatformRequest {
    #[prost(enumeration = "PlatformRequestType", tag = "1")]
    pub r#type: i32,
    #[prost(bytes = "vec", tag = "2")]
    pub request_message: Vec<u8>,
}

/// Payload of a `SEND_ENCRYPTED_SIGNATURE` platform request.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SendEncryptedSignatureRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub encrypted_signature: Vec<u8>,
}

/// The envelope sent to the server.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RequestEnvelope {
    #[prost(int32, tag = "1")]
    pub status_code: i32,
    #[prost(uint64, tag = "3")]
    pub request_id: u64,
    #[prost(message, repeated, tag = "4")]
    pub requests: Vec<Request>,
    #[prost(message, repeated, tag = "6")]
    pub platform_requests: Vec<PlatformRequest>,
    #[prost(double, tag = "7")]
    pub latitude: f64,
    #[prost(double, tag = "8")]
    pub longitude: f64,
    #[prost(double, tag = "9")]
    pub accuracy: f64,
    #[prost(message, optional, tag = "11")]
    pub auth_ticket: Option<AuthTicket>,
    #[prost(int64, tag = "12")]
    pub ms_since_last_locationfix: i64,
}

impl RequestEnvelope {
    /// Whether the envelope belongs to an authenticated session.
    pub fn has_auth_ticket(&self) -> bool {
        self.auth_ticket.is_some()
    }

    /// Number of business-logic sub-requests.
    pub fn sub_request_count(&self) -> usize {
        self.requests.len()
    }
}
