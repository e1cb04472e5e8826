//! # Platform Signature
//!
//! The plaintext signature message. It is serialized, encrypted and carried
//! inside a `SEND_ENCRYPTED_SIGNATURE` platform request.
//!
//! ## Numeric Encoding
//!
//! | Field | Wire type | Rust type | Notes |
//! |-------|-----------|-----------|-------|
//! | `location_hash_by_token_seed` | uint32 | `u32` | bit pattern of a signed 32-bit hash |
//! | `location_hash` | uint32 | `u32` | bit pattern of a signed 32-bit hash |
//! | `timestamp_ms_since_start` | uint64 | `u64` | |
//! | `epoch_timestamp_ms` | uint64 | `u64` | |
//! | `request_hashes` | repeated uint64 | `Vec<u64>` | packed |
//! | `unknown25` | int64 | `i64` | negative, encodes as 10 bytes |

/// One entry of the client's recent location history.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LocationUpdate {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(uint64, tag = "2")]
    pub timestamp_snapshot: u64,
    #[prost(float, tag = "3")]
    pub latitude: f32,
    #[prost(float, tag = "4")]
    pub longitude: f32,
    #[prost(float, tag = "5")]
    pub horizontal_accuracy: f32,
    #[prost(float, tag = "6")]
    pub altitude: f32,
    #[prost(float, tag = "7")]
    pub vertical_accuracy: f32,
    #[prost(uint64, tag = "8")]
    pub provider_status: u64,
    #[prost(int32, tag = "9")]
    pub floor: i32,
    #[prost(uint64, tag = "10")]
    pub location_type: u64,
}

/// Motion sensor snapshot.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SensorUpdate {
    #[prost(uint64, tag = "1")]
    pub timestamp: u64,
    #[prost(double, tag = "2")]
    pub acceleration_x: f64,
    #[prost(double, tag = "3")]
    pub acceleration_y: f64,
    #[prost(double, tag = "4")]
    pub acceleration_z: f64,
    #[prost(double, tag = "5")]
    pub magnetic_field_x: f64,
    #[prost(double, tag = "6")]
    pub magnetic_field_y: f64,
    #[prost(double, tag = "7")]
    pub magnetic_field_z: f64,
    #[prost(int32, tag = "8")]
    pub magnetic_field_accuracy: i32,
    #[prost(double, tag = "9")]
    pub attitude_pitch: f64,
    #[prost(double, tag = "10")]
    pub attitude_yaw: f64,
    #[prost(double, tag = "11")]
    pub attitude_roll: f64,
    #[prost(double, tag = "12")]
    pub rotation_rate_x: f64,
    #[prost(double, tag = "13")]
    pub rotation_rate_y: f64,
    #[prost(double, tag = "14")]
    pub rotation_rate_z: f64,
    #[prost(double, tag = "15")]
    pub gravity_x: f64,
    #[prost(double, tag = "16")]
    pub gravity_y: f64,
    #[prost(double, tag = "17")]
    pub gravity_z: f64,
    #[prost(int32, tag = "18")]
    pub status: i32,
}

/// Static description of the device the session runs on.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct DeviceInfo {
    #[prost(string, tag = "1")]
    pub device_id: String,
    #[prost(string, tag = "2")]
    pub android_board_name: String,
    #[prost(string, tag = "3")]
    pub android_bootloader: String,
    #[prost(string, tag = "4")]
    pub device_brand: String,
    #[prost(string, tag = "5")]
    pub device_model: String,
    #[prost(string, tag = "6")]
    pub device_model_identifier: String,
    #[prost(string, tag = "7")]
    pub device_model_boot: String,
    #[prost(string, tag = "8")]
    pub hardware_manufacturer: String,
    #[prost(string, tag = "9")]
    pub hardware_model: String,
    #[prost(string, tag = "10")]
    pub firmware_brand: String,
    #[prost(string, tag = "12")]
    pub firmware_tags: String,
    #[prost(string, tag = "13")]
    pub firmware_type: String,
    #[prost(string, tag = "14")]
    pub firmware_fingerprint: String,
}

/// Activity recognition snapshot.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct ActivityStatus {
    #[prost(uint64, tag = "1")]
    pub start_time_ms: u64,
    #[prost(bool, tag = "2")]
    pub unknown_status: bool,
    #[prost(bool, tag = "3")]
    pub walking: bool,
    #[prost(bool, tag = "4")]
    pub running: bool,
    #[prost(bool, tag = "5")]
    pub stationary: bool,
    #[prost(bool, tag = "6")]
    pub automotive: bool,
    #[prost(bool, tag = "7")]
    pub tilting: bool,
    #[prost(bool, tag = "8")]
    pub cycling: bool,
    #[prost(bytes = "vec", tag = "9")]
    pub status: Vec<u8>,
}

/// The plaintext platform signature.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Signature {
    #[prost(uint64, tag = "2")]
    pub timestamp_ms_since_start: u64,
    #[prost(message, repeated, tag = "4")]
    pub location_updates: Vec<LocationUpdate>,
    #[prost(message, repeated, tag = "7")]
    pub sensor_updates: Vec<SensorUpdate>,
    #[prost(message, optional, tag = "8")]
    pub device_info: Option<DeviceInfo>,
    #[prost(message, optional, tag = "9")]
    pub activity_status: Option<ActivityStatus>,
    #[prost(uint32, tag = "10")]
    pub location_hash_by_token_seed: u32,
    #[prost(uint32, tag = "20")]
    pub location_hash: u32,
    #[prost(bytes = "vec", tag = "22")]
    pub session_hash: Vec<u8>,
    #[prost(uint64, tag = "23")]
    pub epoch_timestamp_ms: u64,
    #[prost(uint64, repeated, tag = "24")]
    pub request_hashes: Vec<u64>,
    #[prost(int64, tag = "25")]
    pub unknown25: i64,
}
