//! # Outbound Ports (Driven Ports / SPI)
//!
//! Collaborators the signing pipeline depends on. Every port is synchronous:
//! a signing call never suspends.
//!
//! The randomness source is passed explicitly into each call so one signing
//! pass draws every random field from a single stream.

use rand::RngCore;
use shared_protos::{ActivityStatus, DeviceInfo, LocationUpdate, RequestEnvelope, SensorUpdate};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::errors::EncryptionError;

/// Wall clock in milliseconds since the Unix epoch.
pub trait Clock: Send + Sync {
    /// Current time in milliseconds.
    fn now_millis(&self) -> u64;
}

/// Device and motion fingerprint of the client.
pub trait DeviceFingerprint: Send + Sync {
    /// Static device description.
    fn device_info(&self) -> DeviceInfo;

    /// Activity recognition snapshot.
    fn activity_status(&self, rng: &mut dyn RngCore) -> ActivityStatus;

    /// Motion sensor snapshot at `timestamp_ms`, if the device has one to
    /// report for this call.
    fn sensor_update(&self, timestamp_ms: u64, rng: &mut dyn RngCore) -> Option<SensorUpdate>;
}

/// Source of the client's recent location history.
pub trait LocationFixSource: Send + Sync {
    /// Location fixes to report with a signature taken at `timestamp_ms`.
    fn location_fixes(
        &self,
        envelope: &RequestEnvelope,
        timestamp_ms: u64,
        rng: &mut dyn RngCore,
    ) -> Vec<LocationUpdate>;
}

/// The signature encryption primitive.
///
/// Must be a pure function of its inputs: the same plaintext and elapsed time
/// always produce the same output.
pub trait SignatureEncryptor: Send + Sync {
    /// Encrypt a serialized signature.
    ///
    /// # Errors
    /// * `EncryptionError::Primitive` - the underlying transform failed
    fn encrypt(&self, plaintext: &[u8], elapsed_ms: u64) -> Result<Vec<u8>, EncryptionError>;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Settable clock. Clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct MockClock {
    now: Arc<AtomicU64>,
}

impl MockClock {
    /// Create a clock reading `now_ms`.
    pub fn new(now_ms: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(now_ms)),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, ms: u64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }

    /// Set the clock.
    pub fn set(&self, now_ms: u64) {
        self.now.store(now_ms, Ordering::SeqCst);
    }
}

impl Clock for MockClock {
    fn now_millis(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// Fingerprint whose random fields are drawn from the caller's generator.
#[derive(Clone, Debug, Default)]
pub struct MockDeviceFingerprint {
    /// Device info returned verbatim
    pub device_info: DeviceInfo,
    /// Whether sensor data is reported
    pub report_sensor: bool,
}

impl MockDeviceFingerprint {
    /// Fingerprint that reports sensor data on every call.
    pub fn with_sensor() -> Self {
        Self {
            device_info: Self::device(),
            report_sensor: true,
        }
    }

    /// Fingerprint that never reports sensor data.
    pub fn without_sensor() -> Self {
        Self {
            device_info: Self::device(),
            report_sensor: false,
        }
    }

    fn device() -> DeviceInfo {
        DeviceInfo {
            device_id: "mock-device".to_string(),
            device_brand: "Apple".to_string(),
            device_model: "iPhone".to_string(),
            hardware_model: "N66AP".to_string(),
            ..Default::default()
        }
    }
}

impl DeviceFingerprint for MockDeviceFingerprint {
    fn device_info(&self) -> DeviceInfo {
        self.device_info.clone()
    }

    fn activity_status(&self, rng: &mut dyn RngCore) -> ActivityStatus {
        ActivityStatus {
            start_time_ms: u64::from(rng.next_u32()),
            stationary: true,
            ..Default::default()
        }
    }

    fn sensor_update(&self, timestamp_ms: u64, rng: &mut dyn RngCore) -> Option<SensorUpdate> {
        if !self.report_sensor {
            return None;
        }
        Some(SensorUpdate {
            timestamp: timestamp_ms,
            acceleration_x: f64::from(rng.next_u32()) / f64::from(u32::MAX),
            status: 3,
            ..Default::default()
        })
    }
}

/// Location source emitting `count` fixes at the envelope position.
#[derive(Clone, Debug, Default)]
pub struct MockLocationFixSource {
    /// Number of fixes per call
    pub count: usize,
}

impl MockLocationFixSource {
    /// Create a source emitting `count` fixes per call.
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl LocationFixSource for MockLocationFixSource {
    fn location_fixes(
        &self,
        envelope: &RequestEnvelope,
        timestamp_ms: u64,
        rng: &mut dyn RngCore,
    ) -> Vec<LocationUpdate> {
        (0..self.count)
            .map(|_| LocationUpdate {
                name: "fused".to_string(),
                timestamp_snapshot: timestamp_ms.saturating_sub(u64::from(rng.next_u32() % 1_000)),
                latitude: envelope.latitude as f32,
                longitude: envelope.longitude as f32,
                provider_status: 3,
                location_type: 1,
                ..Default::default()
            })
            .collect()
    }
}

/// One recorded call to `MockEncryptor::encrypt`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncryptCall {
    /// Serialized signature passed in
    pub plaintext: Vec<u8>,
    /// Elapsed session time passed in
    pub elapsed_ms: u64,
}

/// Deterministic stand-in for the encryption primitive.
///
/// Output is `elapsed_ms` as 8 little-endian bytes followed by the plaintext
/// XOR `0x5A`. `MockEncryptor::open` reverses it.
#[derive(Clone, Debug, Default)]
pub struct MockEncryptor {
    /// Calls recorded so far, shared between clones
    pub calls: Arc<Mutex<Vec<EncryptCall>>>,
    /// When set, every call fails
    pub should_fail: bool,
}

impl MockEncryptor {
    /// Encryptor that always succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encryptor that always fails.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Default::default()
        }
    }

    /// Number of calls recorded.
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }

    /// Recover `(elapsed_ms, plaintext)` from a mock ciphertext.
    pub fn open(ciphertext: &[u8]) -> Option<(u64, Vec<u8>)> {
        if ciphertext.len() < 8 {
            return None;
        }
        let (prefix, body) = ciphertext.split_at(8);
        let elapsed_ms = u64::from_le_bytes(prefix.try_into().ok()?);
        Some((elapsed_ms, body.iter().map(|b| b ^ 0x5A).collect()))
    }
}

impl SignatureEncryptor for MockEncryptor {
    fn encrypt(&self, plaintext: &[u8], elapsed_ms: u64) -> Result<Vec<u8>, EncryptionError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(EncryptCall {
                plaintext: plaintext.to_vec(),
                elapsed_ms,
            });
        }

        if self.should_fail {
            return Err(EncryptionError::Primitive("Mock failure".to_string()));
        }

        let mut out = Vec::with_capacity(8 + plaintext.len());
        out.extend_from_slice(&elapsed_ms.to_le_bytes());
        out.extend(plaintext.iter().map(|b| b ^ 0x5A));
        Ok(out)
    }
}
