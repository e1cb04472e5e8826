//! Fixed fingerprint and location adapters.
//!
//! For clients that already hold a captured device profile and have no
//! motion or location history to report. They draw nothing from the
//! generator.

use rand::RngCore;
use shared_protos::{ActivityStatus, DeviceInfo, LocationUpdate, RequestEnvelope, SensorUpdate};

use crate::ports::outbound::{DeviceFingerprint, LocationFixSource};

/// Device fingerprint that replays a captured profile.
#[derive(Clone, Debug, Default)]
pub struct FixedDeviceFingerprint {
    device_info: DeviceInfo,
    activity_status: ActivityStatus,
    sensor_template: Option<SensorUpdate>,
}

impl FixedDeviceFingerprint {
    /// Replay `device_info` with an empty activity status and no sensor data.
    pub fn new(device_info: DeviceInfo) -> Self {
        Self {
            device_info,
            ..Default::default()
        }
    }

    /// Report `activity_status` on every call.
    pub fn with_activity(mut self, activity_status: ActivityStatus) -> Self {
        self.activity_status = activity_status;
        self
    }

    /// Report `template`, stamped with the signature timestamp, on every call.
    pub fn with_sensor(mut self, template: SensorUpdate) -> Self {
        self.sensor_template = Some(template);
        self
    }
}

impl DeviceFingerprint for FixedDeviceFingerprint {
    fn device_info(&self) -> DeviceInfo {
        self.device_info.clone()
    }

    fn activity_status(&self, _rng: &mut dyn RngCore) -> ActivityStatus {
        self.activity_status.clone()
    }

    fn sensor_update(&self, timestamp_ms: u64, _rng: &mut dyn RngCore) -> Option<SensorUpdate> {
        self.sensor_template.as_ref().map(|template| SensorUpdate {
            timestamp: timestamp_ms,
            ..template.clone()
        })
    }
}

/// Location source with no history.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoLocationFixes;

impl LocationFixSource for NoLocationFixes {
    fn location_fixes(
        &self,
        _envelope: &RequestEnvelope,
        _timestamp_ms: u64,
        _rng: &mut dyn RngCore,
    ) -> Vec<LocationUpdate> {
        Vec::new()
    }
}
