//! # Shipped Adapters
//!
//! The service wired to the real clock and the fixed fingerprint sources,
//! with only the encryption primitive mocked.

#[cfg(test)]
mod tests {
    use platform_signature::{
        Clock, FixedDeviceFingerprint, MockEncryptor, NoLocationFixes, PlatformSignatureApi,
        PlatformSignatureService, SigningConfig, SystemClock,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shared_protos::{ActivityStatus, DeviceInfo, SensorUpdate};

    use crate::integration::support::{authenticated_envelope, hash_set, open_attached};

    fn device() -> DeviceInfo {
        DeviceInfo {
            device_id: "8525f5d8201f78b5".to_string(),
            device_brand: "Apple".to_string(),
            device_model: "iPhone".to_string(),
            hardware_manufacturer: "Apple".to_string(),
            hardware_model: "N66AP".to_string(),
            firmware_brand: "iPhone OS".to_string(),
            firmware_type: "9.3.3".to_string(),
            ..Default::default()
        }
    }

    fn activity() -> ActivityStatus {
        ActivityStatus {
            stationary: true,
            tilting: true,
            ..Default::default()
        }
    }

    fn config() -> SigningConfig {
        SigningConfig::for_testing()
    }

    #[test]
    fn test_system_clock_session_signs() {
        let service = PlatformSignatureService::with_config(
            SystemClock,
            FixedDeviceFingerprint::new(device()).with_activity(activity()),
            NoLocationFixes,
            MockEncryptor::new(),
            config(),
        );
        let mut rng = StdRng::seed_from_u64(11);
        let session = service.begin_session(&mut rng);
        let mut envelope = authenticated_envelope(2);

        let outcome = service
            .sign_with_rng(&session, &mut envelope, &hash_set(2), &mut rng)
            .unwrap();

        assert!(outcome.is_signed());
        let (elapsed_ms, signature) = open_attached(&envelope, 0);
        assert_eq!(signature.timestamp_ms_since_start, elapsed_ms);
        assert!(signature.epoch_timestamp_ms >= session.start_time_ms);
        assert!(signature.epoch_timestamp_ms <= SystemClock.now_millis());
        assert_eq!(signature.device_info, Some(device()));
        assert_eq!(signature.activity_status, Some(activity()));
        assert!(signature.location_updates.is_empty());
        assert!(signature.sensor_updates.is_empty());
        assert_eq!(signature.session_hash, session.session_hash.as_bytes().to_vec());
    }

    #[test]
    fn test_sensor_template_reported_at_signature_time() {
        let template = SensorUpdate {
            gravity_x: 0.01,
            gravity_y: -0.02,
            gravity_z: -9.81,
            status: 3,
            ..Default::default()
        };
        let service = PlatformSignatureService::with_config(
            SystemClock,
            FixedDeviceFingerprint::new(device()).with_sensor(template),
            NoLocationFixes,
            MockEncryptor::new(),
            config(),
        );
        let mut rng = StdRng::seed_from_u64(12);
        let session = service.begin_session(&mut rng);
        let mut envelope = authenticated_envelope(0);

        service
            .sign_with_rng(&session, &mut envelope, &hash_set(0), &mut rng)
            .unwrap();

        let (_, signature) = open_attached(&envelope, 0);
        assert_eq!(signature.sensor_updates.len(), 1);
        assert_eq!(
            signature.sensor_updates[0].timestamp,
            signature.epoch_timestamp_ms
        );
        assert_eq!(signature.sensor_updates[0].gravity_z, -9.81);
    }

    #[test]
    fn test_default_sensor_template_is_stamped() {
        let service = PlatformSignatureService::with_config(
            SystemClock,
            FixedDeviceFingerprint::new(device()).with_sensor(SensorUpdate::default()),
            NoLocationFixes,
            MockEncryptor::new(),
            config(),
        );
        let mut rng = StdRng::seed_from_u64(13);
        let session = service.begin_session(&mut rng);
        let mut envelope = authenticated_envelope(0);

        service
            .sign_with_rng(&session, &mut envelope, &hash_set(0), &mut rng)
            .unwrap();

        // The template is stamped with a timestamp, so it is no longer empty
        let (_, signature) = open_attached(&envelope, 0);
        assert_eq!(signature.sensor_updates.len(), 1);
        assert_eq!(signature.sensor_updates[0].status, 0);
    }
}
