//! # End-to-End Signing Flows
//!
//! Envelope in, envelope out. Every check decodes what the server would
//! receive rather than looking at intermediate structures.

#[cfg(test)]
mod tests {
    use platform_signature::domain::invariants::invariant_append_only;
    use platform_signature::{
        HashCountPolicy, PlatformSignatureApi, SigningConfig, SigningError, SigningOutcome,
        UnsignedReason, SIGNATURE_FIELD_25,
    };
    use prost::Message;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::integration::support::{
        authenticated_envelope, hash_set, mock_service, open_attached, session, SESSION_START_MS,
    };

    fn quiet_config() -> SigningConfig {
        SigningConfig {
            record_metrics: false,
            ..SigningConfig::default()
        }
    }

    // =============================================================================
    // HAPPY PATH
    // =============================================================================

    #[test]
    fn test_signed_envelope_carries_full_signature() {
        let (service, _clock, encryptor) = mock_service(4_321, quiet_config());
        let mut envelope = authenticated_envelope(3);

        let outcome = service
            .sign_with_rng(&session(), &mut envelope, &hash_set(3), &mut StdRng::seed_from_u64(1))
            .unwrap();

        assert!(outcome.is_signed());
        assert_eq!(envelope.platform_requests.len(), 1);
        assert_eq!(encryptor.call_count(), 1);

        let (elapsed_ms, signature) = open_attached(&envelope, 0);
        assert_eq!(elapsed_ms, 4_321);
        assert_eq!(signature.timestamp_ms_since_start, 4_321);
        assert_eq!(signature.epoch_timestamp_ms, SESSION_START_MS + 4_321);
        assert_eq!(signature.location_hash_by_token_seed, -1_537_219_218i32 as u32);
        assert_eq!(signature.location_hash, 3_141_592_653);
        assert_eq!(signature.session_hash, vec![0x5C; 16]);
        assert_eq!(signature.unknown25, SIGNATURE_FIELD_25);
        assert_eq!(signature.location_updates.len(), 2);
        assert_eq!(signature.sensor_updates.len(), 1);
        assert!(signature.device_info.is_some());
        assert!(signature.activity_status.is_some());

        let base = -6_917_529_027_641_081_856i64;
        assert_eq!(
            signature.request_hashes,
            vec![base as u64, (base + 1) as u64, (base + 2) as u64]
        );
    }

    #[test]
    fn test_summary_matches_attached_bytes() {
        let (service, _clock, encryptor) = mock_service(900, quiet_config());
        let mut envelope = authenticated_envelope(1);

        let outcome = service
            .sign_with_rng(&session(), &mut envelope, &hash_set(1), &mut StdRng::seed_from_u64(2))
            .unwrap();

        let summary = match outcome {
            SigningOutcome::Signed(summary) => summary,
            other => panic!("expected signed outcome, got {:?}", other),
        };
        let calls = encryptor.calls.lock().unwrap();

        assert_eq!(summary.request_hash_count, 1);
        assert_eq!(summary.elapsed_ms, 900);
        assert_eq!(summary.plaintext_len, calls[0].plaintext.len());
        // Mock ciphertext is an 8-byte prefix plus the plaintext
        assert_eq!(summary.encrypted_len, summary.plaintext_len + 8);
    }

    #[test]
    fn test_existing_platform_requests_preserved() {
        let (service, _clock, _encryptor) = mock_service(10, quiet_config());
        let mut envelope = authenticated_envelope(1);
        envelope.platform_requests.push(platform_signature::encrypted_signature_request(&[9, 9]));
        let before = envelope.platform_requests.clone();

        service
            .sign_with_rng(&session(), &mut envelope, &hash_set(1), &mut StdRng::seed_from_u64(3))
            .unwrap();

        assert!(invariant_append_only(&before, &envelope.platform_requests));
        assert_eq!(envelope.platform_requests.len(), 2);
    }

    #[test]
    fn test_each_call_appends_one_entry() {
        let (service, clock, encryptor) = mock_service(0, quiet_config());
        let mut envelope = authenticated_envelope(2);
        let hashes = hash_set(2);
        let mut rng = StdRng::seed_from_u64(4);

        for call in 1..=5 {
            clock.advance(1_000);
            service
                .sign_with_rng(&session(), &mut envelope, &hashes, &mut rng)
                .unwrap();
            assert_eq!(envelope.platform_requests.len(), call);
        }

        assert_eq!(encryptor.call_count(), 5);
        // Later entries were taken later in the session
        let (first, _) = open_attached(&envelope, 0);
        let (last, _) = open_attached(&envelope, 4);
        assert_eq!(first, 1_000);
        assert_eq!(last, 5_000);
    }

    #[test]
    fn test_seeded_signing_is_reproducible() {
        let sign_once = || {
            let (service, _clock, _encryptor) = mock_service(2_500, quiet_config());
            let mut rng = StdRng::seed_from_u64(0xC0FFEE);
            let session = service.begin_session(&mut rng);
            let mut envelope = authenticated_envelope(2);
            service
                .sign_with_rng(&session, &mut envelope, &hash_set(2), &mut rng)
                .unwrap();
            envelope.encode_to_vec()
        };

        assert_eq!(sign_once(), sign_once());
    }

    #[test]
    fn test_different_seeds_change_random_fields() {
        let sign_with_seed = |seed: u64| {
            let (service, _clock, _encryptor) = mock_service(2_500, quiet_config());
            let mut envelope = authenticated_envelope(0);
            service
                .sign_with_rng(
                    &session(),
                    &mut envelope,
                    &hash_set(0),
                    &mut StdRng::seed_from_u64(seed),
                )
                .unwrap();
            open_attached(&envelope, 0).1
        };

        let a = sign_with_seed(1);
        let b = sign_with_seed(2);

        assert_ne!(a.sensor_updates, b.sensor_updates);
        // Fields that do not come from the generator agree
        assert_eq!(a.request_hashes, b.request_hashes);
        assert_eq!(a.epoch_timestamp_ms, b.epoch_timestamp_ms);
    }

    // =============================================================================
    // UNSIGNED AND FAILURE PATHS
    // =============================================================================

    #[test]
    fn test_unauthenticated_envelope_untouched() {
        let (service, _clock, encryptor) = mock_service(10, quiet_config());
        let mut envelope = authenticated_envelope(2);
        envelope.auth_ticket = None;
        let before = envelope.encode_to_vec();

        let outcome = service
            .sign(&session(), &mut envelope, &hash_set(2))
            .unwrap();

        assert_eq!(outcome, SigningOutcome::Unsigned(UnsignedReason::NoAuthTicket));
        assert_eq!(envelope.encode_to_vec(), before);
        assert_eq!(encryptor.call_count(), 0);
    }

    #[test]
    fn test_garbage_request_hash_untouched() {
        let (service, _clock, encryptor) = mock_service(10, quiet_config());
        let mut envelope = authenticated_envelope(2);
        let mut hashes = hash_set(2);
        hashes[3] = "0x1f".to_string();
        let before = envelope.clone();

        let outcome = service
            .sign(&session(), &mut envelope, &hashes)
            .unwrap();

        assert_eq!(
            outcome,
            SigningOutcome::Unsigned(UnsignedReason::MalformedHash { index: 3 })
        );
        assert_eq!(envelope, before);
        assert_eq!(encryptor.call_count(), 0);
    }

    #[test]
    fn test_short_hash_set_follows_policy() {
        let skip = quiet_config();
        let reject = SigningConfig {
            hash_count_policy: HashCountPolicy::Reject,
            record_metrics: false,
        };

        let (service, _clock, _encryptor) = mock_service(10, skip);
        let mut envelope = authenticated_envelope(3);
        let outcome = service.sign(&session(), &mut envelope, &hash_set(1)).unwrap();
        assert_eq!(
            outcome,
            SigningOutcome::Unsigned(UnsignedReason::MissingHashes {
                expected: 5,
                actual: 3
            })
        );
        assert!(envelope.platform_requests.is_empty());

        let (service, _clock, _encryptor) = mock_service(10, reject);
        let mut envelope = authenticated_envelope(3);
        let result = service.sign(&session(), &mut envelope, &hash_set(1));
        assert_eq!(
            result,
            Err(SigningError::HashCountMismatch {
                expected: 5,
                actual: 3
            })
        );
        assert!(envelope.platform_requests.is_empty());
    }

    #[test]
    fn test_extra_hashes_ignored() {
        let (service, _clock, _encryptor) = mock_service(10, quiet_config());
        let mut envelope = authenticated_envelope(1);

        service
            .sign(&session(), &mut envelope, &hash_set(4))
            .unwrap();

        let (_, signature) = open_attached(&envelope, 0);
        assert_eq!(signature.request_hashes.len(), 1);
    }

    #[test]
    fn test_encryption_failure_surfaces_and_attaches_nothing() {
        let service = platform_signature::PlatformSignatureService::with_config(
            platform_signature::MockClock::new(SESSION_START_MS + 10),
            platform_signature::MockDeviceFingerprint::without_sensor(),
            platform_signature::MockLocationFixSource::new(0),
            platform_signature::MockEncryptor::failing(),
            quiet_config(),
        );
        let mut envelope = authenticated_envelope(1);
        let before = envelope.clone();

        let err = service
            .sign(&session(), &mut envelope, &hash_set(1))
            .unwrap_err();

        assert_eq!(err.as_label(), "encryption");
        assert_eq!(envelope, before);
    }

    // =============================================================================
    // PROPERTIES
    // =============================================================================

    proptest! {
        #[test]
        fn prop_request_hashes_follow_envelope(
            count in 0usize..8,
            values in proptest::collection::vec(any::<i64>(), 8),
        ) {
            let (service, _clock, _encryptor) = mock_service(77, quiet_config());
            let mut envelope = authenticated_envelope(count);
            let mut hashes = vec!["0".to_string(), "0".to_string()];
            hashes.extend(values.iter().take(count).map(|v| v.to_string()));

            service
                .sign_with_rng(&session(), &mut envelope, &hashes, &mut StdRng::seed_from_u64(5))
                .unwrap();

            let (_, signature) = open_attached(&envelope, 0);
            let expected: Vec<u64> = values.iter().take(count).map(|v| *v as u64).collect();
            prop_assert_eq!(signature.request_hashes, expected);
        }
    }
}
