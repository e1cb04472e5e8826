//! # Platform Signature Benchmarks
//!
//! | Stage | Target |
//! |-------|--------|
//! | Hash set parsing | < 1µs per hash |
//! | Full sign (mock encryption) | < 50µs per envelope |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use platform_signature::{
    parse_wrapping_u64, EncryptionError, MockClock, MockDeviceFingerprint, MockLocationFixSource,
    PlatformSignatureApi, PlatformSignatureService, SessionContext, SessionHash,
    SignatureEncryptor, SigningConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared_protos::{AuthTicket, Request, RequestEnvelope};
use std::time::Duration;

const START_MS: u64 = 1_700_000_000_000;

/// Copies the plaintext. `MockEncryptor` keeps every call, which would grow
/// without bound under criterion.
struct CopyEncryptor;

impl SignatureEncryptor for CopyEncryptor {
    fn encrypt(&self, plaintext: &[u8], _elapsed_ms: u64) -> Result<Vec<u8>, EncryptionError> {
        Ok(plaintext.to_vec())
    }
}

fn envelope(sub_requests: usize) -> RequestEnvelope {
    RequestEnvelope {
        requests: (0..sub_requests)
            .map(|i| Request::new(i as i32, vec![0u8; 32]))
            .collect(),
        auth_ticket: Some(AuthTicket {
            start: vec![1; 16],
            expire_timestamp_ms: START_MS + 1_800_000,
            end: vec![2; 16],
        }),
        ..Default::default()
    }
}

fn hash_set(sub_requests: usize) -> Vec<String> {
    let mut hashes = vec!["-1537219218".to_string(), "3141592653".to_string()];
    hashes.extend((0..sub_requests).map(|i| format!("{}", u64::MAX - i as u64)));
    hashes
}

fn bench_hash_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash-parsing");

    for value in ["7", "-6917529027641081856", "340282366920938463463374607431768211455"] {
        group.bench_with_input(BenchmarkId::new("parse_wrapping_u64", value.len()), value, |b, v| {
            b.iter(|| black_box(parse_wrapping_u64(black_box(v))))
        });
    }

    group.finish();
}

fn bench_sign_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("sign-pipeline");
    group.measurement_time(Duration::from_secs(5));

    let service = PlatformSignatureService::with_config(
        MockClock::new(START_MS + 1_000),
        MockDeviceFingerprint::with_sensor(),
        MockLocationFixSource::new(1),
        CopyEncryptor,
        SigningConfig {
            record_metrics: false,
            ..SigningConfig::default()
        },
    );
    let session = SessionContext::new(START_MS, SessionHash::from_bytes([7; 16]));
    let mut rng = StdRng::seed_from_u64(1);

    for size in [0usize, 1, 5, 20] {
        let template = envelope(size);
        let hashes = hash_set(size);

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("sign", size), &size, |b, _| {
            b.iter(|| {
                let mut envelope = template.clone();
                black_box(service.sign_with_rng(&session, &mut envelope, &hashes, &mut rng))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hash_parsing, bench_sign_pipeline);
criterion_main!(benches);
