//! Configuration for the platform signing service

use serde::{Deserialize, Serialize};
use std::env;

/// What to do when the hash set is shorter than the envelope needs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashCountPolicy {
    /// Leave the envelope unsigned and return normally
    #[default]
    Skip,
    /// Fail the call with `SigningError::HashCountMismatch`
    Reject,
}

/// Signing configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SigningConfig {
    /// Handling of hash sets that do not cover every sub-request
    pub hash_count_policy: HashCountPolicy,
    /// Record Prometheus counters for every call
    pub record_metrics: bool,
}

impl Default for SigningConfig {
    fn default() -> Self {
        Self {
            hash_count_policy: HashCountPolicy::Skip,
            record_metrics: true,
        }
    }
}

impl SigningConfig {
    /// Create a config for testing: strict hash checks, no metrics.
    pub fn for_testing() -> Self {
        Self {
            hash_count_policy: HashCountPolicy::Reject,
            record_metrics: false,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PS_HASH_COUNT_POLICY`: `skip` or `reject` (default: skip)
    /// - `PS_RECORD_METRICS`: Record metrics (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// An unrecognised policy falls back to the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            hash_count_policy: lookup("PS_HASH_COUNT_POLICY")
                .and_then(|v| parse_policy(&v))
                .unwrap_or(defaults.hash_count_policy),

            record_metrics: lookup("PS_RECORD_METRICS")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.record_metrics),
        }
    }
}

fn parse_policy(value: &str) -> Option<HashCountPolicy> {
    match value.trim().to_lowercase().as_str() {
        "skip" => Some(HashCountPolicy::Skip),
        "reject" => Some(HashCountPolicy::Reject),
        _ => None,
    }
}
