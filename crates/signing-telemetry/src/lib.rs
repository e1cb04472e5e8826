//! # Signing Telemetry
//!
//! Logging and metrics for the platform signing pipeline.
//!
//! ## Components
//!
//! - **Logging**: `tracing-subscriber` registry with an env filter and either
//!   a human-readable or a JSON formatter.
//! - **Metrics**: Prometheus counters and a histogram describing signing
//!   outcomes.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use signing_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let _guard = init_telemetry(TelemetryConfig::from_env()).expect("telemetry");
//!     // signing calls now emit logs and metrics
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PS_SERVICE_NAME` | `platform-signing` | Service name attached to logs |
//! | `PS_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `PS_CONSOLE_OUTPUT` | `true` | Emit logs to stdout |
//! | `PS_JSON_LOGS` | `false` | JSON formatted logs |

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod logging;
pub mod metrics;

pub use config::TelemetryConfig;
pub use logging::{init_logging, LoggingGuard};
pub use metrics::{encode_metrics, register_metrics, MetricsHandle};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The log filter or subscriber could not be installed
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    /// A metric could not be registered or encoded
    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),
}

/// Initialize logging and register metrics.
///
/// Returns a guard that should be held for the lifetime of the application.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    // Metrics first, so the first logged signing call is also counted
    let metrics = register_metrics()?;
    let logging = init_logging(&config)?;

    Ok(TelemetryGuard {
        _logging: logging,
        _metrics: metrics,
    })
}

/// Guard that keeps telemetry active.
pub struct TelemetryGuard {
    _logging: LoggingGuard,
    _metrics: MetricsHandle,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!("Shutting down telemetry...");
    }
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
