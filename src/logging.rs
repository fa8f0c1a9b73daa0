//! # Structured Logging Module
//!
//! Environment-aware structured logging for the cohort engine. The pure
//! computations never fail on bad data; they report it here instead, so data
//! quality problems stay visible to operators.

use crate::config::LoggingConfig;
use crate::timestamps::{to_canonical_string, Timestamp};
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging from environment variables only.
pub fn init_structured_logging() {
    init_with_config(&LoggingConfig::default(), &get_environment());
}

/// Initialize structured logging with an explicit logging configuration.
///
/// Only the first call has an effect. `RUST_LOG` overrides the configured
/// level when set.
pub fn init_with_config(config: &LoggingConfig, environment: &str) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let log_level = config
            .level
            .clone()
            .unwrap_or_else(|| get_log_level(environment).to_string());

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

        let result = if config.json {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_level(true)
                        .with_filter(filter),
                )
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_level(true)
                        .with_ansi(true)
                        .with_filter(filter),
                )
                .try_init()
        };

        // A host application may already own the global subscriber
        if result.is_err() {
            tracing::debug!("Global tracing subscriber already initialized - keeping existing one");
        }

        tracing::info!(
            environment = %environment,
            level = %log_level,
            json = config.json,
            "STRUCTURED LOGGING: Initialized"
        );
    });
}

/// Get current environment from environment variables
pub(crate) fn get_environment() -> String {
    std::env::var("COHORT_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

/// Get log level based on environment
fn get_log_level(environment: &str) -> &'static str {
    match environment {
        "production" => "info",
        _ => "debug",
    }
}

/// Flag a batch whose end date precedes its start date.
pub fn log_interval_anomaly(batch_id: &str, start: Timestamp, end: Timestamp) {
    tracing::warn!(
        batch_id = %batch_id,
        start_date = %to_canonical_string(start),
        end_date = %to_canonical_string(end),
        "⚠️ BATCH_INTERVAL_ANOMALY: end date precedes start date"
    );
}

/// Report HR assignment entries skipped for missing identifiers.
pub fn log_skipped_assignments(operation: &str, hr_id: Option<&str>, skipped: usize) {
    tracing::warn!(
        operation = %operation,
        hr_id = hr_id,
        skipped_entries = skipped,
        "⚠️ MALFORMED_HR_ASSIGNMENTS: skipped entries without an identifier"
    );
}

/// Trace a computed fleet summary.
pub fn log_fleet_summary(total: usize, active: usize, intern_sum: u64, hr_sum: u64) {
    tracing::debug!(
        total_batches = total,
        active_batches = active,
        intern_sum = intern_sum,
        hr_sum = hr_sum,
        "📊 FLEET_SUMMARY"
    );
}
