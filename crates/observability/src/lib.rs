//! Tracing/logging setup shared by the binaries.

/// Environment-driven logging configuration.
pub mod config;

/// Subscriber installation (filters, formats).
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};

/// Initialize process-wide logging from the environment.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&ObservabilityConfig::from_env());
}
