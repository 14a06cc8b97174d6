use core::str::FromStr;

use thiserror::Error;

/// Variable selecting the log format (`text` or `json`).
pub const LOG_FORMAT_ENV: &str = "LOCKWATCH_LOG_FORMAT";

/// Filter used when `RUST_LOG` is unset. Logs go to stderr, and the binaries
/// keep their stdout for results.
pub const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format '{0}' (expected text or json)")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(UnknownLogFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub format: LogFormat,
    /// Filter directive used when `RUST_LOG` is not set.
    pub default_filter: String,
    /// Rejected format value, reported once the subscriber is installed.
    pub rejected_format: Option<UnknownLogFormat>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            default_filter: DEFAULT_FILTER.to_string(),
            rejected_format: None,
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self::from_format_var(std::env::var(LOG_FORMAT_ENV).ok().as_deref())
    }

    /// Build from the raw value of [`LOG_FORMAT_ENV`]; unknown formats fall
    /// back to text.
    pub fn from_format_var(raw: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = raw {
            match raw.parse() {
                Ok(format) => config.format = format,
                Err(err) => config.rejected_format = Some(err),
            }
        }
        config
    }
}
