use serde::{Deserialize, Serialize};

use lockwatch_core::ValueObject;

/// Result of a security check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityStatus {
    Secured,
    NotSecured,
}

impl ValueObject for SecurityStatus {}

impl SecurityStatus {
    /// Human-readable label: exactly `"Secured"` or `"Not secured"`.
    pub fn as_str(self) -> &'static str {
        match self {
            SecurityStatus::Secured => "Secured",
            SecurityStatus::NotSecured => "Not secured",
        }
    }

    pub fn is_secured(self) -> bool {
        matches!(self, SecurityStatus::Secured)
    }
}

impl From<bool> for SecurityStatus {
    fn from(secured: bool) -> Self {
        if secured {
            SecurityStatus::Secured
        } else {
            SecurityStatus::NotSecured
        }
    }
}

impl core::fmt::Display for SecurityStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
