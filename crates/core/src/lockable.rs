//! Lockable capability: something that can be locked, unlocked and queried.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Binary lock state of a lockable part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockState {
    Locked,
    #[default]
    Unlocked,
}

impl ValueObject for LockState {}

impl LockState {
    pub fn is_locked(self) -> bool {
        matches!(self, LockState::Locked)
    }

    /// Parse a comma-separated list of states. Blank segments are skipped, so
    /// `""` and `"locked,"` are valid.
    pub fn parse_list(s: &str) -> Result<Vec<Self>, DomainError> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(Self::from_str)
            .collect()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LockState::Locked => "locked",
            LockState::Unlocked => "unlocked",
        }
    }
}

impl From<bool> for LockState {
    fn from(locked: bool) -> Self {
        if locked {
            LockState::Locked
        } else {
            LockState::Unlocked
        }
    }
}

impl From<LockState> for bool {
    fn from(state: LockState) -> Self {
        state.is_locked()
    }
}

impl core::fmt::Display for LockState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LockState {
    type Err = DomainError;

    /// Accepts `locked`/`unlocked` and `true`/`false`, ignoring case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "locked" | "true" => Ok(LockState::Locked),
            "unlocked" | "false" => Ok(LockState::Unlocked),
            other => Err(DomainError::validation(format!(
                "unknown lock state '{other}' (expected locked, unlocked, true or false)"
            ))),
        }
    }
}

/// A part that can be locked and unlocked.
///
/// Both operations are idempotent and infallible; the state only ever changes
/// through them.
pub trait Lockable {
    fn lock(&mut self);

    fn unlock(&mut self);

    fn is_locked(&self) -> bool;

    fn lock_state(&self) -> LockState {
        LockState::from(self.is_locked())
    }
}

impl<T: Lockable + ?Sized> Lockable for Box<T> {
    fn lock(&mut self) {
        (**self).lock();
    }

    fn unlock(&mut self) {
        (**self).unlock();
    }

    fn is_locked(&self) -> bool {
        (**self).is_locked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unlocked() {
        assert_eq!(LockState::default(), LockState::Unlocked);
        assert!(!LockState::default().is_locked());
    }

    #[test]
    fn parses_all_spellings() {
        assert_eq!("locked".parse::<LockState>().unwrap(), LockState::Locked);
        assert_eq!(" TRUE ".parse::<LockState>().unwrap(), LockState::Locked);
        assert_eq!("Unlocked".parse::<LockState>().unwrap(), LockState::Unlocked);
        assert_eq!("false".parse::<LockState>().unwrap(), LockState::Unlocked);
    }

    #[test]
    fn rejects_unknown_spelling() {
        let err = "ajar".parse::<LockState>().unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("ajar")),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn list_skips_blank_segments() {
        assert_eq!(LockState::parse_list("").unwrap(), Vec::new());
        assert_eq!(LockState::parse_list(" , ").unwrap(), Vec::new());
        assert_eq!(
            LockState::parse_list("locked, false,").unwrap(),
            vec![LockState::Locked, LockState::Unlocked]
        );
    }

    #[test]
    fn list_rejects_unknown_segment() {
        assert!(matches!(
            LockState::parse_list("locked,ajar"),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn bool_conversion_matches_state() {
        assert_eq!(LockState::from(true), LockState::Locked);
        assert!(!bool::from(LockState::Unlocked));
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&LockState::Locked).unwrap(), "\"locked\"");
    }
}
