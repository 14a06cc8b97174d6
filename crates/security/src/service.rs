use lockwatch_core::Securable;

use crate::status::SecurityStatus;

/// Stateless facade turning a subject's `is_secured()` into a status.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SecurityService;

impl SecurityService {
    pub fn new() -> Self {
        Self
    }

    /// Typed status for `subject` as of this call.
    pub fn status_of<S>(&self, subject: &S) -> SecurityStatus
    where
        S: Securable + ?Sized,
    {
        let status = SecurityStatus::from(subject.is_secured());
        tracing::debug!(status = status.as_str(), "security check");
        status
    }

    /// `"Secured"` if the subject is secured, otherwise `"Not secured"`.
    pub fn check_security<S>(&self, subject: &S) -> &'static str
    where
        S: Securable + ?Sized,
    {
        self.status_of(subject).as_str()
    }
}
