use serde::{Deserialize, Serialize};

use lockwatch_core::{Entity, LockState, Lockable, WindowId};

/// A lockable window.
///
/// Behaves exactly like a [`Door`](crate::Door); it is a separate type so a
/// house can keep its doors and windows apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    id: WindowId,
    state: LockState,
}

impl Window {
    pub fn new(state: LockState) -> Self {
        Self::with_id(WindowId::new(), state)
    }

    pub fn with_id(id: WindowId, state: LockState) -> Self {
        Self { id, state }
    }

    pub fn locked() -> Self {
        Self::new(LockState::Locked)
    }

    pub fn unlocked() -> Self {
        Self::new(LockState::Unlocked)
    }

    pub fn id_typed(&self) -> WindowId {
        self.id
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::unlocked()
    }
}

impl From<bool> for Window {
    fn from(locked: bool) -> Self {
        Self::new(LockState::from(locked))
    }
}

impl From<LockState> for Window {
    fn from(state: LockState) -> Self {
        Self::new(state)
    }
}

impl Entity for Window {
    type Id = WindowId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Lockable for Window {
    fn lock(&mut self) {
        self.state = LockState::Locked;
    }

    fn unlock(&mut self) {
        self.state = LockState::Unlocked;
    }

    fn is_locked(&self) -> bool {
        self.state.is_locked()
    }

    fn lock_state(&self) -> LockState {
        self.state
    }
}
