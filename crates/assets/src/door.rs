use serde::{Deserialize, Serialize};

use lockwatch_core::{DoorId, Entity, LockState, Lockable};

/// A lockable door. Unlocked unless constructed otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    id: DoorId,
    state: LockState,
}

impl Door {
    pub fn new(state: LockState) -> Self {
        Self::with_id(DoorId::new(), state)
    }

    pub fn with_id(id: DoorId, state: LockState) -> Self {
        Self { id, state }
    }

    pub fn locked() -> Self {
        Self::new(LockState::Locked)
    }

    pub fn unlocked() -> Self {
        Self::new(LockState::Unlocked)
    }

    pub fn id_typed(&self) -> DoorId {
        self.id
    }
}

impl Default for Door {
    fn default() -> Self {
        Self::unlocked()
    }
}

impl From<bool> for Door {
    fn from(locked: bool) -> Self {
        Self::new(LockState::from(locked))
    }
}

impl From<LockState> for Door {
    fn from(state: LockState) -> Self {
        Self::new(state)
    }
}

impl Entity for Door {
    type Id = DoorId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Lockable for Door {
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
