use serde::{Deserialize, Serialize};

use lockwatch_core::{Entity, HouseId, LockState, Securable, all_locked};

use crate::door::Door;
use crate::window::Window;

/// A house: owns an ordered list of doors and a separate ordered list of
/// windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct House {
    id: HouseId,
    doors: Vec<Door>,
    windows: Vec<Window>,
}

impl House {
    pub fn new(doors: Vec<Door>, windows: Vec<Window>) -> Self {
        Self::with_id(HouseId::new(), doors, windows)
    }

    pub fn with_id(id: HouseId, doors: Vec<Door>, windows: Vec<Window>) -> Self {
        Self { id, doors, windows }
    }

    /// Build a house from door states and window states, in order.
    pub fn from_states<D, W>(doors: D, windows: W) -> Self
    where
        D: IntoIterator,
        D::Item: Into<LockState>,
        W: IntoIterator,
        W::Item: Into<LockState>,
    {
        Self::new(
            doors.into_iter().map(|s| Door::new(s.into())).collect(),
            windows.into_iter().map(|s| Window::new(s.into())).collect(),
        )
    }

    pub fn id_typed(&self) -> HouseId {
        self.id
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    pub fn door_mut(&mut self, index: usize) -> Option<&mut Door> {
        self.doors.get_mut(index)
    }

    pub fn window_mut(&mut self, index: usize) -> Option<&mut Window> {
        self.windows.get_mut(index)
    }

    /// Every door and every window locked. Empty lists count as locked.
    pub fn is_fully_secured(&self) -> bool {
        all_locked(&self.doors) && all_locked(&self.windows)
    }
}

impl Entity for House {
    type Id = HouseId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Securable for House {
    fn is_secured(&self) -> bool {
        self.is_fully_secured()
    }
}
