use serde::{Deserialize, Serialize};

use lockwatch_core::{CarId, Entity, LockState, Securable, all_locked};

use crate::door::Door;

/// A car: exclusively owns an ordered list of doors.
///
/// Secured iff every door is locked (a car without doors counts as secured).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    id: CarId,
    doors: Vec<Door>,
}

impl Car {
    pub fn new(doors: Vec<Door>) -> Self {
        Self::with_id(CarId::new(), doors)
    }

    pub fn with_id(id: CarId, doors: Vec<Door>) -> Self {
        Self { id, doors }
    }

    /// Build a car with one freshly-identified door per state, in order.
    pub fn from_states<I>(states: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<LockState>,
    {
        Self::new(states.into_iter().map(|s| Door::new(s.into())).collect())
    }

    pub fn id_typed(&self) -> CarId {
        self.id
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn door_mut(&mut self, index: usize) -> Option<&mut Door> {
        self.doors.get_mut(index)
    }

    pub fn are_all_doors_locked(&self) -> bool {
        all_locked(&self.doors)
    }
}

impl Entity for Car {
    type Id = CarId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Securable for Car {
    fn is_secured(&self) -> bool {
        self.are_all_doors_locked()
    }
}
