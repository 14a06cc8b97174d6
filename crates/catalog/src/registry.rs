use serde::{Deserialize, Serialize};

use lockwatch_core::{CarId, DomainError, DomainResult, Entity};

/// A car recorded in a [`CarRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredCar {
    id: CarId,
    color: String,
}

impl RegisteredCar {
    pub fn color(&self) -> &str {
        &self.color
    }
}

impl Entity for RegisteredCar {
    type Id = CarId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Owned record of every car created through it.
///
/// Counts belong to the registry value, not to the car type: two registries
/// never see each other's cars.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarRegistry {
    cars: Vec<RegisteredCar>,
}

impl CarRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, color: impl Into<String>) -> DomainResult<&RegisteredCar> {
        let color = color.into();
        if color.trim().is_empty() {
            return Err(DomainError::validation("color cannot be empty"));
        }
        self.cars.push(RegisteredCar {
            id: CarId::new(),
            color,
        });
        self.cars
            .last()
            .ok_or_else(|| DomainError::invariant("registered car missing"))
    }

    pub fn count(&self) -> usize {
        self.cars.len()
    }

    pub fn cars(&self) -> &[RegisteredCar] {
        &self.cars
    }

    pub fn get(&self, id: CarId) -> DomainResult<&RegisteredCar> {
        self.cars
            .iter()
            .find(|car| car.id == id)
            .ok_or_else(DomainError::not_found)
    }
}
