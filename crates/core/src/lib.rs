//! `lockwatch-core` — capability traits and domain building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod entity;
pub mod error;
pub mod id;
pub mod lockable;
pub mod securable;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CarId, DoorId, HouseId, WindowId};
pub use lockable::{LockState, Lockable};
pub use securable::{Securable, all_locked};
pub use value_object::ValueObject;
