//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two values with the same attributes are
/// interchangeable. `LockState` is one; a `Door` is not, because two doors in
/// the same state are still two doors.
///
/// The trait requires:
/// - **Clone**: values are cheap to copy
/// - **PartialEq**: values compare by their attributes
/// - **Debug**: values show up in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
