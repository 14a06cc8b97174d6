//! Securable capability: something that can say whether it is secured.

use crate::lockable::Lockable;

/// Anything whose security status can be derived as a single boolean.
///
/// Implementors typically aggregate the lock state of the parts they own.
pub trait Securable {
    fn is_secured(&self) -> bool;
}

impl<T: Securable + ?Sized> Securable for &T {
    fn is_secured(&self) -> bool {
        (**self).is_secured()
    }
}

impl<T: Securable + ?Sized> Securable for &mut T {
    fn is_secured(&self) -> bool {
        (**self).is_secured()
    }
}

impl<T: Securable + ?Sized> Securable for Box<T> {
    fn is_secured(&self) -> bool {
        (**self).is_secured()
    }
}

/// `true` iff every part is locked.
///
/// An empty collection is vacuously locked.
pub fn all_locked<'a, L, I>(parts: I) -> bool
where
    L: Lockable + ?Sized + 'a,
    I: IntoIterator<Item = &'a L>,
{
    parts.into_iter().all(|part| part.is_locked())
}
