use crate::error::EmptyFrontierError;

pub mod policy;
pub mod queue;
pub mod stack;

pub use policy::{AnyFrontier, Policy};
pub use queue::QueueFrontier;
pub use stack::StackFrontier;

/// Ordered container of items pending exploration.
///
/// Implementations differ only in which item `remove` and `peek` select.
/// A frontier does not suppress duplicates: the same item may be pending
/// several times, and filtering is left to the caller.
///
/// For every implementation, `len` equals the number of successful `add`
/// calls minus the number of successful `remove` calls since construction.
pub trait Frontier<T> {
    /// Inserts an item. Always succeeds.
    fn add(&mut self, item: T);

    /// Removes and returns the next item selected by the ordering policy.
    fn remove(&mut self) -> Result<T, EmptyFrontierError>;

    /// Returns the item `remove` would return, without removing it.
    fn peek(&self) -> Result<&T, EmptyFrontierError>;

    /// Number of pending items.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every pending item by removing until empty.
    fn clear(&mut self) {
        while self.remove().is_ok() {}
    }
}

impl<T, F> Frontier<T> for &mut F
where
    F: Frontier<T> + ?Sized,
{
    #[inline]
    fn add(&mut self, item: T) {
        (**self).add(item)
    }

    #[inline]
    fn remove(&mut self) -> Result<T, EmptyFrontierError> {
        (**self).remove()
    }

    #[inline]
    fn peek(&self) -> Result<&T, EmptyFrontierError> {
        (**self).peek()
    }

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn clear(&mut self) {
        (**self).clear()
    }
}
