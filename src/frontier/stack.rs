use crate::error::EmptyFrontierError;
use crate::frontier::Frontier;

/// Last-in-first-out frontier. Drives a depth-first traversal.
#[derive(Debug, Clone)]
pub struct StackFrontier<T> {
    items: Vec<T>,
}

impl<T> Default for StackFrontier<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> StackFrontier<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Pending items, oldest first. The last element is removed next.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Frontier<T> for StackFrontier<T> {
    #[inline]
    fn add(&mut self, item: T) {
        self.items.push(item);
    }

    #[inline]
    fn remove(&mut self) -> Result<T, EmptyFrontierError> {
        self.items.pop().ok_or(EmptyFrontierError)
    }

    #[inline]
    fn peek(&self) -> Result<&T, EmptyFrontierError> {
        self.items.last().ok_or(EmptyFrontierError)
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> FromIterator<T> for StackFrontier<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for StackFrontier<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
