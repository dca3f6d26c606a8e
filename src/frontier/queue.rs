use std::collections::VecDeque;

use crate::error::EmptyFrontierError;
use crate::frontier::Frontier;

/// First-in-first-out frontier. Drives a breadth-first traversal.
#[derive(Debug, Clone)]
pub struct QueueFrontier<T> {
    items: VecDeque<T>,
}

impl<T> Default for QueueFrontier<T> {
    fn default() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> QueueFrontier<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Pending items in removal order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> Frontier<T> for QueueFrontier<T> {
    #[inline]
    fn add(&mut self, item: T) {
        self.items.push_back(item);
    }

    #[inline]
    fn remove(&mut self) -> Result<T, EmptyFrontierError> {
        self.items.pop_front().ok_or(EmptyFrontierError)
    }

    #[inline]
    fn peek(&self) -> Result<&T, EmptyFrontierError> {
        self.items.front().ok_or(EmptyFrontierError)
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> FromIterator<T> for QueueFrontier<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for QueueFrontier<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
