use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::EmptyFrontierError;
use crate::frontier::{Frontier, QueueFrontier, StackFrontier};

/// Which ordering a frontier uses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Policy {
    /// Last in, first out. Depth-first traversal.
    #[default]
    Stack,
    /// First in, first out. Breadth-first traversal.
    Queue,
}

impl Policy {
    pub const ALL: [Policy; 2] = [Policy::Stack, Policy::Queue];

    /// Builds an empty frontier with this ordering.
    pub fn frontier<T>(self) -> AnyFrontier<T> {
        match self {
            Policy::Stack => AnyFrontier::Stack(StackFrontier::new()),
            Policy::Queue => AnyFrontier::Queue(QueueFrontier::new()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Policy::Stack => "stack",
            Policy::Queue => "queue",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown policy {0:?}, expected `stack` or `queue`")]
pub struct UnknownPolicy(pub String);

impl FromStr for Policy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stack" => Ok(Policy::Stack),
            "queue" => Ok(Policy::Queue),
            _ => Err(UnknownPolicy(s.to_owned())),
        }
    }
}

/// A frontier whose ordering is chosen at runtime.
#[derive(Debug, Clone)]
pub enum AnyFrontier<T> {
    Stack(StackFrontier<T>),
    Queue(QueueFrontier<T>),
}

impl<T> AnyFrontier<T> {
    pub fn policy(&self) -> Policy {
        match self {
            AnyFrontier::Stack(_) => Policy::Stack,
            AnyFrontier::Queue(_) => Policy::Queue,
        }
    }
}

impl<T> From<Policy> for AnyFrontier<T> {
    fn from(policy: Policy) -> Self {
        policy.frontier()
    }
}

impl<T> Frontier<T> for AnyFrontier<T> {
    #[inline]
    fn add(&mut self, item: T) {
        match self {
            AnyFrontier::Stack(inner) => inner.add(item),
            AnyFrontier::Queue(inner) => inner.add(item),
        }
    }

    #[inline]
    fn remove(&mut self) -> Result<T, EmptyFrontierError> {
        match self {
            AnyFrontier::Stack(inner) => inner.remove(),
            AnyFrontier::Queue(inner) => inner.remove(),
        }
    }

    #[inline]
    fn peek(&self) -> Result<&T, EmptyFrontierError> {
        match self {
            AnyFrontier::Stack(inner) => inner.peek(),
            AnyFrontier::Queue(inner) => inner.peek(),
        }
    }

    #[inline]
    fn len(&self) -> usize {
        match self {
            AnyFrontier::Stack(inner) => inner.len(),
            AnyFrontier::Queue(inner) => inner.len(),
        }
    }

    fn clear(&mut self) {
        match self {
            AnyFrontier::Stack(inner) => inner.clear(),
            AnyFrontier::Queue(inner) => inner.clear(),
        }
    }
}
