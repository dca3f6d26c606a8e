pub mod engine;
pub mod reach;
pub mod visited;

pub use engine::{solve, Outcome, State, Step, Traversal, TraversalStats};
pub use reach::{goal_reachable, reachable};
pub use visited::Visited;
