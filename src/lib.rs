//! Frontier-driven reachability search over 2D text mazes.
//!
//! A [`Grid`] is parsed from a `width height` header followed by rows of
//! `#` (wall), `.` (open), `o` (start) and `*` (goal). A [`Traversal`]
//! explores it from the start cell, pulling pending cells from a
//! [`Frontier`]; a [`StackFrontier`] gives depth-first order and a
//! [`QueueFrontier`] breadth-first order. Both report the same answer.
//!
//! ```
//! use mazewalk::{solve, Grid, NoOpObserver, Policy};
//!
//! let mut grid: Grid = "3 1\no.*\n".parse().unwrap();
//! assert!(solve(&mut grid, Policy::Queue.frontier(), NoOpObserver));
//! assert_eq!(grid.to_string(), "ox*\n");
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod observer;
pub mod search;

pub use batch::{solve_file, solve_files, MazeReport};
pub use config::SolverConfig;
pub use error::{EmptyFrontierError, MalformedGridError, MazeError};
pub use frontier::{AnyFrontier, Frontier, Policy, QueueFrontier, StackFrontier};
pub use grid::{Cell, CellKind, Dir4, Grid, Position};
pub use observer::{FnObserver, NoOpObserver, PromptObserver, TraversalObserver};
pub use search::{goal_reachable, reachable, solve, Outcome, State, Step, Traversal, TraversalStats};
