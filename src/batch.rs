//! Solving several maze files at once.
//!
//! Each file gets its own grid and frontier, so traversals share nothing and
//! run on the rayon pool.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;

use crate::config::SolverConfig;
use crate::error::MazeError;
use crate::grid::Grid;
use crate::observer::NoOpObserver;
use crate::search::engine::{Outcome, Traversal};

/// Result of solving one file.
#[derive(Debug)]
pub struct MazeReport {
    pub path: PathBuf,
    pub result: Result<Outcome, MazeError>,
}

/// Loads `path` and runs a non-interactive traversal with the configured
/// policy.
pub fn solve_file(path: &Path, config: &SolverConfig) -> Result<Outcome, MazeError> {
    let mut grid = Grid::from_path(path)?;
    let outcome = Traversal::new(&mut grid, config.policy.frontier()).run_with(NoOpObserver);
    debug!(
        path = %path.display(),
        policy = %config.policy,
        found = outcome.found(),
        steps = outcome.stats.steps,
        "solved"
    );
    Ok(outcome)
}

/// Solves every file in parallel. Reports come back in input order.
///
/// `config.interactive` and `config.show_final` are ignored.
pub fn solve_files(paths: &[PathBuf], config: &SolverConfig) -> Vec<MazeReport> {
    paths
        .par_iter()
        .map(|path| MazeReport {
            path: path.clone(),
            result: solve_file(path, config),
        })
        .collect()
}
