//! Reachability closure from the start cell, independent of any frontier
//! and of the grid's visited flags.

use rustc_hash::FxHashSet;

use crate::grid::{CellKind, Grid, Position};
use crate::search::visited::Visited;

/// Every passable position reachable from the start through 4-adjacent
/// non-wall steps, the start included.
pub fn reachable(grid: &Grid) -> FxHashSet<Position> {
    let start = grid.start();
    let mut seen = FxHashSet::default();
    seen.visit(start);

    let mut pending = vec![start];
    while let Some(current) = pending.pop() {
        for next in grid.neighbor_positions(current) {
            let passable = grid.kind(next).is_some_and(CellKind::is_passable);
            if passable && seen.visit(next) {
                pending.push(next);
            }
        }
    }

    debug_assert!(seen.iter().all(|p| grid.kind(*p).is_some_and(CellKind::is_passable)));
    seen
}

/// True iff at least one goal is in the closure of the start cell.
pub fn goal_reachable(grid: &Grid) -> bool {
    let closure = reachable(grid);
    grid.goals().any(|goal| closure.contains(&goal))
}
