use tracing::{debug, trace};

use crate::error::EmptyFrontierError;
use crate::frontier::Frontier;
use crate::grid::{CellKind, Grid, Position};
use crate::observer::{NoOpObserver, TraversalObserver};

/// Lifecycle of a [`Traversal`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    /// Frontier holds only the start cell.
    Seeded,
    Running,
    /// A goal was removed from the frontier.
    Found(Position),
    /// The frontier ran dry without reaching a goal.
    Exhausted,
}

impl State {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, State::Found(_) | State::Exhausted)
    }
}

/// What one iteration of the search loop did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The removed cell had already been expanded.
    Skipped(Position),
    /// The removed cell was expanded; `added` neighbors entered the frontier.
    Expanded { position: Position, added: usize },
    Found(Position),
    Exhausted,
}

impl Step {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Step::Found(_) | Step::Exhausted)
    }
}

/// Counters collected while a traversal runs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Loop iterations, including the terminal one.
    pub steps: usize,
    pub expanded: usize,
    pub skipped: usize,
    /// Items added to the frontier, including the start seed.
    pub added: usize,
    pub peak_frontier: usize,
}

/// Result of running a traversal to completion.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub goal: Option<Position>,
    pub stats: TraversalStats,
}

impl Outcome {
    pub const FOUND: &'static str = "Maze solution found";
    pub const NOT_FOUND: &'static str = "Maze solution does not exist";

    #[inline]
    pub fn found(&self) -> bool {
        self.goal.is_some()
    }

    /// The line reported to users for this outcome.
    pub fn verdict(&self) -> &'static str {
        if self.found() {
            Self::FOUND
        } else {
            Self::NOT_FOUND
        }
    }
}

/// Frontier-driven reachability search from the start cell to any goal.
///
/// The frontier's ordering decides the visiting order: a LIFO frontier gives
/// a depth-first walk, a FIFO frontier a breadth-first one. The answer does
/// not depend on the ordering.
///
/// Neighbors are filtered when they are added: walls and already-expanded
/// cells never enter the frontier. The frontier itself keeps duplicates, so
/// a cell can be removed again after it was expanded; such removals are
/// reported as [`Step::Skipped`]. A goal is never marked visited because
/// removing it ends the search, so skipping cannot hide a goal.
///
/// Every cell is expanded at most once and each expansion adds at most four
/// items, which bounds the loop by `4 * width * height + 1` removals.
pub struct Traversal<'g, F>
where
    F: Frontier<Position>,
{
    grid: &'g mut Grid,
    frontier: F,
    state: State,
    stats: TraversalStats,
}

impl<'g, F> Traversal<'g, F>
where
    F: Frontier<Position>,
{
    /// Clears `frontier` and seeds it with the grid's start cell.
    ///
    /// Visited flags are left as they are; pass a fresh grid or call
    /// [`Grid::reset_visited`] before traversing a grid a second time.
    pub fn new(grid: &'g mut Grid, mut frontier: F) -> Self {
        frontier.clear();
        let start = grid.start();
        frontier.add(start);

        debug!(
            %start,
            width = grid.width(),
            height = grid.height(),
            "traversal seeded"
        );

        Self {
            grid,
            frontier,
            state: State::Seeded,
            stats: TraversalStats {
                added: 1,
                peak_frontier: 1,
                ..TraversalStats::default()
            },
        }
    }

    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    #[inline]
    pub fn frontier(&self) -> &F {
        &self.frontier
    }

    #[inline]
    pub fn stats(&self) -> &TraversalStats {
        &self.stats
    }

    /// Runs one loop iteration.
    ///
    /// Once the traversal has finished this keeps returning the terminal
    /// step without touching the grid or the frontier.
    pub fn step(&mut self) -> Step {
        match self.state {
            State::Found(goal) => return Step::Found(goal),
            State::Exhausted => return Step::Exhausted,
            State::Seeded | State::Running => {}
        }

        self.state = State::Running;
        self.stats.steps += 1;

        if self.frontier.is_empty() {
            return self.exhaust();
        }
        let current = match self.frontier.remove() {
            Ok(position) => position,
            // Unreachable for a frontier that honours `is_empty`.
            Err(EmptyFrontierError) => return self.exhaust(),
        };

        if self.grid.is_visited(current) {
            self.stats.skipped += 1;
            trace!(%current, "skipped");
            return Step::Skipped(current);
        }

        if self.grid.kind(current) == Some(CellKind::Goal) {
            self.state = State::Found(current);
            debug!(goal = %current, stats = ?self.stats, "goal reached");
            return Step::Found(current);
        }

        let mut added = 0;
        for next in self.grid.neighbor_positions(current) {
            let passable = self.grid.kind(next).is_some_and(CellKind::is_passable);
            if passable && !self.grid.is_visited(next) {
                self.frontier.add(next);
                added += 1;
            }
        }
        self.grid.mark_visited(current);

        self.stats.expanded += 1;
        self.stats.added += added;
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
        trace!(%current, added, pending = self.frontier.len(), "expanded");

        Step::Expanded {
            position: current,
            added,
        }
    }

    /// Steps until a goal is found or the frontier is empty, reporting every
    /// step to `observer`.
    pub fn run_with<O: TraversalObserver>(&mut self, mut observer: O) -> Outcome {
        while !self.is_finished() {
            let step = self.step();
            observer.on_step(self.grid, &step);
        }
        self.outcome()
    }

    pub fn run(&mut self) -> Outcome {
        self.run_with(NoOpObserver)
    }

    /// Outcome so far; `goal` is set only once a goal was found.
    pub fn outcome(&self) -> Outcome {
        let goal = match self.state {
            State::Found(goal) => Some(goal),
            _ => None,
        };
        Outcome {
            goal,
            stats: self.stats,
        }
    }

    pub fn into_frontier(self) -> F {
        self.frontier
    }

    fn exhaust(&mut self) -> Step {
        self.state = State::Exhausted;
        debug!(stats = ?self.stats, "frontier exhausted");
        Step::Exhausted
    }
}

impl<'g, F> Iterator for Traversal<'g, F>
where
    F: Frontier<Position>,
{
    type Item = Step;

    /// Yields every step up to and including the terminal one.
    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            None
        } else {
            Some(self.step())
        }
    }
}

/// Returns true iff a goal is reachable from the start cell.
///
/// `observer` is invoked once per loop iteration. The grid's visited flags
/// record the explored region afterwards.
pub fn solve<F, O>(grid: &mut Grid, frontier: F, observer: O) -> bool
where
    F: Frontier<Position>,
    O: TraversalObserver,
{
    Traversal::new(grid, frontier).run_with(observer).found()
}
