use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::grid::Grid;
use crate::search::engine::Step;

/// Hook invoked once per traversal iteration.
///
/// Observers see the grid after the step was applied. They cannot change
/// the traversal.
pub trait TraversalObserver {
    fn on_step(&mut self, _grid: &Grid, _step: &Step) {}
}

pub struct NoOpObserver;
impl TraversalObserver for NoOpObserver {}

/// Adapts a closure into an observer.
pub struct FnObserver<F>(pub F);

impl<F> TraversalObserver for FnObserver<F>
where
    F: FnMut(&Grid, &Step),
{
    #[inline]
    fn on_step(&mut self, grid: &Grid, step: &Step) {
        (self.0)(grid, step)
    }
}

impl<O> TraversalObserver for &mut O
where
    O: TraversalObserver + ?Sized,
{
    #[inline]
    fn on_step(&mut self, grid: &Grid, step: &Step) {
        (**self).on_step(grid, step)
    }
}

/// Prints the maze after every step and waits for Enter.
///
/// Once input is exhausted or an I/O error occurs the observer stops
/// prompting and stays silent for the rest of the run.
pub struct PromptObserver<R, W> {
    input: R,
    output: W,
    active: bool,
}

impl<R: BufRead, W: Write> PromptObserver<R, W> {
    pub const PROMPT: &'static str = "Press Enter To Continue";

    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            active: true,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, grid: &Grid, step: &Step) -> std::io::Result<bool> {
        writeln!(self.output, "{grid}")?;
        if step.is_terminal() {
            self.output.flush()?;
            return Ok(true);
        }
        write!(self.output, "{}", Self::PROMPT)?;
        self.output.flush()?;

        let mut line = String::new();
        Ok(self.input.read_line(&mut line)? > 0)
    }
}

impl<R: BufRead, W: Write> TraversalObserver for PromptObserver<R, W> {
    fn on_step(&mut self, grid: &Grid, step: &Step) {
        if !self.active {
            return;
        }
        match self.prompt(grid, step) {
            Ok(true) => {}
            Ok(false) => {
                debug!("input closed, continuing without prompts");
                self.active = false;
            }
            Err(error) => {
                warn!(%error, "interactive display failed, continuing without prompts");
                self.active = false;
            }
        }
    }
}
