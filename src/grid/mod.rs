//! The maze: a fixed-shape rectangle of typed cells with per-cell visited
//! flags.

use std::fs;
use std::path::Path;

use bit_vec::BitVec;
use tracing::info;

use crate::error::{MalformedGridError, MazeError};
use crate::search::visited::Visited;

#[cfg(test)]
pub(crate) mod arbitrary;
pub mod cell;
pub mod direction;
pub mod parse;
pub mod render;

pub use cell::{Cell, CellKind};
pub use direction::{Dir4, Position};

/// Rectangular maze backed by a flat, row-major cell store.
///
/// The shape and cell kinds never change after construction. Only the
/// visited flags are mutable, and only through [`Grid::mark_visited`] and
/// [`Grid::reset_visited`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    kinds: Box<[CellKind]>,
    visited: BitVec,
    width: usize,
    height: usize,
    start: Position,
}

impl Grid {
    /// Builds a grid from row-major cell kinds, checking the construction
    /// invariants: matching size, exactly one start, at least one goal.
    pub fn from_kinds(
        width: usize,
        height: usize,
        kinds: Vec<CellKind>,
    ) -> Result<Self, MalformedGridError> {
        if width == 0 || height == 0 {
            return Err(MalformedGridError::InvalidHeader(format!("{width} {height}")));
        }
        if width.checked_mul(height) != Some(kinds.len()) {
            let found_rows = kinds.len().div_ceil(width);
            if found_rows != height {
                return Err(MalformedGridError::RowCount {
                    expected: height,
                    found: found_rows,
                });
            }
            return Err(MalformedGridError::RowLength {
                row: height - 1,
                expected: width,
                found: kinds.len() - (height - 1) * width,
            });
        }

        let mut start = None;
        let mut has_goal = false;
        for (index, kind) in kinds.iter().enumerate() {
            match kind {
                CellKind::Start => {
                    let here = Position::from_index(index, width);
                    if let Some(first) = start {
                        return Err(MalformedGridError::MultipleStarts {
                            first,
                            second: here,
                        });
                    }
                    start = Some(here);
                }
                CellKind::Goal => has_goal = true,
                CellKind::Wall | CellKind::Open => {}
            }
        }

        let start = start.ok_or(MalformedGridError::MissingStart)?;
        if !has_goal {
            return Err(MalformedGridError::MissingGoal);
        }

        Ok(Self {
            visited: BitVec::from_elem(kinds.len(), false),
            kinds: kinds.into_boxed_slice(),
            width,
            height,
            start,
        })
    }

    /// Reads and parses a maze file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MazeError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| MazeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let grid: Grid = text.parse()?;
        info!(
            path = %path.display(),
            width = grid.width,
            height = grid.height,
            "loaded maze"
        );
        Ok(grid)
    }

    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of cells, `width * height`.
    #[inline]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Never true for a grid that passed construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    #[inline]
    pub fn in_bounds(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    /// The unique start cell.
    pub fn start_cell(&self) -> Cell {
        self.cell_unchecked(self.start.to_index(self.width))
    }

    /// The cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics when `(x, y)` lies outside the grid. Use [`Grid::get`] for a
    /// checked lookup.
    pub fn cell_at(&self, x: usize, y: usize) -> Cell {
        let position = Position::new(x, y);
        assert!(
            self.in_bounds(position),
            "cell {position} out of bounds for {}x{} grid",
            self.width,
            self.height
        );
        self.cell_unchecked(position.to_index(self.width))
    }

    pub fn get(&self, position: Position) -> Option<Cell> {
        self.in_bounds(position)
            .then(|| self.cell_unchecked(position.to_index(self.width)))
    }

    pub fn kind(&self, position: Position) -> Option<CellKind> {
        self.in_bounds(position)
            .then(|| self.kinds[position.to_index(self.width)])
    }

    /// In-bounds positions adjacent to `position`, in [`Dir4::ALL`] order.
    pub fn neighbor_positions(&self, position: Position) -> impl Iterator<Item = Position> {
        let (width, height) = (self.width, self.height);
        Dir4::ALL
            .into_iter()
            .filter_map(move |dir| position.step(dir, width, height))
    }

    /// In-bounds cells adjacent to `(x, y)`: north, south, west, east.
    pub fn neighbors(&self, x: usize, y: usize) -> Vec<Cell> {
        self.neighbor_positions(Position::new(x, y))
            .map(|p| self.cell_unchecked(p.to_index(self.width)))
            .collect()
    }

    #[inline]
    pub fn is_visited(&self, position: Position) -> bool {
        self.in_bounds(position) && self.visited.is_visited(&position.to_index(self.width))
    }

    /// Sets the visited flag; returns true when the cell was not visited
    /// before. Out-of-bounds positions are ignored.
    pub fn mark_visited(&mut self, position: Position) -> bool {
        if !self.in_bounds(position) {
            return false;
        }
        self.visited.visit(position.to_index(self.width))
    }

    /// Clears every visited flag so the grid can be traversed again.
    pub fn reset_visited(&mut self) {
        self.visited = BitVec::from_elem(self.kinds.len(), false);
    }

    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|&bit| bit).count()
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.kinds.len()).map(move |index| self.cell_unchecked(index))
    }

    pub fn goals(&self) -> impl Iterator<Item = Position> + '_ {
        self.kinds
            .iter()
            .enumerate()
            .filter(|(_, kind)| **kind == CellKind::Goal)
            .map(move |(index, _)| Position::from_index(index, self.width))
    }

    fn cell_unchecked(&self, index: usize) -> Cell {
        Cell {
            kind: self.kinds[index],
            position: Position::from_index(index, self.width),
            visited: self.visited.is_visited(&index),
        }
    }
}
