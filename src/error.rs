//! Error types for grid construction and frontier access.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::grid::direction::Position;

/// A grid description violated one of the construction rules.
///
/// Each variant names the rule that failed; positions are zero based and
/// `y` counts rows below the header.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedGridError {
    /// The input had no header line at all.
    #[error("missing `width height` header")]
    MissingHeader,

    /// The header was present but was not two positive integers.
    #[error("invalid header {0:?}: expected two positive integers `width height`")]
    InvalidHeader(String),

    /// A row contained a character outside `#`, `.`, `o`, `*`.
    #[error("invalid character {found:?} at ({x}, {y})")]
    InvalidCharacter { found: char, x: usize, y: usize },

    /// The number of rows differs from the declared height.
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    /// A row's length differs from the declared width.
    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("no start cell `o`")]
    MissingStart,

    #[error("no goal cell `*`")]
    MissingGoal,

    /// More than one start cell; both positions are reported.
    #[error("multiple start cells: {first} and {second}")]
    MultipleStarts { first: Position, second: Position },
}

/// `remove` or `peek` was called on a frontier holding no items.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[error("frontier is empty")]
pub struct EmptyFrontierError;

/// Failure to load a maze from disk.
#[derive(Error, Debug)]
pub enum MazeError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed maze: {0}")]
    Malformed(#[from] MalformedGridError),
}
