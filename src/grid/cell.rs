use crate::grid::direction::Position;

/// What occupies a grid position. Fixed when the grid is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    Wall,
    Open,
    Start,
    Goal,
}

impl CellKind {
    /// Character used for this kind in maze files.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            CellKind::Wall => '#',
            CellKind::Open => '.',
            CellKind::Start => 'o',
            CellKind::Goal => '*',
        }
    }

    #[inline]
    pub const fn from_symbol(symbol: char) -> Option<CellKind> {
        match symbol {
            '#' => Some(CellKind::Wall),
            '.' => Some(CellKind::Open),
            'o' => Some(CellKind::Start),
            '*' => Some(CellKind::Goal),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, CellKind::Wall)
    }
}

/// Snapshot of one grid position.
///
/// The grid stays authoritative for the visited flag; a `Cell` copies it at
/// the time it was read.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub kind: CellKind,
    pub position: Position,
    pub visited: bool,
}

impl Cell {
    /// Character used when rendering traversal progress.
    ///
    /// Visited open cells render as `x`; every other cell keeps its maze
    /// file symbol.
    #[inline]
    pub fn glyph(&self) -> char {
        match self.kind {
            CellKind::Open if self.visited => 'x',
            kind => kind.symbol(),
        }
    }
}
