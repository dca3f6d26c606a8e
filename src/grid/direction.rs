use std::fmt;

/// Zero-based cell coordinate. `x` is the column, `y` the row.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Row-major index into a grid of the given width.
    #[inline]
    pub const fn to_index(self, width: usize) -> usize {
        self.y * width + self.x
    }

    #[inline]
    pub const fn from_index(index: usize, width: usize) -> Self {
        Self {
            x: index % width,
            y: index / width,
        }
    }

    /// The adjacent position in `dir`, if it lies inside `width x height`.
    #[inline]
    pub fn step(self, dir: Dir4, width: usize, height: usize) -> Option<Position> {
        let (dx, dy) = dir.offset();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        (x < width && y < height).then_some(Position { x, y })
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// 4-directional movement. Rows grow southwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Dir4 {
    North,
    South,
    West,
    East,
}

impl Dir4 {
    /// Order in which neighbors are reported.
    pub const ALL: [Dir4; 4] = [Dir4::North, Dir4::South, Dir4::West, Dir4::East];

    #[inline]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Dir4::North => (0, -1),
            Dir4::South => (0, 1),
            Dir4::West => (-1, 0),
            Dir4::East => (1, 0),
        }
    }
}
