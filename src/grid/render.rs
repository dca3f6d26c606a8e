use std::fmt::{self, Write};

use crate::grid::Grid;

/// Renders traversal progress, one line per row.
///
/// Walls, start and goal keep their file symbols; open cells render as `x`
/// once visited and `.` otherwise.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, cell) in self.cells().enumerate() {
            f.write_char(cell.glyph())?;
            if (index + 1) % self.width() == 0 {
                f.write_char('\n')?;
            }
        }
        Ok(())
    }
}
