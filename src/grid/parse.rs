//! Text format: a `width height` header followed by `height` rows of
//! `width` characters from `#`, `.`, `o`, `*`.

use std::str::FromStr;

use crate::error::MalformedGridError;
use crate::grid::{CellKind, Grid};

impl FromStr for Grid {
    type Err = MalformedGridError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut lines = text.lines();

        let header = lines
            .next()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .ok_or(MalformedGridError::MissingHeader)?;
        let (width, height) = parse_header(header)?;

        // Rows are trimmed on both ends; blank lines after the last row are
        // not rows.
        let mut rows: Vec<&str> = lines.map(str::trim).collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }

        if rows.len() != height {
            return Err(MalformedGridError::RowCount {
                expected: height,
                found: rows.len(),
            });
        }

        // Sized from the text, not the header.
        let mut kinds = Vec::with_capacity(rows.iter().map(|row| row.len()).sum());
        for (y, row) in rows.iter().enumerate() {
            let mut found = 0;
            for (x, symbol) in row.chars().enumerate() {
                let kind = CellKind::from_symbol(symbol).ok_or(
                    MalformedGridError::InvalidCharacter {
                        found: symbol,
                        x,
                        y,
                    },
                )?;
                kinds.push(kind);
                found += 1;
            }
            if found != width {
                return Err(MalformedGridError::RowLength {
                    row: y,
                    expected: width,
                    found,
                });
            }
        }

        Grid::from_kinds(width, height, kinds)
    }
}

fn parse_header(header: &str) -> Result<(usize, usize), MalformedGridError> {
    let invalid = || MalformedGridError::InvalidHeader(header.to_owned());

    let mut fields = header.split_whitespace();
    let (Some(width), Some(height), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(invalid());
    };

    let width: usize = width.parse().map_err(|_| invalid())?;
    let height: usize = height.parse().map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }

    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;

    #[test]
    fn parses_three_by_two() {
        let grid: Grid = "3 2\no.#\n.*.\n".parse().unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.start(), Position::new(0, 0));
        assert_eq!(grid.goals().collect::<Vec<_>>(), vec![Position::new(1, 1)]);
    }

    #[test]
    fn tolerates_crlf_trailing_space_and_trailing_blank_lines() {
        let grid: Grid = "3 2\r\no.# \r\n.*.\r\n\r\n\n".parse().unwrap();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.cell_at(2, 0).kind, CellKind::Wall);
    }

    #[test]
    fn missing_header() {
        assert_eq!("".parse::<Grid>(), Err(MalformedGridError::MissingHeader));
        assert_eq!(
            "\no.*\n".parse::<Grid>(),
            Err(MalformedGridError::MissingHeader)
        );
    }

    #[test]
    fn non_numeric_header() {
        for header in ["three 1", "3", "3 1 1", "-3 1", "0 1", "3 0", "3.0 1"] {
            let text = format!("{header}\no.*\n");
            assert_eq!(
                text.parse::<Grid>(),
                Err(MalformedGridError::InvalidHeader(header.to_owned())),
                "header {header:?}"
            );
        }
    }

    #[test]
    fn invalid_character() {
        assert_eq!(
            "3 2\no.#\n.G*\n".parse::<Grid>(),
            Err(MalformedGridError::InvalidCharacter {
                found: 'G',
                x: 1,
                y: 1,
            })
        );
    }

    #[test]
    fn missing_goal() {
        assert_eq!(
            "3 2\no.#\n...\n".parse::<Grid>(),
            Err(MalformedGridError::MissingGoal)
        );
    }

    #[test]
    fn missing_start() {
        assert_eq!(
            "3 2\n..#\n.*.\n".parse::<Grid>(),
            Err(MalformedGridError::MissingStart)
        );
    }

    #[test]
    fn short_second_row() {
        assert_eq!(
            "3 2\no.#\n.*\n".parse::<Grid>(),
            Err(MalformedGridError::RowLength {
                row: 1,
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn long_first_row() {
        assert_eq!(
            "3 2\no.##\n.*.\n".parse::<Grid>(),
            Err(MalformedGridError::RowLength {
                row: 0,
                expected: 3,
                found: 4,
            })
        );
    }

    #[test]
    fn row_count_mismatch() {
        assert_eq!(
            "3 3\no.#\n.*.\n".parse::<Grid>(),
            Err(MalformedGridError::RowCount {
                expected: 3,
                found: 2,
            })
        );
        assert_eq!(
            "3 1\no.*\n...\n".parse::<Grid>(),
            Err(MalformedGridError::RowCount {
                expected: 1,
                found: 2,
            })
        );
    }

    #[test]
    fn interior_blank_line_is_a_short_row() {
        assert_eq!(
            "3 3\no.#\n\n.*.\n".parse::<Grid>(),
            Err(MalformedGridError::RowLength {
                row: 1,
                expected: 3,
                found: 0,
            })
        );
    }

    #[test]
    fn one_by_one_cannot_hold_start_and_goal() {
        assert_eq!("1 1\no\n".parse::<Grid>(), Err(MalformedGridError::MissingGoal));
        assert_eq!("1 1\n*\n".parse::<Grid>(), Err(MalformedGridError::MissingStart));
        assert!("1 1\n.\n".parse::<Grid>().is_err());
    }

    #[test]
    fn two_starts_rejected() {
        assert_eq!(
            "3 1\no*o\n".parse::<Grid>(),
            Err(MalformedGridError::MultipleStarts {
                first: Position::new(0, 0),
                second: Position::new(2, 0),
            })
        );
    }

    #[test]
    fn oversized_header_is_a_row_error() {
        let huge = usize::MAX;
        assert_eq!(
            format!("{huge} 1\no*\n").parse::<Grid>(),
            Err(MalformedGridError::RowLength {
                row: 0,
                expected: huge,
                found: 2,
            })
        );
        assert_eq!(
            "1000000000000 1\no*\n".parse::<Grid>(),
            Err(MalformedGridError::RowLength {
                row: 0,
                expected: 1_000_000_000_000,
                found: 2,
            })
        );
        assert_eq!(
            format!("2 {huge}\no*\n").parse::<Grid>(),
            Err(MalformedGridError::RowCount {
                expected: huge,
                found: 1,
            })
        );
    }

    #[test]
    fn overflowing_area_is_a_row_error() {
        let wide = usize::MAX / 2 + 1;
        assert_eq!(
            format!("{wide} 2\no*\n..\n").parse::<Grid>(),
            Err(MalformedGridError::RowLength {
                row: 0,
                expected: wide,
                found: 2,
            })
        );
    }
}
