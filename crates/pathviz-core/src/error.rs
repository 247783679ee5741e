use std::fmt;

use crate::cell::Role;
use crate::geom::Point;

/// Errors raised by [`Grid`](crate::Grid) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The position lies outside `[0, size)` on either axis.
    OutOfBounds(Point),
    /// An ASCII layout with no rows.
    Empty,
    /// An ASCII layout row whose length differs from the row count.
    NotSquare { row: usize, len: usize, expected: usize },
    /// A character not in the layout alphabet.
    InvalidRune { ch: char, pos: Point },
    /// A second Start or End in an ASCII layout.
    DuplicateEndpoint { role: Role, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "position {p} is outside the grid"),
            Self::Empty => f.write_str("grid layout is empty"),
            Self::NotSquare { row, len, expected } => write!(
                f,
                "grid layout row {row} has {len} cells, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "grid layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateEndpoint { role, pos } => {
                write!(f, "grid layout has a second {role} cell at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}
