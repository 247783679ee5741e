use std::fmt;

use pathviz_core::Point;

/// Errors raised before a search starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Start or End is missing, outside the grid, or both are the same cell.
    InvalidEndpoints {
        start: Option<Point>,
        end: Option<Point>,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoints { start, end } => {
                f.write_str("search needs distinct start and end cells inside the grid (start: ")?;
                match start {
                    Some(p) => write!(f, "{p}")?,
                    None => f.write_str("none")?,
                }
                f.write_str(", end: ")?;
                match end {
                    Some(p) => write!(f, "{p}")?,
                    None => f.write_str("none")?,
                }
                f.write_str(")")
            }
        }
    }
}

impl std::error::Error for SearchError {}
