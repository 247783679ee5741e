use pathviz_core::{Grid, Point};

use crate::error::SearchError;

/// Receives control after every visible change a strategy makes.
///
/// `on_step` is the only re-entry point into the caller while a search runs;
/// a renderer redraws there. It must not change the grid's topology, which
/// the shared borrow already enforces.
pub trait StepObserver {
    /// Called after each processed frontier node and after each path cell.
    fn on_step(&mut self, grid: &Grid);

    /// Polled once per frontier pop. Returning `true` abandons the search
    /// without restoring tags.
    fn quit_requested(&mut self) -> bool {
        false
    }
}

impl<F: FnMut(&Grid)> StepObserver for F {
    fn on_step(&mut self, grid: &Grid) {
        self(grid)
    }
}

/// Observer that ignores every step.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn on_step(&mut self, _grid: &Grid) {}
}

/// How a search run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `end` was reached. `path` lists the cells tagged Path, from the one
    /// next to Start to the one next to End; it is empty when they touch.
    PathFound { path: Vec<Point> },
    /// The frontier ran dry without reaching `end`.
    NoPath,
    /// The observer asked to quit.
    Interrupted,
}

impl Outcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::PathFound { .. })
    }

    /// Cells between Start and End, if a path was found.
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Self::PathFound { path } => Some(path),
            _ => None,
        }
    }

    /// Path length counted in moves, if a path was found.
    pub fn edges(&self) -> Option<usize> {
        self.path().map(|p| p.len() + 1)
    }
}

/// A grid search algorithm.
///
/// Implementations tag cells Open when queued, Closed when expanded (never
/// the start cell), and Path during reconstruction, calling the observer as
/// they go.
pub trait Strategy {
    /// Search from `start` to `end` over the grid's neighbor snapshot.
    fn search(
        &self,
        grid: &mut Grid,
        start: Point,
        end: Point,
        observer: &mut dyn StepObserver,
    ) -> Result<Outcome, SearchError>;
}
