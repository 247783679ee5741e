use pathviz_core::{Grid, Point, Tag};

use crate::error::SearchError;
use crate::traits::StepObserver;

/// Sentinel for "no predecessor" in the flat predecessor map.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Sentinel cost meaning "not reached yet".
pub(crate) const UNREACHABLE: i32 = i32::MAX;

/// Validate endpoints and make sure the neighbor snapshot is current.
///
/// Returns the flat indices of `start` and `end`.
pub(crate) fn prepare(
    grid: &mut Grid,
    start: Point,
    end: Point,
) -> Result<(usize, usize), SearchError> {
    let invalid = || SearchError::InvalidEndpoints {
        start: Some(start),
        end: Some(end),
    };
    let si = grid.idx(start).ok_or_else(invalid)?;
    let ei = grid.idx(end).ok_or_else(invalid)?;
    if si == ei {
        return Err(invalid());
    }
    if grid.is_stale() {
        log::debug!("neighbor snapshot stale, rebuilding before search");
        grid.update_neighbors();
    }
    Ok((si, ei))
}

/// Walk the predecessor chain back from `end_idx`, tagging every cell before
/// `start_idx` as Path and notifying the observer after each one.
///
/// Returns the tagged cells ordered from the start side to the end side.
pub(crate) fn reconstruct(
    grid: &mut Grid,
    came_from: &[usize],
    start_idx: usize,
    end_idx: usize,
    observer: &mut dyn StepObserver,
) -> Vec<Point> {
    let mut path = Vec::new();
    let mut ci = came_from[end_idx];
    while ci != NO_PARENT && ci != start_idx {
        let p = grid.point(ci);
        grid.set_tag(p, Tag::Path);
        observer.on_step(grid);
        path.push(p);
        ci = came_from[ci];
    }
    path.reverse();
    path
}
