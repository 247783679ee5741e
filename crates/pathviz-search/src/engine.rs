use pathviz_core::{Grid, Tag};

use crate::algorithm::Algorithm;
use crate::error::SearchError;
use crate::traits::{Outcome, StepObserver};

/// Run `algorithm` between the grid's Start and End cells.
///
/// Clears the previous run's tags, rebuilds the neighbor snapshot, searches,
/// then drops any tag left on the two endpoints so they show as themselves.
/// Fails with [`SearchError::InvalidEndpoints`] if either endpoint is unset.
pub fn run(
    grid: &mut Grid,
    algorithm: Algorithm,
    observer: &mut dyn StepObserver,
) -> Result<Outcome, SearchError> {
    let (start, end) = match (grid.start(), grid.end()) {
        (Some(start), Some(end)) => (start, end),
        (start, end) => return Err(SearchError::InvalidEndpoints { start, end }),
    };

    grid.soft_clear();
    grid.update_neighbors();
    log::info!("{algorithm}: searching {start} -> {end}");

    let outcome = algorithm.strategy().search(grid, start, end, observer)?;
    grid.clear_endpoint_tags();

    match &outcome {
        Outcome::PathFound { path } => log::info!(
            "{algorithm}: path of {} moves, {} cells closed",
            path.len() + 1,
            grid.count_tag(Tag::Closed)
        ),
        Outcome::NoPath => log::info!(
            "{algorithm}: no path, {} cells closed",
            grid.count_tag(Tag::Closed)
        ),
        Outcome::Interrupted => log::info!("{algorithm}: interrupted"),
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::NoopObserver;
    use pathviz_core::{Point, Role};

    #[test]
    fn missing_endpoints_are_rejected() {
        let mut grid = Grid::new(4);
        assert_eq!(
            run(&mut grid, Algorithm::AStar, &mut NoopObserver),
            Err(SearchError::InvalidEndpoints {
                start: None,
                end: None
            })
        );
        grid.set_role(Point::new(0, 0), Role::Start).unwrap();
        assert_eq!(
            run(&mut grid, Algorithm::Bfs, &mut NoopObserver),
            Err(SearchError::InvalidEndpoints {
                start: Some(Point::new(0, 0)),
                end: None
            })
        );
    }

    #[test]
    fn rerun_clears_previous_tags() {
        let mut grid = Grid::from_ascii("S...\n....\n....\n...E").unwrap();
        run(&mut grid, Algorithm::Bfs, &mut NoopObserver).unwrap();
        let bfs_closed = grid.count_tag(Tag::Closed);
        run(&mut grid, Algorithm::Greedy, &mut NoopObserver).unwrap();
        assert!(grid.count_tag(Tag::Closed) < bfs_closed);
    }

    #[test]
    fn endpoints_left_untagged() {
        let mut grid = Grid::from_ascii("S...\n.##.\n.#E.\n....").unwrap();
        for algorithm in Algorithm::ALL {
            let outcome = run(&mut grid, algorithm, &mut NoopObserver).unwrap();
            assert!(outcome.is_found());
            assert_eq!(grid.tag(Point::new(0, 0)), Some(Tag::None));
            assert_eq!(grid.tag(Point::new(2, 2)), Some(Tag::None));
            assert_eq!(grid.role(Point::new(0, 0)), Some(Role::Start));
            assert_eq!(grid.role(Point::new(2, 2)), Some(Role::End));
        }
    }

    #[test]
    fn barrier_edit_between_runs_is_seen() {
        let mut grid = Grid::from_ascii("S..\n...\n..E").unwrap();
        let first = run(&mut grid, Algorithm::AStar, &mut NoopObserver).unwrap();
        assert_eq!(first.edges(), Some(4));

        grid.set_role(Point::new(1, 2), Role::Barrier).unwrap();
        grid.set_role(Point::new(2, 1), Role::Barrier).unwrap();
        let second = run(&mut grid, Algorithm::AStar, &mut NoopObserver).unwrap();
        assert_eq!(second, Outcome::NoPath);
    }
}
