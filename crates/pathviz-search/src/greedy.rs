use pathviz_core::{Grid, Point, Tag};

use crate::distance::manhattan;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::path::{NO_PARENT, UNREACHABLE, prepare, reconstruct};
use crate::traits::{Outcome, StepObserver, Strategy};

/// Greedy best-first search: always expands the frontier cell closest to
/// `end` by Manhattan distance, ignoring the cost already travelled.
///
/// Usually expands far fewer cells than [`AStar`](crate::AStar) but the path
/// it returns is not guaranteed to be shortest.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyBestFirst;

impl Strategy for GreedyBestFirst {
    fn search(
        &self,
        grid: &mut Grid,
        start: Point,
        end: Point,
        observer: &mut dyn StepObserver,
    ) -> Result<Outcome, SearchError> {
        let (si, ei) = prepare(grid, start, end)?;
        let len = grid.len();

        let mut h = vec![UNREACHABLE; len];
        let mut came_from = vec![NO_PARENT; len];
        h[si] = manhattan(start, end);

        let mut open = Frontier::new(len);
        open.push(si, 0);

        let mut nbuf: Vec<Point> = Vec::with_capacity(4);

        while let Some(ci) = open.pop() {
            if observer.quit_requested() {
                log::debug!("greedy interrupted with {} queued", open.len());
                return Ok(Outcome::Interrupted);
            }

            if ci == ei {
                let path = reconstruct(grid, &came_from, si, ei, observer);
                return Ok(Outcome::PathFound { path });
            }

            let cp = grid.point(ci);
            log::trace!("greedy expand {cp} h={}", h[ci]);

            nbuf.clear();
            nbuf.extend_from_slice(grid.neighbors(cp));

            for &np in nbuf.iter() {
                let Some(ni) = grid.idx(np) else {
                    continue;
                };
                let score = manhattan(np, end);
                if score >= h[ni] {
                    continue;
                }
                came_from[ni] = ci;
                h[ni] = score;
                if !open.contains(ni) {
                    open.push(ni, score);
                    grid.set_tag(np, Tag::Open);
                }
            }

            observer.on_step(grid);

            if ci != si {
                grid.set_tag(cp, Tag::Closed);
            }
        }

        Ok(Outcome::NoPath)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astar::AStar;
    use crate::traits::NoopObserver;

    fn run(strategy: &dyn Strategy, layout: &str) -> (Grid, Outcome) {
        let mut grid = Grid::from_ascii(layout).unwrap();
        let (s, e) = (grid.start().unwrap(), grid.end().unwrap());
        let outcome = strategy.search(&mut grid, s, e, &mut NoopObserver).unwrap();
        (grid, outcome)
    }

    #[test]
    fn beelines_on_open_grid() {
        let (grid, outcome) = run(
            &GreedyBestFirst,
            "
            S....
            .....
            .....
            .....
            ....E
            ",
        );
        assert_eq!(outcome.edges(), Some(8));
        // Nothing off the path gets expanded on an open grid.
        assert_eq!(grid.count_tag(Tag::Closed), 0);
    }

    #[test]
    fn takes_longer_route_than_astar() {
        // Climbing toward E runs into the wall in column 4, so greedy has to
        // come back down; the short route stays low and goes around it.
        let layout = "
            #.##E.
            ....#.
            #.#.#.
            ....#.
            ..#...
            .S...#
        ";
        let (grid, greedy) = run(&GreedyBestFirst, layout);
        let (_, astar) = run(&AStar, layout);
        assert_eq!(astar.edges(), Some(10));
        assert_eq!(greedy.edges(), Some(16));
        for p in greedy.path().unwrap() {
            assert!(!grid.cell(*p).unwrap().is_barrier());
        }
    }

    #[test]
    fn unreachable_end_closes_everything_reachable() {
        let (grid, outcome) = run(
            &GreedyBestFirst,
            "
            S.#.
            ..#.
            ###.
            ...E
            ",
        );
        assert_eq!(outcome, Outcome::NoPath);
        assert_eq!(grid.count_tag(Tag::Closed), 3);
        assert_eq!(grid.count_tag(Tag::Open), 0);
    }
}
