use std::collections::VecDeque;

use pathviz_core::{Grid, Point, Tag};

use crate::error::SearchError;
use crate::path::{NO_PARENT, prepare, reconstruct};
use crate::traits::{Outcome, StepObserver, Strategy};

/// Breadth-first search with a FIFO queue.
///
/// Every step costs 1, so this finds a path with the fewest moves; it is
/// what the visualizer's menu labels "Dijkstra". No cost relaxation happens:
/// a cell is queued at most once, the first time it is seen.
#[derive(Debug, Default, Clone, Copy)]
pub struct BreadthFirst;

impl Strategy for BreadthFirst {
    fn search(
        &self,
        grid: &mut Grid,
        start: Point,
        end: Point,
        observer: &mut dyn StepObserver,
    ) -> Result<Outcome, SearchError> {
        let (si, ei) = prepare(grid, start, end)?;
        let len = grid.len();

        let mut visited = vec![false; len];
        let mut came_from = vec![NO_PARENT; len];
        let mut queue: VecDeque<usize> = VecDeque::new();

        visited[si] = true;
        queue.push_back(si);

        let mut nbuf: Vec<Point> = Vec::with_capacity(4);

        while let Some(ci) = queue.pop_front() {
            if observer.quit_requested() {
                log::debug!("BFS interrupted with {} queued", queue.len());
                return Ok(Outcome::Interrupted);
            }

            if ci == ei {
                let path = reconstruct(grid, &came_from, si, ei, observer);
                return Ok(Outcome::PathFound { path });
            }

            let cp = grid.point(ci);
            log::trace!("BFS expand {cp}");

            nbuf.clear();
            nbuf.extend_from_slice(grid.neighbors(cp));

            for &np in nbuf.iter() {
                let Some(ni) = grid.idx(np) else {
                    continue;
                };
                if visited[ni] {
                    continue;
                }
                visited[ni] = true;
                came_from[ni] = ci;
                queue.push_back(ni);
                grid.set_tag(np, Tag::Open);
            }

            observer.on_step(grid);

            if ci != si {
                grid.set_tag(cp, Tag::Closed);
            }
        }

        Ok(Outcome::NoPath)
    }
}
