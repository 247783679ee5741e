use pathviz_core::{Grid, Point, Tag};

use crate::distance::manhattan;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::path::{NO_PARENT, UNREACHABLE, prepare, reconstruct};
use crate::traits::{Outcome, StepObserver, Strategy};

/// A* with the Manhattan heuristic and unit step cost.
///
/// Returns a shortest path in moves. Entries already on the frontier are not
/// re-queued when their cost improves; with a consistent heuristic on a
/// unit-cost grid this never changes the result.
#[derive(Debug, Default, Clone, Copy)]
pub struct AStar;

impl Strategy for AStar {
    fn search(
        &self,
        grid: &mut Grid,
        start: Point,
        end: Point,
        observer: &mut dyn StepObserver,
    ) -> Result<Outcome, SearchError> {
        let (si, ei) = prepare(grid, start, end)?;
        let len = grid.len();

        let mut g = vec![UNREACHABLE; len];
        let mut came_from = vec![NO_PARENT; len];
        g[si] = 0;

        let mut open = Frontier::new(len);
        open.push(si, 0);

        let mut nbuf: Vec<Point> = Vec::with_capacity(4);

        while let Some(ci) = open.pop() {
            if observer.quit_requested() {
                log::debug!("A* interrupted with {} queued", open.len());
                return Ok(Outcome::Interrupted);
            }

            if ci == ei {
                let path = reconstruct(grid, &came_from, si, ei, observer);
                return Ok(Outcome::PathFound { path });
            }

            let cp = grid.point(ci);
            log::trace!("A* expand {cp} g={}", g[ci]);

            nbuf.clear();
            nbuf.extend_from_slice(grid.neighbors(cp));

            for &np in nbuf.iter() {
                let Some(ni) = grid.idx(np) else {
                    continue;
                };
                let tentative_g = g[ci] + 1;
                if tentative_g >= g[ni] {
                    continue;
                }
                came_from[ni] = ci;
                g[ni] = tentative_g;
                let f = tentative_g + manhattan(np, end);
                if !open.contains(ni) {
                    open.push(ni, f);
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
    use crate::traits::NoopObserver;

    fn search(layout: &str) -> (Grid, Outcome) {
        let mut grid = Grid::from_ascii(layout).unwrap();
        let (s, e) = (grid.start().unwrap(), grid.end().unwrap());
        let outcome = AStar.search(&mut grid, s, e, &mut NoopObserver).unwrap();
        (grid, outcome)
    }

    #[test]
    fn straight_line_on_open_grid() {
        let (grid, outcome) = search(
            "
            S...E
            .....
            .....
            .....
            .....
            ",
        );
        assert_eq!(outcome.edges(), Some(4));
        assert_eq!(
            outcome.path().unwrap(),
            &[Point::new(0, 1), Point::new(0, 2), Point::new(0, 3)]
        );
        assert_eq!(grid.count_tag(Tag::Path), 3);
    }

    #[test]
    fn routes_around_wall() {
        let (grid, outcome) = search(
            "
            .....
            .###.
            S#.#E
            .#.#.
            .....
            ",
        );
        // Around either end of the walls: 2 vertical, 4 across, 2 back.
        assert_eq!(outcome.edges(), Some(8));
        for p in outcome.path().unwrap() {
            assert!(!grid.cell(*p).unwrap().is_barrier());
        }
    }

    #[test]
    fn adjacent_endpoints_give_empty_path() {
        let (grid, outcome) = search("SE\n..");
        assert_eq!(outcome, Outcome::PathFound { path: vec![] });
        assert_eq!(outcome.edges(), Some(1));
        assert_eq!(grid.count_tag(Tag::Path), 0);
    }

    #[test]
    fn walled_off_end_closes_reachable_region() {
        let (grid, outcome) = search(
            "
            S..#.
            ...#.
            ####.
            .....
            ....E
            ",
        );
        assert_eq!(outcome, Outcome::NoPath);
        assert_eq!(grid.count_tag(Tag::Path), 0);
        // 6 reachable cells minus the start itself.
        assert_eq!(grid.count_tag(Tag::Closed), 5);
        assert_eq!(grid.count_tag(Tag::Open), 0);
        assert_eq!(grid.tag(Point::new(4, 4)), Some(Tag::None));
    }

    #[test]
    fn start_is_never_closed() {
        let (grid, _) = search("S...\n....\n....\n...E");
        assert_ne!(grid.tag(Point::new(0, 0)), Some(Tag::Closed));
    }

    #[test]
    fn observer_called_per_expansion_and_path_cell() {
        let mut grid = Grid::from_ascii("S..E\n....\n....\n....").unwrap();
        let mut steps = 0;
        let outcome = AStar
            .search(
                &mut grid,
                Point::new(0, 0),
                Point::new(0, 3),
                &mut |_: &Grid| steps += 1,
            )
            .unwrap();
        // Expands (0,0), (0,1), (0,2) straight along the row, then tags two
        // path cells.
        assert_eq!(outcome.edges(), Some(3));
        assert_eq!(steps, 3 + 2);
    }

    #[test]
    fn quit_request_interrupts() {
        struct QuitAfter(usize);
        impl StepObserver for QuitAfter {
            fn on_step(&mut self, _: &Grid) {}
            fn quit_requested(&mut self) -> bool {
                if self.0 == 0 {
                    return true;
                }
                self.0 -= 1;
                false
            }
        }

        let mut grid = Grid::from_ascii("S....\n.....\n.....\n.....\n....E").unwrap();
        let outcome = AStar
            .search(&mut grid, Point::new(0, 0), Point::new(4, 4), &mut QuitAfter(2))
            .unwrap();
        assert_eq!(outcome, Outcome::Interrupted);
        assert_eq!(grid.count_tag(Tag::Path), 0);
        assert!(grid.count_tag(Tag::Closed) >= 1);
    }

    #[test]
    fn rejects_identical_endpoints() {
        let mut grid = Grid::new(3);
        let p = Point::new(1, 1);
        assert!(matches!(
            AStar.search(&mut grid, p, p, &mut NoopObserver),
            Err(SearchError::InvalidEndpoints { .. })
        ));
    }
}
