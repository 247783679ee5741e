//! Randomised checks across all three strategies on seeded grids.

use std::collections::VecDeque;

use pathviz_core::{Grid, Point, Role, Tag};
use pathviz_search::{Algorithm, NoopObserver, Outcome, manhattan, run};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIZE: i32 = 12;

/// A random layout with distinct Start/End placed on free cells.
fn random_grid(rng: &mut StdRng, density: f64) -> Grid {
    let mut grid = Grid::new(SIZE);
    let start = Point::new(rng.random_range(0..SIZE), rng.random_range(0..SIZE));
    let mut end = start;
    while end == start {
        end = Point::new(rng.random_range(0..SIZE), rng.random_range(0..SIZE));
    }
    grid.set_role(start, Role::Start).unwrap();
    grid.set_role(end, Role::End).unwrap();
    grid.scatter_barriers(rng, density);
    grid
}

/// Cells reachable from `from`, excluding `from` itself.
fn reachable(grid: &Grid, from: Point) -> Vec<Point> {
    let mut seen = vec![false; grid.len()];
    let mut queue = VecDeque::from([from]);
    let mut out = Vec::new();
    seen[grid.idx(from).unwrap()] = true;
    while let Some(p) = queue.pop_front() {
        for n in grid.neighbors_of(p) {
            let i = grid.idx(n).unwrap();
            if !seen[i] {
                seen[i] = true;
                out.push(n);
                queue.push_back(n);
            }
        }
    }
    out
}

fn check_path_shape(grid: &Grid, path: &[Point]) {
    let (start, end) = (grid.start().unwrap(), grid.end().unwrap());
    let mut prev = start;
    for &p in path {
        let cell = grid.cell(p).unwrap();
        assert_eq!(cell.role, Role::Free, "path crosses {p}");
        assert_eq!(cell.tag, Tag::Path);
        assert!(prev.is_adjacent(p), "{prev} -> {p} is not a single step");
        prev = p;
    }
    assert!(prev.is_adjacent(end));
    assert_eq!(grid.count_tag(Tag::Path), path.len());
}

#[test]
fn open_grid_paths_match_manhattan_distance() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let mut grid = random_grid(&mut rng, 0.0);
        let expected = manhattan(grid.start().unwrap(), grid.end().unwrap()) as usize;
        for algorithm in [Algorithm::AStar, Algorithm::Bfs] {
            let outcome = run(&mut grid, algorithm, &mut NoopObserver).unwrap();
            assert_eq!(outcome.edges(), Some(expected), "{algorithm}");
        }
    }
}

#[test]
fn astar_matches_bfs_and_greedy_is_never_shorter() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut found = 0;
    for _ in 0..200 {
        let mut grid = random_grid(&mut rng, 0.3);
        let astar = run(&mut grid, Algorithm::AStar, &mut NoopObserver).unwrap();
        if let Some(path) = astar.path() {
            check_path_shape(&grid, path);
        }
        let bfs = run(&mut grid, Algorithm::Bfs, &mut NoopObserver).unwrap();
        if let Some(path) = bfs.path() {
            check_path_shape(&grid, path);
        }
        let greedy = run(&mut grid, Algorithm::Greedy, &mut NoopObserver).unwrap();
        if let Some(path) = greedy.path() {
            check_path_shape(&grid, path);
        }

        assert_eq!(astar.edges(), bfs.edges());
        assert_eq!(astar.is_found(), greedy.is_found());
        if let (Some(best), Some(g)) = (astar.edges(), greedy.edges()) {
            assert!(g >= best);
            found += 1;
        }
    }
    assert!(found > 50, "too few solvable layouts ({found})");
}

#[test]
fn unreachable_end_closes_every_reachable_cell() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut checked = 0;
    while checked < 20 {
        let mut grid = random_grid(&mut rng, 0.45);
        grid.update_neighbors();
        let start = grid.start().unwrap();
        let region = reachable(&grid, start);
        if region.contains(&grid.end().unwrap()) {
            continue;
        }
        for algorithm in Algorithm::ALL {
            let outcome = run(&mut grid, algorithm, &mut NoopObserver).unwrap();
            assert_eq!(outcome, Outcome::NoPath);
            assert_eq!(grid.count_tag(Tag::Path), 0);
            assert_eq!(grid.count_tag(Tag::Open), 0);
            assert_eq!(grid.count_tag(Tag::Closed), region.len());
            for p in &region {
                assert_eq!(grid.tag(*p), Some(Tag::Closed), "{algorithm} left {p}");
            }
        }
        checked += 1;
    }
}

#[test]
fn repeated_runs_replay_identical_steps() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..10 {
        let grid = random_grid(&mut rng, 0.25);
        for algorithm in Algorithm::ALL {
            let record = |mut g: Grid| {
                let mut frames = Vec::new();
                let outcome = run(&mut g, algorithm, &mut |g: &Grid| frames.push(g.to_string()))
                    .unwrap();
                (outcome, frames)
            };
            let (first, first_frames) = record(grid.clone());
            let (second, second_frames) = record(grid.clone());
            assert_eq!(first, second);
            assert_eq!(first_frames, second_frames);
        }
    }
}

#[test]
fn greedy_expands_no_more_than_bfs_on_open_grid() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..20 {
        let mut grid = random_grid(&mut rng, 0.0);
        let mut count = |algorithm| {
            let mut steps = 0usize;
            run(&mut grid, algorithm, &mut |_: &Grid| steps += 1).unwrap();
            steps
        };
        let greedy = count(Algorithm::Greedy);
        let bfs = count(Algorithm::Bfs);
        assert!(greedy <= bfs, "greedy {greedy} > bfs {bfs}");
    }
}
