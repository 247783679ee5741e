//! Step-observable search strategies over a [`pathviz_core::Grid`].
//!
//! Three interchangeable strategies share one contract, [`Strategy`]:
//!
//! - **A\*** ([`AStar`]): Manhattan heuristic, shortest path in moves
//! - **Breadth-first** ([`BreadthFirst`]): unit-cost FIFO expansion, shown
//!   as "Dijkstra" in the visualizer menu
//! - **Greedy best-first** ([`GreedyBestFirst`]): heuristic only, fast but
//!   not optimal
//!
//! Strategies never draw. They tag cells Open/Closed/Path on the grid and hand
//! control to a [`StepObserver`] after every change, which is where a renderer
//! redraws and where a quit request is picked up.
//!
//! Priority frontiers order entries by `(score, insertion sequence)`, and
//! neighbours are always visited down, up, right, left, so the same grid
//! always produces the same sequence of tag changes.
//!
//! Most callers go through [`run`], which validates the endpoints and
//! refreshes the neighbor snapshot before dispatching on an [`Algorithm`].

mod algorithm;
mod astar;
mod bfs;
mod distance;
mod engine;
mod error;
mod frontier;
mod greedy;
mod path;
mod traits;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use astar::AStar;
pub use bfs::BreadthFirst;
pub use distance::manhattan;
pub use engine::run;
pub use error::SearchError;
pub use greedy::GreedyBestFirst;
pub use traits::{NoopObserver, Outcome, StepObserver, Strategy};
