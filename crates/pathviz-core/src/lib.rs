//! **pathviz-core**: grid model for the pathviz search visualizer.
//!
//! This crate provides the board that search strategies run on: grid
//! positions, cells carrying a persistent [`Role`] (free, barrier, start,
//! end) and a transient [`Tag`] (open, closed, path), and the [`Grid`] that
//! owns them together with its neighbor snapshot.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
mod scatter;

pub use cell::{Cell, Role, Tag};
pub use error::GridError;
pub use geom::Point;
pub use grid::Grid;
