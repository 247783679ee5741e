//! pathviz: an interactive terminal visualizer for grid pathfinding.
//!
//! Draw walls with the mouse, place a start and an end, pick an algorithm
//! and watch it expand the frontier one step at a time.

pub mod app;
pub mod canvas;
pub mod config;
pub mod driver;
pub mod layout;
pub mod logging;
pub mod style;

pub use app::{Control, Status, Visualizer};
pub use config::{Config, ConfigError};
