//! Logger setup. The terminal is in raw mode while the visualizer runs, so
//! records go to a file instead of stderr.

use std::fs::OpenOptions;
use std::path::Path;

/// Install `env_logger` writing to `path`. `RUST_LOG` overrides the default
/// `info` level.
///
/// If the file can't be opened logging stays off; the screen is never used.
pub fn init(path: &Path) {
    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(f) => f,
        Err(_) => return,
    };
    let installed = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init();
    if installed.is_ok() {
        log::info!("pathviz {} starting", env!("CARGO_PKG_VERSION"));
    }
}
