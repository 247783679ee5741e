//! pathviz: interactive terminal pathfinding visualizer.

use pathviz_lib::{app, config::Config, logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    logging::init(&config.log_file);
    log::info!(
        "{}x{} board, {} selected",
        config.size,
        config.size,
        config.algorithm
    );
    app::run(&config)
}
