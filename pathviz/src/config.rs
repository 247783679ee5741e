//! Runtime configuration, read from `PATHVIZ_*` environment variables.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use pathviz_search::Algorithm;

/// Cells per side used by the visualizer unless overridden.
pub const DEFAULT_SIZE: i32 = 25;

/// Visualizer settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Cells per side of the board.
    pub size: i32,
    /// Terminal columns per board cell.
    pub cell_width: i32,
    /// Pause after each rendered search step.
    pub step_delay: Duration,
    /// Algorithm selected at startup.
    pub algorithm: Algorithm,
    /// Barrier probability for the random-walls key.
    pub barrier_density: f64,
    /// Where log output goes; the screen is busy.
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            cell_width: 2,
            step_delay: Duration::from_millis(10),
            algorithm: Algorithm::AStar,
            barrier_density: 0.3,
            log_file: std::env::temp_dir().join("pathviz.log"),
        }
    }
}

/// A configuration value that could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:?}: {}", self.key, self.value, self.reason)
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each key.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();

        if let Some(v) = lookup("PATHVIZ_SIZE") {
            cfg.size = parse_in("PATHVIZ_SIZE", &v, 2..=99)?;
        }
        if let Some(v) = lookup("PATHVIZ_CELL_WIDTH") {
            cfg.cell_width = parse_in("PATHVIZ_CELL_WIDTH", &v, 1..=4)?;
        }
        if let Some(v) = lookup("PATHVIZ_STEP_MS") {
            let ms: u64 = parse_in("PATHVIZ_STEP_MS", &v, 0..=1000)?;
            cfg.step_delay = Duration::from_millis(ms);
        }
        if let Some(v) = lookup("PATHVIZ_ALGORITHM") {
            cfg.algorithm = v.parse().map_err(|e: pathviz_search::UnknownAlgorithm| {
                ConfigError {
                    key: "PATHVIZ_ALGORITHM",
                    value: v.clone(),
                    reason: e.to_string(),
                }
            })?;
        }
        if let Some(v) = lookup("PATHVIZ_DENSITY") {
            let d: f64 = v.trim().parse().map_err(|_| ConfigError {
                key: "PATHVIZ_DENSITY",
                value: v.clone(),
                reason: "not a number".to_string(),
            })?;
            if !(0.0..=1.0).contains(&d) {
                return Err(ConfigError {
                    key: "PATHVIZ_DENSITY",
                    value: v,
                    reason: "must be between 0 and 1".to_string(),
                });
            }
            cfg.barrier_density = d;
        }
        if let Some(v) = lookup("PATHVIZ_LOG_FILE") {
            cfg.log_file = PathBuf::from(v);
        }

        Ok(cfg)
    }
}

fn parse_in<T>(key: &'static str, value: &str, range: std::ops::RangeInclusive<T>) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + fmt::Display,
{
    let err = |reason: String| ConfigError {
        key,
        value: value.to_string(),
        reason,
    };
    let n: T = value
        .trim()
        .parse()
        .map_err(|_| err("not a whole number".to_string()))?;
    if !range.contains(&n) {
        return Err(err(format!(
            "must be between {} and {}",
            range.start(),
            range.end()
        )));
    }
    Ok(n)
}
