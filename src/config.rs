use std::path::PathBuf;

use log::debug;

use crate::data::loader::{DEFAULT_DATA_PATH, DEFAULT_MAX_ROWS};
use crate::error::ConfigError;

pub const DATA_PATH_VAR: &str = "MNIST_PATH";
pub const MAX_ROWS_VAR: &str = "MNIST_MAX_ROWS";
pub const EXPORT_PATH_VAR: &str = "MNIST_SAMPLES_OUT";

/// Runtime settings for the sampler binary.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// CSV file to load.
    pub data_path: PathBuf,
    /// Data-row cap; `None` reads the whole file.
    pub max_rows: Option<usize>,
    /// Where to write the class samples as JSON, if anywhere.
    pub export_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            max_rows: Some(DEFAULT_MAX_ROWS),
            export_path: None,
        }
    }
}

impl Config {
    /// Read settings from the process environment, after loading a `.env`
    /// file from the working directory if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from an arbitrary variable lookup. Unset or empty
    /// variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Config::default();

        if let Some(path) = get(DATA_PATH_VAR) {
            config.data_path = PathBuf::from(path);
        }
        if let Some(rows) = get(MAX_ROWS_VAR) {
            config.max_rows = parse_max_rows(&rows)?;
        }
        config.export_path = get(EXPORT_PATH_VAR).map(PathBuf::from);

        Ok(config)
    }
}

/// `0` and `all` mean no cap.
fn parse_max_rows(value: &str) -> Result<Option<usize>, ConfigError> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    match value.parse::<usize>() {
        Ok(0) => Ok(None),
        Ok(n) => Ok(Some(n)),
        Err(_) => Err(ConfigError::InvalidMaxRows {
            var: MAX_ROWS_VAR,
            value: value.to_string(),
        }),
    }
}
