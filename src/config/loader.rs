use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::ConfigError;

const CONFIG_DIR: &str = "tui-mentions";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the user config. A missing file (or home directory) yields defaults.
pub fn load_config() -> Result<Config, ConfigError> {
    let Some(path) = config_path() else {
        return Ok(Config::default());
    };

    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &Path) -> Result<Config, ConfigError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No config file at {}", path.display());
            return Ok(Config::default());
        }
        Err(e) => return Err(ConfigError::Parse(format!("{}: {}", path.display(), e))),
    };

    log::debug!("Loading config from {}", path.display());
    parse_config_toml(&contents)
}

pub fn parse_config_toml(content: &str) -> Result<Config, ConfigError> {
    toml::from_str::<Config>(content).map_err(|e| ConfigError::Parse(e.message().to_string()))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
