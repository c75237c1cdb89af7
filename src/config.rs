//! Configuration module
//!
//! Loads the optional `~/.config/tui-mentions/config.toml` and validates it
//! into a [`MentionsConfig`].

mod loader;
mod mentions_config;
mod types;

pub use loader::{config_path, load_config, load_config_from_path, parse_config_toml};
pub use mentions_config::{MentionsConfig, MentionsConfigBuilder, PanelLayout};
pub use types::{Config, MentionsFileConfig, TriggerLocation};
