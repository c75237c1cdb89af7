use thiserror::Error;

/// Invalid widget configuration, rejected when the config is built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max_visible_rows is required when horizontal is set to false")]
    MissingMaxVisibleRowCount,

    #[error("max_visible_rows must be at least 1")]
    ZeroMaxVisibleRowCount,

    #[error("suggestion_row_height must be at least 1")]
    ZeroRowHeight,

    #[error("trigger must not be empty")]
    EmptyTrigger,

    #[error("text_input_min_height ({min}) is greater than text_input_max_height ({max})")]
    InvalidHeightBounds { min: u16, max: u16 },

    #[error("Invalid config file: {0}")]
    Parse(String),
}

/// Custom error types for tui-mentions
#[derive(Debug, Error)]
pub enum MentionsError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid roster file: {0}")]
    InvalidRoster(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
