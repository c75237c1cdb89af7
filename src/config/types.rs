// Configuration type definitions

use serde::Deserialize;

/// Where a trigger may start a mention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TriggerLocation {
    /// Trigger must start a new word (`hi @bob`, not `hi@bob`)
    #[default]
    NewWordOnly,
    Anywhere,
}

/// `[mentions]` section of the config file. Every field is optional; unset
/// fields fall back to the builder defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MentionsFileConfig {
    #[serde(default)]
    pub trigger: Option<String>,
    #[serde(default)]
    pub trigger_location: Option<TriggerLocation>,
    #[serde(default)]
    pub horizontal: Option<bool>,
    #[serde(default)]
    pub max_visible_rows: Option<u16>,
    #[serde(default)]
    pub suggestion_row_height: Option<u16>,
    #[serde(default)]
    pub section_header_height: Option<u16>,
    #[serde(default)]
    pub text_input_min_height: Option<u16>,
    #[serde(default)]
    pub text_input_max_height: Option<u16>,
    #[serde(default)]
    pub content_padding: Option<u16>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub loading_text: Option<String>,
    #[serde(default)]
    pub auto_toggle_on_population: Option<bool>,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub mentions: MentionsFileConfig,
}
