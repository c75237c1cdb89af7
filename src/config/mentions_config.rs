use std::num::NonZeroU16;

use super::types::{MentionsFileConfig, TriggerLocation};
use crate::error::ConfigError;

pub const DEFAULT_TRIGGER: &str = "@";
pub const DEFAULT_PLACEHOLDER: &str = "Write a comment...";
pub const DEFAULT_LOADING_TEXT: &str = "Loading...";
pub const DEFAULT_SUGGESTION_ROW_HEIGHT: u16 = 1;
pub const DEFAULT_SECTION_HEADER_HEIGHT: u16 = 1;
pub const DEFAULT_TEXT_INPUT_MIN_HEIGHT: u16 = 3;
pub const DEFAULT_TEXT_INPUT_MAX_HEIGHT: u16 = 8;
/// Rows added to the reported content height (top and bottom border)
pub const DEFAULT_CONTENT_PADDING: u16 = 2;

/// How the suggestions panel lays out its rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelLayout {
    /// Rows side by side in one band; the panel never resizes by row count
    Horizontal,
    /// Stacked rows; the panel grows up to `max_visible_rows`
    Vertical { max_visible_rows: NonZeroU16 },
}

impl PanelLayout {
    pub fn is_horizontal(&self) -> bool {
        matches!(self, PanelLayout::Horizontal)
    }
}

/// Validated widget configuration.
///
/// Only obtainable through [`MentionsConfigBuilder::build`], so every value
/// held here satisfies the layout and height constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionsConfig {
    trigger: String,
    trigger_location: TriggerLocation,
    layout: PanelLayout,
    suggestion_row_height: u16,
    section_header_height: u16,
    text_input_min_height: u16,
    text_input_max_height: u16,
    content_padding: u16,
    placeholder: String,
    loading_text: String,
    auto_toggle_on_population: bool,
}

impl MentionsConfig {
    pub fn builder() -> MentionsConfigBuilder {
        MentionsConfigBuilder::default()
    }

    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    pub fn trigger_location(&self) -> TriggerLocation {
        self.trigger_location
    }

    pub fn layout(&self) -> PanelLayout {
        self.layout
    }

    pub fn suggestion_row_height(&self) -> u16 {
        self.suggestion_row_height
    }

    pub fn section_header_height(&self) -> u16 {
        self.section_header_height
    }

    pub fn text_input_min_height(&self) -> u16 {
        self.text_input_min_height
    }

    pub fn text_input_max_height(&self) -> u16 {
        self.text_input_max_height
    }

    pub fn content_padding(&self) -> u16 {
        self.content_padding
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn loading_text(&self) -> &str {
        &self.loading_text
    }

    pub fn auto_toggle_on_population(&self) -> bool {
        self.auto_toggle_on_population
    }
}

impl Default for MentionsConfig {
    fn default() -> Self {
        Self {
            trigger: DEFAULT_TRIGGER.to_string(),
            trigger_location: TriggerLocation::default(),
            layout: PanelLayout::Horizontal,
            suggestion_row_height: DEFAULT_SUGGESTION_ROW_HEIGHT,
            section_header_height: DEFAULT_SECTION_HEADER_HEIGHT,
            text_input_min_height: DEFAULT_TEXT_INPUT_MIN_HEIGHT,
            text_input_max_height: DEFAULT_TEXT_INPUT_MAX_HEIGHT,
            content_padding: DEFAULT_CONTENT_PADDING,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            loading_text: DEFAULT_LOADING_TEXT.to_string(),
            auto_toggle_on_population: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MentionsConfigBuilder {
    trigger: String,
    trigger_location: TriggerLocation,
    horizontal: bool,
    max_visible_rows: Option<u16>,
    suggestion_row_height: u16,
    section_header_height: u16,
    text_input_min_height: u16,
    text_input_max_height: u16,
    content_padding: u16,
    placeholder: String,
    loading_text: String,
    auto_toggle_on_population: bool,
}

impl Default for MentionsConfigBuilder {
    fn default() -> Self {
        Self {
            trigger: DEFAULT_TRIGGER.to_string(),
            trigger_location: TriggerLocation::default(),
            horizontal: true,
            max_visible_rows: None,
            suggestion_row_height: DEFAULT_SUGGESTION_ROW_HEIGHT,
            section_header_height: DEFAULT_SECTION_HEADER_HEIGHT,
            text_input_min_height: DEFAULT_TEXT_INPUT_MIN_HEIGHT,
            text_input_max_height: DEFAULT_TEXT_INPUT_MAX_HEIGHT,
            content_padding: DEFAULT_CONTENT_PADDING,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            loading_text: DEFAULT_LOADING_TEXT.to_string(),
            auto_toggle_on_population: false,
        }
    }
}

impl MentionsConfigBuilder {
    /// Start from the `[mentions]` section of a config file
    pub fn from_file(file: &MentionsFileConfig) -> Self {
        let mut builder = Self::default();
        if let Some(trigger) = &file.trigger {
            builder.trigger = trigger.clone();
        }
        if let Some(location) = file.trigger_location {
            builder.trigger_location = location;
        }
        if let Some(horizontal) = file.horizontal {
            builder.horizontal = horizontal;
        }
        if file.max_visible_rows.is_some() {
            builder.max_visible_rows = file.max_visible_rows;
        }
        if let Some(height) = file.suggestion_row_height {
            builder.suggestion_row_height = height;
        }
        if let Some(height) = file.section_header_height {
            builder.section_header_height = height;
        }
        if let Some(height) = file.text_input_min_height {
            builder.text_input_min_height = height;
        }
        if let Some(height) = file.text_input_max_height {
            builder.text_input_max_height = height;
        }
        if let Some(padding) = file.content_padding {
            builder.content_padding = padding;
        }
        if let Some(placeholder) = &file.placeholder {
            builder.placeholder = placeholder.clone();
        }
        if let Some(loading_text) = &file.loading_text {
            builder.loading_text = loading_text.clone();
        }
        if let Some(auto_toggle) = file.auto_toggle_on_population {
            builder.auto_toggle_on_population = auto_toggle;
        }
        builder
    }

    pub fn trigger(mut self, trigger: impl Into<String>) -> Self {
        self.trigger = trigger.into();
        self
    }

    pub fn trigger_location(mut self, location: TriggerLocation) -> Self {
        self.trigger_location = location;
        self
    }

    pub fn horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    pub fn max_visible_rows(mut self, rows: u16) -> Self {
        self.max_visible_rows = Some(rows);
        self
    }

    pub fn suggestion_row_height(mut self, height: u16) -> Self {
        self.suggestion_row_height = height;
        self
    }

    pub fn section_header_height(mut self, height: u16) -> Self {
        self.section_header_height = height;
        self
    }

    pub fn text_input_min_height(mut self, height: u16) -> Self {
        self.text_input_min_height = height;
        self
    }

    pub fn text_input_max_height(mut self, height: u16) -> Self {
        self.text_input_max_height = height;
        self
    }

    pub fn content_padding(mut self, padding: u16) -> Self {
        self.content_padding = padding;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn loading_text(mut self, text: impl Into<String>) -> Self {
        self.loading_text = text.into();
        self
    }

    pub fn auto_toggle_on_population(mut self, enabled: bool) -> Self {
        self.auto_toggle_on_population = enabled;
        self
    }

    pub fn build(self) -> Result<MentionsConfig, ConfigError> {
        if self.trigger.is_empty() {
            return Err(ConfigError::EmptyTrigger);
        }
        if self.suggestion_row_height == 0 {
            return Err(ConfigError::ZeroRowHeight);
        }
        if self.text_input_min_height > self.text_input_max_height {
            return Err(ConfigError::InvalidHeightBounds {
                min: self.text_input_min_height,
                max: self.text_input_max_height,
            });
        }

        let layout = if self.horizontal {
            PanelLayout::Horizontal
        } else {
            let rows = self
                .max_visible_rows
                .ok_or(ConfigError::MissingMaxVisibleRowCount)?;
            let max_visible_rows =
                NonZeroU16::new(rows).ok_or(ConfigError::ZeroMaxVisibleRowCount)?;
            PanelLayout::Vertical { max_visible_rows }
        };

        Ok(MentionsConfig {
            trigger: self.trigger,
            trigger_location: self.trigger_location,
            layout,
            suggestion_row_height: self.suggestion_row_height,
            section_header_height: self.section_header_height,
            text_input_min_height: self.text_input_min_height,
            text_input_max_height: self.text_input_max_height,
            content_padding: self.content_padding,
            placeholder: self.placeholder,
            loading_text: self.loading_text,
            auto_toggle_on_population: self.auto_toggle_on_population,
        })
    }
}

impl TryFrom<&MentionsFileConfig> for MentionsConfig {
    type Error = ConfigError;

    fn try_from(file: &MentionsFileConfig) -> Result<Self, Self::Error> {
        MentionsConfigBuilder::from_file(file).build()
    }
}

#[cfg(test)]
#[path = "mentions_config_tests.rs"]
mod mentions_config_tests;
