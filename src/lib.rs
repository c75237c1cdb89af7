//! Terminal text input with @mention suggestions.
//!
//! [`MentionsInput`] wraps a multi-line editor and watches what the user types.
//! Typing the trigger (or a few characters of a known suggestion) starts
//! tracking: the current keyword goes to the caller's [`MentionsDelegate`], the
//! caller answers with [`SuggestionsData`], and an animated panel above the
//! editor lists the matches.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod mentions;
pub mod panel;
pub mod styles;
pub mod suggestion;
pub mod tracker;
pub mod widgets;


pub use config::{MentionsConfig, MentionsConfigBuilder, PanelLayout, TriggerLocation};
pub use error::{ConfigError, MentionsError};
pub use mentions::{MentionsDelegate, MentionsInput, MentionsLayout, MentionsView};
pub use styles::MentionsStyles;
pub use suggestion::{Mentionable, Section, Suggestion, SuggestionsData};
