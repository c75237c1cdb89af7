//! Suggestions panel
//!
//! Animated height control and rendering of the suggestion list.

mod animation;
pub mod panel_render;
mod panel_state;

pub use animation::{AnimatedValue, PANEL_ANIMATION_DURATION, ease_in_out};
pub use panel_state::{SuggestionsPanel, target_height_for, vertical_panel_height};
