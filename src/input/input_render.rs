//! Input field rendering

use ratatui::{Frame, layout::Rect};

use super::InputState;

/// Render the text field into `area`
pub fn render_field(input: &InputState, frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    frame.render_widget(&input.textarea, area);
}

#[cfg(test)]
#[path = "input_render_tests.rs"]
mod input_render_tests;
