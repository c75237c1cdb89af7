use std::time::Instant;

use ratatui::{Frame, layout::Rect};

use super::delegate::MentionsDelegate;
use super::mentions_state::MentionsInput;
use crate::input::input_render;
use crate::panel::panel_render;
use crate::suggestion::Mentionable;
use crate::widgets::popup;

/// Where the widget draws its two parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MentionsLayout {
    pub panel: Rect,
    pub input: Rect,
}

impl<T, D> MentionsInput<T, D>
where
    T: Mentionable + Clone,
    D: MentionsDelegate<T>,
{
    /// Input at the bottom of `area`, panel stacked directly above it
    pub fn layout(&self, area: Rect, now: Instant) -> MentionsLayout {
        let input = popup::bottom_strip(area, self.input_height());
        let panel = popup::strip_above_anchor(area, input, self.panel_height(now));
        MentionsLayout { panel, input }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, now: Instant) {
        let layout = self.layout(area, now);
        panel_render::render_panel(self, frame, layout.panel);
        input_render::render_field(&self.input, frame, layout.input);
    }
}

#[cfg(test)]
#[path = "mentions_render_tests.rs"]
mod mentions_render_tests;
