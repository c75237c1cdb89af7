use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::delegate::MentionsDelegate;
use super::mentions_state::MentionsInput;
use crate::suggestion::Mentionable;

impl<T, D> MentionsInput<T, D>
where
    T: Mentionable + Clone,
    D: MentionsDelegate<T>,
{
    /// Handle a key press. Returns true when the key was consumed by the
    /// suggestions panel or modified the text.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        // Panel navigation takes precedence while tracking
        if self.is_tracking() && self.handle_panel_key(key, now) {
            return true;
        }

        let before = self.input.text();
        if !self.input.input(key) {
            return false;
        }

        let after = self.input.text();
        if after != before {
            self.handle_text_change(after, now);
        }

        let content_height = self.input.content_height();
        self.on_content_size(content_height);
        true
    }

    fn handle_panel_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        let has_rows = self.row_count() > 0;
        let horizontal = self.config().layout().is_horizontal();

        match key.code {
            KeyCode::Esc => self.stop_tracking(now),
            KeyCode::Down if has_rows => {
                self.select_next();
                true
            }
            KeyCode::Up if has_rows => {
                self.select_previous();
                true
            }
            KeyCode::Right if has_rows && horizontal => {
                self.select_next();
                true
            }
            KeyCode::Left if has_rows && horizontal => {
                self.select_previous();
                true
            }
            KeyCode::Tab | KeyCode::Enter if has_rows && key.modifiers == KeyModifiers::NONE => {
                self.accept_selected(now)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "mentions_events_tests.rs"]
mod mentions_events_tests;
