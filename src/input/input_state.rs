use ratatui::crossterm::event::KeyEvent;
use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

use crate::config::MentionsConfig;
use crate::styles::MentionsStyles;

/// Multi-line text field and its content-driven height
pub struct InputState {
    pub textarea: TextArea<'static>,
    height: u16,
    min_height: u16,
    max_height: u16,
    padding: u16,
    placeholder: String,
    styles: MentionsStyles,
}

impl InputState {
    pub fn new(config: &MentionsConfig, styles: &MentionsStyles) -> Self {
        let placeholder = config.placeholder().to_string();
        Self {
            textarea: build_textarea(vec![String::new()], &placeholder, styles),
            height: config.text_input_min_height(),
            min_height: config.text_input_min_height(),
            max_height: config.text_input_max_height(),
            padding: config.content_padding(),
            placeholder,
            styles: *styles,
        }
    }

    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn is_empty(&self) -> bool {
        let lines = self.textarea.lines();
        lines.len() == 1 && lines[0].is_empty()
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Lines of content currently in the editor
    pub fn content_height(&self) -> u16 {
        u16::try_from(self.textarea.lines().len()).unwrap_or(u16::MAX)
    }

    /// Mirror a content-size report: `max(min, content + padding)`
    pub fn on_content_size(&mut self, content_height: u16) -> u16 {
        self.height = self
            .min_height
            .max(content_height.saturating_add(self.padding));
        self.height
    }

    /// Unclamped height from the last content-size report
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Height to draw, clamped to the configured maximum
    pub fn displayed_height(&self) -> u16 {
        self.height.min(self.max_height)
    }

    pub fn reset_height(&mut self) {
        self.height = self.min_height;
    }

    pub fn clear(&mut self) {
        self.replace_text("");
    }

    /// Swap the editor content, leaving the cursor at the end
    pub fn replace_text(&mut self, value: &str) {
        let lines = value.split('\n').map(String::from).collect();
        self.textarea = build_textarea(lines, &self.placeholder, &self.styles);
    }

    /// Feed a key to the editor; returns whether the text was modified
    pub fn input(&mut self, key: KeyEvent) -> bool {
        self.textarea.input(key)
    }
}

fn build_textarea(lines: Vec<String>, placeholder: &str, styles: &MentionsStyles) -> TextArea<'static> {
    let mut textarea = TextArea::new(lines);

    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles.text_input_border),
    );
    textarea.set_style(styles.text_input);
    textarea.set_placeholder_text(placeholder.to_string());
    textarea.set_placeholder_style(styles.placeholder);

    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());

    textarea.move_cursor(CursorMove::Bottom);
    textarea.move_cursor(CursorMove::End);
    textarea
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
