use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app_state::App;

const HELP_TEXT: &str = " Ctrl+S send · Tab/Enter pick · Esc dismiss · Ctrl+C quit ";

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame, now: Instant) {
        let area = frame.area();
        let composer_height = self.mentions.desired_height(now).min(area.height);
        let [comments_area, composer_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(composer_height)]).areas(area);

        self.render_comments(frame, comments_area);
        self.mentions.render(frame, composer_area, now);
    }

    fn render_comments(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Comments ")
            .title_bottom(Line::from(HELP_TEXT).right_aligned())
            .border_style(Style::default().fg(Color::DarkGray));

        let lines: Vec<Line> = if self.comments().is_empty() {
            vec![Line::from(Span::styled(
                "No comments yet",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))]
        } else {
            self.comments()
                .iter()
                .flat_map(|comment| comment.lines().map(Line::from))
                .collect()
        };

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
