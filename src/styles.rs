use ratatui::style::{Color, Modifier, Style};

/// Styles applied by the widget when drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MentionsStyles {
    pub text_input: Style,
    pub text_input_border: Style,
    pub placeholder: Style,
    pub suggestions_panel: Style,
    pub section_header: Style,
    pub selected_row: Style,
    pub loading: Style,
}

impl Default for MentionsStyles {
    fn default() -> Self {
        Self {
            text_input: Style::default(),
            text_input_border: Style::default().fg(Color::Rgb(0xeb, 0xeb, 0xeb)),
            placeholder: Style::default().fg(Color::DarkGray),
            suggestions_panel: Style::default().bg(Color::Rgb(0x28, 0x28, 0x28)),
            section_header: Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(0xe6, 0xe9, 0xeb))
                .add_modifier(Modifier::BOLD),
            selected_row: Style::default().add_modifier(Modifier::REVERSED),
            loading: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        }
    }
}
