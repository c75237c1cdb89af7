//! Suggestions panel rendering
//!
//! Draws the section list above the input: stacked rows for a vertical
//! layout, a single scrolling band for a horizontal one.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::mentions::{MentionsDelegate, MentionsInput};
use crate::suggestion::Mentionable;
use crate::widgets::popup;

const HORIZONTAL_SEPARATOR: &str = " │ ";

/// Render the panel into `area` (its current animated height)
pub fn render_panel<T, D>(widget: &MentionsInput<T, D>, frame: &mut Frame, area: Rect)
where
    T: Mentionable + Clone,
    D: MentionsDelegate<T>,
{
    if area.height == 0 {
        return;
    }

    // Clear the background area to prevent transparency
    popup::clear_area(frame, area);

    let block = Block::default().style(widget.styles().suggestions_panel);

    if widget.row_count() == 0 {
        let loading = Paragraph::new(Span::styled(
            widget.config().loading_text().to_string(),
            widget.styles().loading,
        ))
        .block(block);
        frame.render_widget(loading, area);
        return;
    }

    if widget.config().layout().is_horizontal() {
        let band = horizontal_band(widget, area.width);
        frame.render_widget(Paragraph::new(band).block(block), area);
    } else {
        let (items, selected) = vertical_items(widget);
        let mut state = ListState::default().with_selected(Some(selected));
        frame.render_stateful_widget(List::new(items).block(block), area, &mut state);
    }
}

fn header_line<T, D>(widget: &MentionsInput<T, D>, title: &str) -> Line<'static>
where
    T: Mentionable + Clone,
    D: MentionsDelegate<T>,
{
    widget
        .delegate()
        .render_section_header(title)
        .unwrap_or_else(|| Line::styled(title.to_uppercase(), widget.styles().section_header))
}

fn row_line<T, D>(widget: &MentionsInput<T, D>, item: &T, selected: bool) -> Line<'static>
where
    T: Mentionable + Clone,
    D: MentionsDelegate<T>,
{
    let line = widget.delegate().render_row(item, selected);
    if selected {
        line.patch_style(widget.styles().selected_row)
    } else {
        line
    }
}

/// A line padded with blank lines up to `height`
fn padded(line: Line<'static>, height: u16) -> Text<'static> {
    let mut lines = vec![line];
    lines.extend((1..height).map(|_| Line::default()));
    Text::from(lines)
}

/// List items for the vertical layout and the list index of the
/// highlighted row
pub fn vertical_items<T, D>(widget: &MentionsInput<T, D>) -> (Vec<ListItem<'static>>, usize)
where
    T: Mentionable + Clone,
    D: MentionsDelegate<T>,
{
    let header_height = widget.config().section_header_height();
    let row_height = widget.config().suggestion_row_height();

    let mut items = Vec::new();
    let mut selected_index = 0;
    let mut row = 0;

    for section in widget.sections() {
        if header_height > 0 {
            items.push(ListItem::new(padded(
                header_line(widget, &section.title),
                header_height,
            )));
        }
        for item in &section.items {
            let selected = row == widget.selected_index();
            if selected {
                selected_index = items.len();
            }
            items.push(ListItem::new(padded(
                row_line(widget, item, selected),
                row_height,
            )));
            row += 1;
        }
    }

    (items, selected_index)
}

fn line_width(line: &Line<'_>) -> usize {
    line.spans.iter().map(|span| span.content.width()).sum()
}

/// Single-line band for the horizontal layout, scrolled so the highlighted
/// row stays visible within `width` columns
pub fn horizontal_band<T, D>(widget: &MentionsInput<T, D>, width: u16) -> Line<'static>
where
    T: Mentionable + Clone,
    D: MentionsDelegate<T>,
{
    let show_headers = widget.config().section_header_height() > 0;
    let mut entries: Vec<Line<'static>> = Vec::new();
    let mut selected_entry = 0;
    let mut row = 0;

    for section in widget.sections() {
        if show_headers {
            entries.push(header_line(widget, &section.title));
        }
        for item in &section.items {
            let selected = row == widget.selected_index();
            if selected {
                selected_entry = entries.len();
            }
            entries.push(row_line(widget, item, selected));
            row += 1;
        }
    }

    let separator_width = HORIZONTAL_SEPARATOR.width();
    let available = usize::from(width);
    let span_width = |from: usize, to: usize| -> usize {
        entries[from..=to].iter().map(line_width).sum::<usize>() + separator_width * (to - from)
    };

    let mut start = 0;
    while start < selected_entry && span_width(start, selected_entry) > available {
        start += 1;
    }

    let mut spans: Vec<Span<'static>> = Vec::new();
    for (idx, entry) in entries.into_iter().enumerate().skip(start) {
        if idx > start {
            spans.push(Span::raw(HORIZONTAL_SEPARATOR));
        }
        let line_style = entry.style;
        spans.extend(
            entry
                .spans
                .into_iter()
                .map(|span| Span::styled(span.content, line_style.patch(span.style))),
        );
    }
    Line::from(spans)
}

#[cfg(test)]
#[path = "panel_render_tests.rs"]
mod panel_render_tests;
