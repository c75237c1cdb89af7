use ratatui::text::Line;

use crate::suggestion::{Mentionable, Section};

/// Title of the single section built when the caller does not group
pub const DEFAULT_SECTION_TITLE: &str = "Suggestions";

/// Caller-side hooks, fixed when the widget is constructed.
///
/// The delegate owns the suggestion source: it receives keywords through
/// [`MentionsDelegate::on_trigger`] and answers by calling
/// [`MentionsInput::set_suggestions`](crate::MentionsInput::set_suggestions)
/// once control returns to the caller.
pub trait MentionsDelegate<T: Mentionable + Clone> {
    /// Every text change, verbatim
    fn on_change_text(&mut self, text: &str);

    /// Keyword under the cursor while tracking
    fn on_trigger(&mut self, keyword: &str);

    fn render_row(&self, item: &T, selected: bool) -> Line<'static>;

    /// Stable identity of an item, used to keep the highlight across updates
    fn key(&self, item: &T) -> String;

    /// Custom header line; `None` draws the upper-cased title
    fn render_section_header(&self, _title: &str) -> Option<Line<'static>> {
        None
    }

    /// Group a flat suggestion list into sections
    fn map_sections(&self, items: &[T]) -> Vec<Section<T>> {
        if items.is_empty() {
            return Vec::new();
        }
        vec![Section::new(DEFAULT_SECTION_TITLE, items.to_vec())]
    }

    /// An item was accepted. `close_panel` stops tracking. A returned string
    /// replaces the current keyword in the text.
    fn on_select(&mut self, _item: &T, close_panel: &mut dyn FnMut()) -> Option<String> {
        close_panel();
        None
    }
}
