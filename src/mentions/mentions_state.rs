use std::time::Instant;

use super::delegate::MentionsDelegate;
use crate::config::MentionsConfig;
use crate::input::InputState;
use crate::panel::{SuggestionsPanel, target_height_for};
use crate::styles::MentionsStyles;
use crate::suggestion::{Mentionable, Section, SectionProjection, SuggestionsData};
use crate::tracker::{KeywordMatch, KeywordTracker, TrackingTransition};

/// Read-only snapshot of the widget for rendering and inspection
#[derive(Debug, Clone, PartialEq)]
pub struct MentionsView<'a, T> {
    pub text: String,
    pub is_tracking: bool,
    pub keyword: Option<&'a str>,
    pub input_height: u16,
    pub panel_height: u16,
    pub panel_target_height: u16,
    pub sections: &'a [Section<T>],
    pub selected: usize,
}

/// Text input with mention suggestions.
///
/// Every state change happens synchronously inside one of the `set_*`,
/// `handle_*` or `on_*` calls; `now` drives the panel animation.
pub struct MentionsInput<T, D> {
    config: MentionsConfig,
    styles: MentionsStyles,
    delegate: D,
    tracker: KeywordTracker,
    panel: SuggestionsPanel,
    pub(crate) input: InputState,
    projection: SectionProjection<T>,
    selected: usize,
    keyword: Option<KeywordMatch>,
}

impl<T, D> MentionsInput<T, D>
where
    T: Mentionable + Clone,
    D: MentionsDelegate<T>,
{
    pub fn new(config: MentionsConfig, delegate: D) -> Self {
        Self::with_styles(config, MentionsStyles::default(), delegate)
    }

    pub fn with_styles(config: MentionsConfig, styles: MentionsStyles, delegate: D) -> Self {
        Self {
            tracker: KeywordTracker::from_config(&config),
            panel: SuggestionsPanel::from_config(&config),
            input: InputState::new(&config, &styles),
            projection: SectionProjection::new(),
            selected: 0,
            keyword: None,
            config,
            styles,
            delegate,
        }
    }

    pub fn config(&self) -> &MentionsConfig {
        &self.config
    }

    pub fn styles(&self) -> &MentionsStyles {
        &self.styles
    }

    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    pub fn text(&self) -> String {
        self.input.text()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracker.is_tracking()
    }

    /// Last keyword forwarded to the delegate while tracking
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_ref().map(|k| k.text.as_str())
    }

    pub fn input_height(&self) -> u16 {
        self.input.displayed_height()
    }

    pub fn panel_target_height(&self) -> u16 {
        self.panel.target_height()
    }

    pub fn panel_height(&self, now: Instant) -> u16 {
        self.panel.current_height(now)
    }

    /// True while the panel is still moving toward its target
    pub fn is_animating(&self, now: Instant) -> bool {
        self.panel.is_animating(now)
    }

    /// Rows needed to draw both the panel and the input at `now`
    pub fn desired_height(&self, now: Instant) -> u16 {
        self.input_height().saturating_add(self.panel_height(now))
    }

    pub fn suggestions(&self) -> &SuggestionsData<T> {
        self.projection.source()
    }

    pub fn sections(&self) -> &[Section<T>] {
        self.projection.sections()
    }

    pub fn row_count(&self) -> usize {
        self.projection.row_count()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.projection.item(self.selected)
    }

    pub fn view(&self, now: Instant) -> MentionsView<'_, T> {
        MentionsView {
            text: self.text(),
            is_tracking: self.is_tracking(),
            keyword: self.keyword(),
            input_height: self.input_height(),
            panel_height: self.panel_height(now),
            panel_target_height: self.panel_target_height(),
            sections: self.sections(),
            selected: self.selected,
        }
    }

    /// Push the caller's current value. An empty value resets the widget;
    /// a different value replaces the editor content without a change event.
    pub fn set_value(&mut self, value: &str, now: Instant) {
        if value.is_empty() {
            if !self.input.is_empty() {
                self.input.clear();
            }
            self.reset(now);
            return;
        }

        if value != self.input.text() {
            self.input.replace_text(value);
            let content_height = self.input.content_height();
            self.input.on_content_size(content_height);
        }
        self.refresh_panel_height(now);
    }

    /// Push new suggestion data from the caller's source
    pub fn set_suggestions(&mut self, data: SuggestionsData<T>, now: Instant) {
        let was_empty = self.projection.source().is_empty();
        let previous_key = self.selected_item().map(|item| self.delegate.key(item));

        let delegate = &self.delegate;
        if self
            .projection
            .update(data, |items| delegate.map_sections(items))
        {
            log::debug!(
                "Projected {} suggestions into {} sections",
                self.projection.row_count(),
                self.projection.sections().len()
            );
            self.restore_selection(previous_key.as_deref());
        }

        if self.input.is_empty() {
            self.reset(now);
            return;
        }

        if self.config.auto_toggle_on_population() {
            let is_empty = self.projection.source().is_empty();
            if was_empty && !is_empty {
                self.start_tracking(now);
            } else if !was_empty && is_empty {
                self.stop_tracking(now);
            }
        }
        self.refresh_panel_height(now);
    }

    /// Mirror the editor's content height
    pub fn on_content_size(&mut self, content_height: u16) -> u16 {
        self.input.on_content_size(content_height)
    }

    pub fn start_tracking(&mut self, now: Instant) -> bool {
        if !self.tracker.start() {
            return false;
        }
        let target = self.computed_panel_height();
        self.panel.open(target, now);
        true
    }

    pub fn stop_tracking(&mut self, now: Instant) -> bool {
        if !self.tracker.stop() {
            return false;
        }
        self.panel.close(now);
        self.keyword = None;
        self.selected = 0;
        true
    }

    /// Tracking off, panel closed, input back to its minimum height
    pub fn reset(&mut self, now: Instant) {
        self.tracker.reset();
        self.panel.close(now);
        self.input.reset_height();
        self.keyword = None;
        self.selected = 0;
    }

    pub fn select_next(&mut self) {
        let rows = self.row_count();
        if rows > 0 {
            self.selected = (self.selected + 1) % rows;
        }
    }

    pub fn select_previous(&mut self) {
        let rows = self.row_count();
        if rows > 0 {
            self.selected = (self.selected + rows - 1) % rows;
        }
    }

    /// Hand the highlighted item to the delegate. Returns false when nothing
    /// is highlighted.
    pub fn accept_selected(&mut self, now: Instant) -> bool {
        if !self.tracker.is_tracking() {
            return false;
        }
        let Some(item) = self.projection.item(self.selected) else {
            return false;
        };

        let tracker = &mut self.tracker;
        let panel = &mut self.panel;
        let mut close_panel = || {
            if tracker.stop() {
                panel.close(now);
            }
        };
        let replacement = self.delegate.on_select(item, &mut close_panel);

        if let Some(replacement) = replacement {
            let text = splice_keyword(&self.input.text(), self.keyword.as_ref(), &replacement);
            self.input.replace_text(&text);
            self.handle_text_change(text, now);
            let content_height = self.input.content_height();
            self.input.on_content_size(content_height);
        }
        if !self.tracker.is_tracking() {
            self.keyword = None;
            self.selected = 0;
        }
        true
    }

    /// Run one text change through the tracker and the delegate
    pub(crate) fn handle_text_change(&mut self, text: String, now: Instant) {
        self.delegate.on_change_text(&text);

        let update = self
            .tracker
            .on_text_changed(&text, self.projection.source().names());

        match update.transition {
            Some(TrackingTransition::Started) => {
                let target = self.computed_panel_height();
                self.panel.open(target, now);
            }
            Some(TrackingTransition::Stopped) => {
                self.panel.close(now);
            }
            None => {}
        }

        if text.is_empty() {
            self.input.reset_height();
        }

        if let (Some(text), Some(start)) = (update.keyword, update.keyword_start) {
            self.delegate.on_trigger(&text);
            self.keyword = Some(KeywordMatch { text, start });
        }

        if !self.tracker.is_tracking() {
            self.keyword = None;
            self.selected = 0;
        }
    }

    /// Vertical target height for the current data, when there is any
    fn computed_panel_height(&self) -> Option<u16> {
        let available = self.projection.source().len();
        if available == 0 {
            return None;
        }
        target_height_for(&self.config, available, self.projection.sections().len())
    }

    fn refresh_panel_height(&mut self, now: Instant) {
        if !self.tracker.is_tracking() {
            return;
        }
        if let Some(height) = self.computed_panel_height() {
            self.panel.open(Some(height), now);
        }
    }

    fn restore_selection(&mut self, previous_key: Option<&str>) {
        let rows = self.projection.row_count();
        self.selected = previous_key
            .and_then(|key| {
                (0..rows).find(|&row| {
                    self.projection
                        .item(row)
                        .is_some_and(|item| self.delegate.key(item) == key)
                })
            })
            .unwrap_or(0);
    }
}

/// Replace the matched keyword with `replacement` and a space.
/// Without a keyword, or when the text no longer holds it at the matched
/// position, the replacement is appended.
pub fn splice_keyword(text: &str, keyword: Option<&KeywordMatch>, replacement: &str) -> String {
    let mention = format!("{} ", replacement);

    match keyword.filter(|k| text.get(k.start..k.end()) == Some(k.text.as_str())) {
        Some(k) => {
            let mut spliced = String::with_capacity(text.len() + mention.len());
            spliced.push_str(&text[..k.start]);
            spliced.push_str(&mention);
            spliced.push_str(&text[k.end()..]);
            spliced
        }
        None => {
            let mut appended = text.to_string();
            if !appended.is_empty() && !appended.ends_with(' ') {
                appended.push(' ');
            }
            appended.push_str(&mention);
            appended
        }
    }
}

#[cfg(test)]
#[path = "mentions_state_tests.rs"]
mod mentions_state_tests;
