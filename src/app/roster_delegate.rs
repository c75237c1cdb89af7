use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::mentions::{DEFAULT_SECTION_TITLE, MentionsDelegate};
use crate::suggestion::{Section, Suggestion};

/// Fuzzy filter over the roster, ranked best first
pub struct RosterMatcher {
    matcher: SkimMatcherV2,
}

impl fmt::Debug for RosterMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RosterMatcher").finish_non_exhaustive()
    }
}

impl Default for RosterMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterMatcher {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Entries matching `keyword` once the trigger is stripped. A bare
    /// trigger matches everything in roster order.
    pub fn filter(&self, keyword: &str, trigger: &str, roster: &[Suggestion]) -> Vec<Suggestion> {
        let query = keyword.strip_prefix(trigger).unwrap_or(keyword).trim();
        if query.is_empty() {
            return roster.to_vec();
        }

        let mut scored: Vec<(&Suggestion, i64)> = roster
            .iter()
            .filter_map(|entry| {
                let by_name = self.matcher.fuzzy_match(&entry.name, query);
                let by_id = self.matcher.fuzzy_match(&entry.id, query);
                by_name.max(by_id).map(|score| (entry, score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));

        scored.into_iter().map(|(entry, _)| entry.clone()).collect()
    }
}

/// Delegate used by the demo. Text changes and keywords are queued for the
/// app to pick up; accepted items are inserted as `<trigger><id>`.
#[derive(Debug, Clone, Default)]
pub struct RosterDelegate {
    trigger: String,
    pending_text: Option<String>,
    pending_keyword: Option<String>,
    selections: usize,
}

impl RosterDelegate {
    pub fn new(trigger: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            ..Self::default()
        }
    }

    /// Text change received since the last call, if any
    pub fn take_text(&mut self) -> Option<String> {
        self.pending_text.take()
    }

    /// Keyword received since the last call, if any
    pub fn take_keyword(&mut self) -> Option<String> {
        self.pending_keyword.take()
    }

    pub fn selections(&self) -> usize {
        self.selections
    }
}

impl MentionsDelegate<Suggestion> for RosterDelegate {
    fn on_change_text(&mut self, text: &str) {
        self.pending_text = Some(text.to_string());
    }

    fn on_trigger(&mut self, keyword: &str) {
        self.pending_keyword = Some(keyword.to_string());
    }

    fn render_row(&self, item: &Suggestion, _selected: bool) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                item.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {}{}", self.trigger, item.id),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    }

    fn key(&self, item: &Suggestion) -> String {
        item.id.clone()
    }

    fn map_sections(&self, items: &[Suggestion]) -> Vec<Section<Suggestion>> {
        let mut sections: Vec<Section<Suggestion>> = Vec::new();
        for item in items {
            let title = item.detail.as_deref().unwrap_or(DEFAULT_SECTION_TITLE);
            match sections.iter_mut().find(|section| section.title == title) {
                Some(section) => section.items.push(item.clone()),
                None => sections.push(Section::new(title, vec![item.clone()])),
            }
        }
        sections
    }

    fn on_select(&mut self, item: &Suggestion, close_panel: &mut dyn FnMut()) -> Option<String> {
        self.selections += 1;
        close_panel();
        Some(format!("{}{}", self.trigger, item.id))
    }
}

#[cfg(test)]
#[path = "roster_delegate_tests.rs"]
mod roster_delegate_tests;
