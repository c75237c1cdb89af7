use std::time::Instant;

use super::roster_delegate::{RosterDelegate, RosterMatcher};
use crate::config::MentionsConfig;
use crate::mentions::MentionsInput;
use crate::suggestion::Suggestion;

/// Demo application: a comment composer with mention suggestions
pub struct App {
    pub mentions: MentionsInput<Suggestion, RosterDelegate>,
    roster: Vec<Suggestion>,
    matcher: RosterMatcher,
    /// Controlled value, mirrored from every text change
    value: String,
    comments: Vec<String>,
    should_quit: bool,
}

impl App {
    pub fn new(config: MentionsConfig, roster: Vec<Suggestion>) -> Self {
        let delegate = RosterDelegate::new(config.trigger());
        Self {
            mentions: MentionsInput::new(config, delegate),
            roster,
            matcher: RosterMatcher::new(),
            value: String::new(),
            comments: Vec::new(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub(super) fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Submitted comments, oldest first
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn roster(&self) -> &[Suggestion] {
        &self.roster
    }

    /// True while the panel is mid-animation and the screen needs redrawing
    pub fn needs_redraw(&self, now: Instant) -> bool {
        self.mentions.is_animating(now)
    }

    /// Post the current comment and clear the composer
    pub fn submit(&mut self, now: Instant) {
        let text = self.mentions.text();
        if text.trim().is_empty() {
            return;
        }
        log::debug!("Submitted comment ({} chars)", text.len());
        self.comments.push(text);
        self.value.clear();
        self.mentions.set_value("", now);
    }

    /// Answer a pending keyword with matches from the roster and push the
    /// controlled value back into the widget
    pub(super) fn sync(&mut self, now: Instant) {
        if let Some(keyword) = self.mentions.delegate_mut().take_keyword() {
            let matches =
                self.matcher
                    .filter(&keyword, self.mentions.config().trigger(), &self.roster);
            log::debug!("{} roster matches for {:?}", matches.len(), keyword);
            self.mentions.set_suggestions(matches.into(), now);
        }

        if let Some(text) = self.mentions.delegate_mut().take_text() {
            self.value = text;
            self.mentions.set_value(&self.value, now);
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
