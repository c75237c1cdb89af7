use super::keyword::{
    SUGGESTION_MATCH_LENGTH, find_keyword, is_suggestion_match, last_char, last_token,
    trailing_window,
};
use crate::config::{MentionsConfig, TriggerLocation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingTransition {
    Started,
    Stopped,
}

/// Outcome of feeding one text change to the tracker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerUpdate {
    pub transition: Option<TrackingTransition>,
    /// Keyword to forward to the suggestion source
    pub keyword: Option<String>,
    /// Byte offset of `keyword` in the text
    pub keyword_start: Option<usize>,
}

/// Idle/tracking state machine driven by text changes.
///
/// Holds the only copy of the tracking flag; the widget reads it through
/// [`KeywordTracker::is_tracking`].
#[derive(Debug, Clone)]
pub struct KeywordTracker {
    trigger: String,
    location: TriggerLocation,
    tracking: bool,
    previous_char: Option<char>,
}

impl KeywordTracker {
    pub fn new(trigger: impl Into<String>, location: TriggerLocation) -> Self {
        Self {
            trigger: trigger.into(),
            location,
            tracking: false,
            previous_char: Some(' '),
        }
    }

    pub fn from_config(config: &MentionsConfig) -> Self {
        Self::new(config.trigger(), config.trigger_location())
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    /// Last character seen by [`KeywordTracker::on_text_changed`]
    pub fn previous_char(&self) -> Option<char> {
        self.previous_char
    }

    /// Enter tracking; returns false when already tracking
    pub fn start(&mut self) -> bool {
        if self.tracking {
            return false;
        }
        self.tracking = true;
        log::debug!("Mention tracking started (trigger {:?})", self.trigger);
        true
    }

    /// Leave tracking; returns false when already idle
    pub fn stop(&mut self) -> bool {
        if !self.tracking {
            return false;
        }
        self.tracking = false;
        log::debug!("Mention tracking stopped");
        true
    }

    pub fn reset(&mut self) -> bool {
        self.previous_char = Some(' ');
        self.stop()
    }

    /// Process the full text after a change.
    ///
    /// `names` are the display names of the suggestions currently held by the
    /// widget; they feed the trailing-window heuristic.
    pub fn on_text_changed<'a, I>(&mut self, text: &str, names: I) -> TrackerUpdate
    where
        I: IntoIterator<Item = &'a str>,
    {
        let last = last_char(text);
        let window = trailing_window(text, SUGGESTION_MATCH_LENGTH);
        let trigger_match = !self.trigger.is_empty() && text.ends_with(self.trigger.as_str());
        let suggestion_match = is_suggestion_match(window, names);

        let transition = if trigger_match || suggestion_match {
            self.start().then_some(TrackingTransition::Started)
        } else if (last == Some(' ') && self.tracking) || text.is_empty() {
            self.stop().then_some(TrackingTransition::Stopped)
        } else {
            None
        };
        self.previous_char = last;

        let found = if self.tracking {
            let matcher = if suggestion_match {
                last_token(text)
            } else {
                self.trigger.as_str()
            };
            find_keyword(text, matcher, &self.trigger, self.location)
        } else {
            None
        };

        TrackerUpdate {
            transition,
            keyword_start: found.as_ref().map(|m| m.start),
            keyword: found.map(|m| m.text),
        }
    }
}

#[cfg(test)]
#[path = "tracker_state_tests.rs"]
mod tracker_state_tests;
