//! Trigger/keyword tracker
//!
//! Decides when suggestion tracking starts and stops, and which keyword is
//! handed to the suggestion source on each keystroke.

mod keyword;
mod tracker_state;

pub use keyword::{
    KeywordMatch, SUGGESTION_MATCH_LENGTH, boundary, find_keyword, identify_keyword,
    is_suggestion_match, keyword_pattern, last_token, trailing_window,
};
pub use tracker_state::{KeywordTracker, TrackerUpdate, TrackingTransition};
