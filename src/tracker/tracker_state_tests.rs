//! Tests for KeywordTracker

use super::*;
use proptest::prelude::*;

const NAMES: [&str; 3] = ["Ada Lovelace", "Alan Turing", "Core Team"];

fn tracker() -> KeywordTracker {
    KeywordTracker::new("@", TriggerLocation::NewWordOnly)
}

#[test]
fn test_new_tracker_is_idle() {
    let tracker = tracker();
    assert!(!tracker.is_tracking());
    assert_eq!(tracker.previous_char(), Some(' '));
}

#[test]
fn test_trigger_starts_tracking_and_forwards_trigger() {
    let mut tracker = tracker();
    let update = tracker.on_text_changed("hello @", NAMES);

    assert!(tracker.is_tracking());
    assert_eq!(update.transition, Some(TrackingTransition::Started));
    assert_eq!(update.keyword.as_deref(), Some("@"));
}

#[test]
fn test_typing_after_trigger_forwards_growing_keyword() {
    let mut tracker = tracker();
    tracker.on_text_changed("hello @", NAMES);
    let update = tracker.on_text_changed("hello @b", NAMES);

    assert_eq!(update.transition, None);
    assert_eq!(update.keyword.as_deref(), Some("@b"));

    let update = tracker.on_text_changed("hello @bo", NAMES);
    assert_eq!(update.keyword.as_deref(), Some("@bo"));
}

#[test]
fn test_space_while_tracking_stops() {
    let mut tracker = tracker();
    tracker.on_text_changed("hi @bo", NAMES);
    tracker.start();
    let update = tracker.on_text_changed("hi @bob ", NAMES);

    assert!(!tracker.is_tracking());
    assert_eq!(update.transition, Some(TrackingTransition::Stopped));
    assert_eq!(update.keyword, None);
}

#[test]
fn test_space_while_idle_is_ignored() {
    let mut tracker = tracker();
    let update = tracker.on_text_changed("hi ", NAMES);
    assert_eq!(update, TrackerUpdate::default());
}

#[test]
fn test_empty_text_stops_tracking() {
    let mut tracker = tracker();
    tracker.on_text_changed("@", NAMES);
    let update = tracker.on_text_changed("", NAMES);

    assert!(!tracker.is_tracking());
    assert_eq!(update.transition, Some(TrackingTransition::Stopped));
    assert_eq!(tracker.previous_char(), None);
}

#[test]
fn test_start_while_tracking_is_idempotent() {
    let mut tracker = tracker();
    assert!(tracker.start());
    assert!(!tracker.start());

    let update = tracker.on_text_changed("again @", NAMES);
    assert_eq!(update.transition, None);
    assert_eq!(update.keyword.as_deref(), Some("@"));
}

#[test]
fn test_suggestion_window_starts_tracking_without_trigger() {
    let mut tracker = tracker();
    let update = tracker.on_text_changed("ping ada", NAMES);

    assert!(tracker.is_tracking());
    assert_eq!(update.transition, Some(TrackingTransition::Started));
    assert_eq!(update.keyword.as_deref(), Some("ada"));
}

#[test]
fn test_keyword_start_is_position_of_match() {
    let mut tracker = tracker();
    tracker.on_text_changed("@al foo@", NAMES);
    let update = tracker.on_text_changed("@al foo@al", NAMES);

    assert_eq!(update.keyword.as_deref(), Some("@al"));
    assert_eq!(update.keyword_start, Some(0));
}

#[test]
fn test_suggestion_window_uses_last_token_as_matcher() {
    let mut tracker = tracker();
    let update = tracker.on_text_changed("ping turi", NAMES);
    assert_eq!(update.keyword.as_deref(), Some("turi"));
}

#[test]
fn test_two_char_window_does_not_start_tracking() {
    let mut tracker = tracker();
    let update = tracker.on_text_changed("ad", NAMES);
    assert!(!tracker.is_tracking());
    assert_eq!(update, TrackerUpdate::default());
}

#[test]
fn test_mid_word_trigger_tracks_but_forwards_nothing() {
    let mut tracker = tracker();
    let update = tracker.on_text_changed("mail@", NAMES);

    assert!(tracker.is_tracking());
    assert_eq!(update.keyword, None);
}

#[test]
fn test_anywhere_forwards_mid_word_trigger() {
    let mut tracker = KeywordTracker::new("@", TriggerLocation::Anywhere);
    let update = tracker.on_text_changed("mail@", NAMES);
    assert_eq!(update.keyword.as_deref(), Some("@"));
}

#[test]
fn test_multi_char_trigger() {
    let mut tracker = KeywordTracker::new("::", TriggerLocation::NewWordOnly);
    let update = tracker.on_text_changed("emoji ::", NAMES);

    assert!(tracker.is_tracking());
    assert_eq!(update.keyword.as_deref(), Some("::"));
}

#[test]
fn test_reset_stops_and_restores_previous_char() {
    let mut tracker = tracker();
    tracker.on_text_changed("@", NAMES);
    tracker.on_text_changed("@x", NAMES);
    assert_eq!(tracker.previous_char(), Some('x'));
    assert!(tracker.reset());
    assert!(!tracker.is_tracking());
    assert_eq!(tracker.previous_char(), Some(' '));
}

#[test]
fn test_from_config_uses_trigger() {
    let config = MentionsConfig::builder().trigger("#").build().unwrap();
    let tracker = KeywordTracker::from_config(&config);
    assert_eq!(tracker.trigger(), "#");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Empty text always leaves the tracker idle, whatever came before.
    #[test]
    fn prop_empty_text_is_never_tracking(history in prop::collection::vec("[a-z @]{0,12}", 0..6)) {
        let mut tracker = tracker();
        for text in &history {
            tracker.on_text_changed(text, NAMES);
        }
        let update = tracker.on_text_changed("", NAMES);
        prop_assert!(!tracker.is_tracking());
        prop_assert_eq!(update.keyword, None);
    }

    // Ending in the trigger after a word break tracks and forwards the trigger.
    #[test]
    fn prop_trailing_trigger_tracks(
        trigger in prop::sample::select(vec!["@", "#", "+", "$", "."]),
        prefix in "([a-z]{1,8} ){0,4}",
    ) {
        let mut tracker = KeywordTracker::new(trigger, TriggerLocation::NewWordOnly);
        let text = format!("{}{}", prefix, trigger);
        let update = tracker.on_text_changed(&text, std::iter::empty());

        prop_assert!(tracker.is_tracking());
        prop_assert_eq!(update.transition, Some(TrackingTransition::Started));
        prop_assert_eq!(update.keyword.as_deref(), Some(trigger));
    }

    // Only a trimmed trailing window of exactly three characters can start
    // tracking without the trigger.
    #[test]
    fn prop_heuristic_requires_three_chars(word in "[a-z]{1,6}") {
        let names = [word.as_str()];
        let mut tracker = tracker();
        tracker.on_text_changed(&format!("x {}", word), names);

        let expected = word.chars().count() >= SUGGESTION_MATCH_LENGTH;
        prop_assert_eq!(tracker.is_tracking(), expected);
    }
}
