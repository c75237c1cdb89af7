//! Tests for SuggestionsPanel and height computation

use std::time::Instant;

use super::*;
use proptest::prelude::*;

#[test]
fn test_new_panel_is_closed() {
    let panel = SuggestionsPanel::new(1);
    assert!(!panel.is_open());
    assert_eq!(panel.current_height(Instant::now()), 0);
}

#[test]
fn test_open_without_target_uses_default_height() {
    let now = Instant::now();
    let mut panel = SuggestionsPanel::new(2);
    assert!(panel.open(None, now));
    assert_eq!(panel.target_height(), 2);
    assert!(panel.is_open());
}

#[test]
fn test_open_with_zero_target_uses_default_height() {
    let now = Instant::now();
    let mut panel = SuggestionsPanel::new(2);
    panel.open(Some(0), now);
    assert_eq!(panel.target_height(), 2);
}

#[test]
fn test_open_animates_then_settles() {
    let now = Instant::now();
    let mut panel = SuggestionsPanel::new(1);
    panel.open(Some(6), now);

    assert_eq!(panel.current_height(now), 0);
    assert!(panel.is_animating(now));
    assert_eq!(panel.current_height(now + PANEL_ANIMATION_DURATION), 6);
    assert!(!panel.is_animating(now + PANEL_ANIMATION_DURATION));
}

#[test]
fn test_close_drives_height_to_zero() {
    let now = Instant::now();
    let mut panel = SuggestionsPanel::new(1);
    panel.open(Some(6), now);

    let later = now + PANEL_ANIMATION_DURATION;
    assert!(panel.close(later));
    assert_eq!(panel.target_height(), 0);
    assert!(!panel.is_open());
    assert_eq!(panel.current_height(later + PANEL_ANIMATION_DURATION), 0);
}

#[test]
fn test_close_when_closed_is_noop() {
    let mut panel = SuggestionsPanel::new(1);
    assert!(!panel.close(Instant::now()));
}

#[test]
fn test_reopen_with_same_target_is_noop() {
    let now = Instant::now();
    let mut panel = SuggestionsPanel::new(1);
    panel.open(Some(4), now);
    assert!(!panel.open(Some(4), now + PANEL_ANIMATION_DURATION / 2));
}

#[test]
fn test_zero_duration_panel_is_immediate() {
    let now = Instant::now();
    let mut panel = SuggestionsPanel::new(1).with_duration(std::time::Duration::ZERO);
    panel.open(Some(5), now);
    assert_eq!(panel.current_height(now), 5);
}

#[test]
fn test_vertical_height_example() {
    // 5 available, 3 visible, 40 per row, 2 sections with 20-high headers
    assert_eq!(vertical_panel_height(3, 40, 5, 2, 20), 160);
}

#[test]
fn test_vertical_height_fewer_rows_than_max() {
    assert_eq!(vertical_panel_height(5, 1, 2, 1, 1), 3);
}

#[test]
fn test_vertical_height_saturates() {
    assert_eq!(vertical_panel_height(u16::MAX, u16::MAX, usize::MAX, 1, 1), u16::MAX);
}

#[test]
fn test_target_height_for_horizontal_is_none() {
    let config = MentionsConfig::default();
    assert_eq!(target_height_for(&config, 10, 2), None);
}

#[test]
fn test_target_height_for_vertical() {
    let config = MentionsConfig::builder()
        .horizontal(false)
        .max_visible_rows(3)
        .suggestion_row_height(40)
        .section_header_height(20)
        .text_input_max_height(100)
        .build()
        .unwrap();
    assert_eq!(target_height_for(&config, 5, 2), Some(160));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Height grows with available rows only up to the visible maximum.
    #[test]
    fn prop_vertical_height_caps_rows(
        max_rows in 1u16..10,
        row_height in 1u16..5,
        available in 0usize..30,
        sections in 0usize..4,
        header in 0u16..3,
    ) {
        let height = vertical_panel_height(max_rows, row_height, available, sections, header);
        let rows = usize::from(max_rows).min(available);
        prop_assert_eq!(
            usize::from(height),
            rows * usize::from(row_height) + sections * usize::from(header)
        );
    }
}
