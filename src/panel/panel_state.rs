use std::time::{Duration, Instant};

use super::animation::{AnimatedValue, PANEL_ANIMATION_DURATION};
use crate::config::{MentionsConfig, PanelLayout};

/// Animated height of the suggestions panel.
///
/// Idle means a target of 0 rows; tracking means a non-zero target.
#[derive(Debug, Clone)]
pub struct SuggestionsPanel {
    height: AnimatedValue,
    default_height: u16,
    duration: Duration,
}

impl SuggestionsPanel {
    pub fn new(default_height: u16) -> Self {
        Self {
            height: AnimatedValue::new(0.0),
            default_height,
            duration: PANEL_ANIMATION_DURATION,
        }
    }

    pub fn from_config(config: &MentionsConfig) -> Self {
        Self::new(config.suggestion_row_height())
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Animate open to `target`, or to the default row height when no
    /// (or a zero) target is given. Returns whether the target changed.
    pub fn open(&mut self, target: Option<u16>, now: Instant) -> bool {
        let to = target.filter(|h| *h > 0).unwrap_or(self.default_height);
        let changed = self.height.retarget(f32::from(to), self.duration, now);
        if changed {
            log::debug!("Suggestions panel opening to {} rows", to);
        }
        changed
    }

    pub fn close(&mut self, now: Instant) -> bool {
        let changed = self.height.retarget(0.0, self.duration, now);
        if changed {
            log::debug!("Suggestions panel closing");
        }
        changed
    }

    pub fn target_height(&self) -> u16 {
        self.height.target().round() as u16
    }

    pub fn is_open(&self) -> bool {
        self.target_height() > 0
    }

    /// Height to draw at `now`, in rows
    pub fn current_height(&self, now: Instant) -> u16 {
        self.height.value_at(now).round().max(0.0) as u16
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.height.is_animating(now)
    }
}

/// `min(max_visible_rows, available) * row_height + sections * header_height`
pub fn vertical_panel_height(
    max_visible_rows: u16,
    row_height: u16,
    available: usize,
    section_count: usize,
    section_header_height: u16,
) -> u16 {
    let rows = usize::from(max_visible_rows).min(available);
    let rows_height = rows.saturating_mul(usize::from(row_height));
    let headers_height = section_count.saturating_mul(usize::from(section_header_height));
    u16::try_from(rows_height.saturating_add(headers_height)).unwrap_or(u16::MAX)
}

/// Panel height for the configured layout; `None` for horizontal layouts,
/// which never resize by row count.
pub fn target_height_for(
    config: &MentionsConfig,
    available: usize,
    section_count: usize,
) -> Option<u16> {
    match config.layout() {
        PanelLayout::Horizontal => None,
        PanelLayout::Vertical { max_visible_rows } => Some(vertical_panel_height(
            max_visible_rows.get(),
            config.suggestion_row_height(),
            available,
            section_count,
            config.section_header_height(),
        )),
    }
}

#[cfg(test)]
#[path = "panel_state_tests.rs"]
mod panel_state_tests;
