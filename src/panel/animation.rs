use std::time::{Duration, Instant};

/// Time taken by the panel to open or close
pub const PANEL_ANIMATION_DURATION: Duration = Duration::from_millis(100);

/// A scalar easing toward a target over a fixed duration.
///
/// Retargeting mid-flight starts the new animation from the value reached so
/// far, so there is nothing to cancel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedValue {
    from: f32,
    to: f32,
    started_at: Option<Instant>,
    duration: Duration,
}

impl AnimatedValue {
    pub fn new(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            started_at: None,
            duration: Duration::ZERO,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn value_at(&self, now: Instant) -> f32 {
        let Some(started_at) = self.started_at else {
            return self.to;
        };
        let progress = self.progress(started_at, now);
        self.from + (self.to - self.from) * ease_in_out(progress)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.started_at
            .is_some_and(|started_at| self.progress(started_at, now) < 1.0)
    }

    /// Animate toward `to`. Returns false (and leaves any running animation
    /// alone) when `to` already is the target.
    pub fn retarget(&mut self, to: f32, duration: Duration, now: Instant) -> bool {
        if (to - self.to).abs() < f32::EPSILON {
            return false;
        }
        self.from = self.value_at(now);
        self.to = to;
        self.started_at = Some(now);
        self.duration = duration;
        true
    }

    fn progress(&self, started_at: Instant, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started_at).as_secs_f32();
        (elapsed / self.duration.as_secs_f32()).min(1.0)
    }
}

/// Quadratic ease-in-out over `[0, 1]`
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[cfg(test)]
#[path = "animation_tests.rs"]
mod animation_tests;
