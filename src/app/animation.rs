//! UI timers: the progress bar fill and the "goal created" banner
//!
//! Both are pure functions of elapsed time so the render loop can sample
//! them on every tick. Neither one gates a wizard transition.

use crate::goal::Notice;
use std::time::{Duration, Instant};

pub const PROGRESS_ANIMATION: Duration = Duration::from_millis(1000);
pub const BANNER_WINDOW: Duration = Duration::from_secs(2);

/// Exponential ease-out over `t` in [0, 1]
fn ease_out_exp(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * t)
    }
}

/// Animated fill of the progress gauge
#[derive(Debug, Clone)]
pub struct ProgressAnimation {
    from: f64,
    to: f64,
    started: Option<Instant>,
    duration: Duration,
}

impl ProgressAnimation {
    pub fn new() -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            started: None,
            duration: PROGRESS_ANIMATION,
        }
    }

    /// Start animating from the currently displayed value towards `to`
    pub fn retarget(&mut self, to: f64, now: Instant) {
        let to = to.clamp(0.0, 1.0);
        if (to - self.to).abs() < f64::EPSILON && self.started.is_some() {
            return;
        }
        self.from = self.value_at(now);
        self.to = to;
        self.started = Some(now);
    }

    /// Jump back to an empty bar
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Displayed ratio at `now`
    pub fn value_at(&self, now: Instant) -> f64 {
        let Some(started) = self.started else {
            return self.to;
        };
        let elapsed = now.saturating_duration_since(started).as_secs_f64();
        let t = (elapsed / self.duration.as_secs_f64()).clamp(0.0, 1.0);
        (self.from + (self.to - self.from) * ease_out_exp(t)).clamp(0.0, 1.0)
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.started
            .map(|started| now.saturating_duration_since(started) < self.duration)
            .unwrap_or(false)
    }

    pub fn target(&self) -> f64 {
        self.to
    }
}

impl Default for ProgressAnimation {
    fn default() -> Self {
        Self::new()
    }
}

/// Notification displayed for a fixed window, then dismissed
#[derive(Debug, Clone)]
pub struct Banner {
    notice: Notice,
    shown_at: Instant,
}

impl Banner {
    pub fn new(notice: Notice, shown_at: Instant) -> Self {
        Self { notice, shown_at }
    }

    pub fn notice(&self) -> &Notice {
        &self.notice
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < BANNER_WINDOW
    }
}
