use chrono::{DateTime, TimeDelta, Utc};

use crate::api::GestureTuning;
use crate::core::ScreenPoint;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapRecord {
    pub at: DateTime<Utc>,
    pub position: ScreenPoint,
}

/// Remembers the last single-finger tap so the next one can be matched
/// against it.
///
/// A pending tap expires `double_tap_window_ms` after it was recorded, and
/// any multi-finger touch or touch movement discards it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DoubleTapTracker {
    pending: Option<TapRecord>,
}

impl DoubleTapTracker {
    #[must_use]
    pub fn pending(&self) -> Option<TapRecord> {
        self.pending
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }

    /// Registers a completed tap. Returns `true` when it completes a
    /// double-tap, in which case the pending tap is consumed.
    pub fn register(&mut self, tap: TapRecord, tuning: &GestureTuning) -> bool {
        let matched = self
            .pending
            .is_some_and(|previous| Self::matches(previous, tap, tuning));
        if matched {
            self.pending = None;
        } else {
            self.pending = Some(tap);
        }
        matched
    }

    fn matches(previous: TapRecord, tap: TapRecord, tuning: &GestureTuning) -> bool {
        let elapsed = tap.at.signed_duration_since(previous.at);
        let window = TimeDelta::milliseconds(tuning.double_tap_window_ms);
        elapsed >= TimeDelta::zero()
            && elapsed < window
            && (tap.position.x - previous.position.x).abs() < tuning.double_tap_radius_px
            && (tap.position.y - previous.position.y).abs() < tuning.double_tap_radius_px
    }
}

/// One-shot suppression of the double-press that follows a committed zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DblclickGuard {
    armed: bool,
}

impl DblclickGuard {
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Disarms the guard, returning whether it was armed.
    pub fn consume(&mut self) -> bool {
        std::mem::take(&mut self.armed)
    }
}
