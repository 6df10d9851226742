//! Single-finger gesture state.
//!
//! The tracker owns the whole gesture lifecycle so the DOM handlers stay thin:
//! they feed in coordinates/timestamps and act on the returned transitions.
//! Timestamps are passed in (ms, `js_sys::Date::now()` in the glue) so the
//! classification is testable off the browser.

/// Displacement on either axis beyond which the gesture counts as a scroll.
pub const SCROLL_SLOP_PX: f64 = 10.0;
/// A release faster than this (and without scrolling) is a tap.
pub const TAP_MAX_MS: f64 = 300.0;
/// A release at or beyond this (and without scrolling) is a long-press.
/// Durations in [TAP_MAX_MS, LONG_PRESS_MIN_MS) classify as neither tap nor
/// long-press; the gap is intentional.
pub const LONG_PRESS_MIN_MS: f64 = 500.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    Tap,
    LongPress,
}

#[derive(Debug, Default, Clone)]
pub struct TouchTracker {
    start_x: f64,
    start_y: f64,
    start_ms: f64,
    scrolling: bool,
    active: bool,
}

impl TouchTracker {
    /// Start tracking a new gesture at the given origin.
    pub fn begin(&mut self, x: f64, y: f64, now_ms: f64) {
        self.start_x = x;
        self.start_y = y;
        self.start_ms = now_ms;
        self.scrolling = false;
        self.active = true;
    }

    /// Feed a move sample. Returns true exactly once per gesture, at the
    /// moment displacement first exceeds [`SCROLL_SLOP_PX`] on either axis
    /// (the caller drops its touch-feedback marker on that transition).
    pub fn update(&mut self, x: f64, y: f64) -> bool {
        if !self.active || self.scrolling {
            return false;
        }
        if (x - self.start_x).abs() > SCROLL_SLOP_PX || (y - self.start_y).abs() > SCROLL_SLOP_PX {
            self.scrolling = true;
            return true;
        }
        false
    }

    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    /// End the gesture and classify it. Scrolled gestures and releases in the
    /// [300, 500) ms window classify as neither tap nor long-press. A finish
    /// without a matching begin yields nothing.
    pub fn finish(&mut self, now_ms: f64) -> Option<Gesture> {
        if !self.active {
            return None;
        }
        let duration = now_ms - self.start_ms;
        let gesture = if self.scrolling {
            None
        } else if duration < TAP_MAX_MS {
            Some(Gesture::Tap)
        } else if duration >= LONG_PRESS_MIN_MS {
            Some(Gesture::LongPress)
        } else {
            None
        };
        *self = Self::default();
        gesture
    }

    /// Abort without classification (touchcancel).
    pub fn cancel(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_still_touch_is_tap() {
        let mut t = TouchTracker::default();
        t.begin(100.0, 200.0, 1_000.0);
        assert!(!t.update(104.0, 195.0));
        assert_eq!(t.finish(1_150.0), Some(Gesture::Tap));
    }

    #[test]
    fn sustained_touch_is_long_press() {
        let mut t = TouchTracker::default();
        t.begin(50.0, 50.0, 0.0);
        assert_eq!(t.finish(600.0), Some(Gesture::LongPress));
    }

    #[test]
    fn dead_zone_classifies_as_neither() {
        let mut t = TouchTracker::default();
        t.begin(50.0, 50.0, 0.0);
        assert_eq!(t.finish(400.0), None);
    }

    #[test]
    fn horizontal_drag_suppresses_classification() {
        let mut t = TouchTracker::default();
        t.begin(0.0, 0.0, 0.0);
        assert!(t.update(15.0, 0.0));
        assert!(t.is_scrolling());
        // fast release: still no tap
        assert_eq!(t.finish(100.0), None);

        t.begin(0.0, 0.0, 0.0);
        assert!(t.update(0.0, 15.0));
        // slow release: still no long-press
        assert_eq!(t.finish(900.0), None);
    }

    #[test]
    fn scroll_transition_reported_once() {
        let mut t = TouchTracker::default();
        t.begin(0.0, 0.0, 0.0);
        assert!(t.update(20.0, 0.0));
        assert!(!t.update(40.0, 0.0));
        assert!(!t.update(60.0, 0.0));
    }

    #[test]
    fn slop_boundary_is_exclusive() {
        let mut t = TouchTracker::default();
        t.begin(0.0, 0.0, 0.0);
        assert!(!t.update(10.0, 10.0));
        assert!(t.update(10.1, 0.0));
    }

    #[test]
    fn finish_without_begin_yields_nothing() {
        let mut t = TouchTracker::default();
        assert_eq!(t.finish(1_000_000.0), None);
    }

    #[test]
    fn cancel_resets_tracking() {
        let mut t = TouchTracker::default();
        t.begin(0.0, 0.0, 0.0);
        t.cancel();
        assert_eq!(t.finish(600.0), None);
    }
}
