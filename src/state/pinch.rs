//! Two-finger pinch state.
//!
//! Only the relative scale is derived; no zoom is applied. The scale log is
//! the hook point if zooming ever becomes a requirement.

pub type Point = (f64, f64);

pub fn distance(a: Point, b: Point) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}

#[derive(Debug, Default, Clone)]
pub struct PinchTracker {
    baseline: f64,
}

impl PinchTracker {
    /// Record the baseline distance when exactly two touch points appear.
    pub fn begin(&mut self, a: Point, b: Point) {
        self.baseline = distance(a, b);
    }

    /// Scale relative to the baseline; `None` while no pinch is in progress.
    pub fn scale(&self, a: Point, b: Point) -> Option<f64> {
        if self.baseline > 0.0 {
            Some(distance(a, b) / self.baseline)
        } else {
            None
        }
    }

    /// Called when touches lift; fewer than two remaining ends the pinch.
    pub fn release(&mut self, remaining_touches: u32) {
        if remaining_touches < 2 {
            self.baseline = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_relative_to_baseline() {
        let mut p = PinchTracker::default();
        p.begin((0.0, 0.0), (100.0, 0.0));
        let s = p.scale((0.0, 0.0), (150.0, 0.0)).unwrap();
        assert!((s - 1.5).abs() < 1e-9);
        assert_eq!(format!("{:.2}", s), "1.50");
    }

    #[test]
    fn no_scale_without_baseline() {
        let p = PinchTracker::default();
        assert_eq!(p.scale((0.0, 0.0), (150.0, 0.0)), None);
    }

    #[test]
    fn release_below_two_touches_resets() {
        let mut p = PinchTracker::default();
        p.begin((0.0, 0.0), (0.0, 100.0));
        p.release(2);
        assert!(p.scale((0.0, 0.0), (0.0, 100.0)).is_some());
        p.release(1);
        assert_eq!(p.scale((0.0, 0.0), (0.0, 100.0)), None);
    }

    #[test]
    fn distance_is_euclidean() {
        assert!((distance((0.0, 0.0), (3.0, 4.0)) - 5.0).abs() < 1e-12);
    }
}
