/// A release slower than this since the last movement counts as a stop.
const IDLE_RELEASE_MS: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRelease {
    /// Horizontal displacement since the drag began, in px.
    pub offset: f64,
    /// Horizontal speed at release, in px/s.
    pub velocity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDecision {
    Forward,
    Backward,
    SnapBack,
}

impl SwipeDecision {
    /// The pagination step to apply, if any.
    pub fn step(self) -> Option<isize> {
        match self {
            SwipeDecision::Forward => Some(1),
            SwipeDecision::Backward => Some(-1),
            SwipeDecision::SnapBack => None,
        }
    }
}

pub fn swipe_power(offset: f64, velocity: f64) -> f64 {
    offset.abs() * velocity.abs()
}

/// Dragging left (negative offset) hard enough shows the next image,
/// dragging right the previous one. Anything weaker snaps back.
pub fn classify(release: DragRelease, threshold: f64) -> SwipeDecision {
    if swipe_power(release.offset, release.velocity) <= threshold {
        return SwipeDecision::SnapBack;
    }
    if release.offset < 0.0 {
        SwipeDecision::Forward
    } else if release.offset > 0.0 {
        SwipeDecision::Backward
    } else {
        SwipeDecision::SnapBack
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Sample {
    x: f64,
    t_ms: f64,
}

/// Follows one pointer from press to release.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragTracker {
    origin: Option<Sample>,
    last: Option<Sample>,
    velocity: f64,
}

impl DragTracker {
    pub fn begin(&mut self, x: f64, t_ms: f64) {
        let sample = Sample { x, t_ms };
        self.origin = Some(sample);
        self.last = Some(sample);
        self.velocity = 0.0;
    }

    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    /// Current displacement, 0 when no drag is in progress.
    pub fn offset(&self) -> f64 {
        match (self.origin, self.last) {
            (Some(origin), Some(last)) => last.x - origin.x,
            _ => 0.0,
        }
    }

    pub fn update(&mut self, x: f64, t_ms: f64) {
        let Some(last) = self.last else {
            return;
        };
        let dt = t_ms - last.t_ms;
        if dt > 0.0 {
            self.velocity = (x - last.x) / dt * 1000.0;
            self.last = Some(Sample { x, t_ms });
        } else {
            self.last = Some(Sample { x, ..last });
        }
    }

    /// Pointer movement while a drag may be in progress. A move with no button
    /// held means the release went unseen, so the drag is dropped. Returns
    /// whether a drag is still in progress.
    pub fn pointer_moved(&mut self, x: f64, t_ms: f64, pressed: bool) -> bool {
        if !self.is_dragging() {
            return false;
        }
        if !pressed {
            self.cancel();
            return false;
        }
        self.update(x, t_ms);
        true
    }

    /// Ends the drag. `None` if no drag was in progress.
    pub fn release(&mut self, x: f64, t_ms: f64) -> Option<DragRelease> {
        let last = self.last?;
        let still_for = t_ms - last.t_ms;
        if x == last.x && still_for > IDLE_RELEASE_MS {
            self.velocity = 0.0;
        } else {
            self.update(x, t_ms);
        }
        let release = DragRelease {
            offset: self.offset(),
            velocity: self.velocity,
        };
        self.cancel();
        Some(release)
    }

    pub fn cancel(&mut self) {
        *self = DragTracker::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const THRESHOLD: f64 = 10_000.0;

    #[test]
    fn strong_left_swipe_goes_forward_once() {
        let release = DragRelease {
            offset: -2000.0,
            velocity: 10.0,
        };
        assert_eq!(swipe_power(release.offset, release.velocity), 20_000.0);
        assert_eq!(classify(release, THRESHOLD), SwipeDecision::Forward);
        assert_eq!(classify(release, THRESHOLD).step(), Some(1));
    }

    #[test]
    fn strong_right_swipe_goes_back() {
        let release = DragRelease {
            offset: 300.0,
            velocity: 800.0,
        };
        assert_eq!(classify(release, THRESHOLD), SwipeDecision::Backward);
    }

    #[test]
    fn weak_swipe_snaps_back() {
        let release = DragRelease {
            offset: -90.0,
            velocity: 100.0,
        };
        assert_eq!(classify(release, THRESHOLD), SwipeDecision::SnapBack);
        assert_eq!(classify(release, THRESHOLD).step(), None);
    }

    #[test]
    fn power_exactly_at_threshold_snaps_back() {
        let release = DragRelease {
            offset: -100.0,
            velocity: 100.0,
        };
        assert_eq!(classify(release, THRESHOLD), SwipeDecision::SnapBack);
    }

    #[test]
    fn velocity_sign_does_not_matter() {
        let release = DragRelease {
            offset: -400.0,
            velocity: -900.0,
        };
        assert_eq!(classify(release, THRESHOLD), SwipeDecision::Forward);
    }

    #[test]
    fn zero_offset_never_paginates() {
        let release = DragRelease {
            offset: 0.0,
            velocity: 1.0e9,
        };
        assert_eq!(classify(release, 0.0), SwipeDecision::SnapBack);
    }

    #[test]
    fn tracker_measures_offset_and_velocity() {
        let mut tracker = DragTracker::default();
        tracker.begin(500.0, 0.0);
        tracker.update(400.0, 50.0);
        assert!(tracker.is_dragging());
        assert_eq!(tracker.offset(), -100.0);

        let release = tracker.release(300.0, 100.0).unwrap();
        assert_eq!(release.offset, -200.0);
        assert_eq!(release.velocity, -2000.0);
        assert_eq!(classify(release, THRESHOLD), SwipeDecision::Forward);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn holding_still_before_release_drops_velocity() {
        let mut tracker = DragTracker::default();
        tracker.begin(0.0, 0.0);
        tracker.update(150.0, 20.0);
        let release = tracker.release(150.0, 600.0).unwrap();
        assert_eq!(release.offset, 150.0);
        assert_eq!(release.velocity, 0.0);
        assert_eq!(classify(release, THRESHOLD), SwipeDecision::SnapBack);
    }

    #[test]
    fn move_without_button_abandons_drag() {
        let mut tracker = DragTracker::default();
        tracker.begin(400.0, 0.0);
        assert!(tracker.pointer_moved(250.0, 30.0, true));
        assert_eq!(tracker.offset(), -150.0);

        // button came up outside the slide; the next hover move ends it
        assert!(!tracker.pointer_moved(260.0, 900.0, false));
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.offset(), 0.0);
        assert_eq!(tracker.release(260.0, 950.0), None);
    }

    #[test]
    fn hover_moves_never_start_a_drag() {
        let mut tracker = DragTracker::default();
        assert!(!tracker.pointer_moved(10.0, 5.0, true));
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn release_without_begin_is_none() {
        let mut tracker = DragTracker::default();
        tracker.update(10.0, 5.0);
        assert_eq!(tracker.release(20.0, 10.0), None);
        assert_eq!(tracker.offset(), 0.0);
    }
}
