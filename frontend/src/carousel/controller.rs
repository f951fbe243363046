use std::num::NonZeroUsize;
use std::rc::Rc;
use yew::Reducible;

/// Sign of the last movement. Only drives which side slides enter from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Idle,
    Forward,
}

impl Direction {
    pub fn from_step(step: isize) -> Self {
        match step.signum() {
            -1 => Direction::Backward,
            0 => Direction::Idle,
            _ => Direction::Forward,
        }
    }

    /// CSS class for the slide becoming active.
    pub fn enter_class(self) -> &'static str {
        match self {
            Direction::Forward => "enter-from-right",
            Direction::Backward => "enter-from-left",
            Direction::Idle => "at-rest",
        }
    }

    /// CSS class for the slide leaving; it moves away opposite to the incoming one.
    pub fn exit_class(self) -> &'static str {
        match self {
            Direction::Forward => "exit-to-left",
            Direction::Backward => "exit-to-right",
            Direction::Idle => "at-rest",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationSource {
    Autoplay,
    Arrow,
    Dot,
    Swipe,
}

/// Emitted once per successful navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationEvent {
    pub index: usize,
    pub previous: usize,
    pub direction: Direction,
    pub source: NavigationSource,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    Paginate { step: isize, source: NavigationSource },
    JumpTo { index: usize },
    Tick,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    current: usize,
    direction: Direction,
    last_event: Option<NavigationEvent>,
    // bumped on every event so views can tell two identical events apart
    seq: u64,
}

impl CarouselState {
    /// `None` for an empty image list; every other length is a valid carousel.
    pub fn new(len: usize) -> Option<Self> {
        NonZeroUsize::new(len).map(|len| Self {
            len: len.get(),
            current: 0,
            direction: Direction::Idle,
            last_event: None,
            seq: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn last_event(&self) -> Option<NavigationEvent> {
        self.last_event
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Moves by `step` positions with wraparound in both directions.
    pub fn paginate(&mut self, step: isize, source: NavigationSource) -> NavigationEvent {
        let previous = self.current;
        self.direction = Direction::from_step(step);
        self.current = wrap(self.current, step, self.len);
        self.record(previous, source)
    }

    /// Autoplay moves forward by one.
    pub fn tick(&mut self) -> NavigationEvent {
        self.paginate(1, NavigationSource::Autoplay)
    }

    /// Selects `index` directly. Out-of-range indices are ignored; selecting the
    /// current index only updates the direction and emits nothing.
    pub fn jump_to(&mut self, index: usize) -> Option<NavigationEvent> {
        if index >= self.len {
            return None;
        }
        let previous = self.current;
        self.direction = if index > previous {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.current = index;
        if index == previous {
            return None;
        }
        Some(self.record(previous, NavigationSource::Dot))
    }

    fn record(&mut self, previous: usize, source: NavigationSource) -> NavigationEvent {
        let event = NavigationEvent {
            index: self.current,
            previous,
            direction: self.direction,
            source,
        };
        self.last_event = Some(event);
        self.seq += 1;
        event
    }
}

// Reduces the step first so no step, however large, can overflow.
fn wrap(index: usize, step: isize, len: usize) -> usize {
    let step = step.rem_euclid(len as isize) as usize;
    (index + step) % len
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Paginate { step, source } => {
                next.paginate(step, source);
            }
            CarouselAction::JumpTo { index } => {
                next.jump_to(index);
            }
            CarouselAction::Tick => {
                next.tick();
            }
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn carousel(len: usize) -> CarouselState {
        CarouselState::new(len).unwrap()
    }

    #[test]
    fn starts_at_zero_and_idle() {
        let state = carousel(6);
        assert_eq!(state.current(), 0);
        assert_eq!(state.direction(), Direction::Idle);
        assert_eq!(state.last_event(), None);
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(CarouselState::new(0).is_none());
    }

    #[test]
    fn forward_wraps_to_first() {
        let mut state = carousel(6);
        state.jump_to(5);
        let event = state.paginate(1, NavigationSource::Arrow);
        assert_eq!(state.current(), 0);
        assert_eq!(event.previous, 5);
        assert_eq!(event.direction, Direction::Forward);
    }

    #[test]
    fn backward_wraps_to_last() {
        let mut state = carousel(6);
        state.paginate(-1, NavigationSource::Arrow);
        assert_eq!(state.current(), 5);
        assert_eq!(state.direction(), Direction::Backward);
    }

    #[test]
    fn index_stays_in_range_for_any_step_sequence() {
        for len in 1..=7 {
            let mut state = carousel(len);
            for i in 0..200 {
                let step = if (i * 7 + len) % 3 == 0 { -1 } else { 1 };
                state.paginate(step, NavigationSource::Arrow);
                assert!(state.current() < len);
            }
        }
    }

    #[test]
    fn larger_steps_still_wrap() {
        let mut state = carousel(4);
        state.paginate(-9, NavigationSource::Arrow);
        assert_eq!(state.current(), 3);
        state.paginate(10, NavigationSource::Arrow);
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn extreme_steps_wrap_without_overflow() {
        let mut state = carousel(6);
        state.jump_to(3);
        state.paginate(isize::MAX, NavigationSource::Arrow);
        // isize::MAX = 6 * k + 1
        assert_eq!(state.current(), 4);
        assert_eq!(state.direction(), Direction::Forward);

        state.paginate(isize::MIN, NavigationSource::Arrow);
        // isize::MIN = 6 * k + 4
        assert_eq!(state.current(), 2);
        assert_eq!(state.direction(), Direction::Backward);

        let mut single = carousel(1);
        single.paginate(isize::MIN, NavigationSource::Swipe);
        assert_eq!(single.current(), 0);
    }

    #[test]
    fn forward_then_back_is_identity() {
        for start in 0..6 {
            let mut state = carousel(6);
            state.jump_to(start);
            state.paginate(1, NavigationSource::Arrow);
            state.paginate(-1, NavigationSource::Arrow);
            assert_eq!(state.current(), start);
            state.paginate(-1, NavigationSource::Swipe);
            state.paginate(1, NavigationSource::Swipe);
            assert_eq!(state.current(), start);
        }
    }

    #[test]
    fn jump_sets_exact_index() {
        let mut state = carousel(6);
        for target in [3, 0, 5, 2, 2, 4] {
            state.jump_to(target);
            assert_eq!(state.current(), target);
        }
    }

    #[test]
    fn jump_direction_follows_target() {
        let mut state = carousel(6);
        state.jump_to(5);
        state.paginate(1, NavigationSource::Arrow);
        assert_eq!(state.current(), 0);

        let event = state.jump_to(2).unwrap();
        assert_eq!(state.current(), 2);
        assert_eq!(state.direction(), Direction::Forward);
        assert_eq!(event.source, NavigationSource::Dot);

        state.jump_to(1);
        assert_eq!(state.direction(), Direction::Backward);
    }

    #[test]
    fn jump_out_of_range_is_ignored() {
        let mut state = carousel(3);
        state.jump_to(1);
        let before = state.clone();
        assert_eq!(state.jump_to(3), None);
        assert_eq!(state, before);
    }

    #[test]
    fn jump_to_current_emits_nothing() {
        let mut state = carousel(3);
        state.jump_to(2);
        let seq = state.seq();
        assert_eq!(state.jump_to(2), None);
        assert_eq!(state.seq(), seq);
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn autoplay_ticks_land_on_m_mod_n() {
        for len in 1..=6 {
            let mut state = carousel(len);
            for m in 1..=25 {
                let event = state.tick();
                assert_eq!(event.source, NavigationSource::Autoplay);
                assert_eq!(state.current(), m % len);
            }
        }
    }

    #[test]
    fn single_image_always_stays_at_zero() {
        let mut state = carousel(1);
        state.paginate(1, NavigationSource::Autoplay);
        state.paginate(-1, NavigationSource::Arrow);
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn every_navigation_bumps_seq() {
        let mut state = carousel(2);
        state.tick();
        state.tick();
        state.jump_to(1);
        assert_eq!(state.seq(), 3);
    }

    #[test]
    fn reducer_applies_actions() {
        let state = Rc::new(carousel(6));
        let state = state.reduce(CarouselAction::Paginate {
            step: -1,
            source: NavigationSource::Arrow,
        });
        assert_eq!(state.current(), 5);
        let state = state.reduce(CarouselAction::JumpTo { index: 2 });
        assert_eq!(state.current(), 2);
        assert_eq!(state.last_event().map(|e| e.previous), Some(5));
        let state = state.reduce(CarouselAction::Tick);
        assert_eq!(state.current(), 3);
        assert_eq!(state.last_event().map(|e| e.source), Some(NavigationSource::Autoplay));
    }

    #[test]
    fn reducer_keeps_same_rc_when_nothing_changes() {
        let state = Rc::new(carousel(3));
        let next = state.clone().reduce(CarouselAction::JumpTo { index: 7 });
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn slide_classes_mirror_direction() {
        assert_eq!(Direction::Forward.enter_class(), "enter-from-right");
        assert_eq!(Direction::Forward.exit_class(), "exit-to-left");
        assert_eq!(Direction::Backward.enter_class(), "enter-from-left");
        assert_eq!(Direction::Backward.exit_class(), "exit-to-right");
        assert_eq!(Direction::from_step(-3), Direction::Backward);
        assert_eq!(Direction::from_step(0), Direction::Idle);
    }
}
