//! Rotating tools carousel.
//!
//! Every input source (autoplay deadline, arrow keys, mouse clicks, drag
//! gestures, hover) is turned into a [`CarouselEvent`] and folded through
//! [`reduce`]. [`Carousel`] wraps the reducer with the autoplay deadline.

use crossterm::event::KeyCode;
use std::time::{Duration, Instant};

/// Inbound carousel event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    Next,
    Previous,
    JumpTo(usize),
    SetPaused(bool),
}

/// Index of the visible item plus autoplay suspension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectorState {
    pub current_index: usize,
    pub paused: bool,
}

/// Pure transition function. `len` is the number of items and is never zero
/// in practice; a zero length leaves the index untouched.
#[must_use]
pub fn reduce(state: SelectorState, event: CarouselEvent, len: usize) -> SelectorState {
    if len == 0 {
        return state;
    }
    match event {
        CarouselEvent::Next => SelectorState {
            current_index: (state.current_index % len + 1) % len,
            ..state
        },
        CarouselEvent::Previous => SelectorState {
            current_index: (state.current_index % len + len - 1) % len,
            ..state
        },
        CarouselEvent::JumpTo(index) if index < len => SelectorState {
            current_index: index,
            ..state
        },
        CarouselEvent::JumpTo(_) => state,
        CarouselEvent::SetPaused(paused) => SelectorState { paused, ..state },
    }
}

/// Selector state with a single pending autoplay deadline.
///
/// The deadline is cleared and replaced on every state change, so manual
/// navigation always restarts the countdown and a pause drops it entirely.
#[derive(Debug, Clone)]
pub struct Carousel {
    state: SelectorState,
    len: usize,
    interval: Duration,
    deadline: Option<Instant>,
}

impl Carousel {
    pub fn new(len: usize, interval: Duration, now: Instant) -> Self {
        Self {
            state: SelectorState::default(),
            len,
            interval,
            deadline: Some(now + interval),
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.state.paused
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Applies one event. Returns true when the visible item changed.
    pub fn apply(&mut self, event: CarouselEvent, now: Instant) -> bool {
        let previous = self.state;
        if matches!(event, CarouselEvent::SetPaused(paused) if paused == previous.paused) {
            return false;
        }
        if let CarouselEvent::JumpTo(index) = event
            && index >= self.len
        {
            tracing::warn!(index, len = self.len, "ignoring carousel jump out of range");
            return false;
        }

        self.state = reduce(previous, event, self.len);
        self.reschedule(now);
        tracing::trace!(
            ?event,
            index = self.state.current_index,
            paused = self.state.paused,
            "carousel transition"
        );
        self.state.current_index != previous.current_index
    }

    /// Fires the autoplay advance when its deadline has passed
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => self.apply(CarouselEvent::Next, now),
            Some(_) | None => false,
        }
    }

    /// Time left until the next automatic advance
    #[must_use]
    pub fn time_until_advance(&self, now: Instant) -> Option<Duration> {
        self.deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    fn reschedule(&mut self, now: Instant) {
        self.deadline = if self.state.paused {
            None
        } else {
            Some(now + self.interval)
        };
    }
}

/// Tracks a horizontal drag from press to release.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start: Option<u16>,
    end: Option<u16>,
}

impl SwipeTracker {
    pub fn begin(&mut self, column: u16) {
        self.end = None;
        self.start = Some(column);
    }

    pub fn update(&mut self, column: u16) {
        if self.start.is_some() {
            self.end = Some(column);
        }
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Ends the gesture and maps it to an event. Tracking always resets.
    pub fn finish(&mut self, threshold: u16) -> Option<CarouselEvent> {
        let start = self.start.take();
        let end = self.end.take();
        let (start, end) = (start?, end?);
        swipe_event(i32::from(start) - i32::from(end), threshold)
    }

    pub fn cancel(&mut self) {
        self.start = None;
        self.end = None;
    }
}

/// `distance` is start minus end: dragging left is positive and shows the
/// next item.
#[must_use]
pub fn swipe_event(distance: i32, threshold: u16) -> Option<CarouselEvent> {
    let threshold = i32::from(threshold);
    if distance > threshold {
        Some(CarouselEvent::Next)
    } else if distance < -threshold {
        Some(CarouselEvent::Previous)
    } else {
        None
    }
}

/// Arrow keys drive the carousel; everything else is ignored
#[must_use]
pub fn key_event(code: KeyCode) -> Option<CarouselEvent> {
    match code {
        KeyCode::Left => Some(CarouselEvent::Previous),
        KeyCode::Right => Some(CarouselEvent::Next),
        KeyCode::Backspace
        | KeyCode::Enter
        | KeyCode::Up
        | KeyCode::Down
        | KeyCode::Home
        | KeyCode::End
        | KeyCode::PageUp
        | KeyCode::PageDown
        | KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Delete
        | KeyCode::Insert
        | KeyCode::F(_)
        | KeyCode::Char(_)
        | KeyCode::Null
        | KeyCode::Esc
        | KeyCode::CapsLock
        | KeyCode::ScrollLock
        | KeyCode::NumLock
        | KeyCode::PrintScreen
        | KeyCode::Pause
        | KeyCode::Menu
        | KeyCode::KeypadBegin
        | KeyCode::Media(_)
        | KeyCode::Modifier(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(5000);

    fn carousel(len: usize) -> (Carousel, Instant) {
        let now = Instant::now();
        (Carousel::new(len, INTERVAL, now), now)
    }

    #[test]
    fn test_starts_at_zero_unpaused() {
        let (carousel, now) = carousel(6);
        assert_eq!(carousel.current_index(), 0);
        assert!(!carousel.is_paused());
        assert_eq!(carousel.deadline(), Some(now + INTERVAL));
    }

    #[test]
    fn test_index_stays_in_range_for_mixed_sequences() {
        for len in 1..=7 {
            let mut state = SelectorState::default();
            let events = [
                CarouselEvent::Previous,
                CarouselEvent::Next,
                CarouselEvent::JumpTo(len - 1),
                CarouselEvent::Next,
                CarouselEvent::Previous,
                CarouselEvent::Previous,
                CarouselEvent::JumpTo(0),
                CarouselEvent::Previous,
            ];
            for event in events {
                state = reduce(state, event, len);
                assert!(state.current_index < len);
            }
        }
    }

    #[test]
    fn test_next_and_previous_are_inverse() {
        for len in 1..=6 {
            for start in 0..len {
                let state = SelectorState {
                    current_index: start,
                    paused: false,
                };
                let forward = reduce(reduce(state, CarouselEvent::Next, len), CarouselEvent::Previous, len);
                let backward = reduce(reduce(state, CarouselEvent::Previous, len), CarouselEvent::Next, len);
                assert_eq!(forward.current_index, start);
                assert_eq!(backward.current_index, start);
            }
        }
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let len = 6;
        for start in 0..len {
            let mut state = SelectorState {
                current_index: start,
                paused: false,
            };
            for _ in 0..len {
                state = reduce(state, CarouselEvent::Next, len);
            }
            assert_eq!(state.current_index, start);
        }
    }

    #[test]
    fn test_single_item_always_zero() {
        let state = reduce(SelectorState::default(), CarouselEvent::Next, 1);
        assert_eq!(state.current_index, 0);
        let state = reduce(state, CarouselEvent::Previous, 1);
        assert_eq!(state.current_index, 0);
    }

    #[test]
    fn test_keyboard_walkthrough_example() {
        let (mut carousel, now) = carousel(6);
        for _ in 0..3 {
            if let Some(event) = key_event(KeyCode::Right) {
                carousel.apply(event, now);
            }
        }
        assert_eq!(carousel.current_index(), 3);
        if let Some(event) = key_event(KeyCode::Left) {
            carousel.apply(event, now);
        }
        assert_eq!(carousel.current_index(), 2);
        carousel.apply(CarouselEvent::JumpTo(5), now);
        assert_eq!(carousel.current_index(), 5);
        carousel.apply(CarouselEvent::Next, now);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(key_event(KeyCode::Up), None);
        assert_eq!(key_event(KeyCode::Char('l')), None);
        assert_eq!(key_event(KeyCode::Enter), None);
    }

    #[test]
    fn test_swipe_threshold_boundary() {
        assert_eq!(swipe_event(50, 50), None);
        assert_eq!(swipe_event(-50, 50), None);
        assert_eq!(swipe_event(51, 50), Some(CarouselEvent::Next));
        assert_eq!(swipe_event(-51, 50), Some(CarouselEvent::Previous));
        assert_eq!(swipe_event(0, 50), None);
    }

    #[test]
    fn test_swipe_tracker_left_drag_advances() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(80);
        tracker.update(40);
        tracker.update(29);
        assert_eq!(tracker.finish(50), Some(CarouselEvent::Next));
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn test_swipe_tracker_right_drag_goes_back() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(10);
        tracker.update(61);
        assert_eq!(tracker.finish(50), Some(CarouselEvent::Previous));
    }

    #[test]
    fn test_swipe_without_move_is_noop_and_resets() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(10);
        assert_eq!(tracker.finish(50), None);
        assert!(!tracker.is_tracking());
        // A stale end from an earlier gesture must not leak into the next one
        tracker.begin(100);
        tracker.update(20);
        tracker.cancel();
        tracker.begin(30);
        assert_eq!(tracker.finish(50), None);
    }

    #[test]
    fn test_swipe_below_threshold_leaves_index() {
        let (mut carousel, now) = carousel(6);
        let mut tracker = SwipeTracker::default();
        tracker.begin(60);
        tracker.update(10);
        if let Some(event) = tracker.finish(50) {
            carousel.apply(event, now);
        }
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.deadline(), Some(now + INTERVAL));
    }

    #[test]
    fn test_autoplay_advances_after_interval() {
        let (mut carousel, now) = carousel(6);
        assert!(!carousel.tick(now + Duration::from_millis(4999)));
        assert!(carousel.tick(now + INTERVAL));
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.deadline(), Some(now + INTERVAL * 2));
    }

    #[test]
    fn test_manual_navigation_restarts_countdown() {
        let (mut carousel, now) = carousel(6);
        let later = now + Duration::from_millis(4000);
        carousel.apply(CarouselEvent::Next, later);
        assert!(!carousel.tick(now + INTERVAL));
        assert_eq!(carousel.current_index(), 1);
        assert!(carousel.tick(later + INTERVAL));
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_jump_reschedules_without_double_advance() {
        let (mut carousel, now) = carousel(6);
        let jump_at = now + Duration::from_millis(4900);
        carousel.apply(CarouselEvent::JumpTo(3), jump_at);
        assert_eq!(carousel.current_index(), 3);
        for step in 1..50 {
            carousel.tick(jump_at + Duration::from_millis(step * 100));
        }
        assert_eq!(carousel.current_index(), 3);
        carousel.tick(jump_at + INTERVAL);
        assert_eq!(carousel.current_index(), 4);
    }

    #[test]
    fn test_jump_to_same_index_still_reschedules() {
        let (mut carousel, now) = carousel(6);
        let later = now + Duration::from_millis(3000);
        assert!(!carousel.apply(CarouselEvent::JumpTo(0), later));
        assert_eq!(carousel.deadline(), Some(later + INTERVAL));
    }

    #[test]
    fn test_out_of_range_jump_is_ignored() {
        let (mut carousel, now) = carousel(6);
        assert!(!carousel.apply(CarouselEvent::JumpTo(6), now + INTERVAL / 2));
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.deadline(), Some(now + INTERVAL));
    }

    #[test]
    fn test_pause_suspends_autoplay() {
        let (mut carousel, now) = carousel(6);
        carousel.apply(CarouselEvent::SetPaused(true), now);
        assert_eq!(carousel.deadline(), None);
        for seconds in 1..120 {
            assert!(!carousel.tick(now + Duration::from_secs(seconds)));
        }
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_manual_navigation_while_paused_keeps_timer_off() {
        let (mut carousel, now) = carousel(6);
        carousel.apply(CarouselEvent::SetPaused(true), now);
        carousel.apply(CarouselEvent::Next, now);
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.deadline(), None);
    }

    #[test]
    fn test_resume_starts_fresh_timer_without_catch_up() {
        let (mut carousel, now) = carousel(6);
        carousel.apply(CarouselEvent::SetPaused(true), now);
        let resumed_at = now + Duration::from_secs(60);
        carousel.apply(CarouselEvent::SetPaused(false), resumed_at);
        assert!(!carousel.tick(resumed_at));
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.time_until_advance(resumed_at), Some(INTERVAL));
        assert!(carousel.tick(resumed_at + INTERVAL));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_repeated_unpause_does_not_restart_timer() {
        let (mut carousel, now) = carousel(6);
        carousel.apply(CarouselEvent::SetPaused(false), now + Duration::from_millis(4000));
        assert_eq!(carousel.deadline(), Some(now + INTERVAL));
    }
}
