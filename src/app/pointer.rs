//! Mouse input. Hover over the carousel pauses autoplay, a press-drag-release
//! inside it is a swipe, and presses on recorded regions act like clicks.

use crate::app::{App, AppMode, CarouselEvent, HitMap, HitTarget};

impl App {
    pub fn pointer_moved(&mut self, column: u16, row: u16) {
        self.update_carousel_hover(column, row);
    }

    pub fn pointer_pressed(&mut self, column: u16, row: u16) {
        self.update_carousel_hover(column, row);
        if self.hit_map.in_carousel(column, row) {
            self.swipe.begin(column);
        }

        match self.hit_map.target_at(column, row) {
            Some(HitTarget::Anchor(anchor)) => self.scroll_to_section(anchor),
            Some(HitTarget::MenuToggle) => self.toggle_nav_menu(),
            Some(HitTarget::Focusable(target)) => self.activate(target),
            Some(HitTarget::CarouselIndicator(index)) => {
                self.dispatch_carousel(CarouselEvent::JumpTo(index));
            }
            Some(HitTarget::CarouselArea) | None => {
                if matches!(self.mode, AppMode::EmailInput | AppMode::NavMenu) {
                    self.mode = AppMode::Page;
                }
            }
        }
    }

    pub fn pointer_dragged(&mut self, column: u16, row: u16) {
        self.update_carousel_hover(column, row);
        self.swipe.update(column);
    }

    pub fn pointer_released(&mut self) {
        if !self.swipe.is_tracking() {
            return;
        }
        let threshold = self.config.carousel.swipe_threshold;
        if let Some(event) = self.swipe.finish(threshold) {
            tracing::debug!(?event, "swipe");
            self.dispatch_carousel(event);
        }
    }

    /// Installs the regions from the latest frame. The page can move under a
    /// pointer that stays put, so hover is re-checked against the new map.
    pub fn refresh_hit_map(&mut self, hits: HitMap) {
        self.hit_map = hits;
        if let Some((column, row)) = self.pointer {
            self.update_carousel_hover(column, row);
        }
    }

    /// Drops hover when the carousel stops being reachable, e.g. behind help
    pub fn clear_carousel_hover(&mut self) {
        if self.hovering_carousel {
            self.hovering_carousel = false;
            self.dispatch_carousel(CarouselEvent::SetPaused(false));
        }
    }

    fn update_carousel_hover(&mut self, column: u16, row: u16) {
        self.pointer = Some((column, row));
        let inside = self.hit_map.in_carousel(column, row);
        if inside != self.hovering_carousel {
            self.hovering_carousel = inside;
            self.dispatch_carousel(CarouselEvent::SetPaused(inside));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::test_app;
    use crate::app::{FocusTarget, HitMap};
    use ratatui::layout::Rect;
    use std::time::{Duration, Instant};

    fn app_with_carousel() -> App {
        let mut app = test_app();
        let mut hits = HitMap::default();
        hits.push(Rect::new(10, 10, 100, 12), HitTarget::CarouselArea);
        hits.push(Rect::new(12, 15, 3, 1), HitTarget::Focusable(FocusTarget::CarouselPrevious));
        hits.push(Rect::new(40, 21, 2, 1), HitTarget::CarouselIndicator(4));
        hits.push(Rect::new(0, 0, 8, 1), HitTarget::Anchor("why"));
        app.hit_map = hits;
        app
    }

    #[test]
    fn test_hover_pauses_and_leaving_resumes() {
        let mut app = app_with_carousel();
        let now = Instant::now();
        app.pointer_moved(50, 12);
        app.process_carousel_events(now);
        assert!(app.carousel.is_paused());
        app.process_carousel_events(now + Duration::from_secs(30));
        assert_eq!(app.carousel.current_index(), 0);

        app.pointer_moved(5, 30);
        app.process_carousel_events(now + Duration::from_secs(30));
        assert!(!app.carousel.is_paused());
    }

    #[test]
    fn test_left_drag_past_threshold_advances() {
        let mut app = app_with_carousel();
        app.pointer_pressed(90, 12);
        app.pointer_dragged(60, 12);
        app.pointer_dragged(39, 12);
        app.pointer_released();
        app.process_carousel_events(Instant::now());
        assert_eq!(app.carousel.current_index(), 1);
    }

    #[test]
    fn test_drag_at_threshold_is_ignored() {
        let mut app = app_with_carousel();
        app.pointer_pressed(90, 12);
        app.pointer_dragged(40, 12);
        app.pointer_released();
        app.process_carousel_events(Instant::now());
        assert_eq!(app.carousel.current_index(), 0);
    }

    #[test]
    fn test_press_outside_carousel_never_swipes() {
        let mut app = app_with_carousel();
        app.pointer_pressed(5, 30);
        app.pointer_dragged(100, 30);
        app.pointer_released();
        app.process_carousel_events(Instant::now());
        assert_eq!(app.carousel.current_index(), 0);
    }

    #[test]
    fn test_indicator_click_jumps() {
        let mut app = app_with_carousel();
        app.pointer_pressed(41, 21);
        app.pointer_released();
        app.process_carousel_events(Instant::now());
        assert_eq!(app.carousel.current_index(), 4);
    }

    #[test]
    fn test_arrow_click_goes_back_and_focuses() {
        let mut app = app_with_carousel();
        app.pointer_pressed(13, 15);
        app.pointer_released();
        app.process_carousel_events(Instant::now());
        assert_eq!(app.carousel.current_index(), 5);
        assert_eq!(app.focused(), Some(FocusTarget::CarouselPrevious));
    }

    #[test]
    fn test_new_hit_map_rechecks_stationary_pointer() {
        let mut app = app_with_carousel();
        let now = Instant::now();
        app.pointer_moved(50, 12);
        app.process_carousel_events(now);
        assert!(app.carousel.is_paused());

        let mut moved = HitMap::default();
        moved.push(Rect::new(10, 30, 100, 12), HitTarget::CarouselArea);
        app.refresh_hit_map(moved);
        app.process_carousel_events(now);
        assert!(!app.carousel.is_paused());

        let mut back = HitMap::default();
        back.push(Rect::new(10, 10, 100, 12), HitTarget::CarouselArea);
        app.refresh_hit_map(back);
        app.process_carousel_events(now);
        assert!(app.carousel.is_paused());
    }

    #[test]
    fn test_refresh_without_pointer_keeps_autoplay() {
        let mut app = app_with_carousel();
        app.refresh_hit_map(HitMap::default());
        app.process_carousel_events(Instant::now());
        assert!(!app.carousel.is_paused());
        assert!(app.pointer.is_none());
    }

    #[test]
    fn test_help_clears_hover() {
        let mut app = app_with_carousel();
        let now = Instant::now();
        app.pointer_moved(50, 12);
        app.process_carousel_events(now);
        app.open_help();
        app.process_carousel_events(now);
        assert!(!app.carousel.is_paused());
        assert!(!app.hovering_carousel);
    }

    #[test]
    fn test_anchor_click_scrolls() {
        let mut app = app_with_carousel();
        app.pointer_pressed(2, 0);
        assert_eq!(app.location, "#why");
    }
}
