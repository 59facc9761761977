mod carousel;
mod components;
mod footer;
mod get_involved;
mod help;
mod hero;
mod menu;
mod navbar;
mod stories;
mod utils;
mod why;

use crate::app::scroll::{HEADER_HEIGHT, SectionId, SectionSpan};
use crate::app::{App, AppMode, HitMap};
use ratatui::{Frame, buffer::Buffer, layout::Rect};
use utils::{Viewport, blit_section, rows, translate_hits};

/// Draws the current frame and returns the clickable regions it produced
pub fn render(f: &mut Frame, app: &App) -> HitMap {
    let mut hits = HitMap::default();
    if app.mode == AppMode::Help {
        help::render_help_view(f);
        return hits;
    }

    render_page(f, app, &mut hits);
    navbar::render_navbar(f, app, &mut hits);
    if app.mode == AppMode::NavMenu {
        menu::render_nav_menu(f, app, &mut hits);
    }

    if let Some(message) = app.status_toast_message() {
        let area = f.area();
        let toast_area = Rect::new(
            area.x,
            area.bottom().saturating_sub(1),
            area.width.saturating_sub(1),
            1.min(area.height),
        );
        components::render_status_toast(f, toast_area, message);
    }
    hits
}

/// Renders every section overlapping the viewport into its own buffer and
/// copies the visible rows onto the frame
fn render_page(f: &mut Frame, app: &App, hits: &mut HitMap) {
    let area = f.area();
    let viewport = Viewport {
        area,
        offset: app.scroll_offset,
        clip_top: area.y + rows(HEADER_HEIGHT),
    };
    let visible_end = app.scroll_offset + usize::from(area.height);

    for span in app.layout.sections() {
        if span.bottom() <= app.scroll_offset || span.top >= visible_end {
            continue;
        }
        let (scratch, local_hits) = render_section(span, area.width, app);
        blit_section(&scratch, span.top, viewport, f.buffer_mut());
        translate_hits(local_hits, span.top, viewport, hits);
    }
}

fn render_section(span: &SectionSpan, width: u16, app: &App) -> (Buffer, HitMap) {
    let area = Rect::new(0, 0, width, rows(span.height));
    let mut buf = Buffer::empty(area);
    let mut hits = HitMap::default();
    match span.id {
        SectionId::Hero => hero::render_hero(&mut buf, area, app, &mut hits),
        SectionId::Why => why::render_why(&mut buf, area),
        SectionId::Stories => stories::render_stories(&mut buf, area, app, &mut hits),
        SectionId::Learn => carousel::render_carousel_section(&mut buf, area, app, &mut hits),
        SectionId::GetInvolved => get_involved::render_get_involved(&mut buf, area, app, &mut hits),
        SectionId::Footer => footer::render_footer(&mut buf, area, app, &mut hits),
    }
    (buf, hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::test_app;
    use crate::app::{FocusTarget, HitTarget};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App, width: u16, height: u16) -> (HitMap, String) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut hits = HitMap::default();
        terminal.draw(|f| hits = render(f, app)).unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        (hits, text)
    }

    fn has_target(hits: &HitMap, target: HitTarget) -> bool {
        hits.regions().any(|(_, candidate)| *candidate == target)
    }

    #[test]
    fn test_top_of_page_shows_hero_and_navbar() {
        let app = test_app();
        let (hits, text) = draw(&app, 120, 40);
        assert!(text.contains("Join Community"));
        assert!(has_target(&hits, HitTarget::Focusable(FocusTarget::HeroPrimary)));
        assert!(has_target(&hits, HitTarget::Anchor("why")));
        assert!(!has_target(&hits, HitTarget::CarouselArea));
    }

    #[test]
    fn test_scrolled_to_tools_shows_carousel() {
        let mut app = test_app();
        app.scroll_to_section("learn");
        let (hits, text) = draw(&app, 120, 40);
        assert!(text.contains("Meet the Tools"));
        assert!(text.contains("ChatGPT"));
        assert!(has_target(&hits, HitTarget::CarouselArea));
        assert!(has_target(&hits, HitTarget::CarouselIndicator(5)));
        assert!(has_target(&hits, HitTarget::Focusable(FocusTarget::CopyPrompt)));
    }

    #[test]
    fn test_carousel_hit_regions_drive_hover() {
        let mut app = test_app();
        app.scroll_to_section("learn");
        let (hits, _) = draw(&app, 120, 40);
        let area = hits
            .regions()
            .find(|(_, target)| *target == HitTarget::CarouselArea)
            .map(|(rect, _)| *rect)
            .unwrap();
        app.hit_map = hits;
        app.pointer_moved(area.x + area.width / 2, area.y + 1);
        app.process_carousel_events(std::time::Instant::now());
        assert!(app.carousel.is_paused());
    }

    #[test]
    fn test_scrolling_away_from_still_pointer_resumes_autoplay() {
        let mut app = test_app();
        let start = std::time::Instant::now();
        app.scroll_to_section("learn");
        let (hits, _) = draw(&app, 120, 40);
        let area = hits
            .regions()
            .find(|(_, target)| *target == HitTarget::CarouselArea)
            .map(|(rect, _)| *rect)
            .unwrap();
        app.refresh_hit_map(hits);
        app.pointer_moved(area.x + area.width / 2, area.y + area.height / 2);
        app.process_carousel_events(start);
        assert!(app.carousel.is_paused());

        app.scroll_to_bottom();
        let (hits, _) = draw(&app, 120, 40);
        assert!(!hits.in_carousel(area.x + area.width / 2, area.y + area.height / 2));
        app.refresh_hit_map(hits);
        app.process_carousel_events(start);
        assert!(!app.carousel.is_paused());

        app.process_carousel_events(start + std::time::Duration::from_secs(6));
        assert_eq!(app.carousel.current_index(), 1);
    }

    #[test]
    fn test_narrow_terminal_collapses_navigation() {
        let mut app = test_app();
        app.resize(60, 30);
        let (hits, text) = draw(&app, 60, 30);
        assert!(text.contains("Menu"));
        assert!(has_target(&hits, HitTarget::MenuToggle));
        assert!(!has_target(&hits, HitTarget::Anchor("why")));
    }

    #[test]
    fn test_open_menu_lists_entries() {
        let mut app = test_app();
        app.resize(60, 30);
        app.toggle_nav_menu();
        let (hits, text) = draw(&app, 60, 30);
        assert!(text.contains("Join the Challenge"));
        assert!(has_target(&hits, HitTarget::Anchor("learn")));
    }

    #[test]
    fn test_signup_error_is_drawn() {
        let mut app = test_app();
        app.scroll_to_section("get-involved");
        app.submit_signup();
        let (hits, text) = draw(&app, 120, 40);
        assert!(text.contains("Please enter your email before joining."));
        assert!(has_target(&hits, HitTarget::Focusable(FocusTarget::EmailField)));
    }

    #[test]
    fn test_help_replaces_page() {
        let mut app = test_app();
        app.open_help();
        let (hits, text) = draw(&app, 120, 40);
        assert!(text.contains("Shortcuts"));
        assert_eq!(hits.regions().count(), 0);
    }
}
