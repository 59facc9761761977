use crate::app::{App, AppMode, CarouselEvent, FocusTarget, Navigable};
use crate::content::{CONTACT_LINKS, FOOTER_EXPLORE, MISSIONS, STORIES, TOOLS};

/// Tab order of the page, top to bottom
#[must_use]
pub fn focus_order() -> Vec<FocusTarget> {
    let mut targets = vec![FocusTarget::HeroPrimary, FocusTarget::HeroStories];
    targets.extend((0..STORIES.len()).map(FocusTarget::StoryVideo));
    targets.push(FocusTarget::StoriesPlaylist);
    targets.extend([
        FocusTarget::CarouselPrevious,
        FocusTarget::OpenTool,
        FocusTarget::CopyPrompt,
        FocusTarget::CarouselNext,
    ]);
    targets.extend((0..MISSIONS.len()).map(FocusTarget::Mission));
    targets.extend([FocusTarget::EmailField, FocusTarget::JoinButton]);
    targets.extend((0..CONTACT_LINKS.len()).map(FocusTarget::Contact));
    targets.extend((0..FOOTER_EXPLORE.len()).map(FocusTarget::Explore));
    targets
}

/// Keyboard focus over the actionable elements. Nothing is focused until
/// the first Tab.
#[derive(Debug, Clone)]
pub struct FocusRing {
    targets: Vec<FocusTarget>,
    index: usize,
    active: bool,
}

impl FocusRing {
    pub fn new(targets: Vec<FocusTarget>) -> Self {
        Self {
            targets,
            index: 0,
            active: false,
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<FocusTarget> {
        if !self.active {
            return None;
        }
        self.targets.get(self.index).copied()
    }

    /// Focuses a specific target, e.g. after a mouse click
    pub fn focus(&mut self, target: FocusTarget) {
        if let Some(position) = self.targets.iter().position(|candidate| *candidate == target) {
            self.index = position;
            self.active = true;
        }
    }

    pub fn clear(&mut self) {
        self.active = false;
    }

    pub fn forward(&mut self) {
        if self.active {
            self.next_item();
        } else {
            self.active = true;
            self.select_first();
        }
    }

    pub fn backward(&mut self) {
        if self.active {
            self.previous_item();
        } else {
            self.active = true;
            self.select_last();
        }
    }
}

impl Navigable for FocusRing {
    fn item_count(&self) -> usize {
        self.targets.len()
    }

    fn selected_index(&self) -> usize {
        self.index
    }

    fn set_selected_index(&mut self, index: usize) {
        self.index = index;
    }
}

impl App {
    pub fn focus_next(&mut self) {
        self.focus.forward();
        self.reveal_focused();
    }

    pub fn focus_previous(&mut self) {
        self.focus.backward();
        self.reveal_focused();
    }

    #[must_use]
    pub fn focused(&self) -> Option<FocusTarget> {
        self.focus.current()
    }

    fn reveal_focused(&mut self) {
        if let Some(target) = self.focus.current() {
            self.reveal_section(target.section());
        }
    }

    /// Activates the focused element, as Enter does
    pub fn activate_focused(&mut self) {
        if let Some(target) = self.focus.current() {
            self.activate(target);
        }
    }

    pub fn activate(&mut self, target: FocusTarget) {
        self.focus.focus(target);
        tracing::debug!(?target, "activating");
        match target {
            FocusTarget::HeroPrimary => {
                let url = self.config.links.form_link.clone();
                self.open_url(&url);
            }
            FocusTarget::HeroStories => self.scroll_to_section("stories"),
            FocusTarget::StoryVideo(index) => {
                if let Some(story) = STORIES.get(index) {
                    self.open_url(story.video_url);
                }
            }
            FocusTarget::StoriesPlaylist => {
                let url = self.config.links.stories_playlist.clone();
                self.open_url(&url);
            }
            FocusTarget::CarouselPrevious => self.dispatch_carousel(CarouselEvent::Previous),
            FocusTarget::CarouselNext => self.dispatch_carousel(CarouselEvent::Next),
            FocusTarget::OpenTool => {
                if let Some(tool) = TOOLS.get(self.carousel.current_index()) {
                    self.open_url(tool.href);
                }
            }
            FocusTarget::CopyPrompt => self.copy_current_prompt(),
            FocusTarget::Mission(index) => {
                if let Some(mission) = MISSIONS.get(index) {
                    let url = self.config.links.mission_form(mission.form).to_string();
                    self.open_url(&url);
                }
            }
            FocusTarget::EmailField => self.mode = AppMode::EmailInput,
            FocusTarget::JoinButton => self.submit_signup(),
            FocusTarget::Contact(index) => {
                if let Some((_, url)) = CONTACT_LINKS.get(index) {
                    self.open_url(url);
                }
            }
            FocusTarget::Explore(index) => {
                if let Some((_, anchor)) = FOOTER_EXPLORE.get(index) {
                    self.scroll_to_section(anchor);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::scroll::SectionId;
    use crate::app::test_support::{opened_urls, test_app};

    #[test]
    fn test_first_tab_focuses_hero() {
        let mut app = test_app();
        assert_eq!(app.focused(), None);
        app.focus_next();
        assert_eq!(app.focused(), Some(FocusTarget::HeroPrimary));
    }

    #[test]
    fn test_shift_tab_from_nothing_focuses_last() {
        let mut app = test_app();
        app.focus_previous();
        assert_eq!(app.focused(), focus_order().last().copied());
        assert_eq!(app.scroll_offset, app.layout.max_offset());
    }

    #[test]
    fn test_tab_reveals_target_section() {
        let mut app = test_app();
        for _ in 0..3 {
            app.focus_next();
        }
        assert_eq!(app.focused(), Some(FocusTarget::StoryVideo(0)));
        assert_eq!(app.active_section(), Some(SectionId::Stories));
    }

    #[test]
    fn test_focus_wraps_around() {
        let mut app = test_app();
        let total = focus_order().len();
        for _ in 0..=total {
            app.focus_next();
        }
        assert_eq!(app.focused(), Some(FocusTarget::HeroPrimary));
    }

    #[test]
    fn test_activate_story_opens_video() {
        let mut app = test_app();
        app.activate(FocusTarget::StoryVideo(1));
        assert_eq!(opened_urls(), vec![STORIES[1].video_url.to_string()]);
    }

    #[test]
    fn test_activate_mission_uses_configured_form() {
        let mut app = test_app();
        app.config.links.feedback_form_url = "https://example.com/feedback".to_string();
        app.activate(FocusTarget::Mission(3));
        assert_eq!(opened_urls(), vec!["https://example.com/feedback".to_string()]);
    }

    #[test]
    fn test_activate_open_tool_follows_carousel() {
        let mut app = test_app();
        app.activate(FocusTarget::CarouselNext);
        app.process_carousel_events(std::time::Instant::now());
        app.activate(FocusTarget::OpenTool);
        assert_eq!(opened_urls(), vec![TOOLS[1].href.to_string()]);
    }

    #[test]
    fn test_activate_email_field_enters_input_mode() {
        let mut app = test_app();
        app.activate(FocusTarget::EmailField);
        assert_eq!(app.mode, AppMode::EmailInput);
    }

    #[test]
    fn test_explore_link_scrolls() {
        let mut app = test_app();
        app.activate(FocusTarget::Explore(2));
        assert_eq!(app.location, "#learn");
        assert_eq!(app.active_section(), Some(SectionId::Learn));
    }
}
