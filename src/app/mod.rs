mod carousel;
mod focus;
mod help;
mod menu;
mod navigation;
mod pointer;
pub mod scroll;
mod signup;
mod starfield;
mod text_input;
mod types;

pub use carousel::{CarouselEvent, key_event};
pub use menu::nav_menu_entries;
pub use navigation::Navigable;
pub use signup::build_signup_url;
pub use types::*;

use carousel::{Carousel, SwipeTracker};
use focus::{FocusRing, focus_order};
use starfield::Starfield;
use text_input::TextInput;

use crate::config::Config;
use crate::content::TOOLS;
use crate::services::{ClipboardService, CopyMethod, SystemOpener, UrlOpener};
use scroll::PageLayout;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::{Duration, Instant};

/// Longest email the signup box accepts
const EMAIL_MAX_CHARS: usize = 254;
const TOAST_TTL: Duration = Duration::from_secs(3);

/// Application mode state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Page,
    NavMenu,
    Help,
    EmailInput,
}

/// Main application state
pub struct App {
    pub mode: AppMode,
    pub should_quit: bool,
    pub config: Config,

    // Page geometry
    pub layout: PageLayout,
    pub scroll_offset: usize,
    pub location: String,
    pub nav_menu_index: usize,

    // Tools carousel
    pub carousel: Carousel,
    carousel_tx: Sender<CarouselEvent>,
    carousel_rx: Receiver<CarouselEvent>,
    pub swipe: SwipeTracker,
    pub hovering_carousel: bool,
    pub pointer: Option<(u16, u16)>,

    // Hero animation
    pub starfield: Starfield,
    pub started_at: Instant,
    pub last_frame_tick: Option<Instant>,

    // Focus, forms and feedback
    pub focus: FocusRing,
    pub email_input: TextInput,
    pub signup_error: Option<StatusToast>,
    pub status_toast: Option<StatusToast>,
    pub hit_map: HitMap,

    clipboard_service: ClipboardService,
    opener: Box<dyn UrlOpener>,
}

impl App {
    /// Creates the application with the system clipboard and URL opener
    pub fn new(config: Config) -> Self {
        Self::with_services(config, ClipboardService::new(), Box::new(SystemOpener))
    }

    pub fn with_services(
        config: Config,
        clipboard_service: ClipboardService,
        opener: Box<dyn UrlOpener>,
    ) -> Self {
        let now = Instant::now();
        let (width, height) = (80, 24);
        let (carousel_tx, carousel_rx) = channel();
        let starfield = Starfield::new(
            config.hero.star_count,
            f64::from(width) * 2.0,
            f64::from(height) * 4.0,
            &mut rand::rng(),
        );

        Self {
            mode: AppMode::Page,
            should_quit: false,
            layout: PageLayout::compute(width, height),
            scroll_offset: 0,
            location: String::new(),
            nav_menu_index: 0,
            carousel: Carousel::new(TOOLS.len(), config.carousel.autoplay_interval(), now),
            carousel_tx,
            carousel_rx,
            swipe: SwipeTracker::default(),
            hovering_carousel: false,
            pointer: None,
            starfield,
            started_at: now,
            last_frame_tick: None,
            focus: FocusRing::new(focus_order()),
            email_input: TextInput::with_limit(EMAIL_MAX_CHARS),
            signup_error: None,
            status_toast: None,
            hit_map: HitMap::default(),
            clipboard_service,
            opener,
            config,
        }
    }

    /// Queues a carousel event; it takes effect on the next
    /// [`App::process_carousel_events`]
    pub fn dispatch_carousel(&mut self, event: CarouselEvent) {
        if self.carousel_tx.send(event).is_err() {
            tracing::warn!(?event, "carousel channel closed");
        }
    }

    /// Folds queued events into the carousel, then fires a due autoplay
    pub fn process_carousel_events(&mut self, now: Instant) {
        while let Ok(event) = self.carousel_rx.try_recv() {
            self.carousel.apply(event, now);
        }
        if self.carousel.tick(now) {
            tracing::debug!(index = self.carousel.current_index(), "autoplay advanced");
        }
    }

    #[must_use]
    pub fn current_tool(&self) -> Option<&'static crate::content::Tool> {
        TOOLS.get(self.carousel.current_index())
    }

    pub fn copy_current_prompt(&mut self) {
        let Some(tool) = self.current_tool() else {
            return;
        };
        match self.clipboard_service.copy_text(tool.sample_prompt) {
            CopyMethod::System | CopyMethod::Terminal => self.show_status_toast("PROMPT COPIED"),
            CopyMethod::Skipped | CopyMethod::Failed => {}
        }
    }

    /// Opens an external link. Failures only produce a toast.
    pub fn open_url(&mut self, url: &str) {
        match self.opener.open(url) {
            Ok(()) => self.show_status_toast("OPENED IN BROWSER"),
            Err(error) => {
                tracing::warn!(%error, url, "could not open link");
                self.show_status_toast("OPEN FAILED");
            }
        }
    }

    pub fn show_status_toast(&mut self, message: impl Into<String>) {
        self.status_toast = Some(StatusToast::new(message));
    }

    pub fn clear_expired_status_toast(&mut self) {
        let should_clear = self
            .status_toast
            .as_ref()
            .is_some_and(|toast| toast.is_expired(TOAST_TTL));
        if should_clear {
            self.status_toast = None;
        }
    }

    #[must_use]
    pub fn status_toast_message(&self) -> Option<&str> {
        self.status_toast.as_ref().map(|toast| toast.message.as_str())
    }

    #[must_use]
    pub fn elapsed_ms(&self, now: Instant) -> f64 {
        now.saturating_duration_since(self.started_at).as_secs_f64() * 1000.0
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use color_eyre::Result;
    use std::cell::RefCell;

    thread_local! {
        static OPENED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    struct RecordingOpener;

    impl UrlOpener for RecordingOpener {
        fn open(&mut self, url: &str) -> Result<()> {
            OPENED.with(|opened| opened.borrow_mut().push(url.to_string()));
            Ok(())
        }
    }

    /// 120x40 page with a recording opener and a discarding clipboard
    pub fn test_app() -> App {
        OPENED.with(|opened| opened.borrow_mut().clear());
        let mut config = Config::default();
        config.hero.star_count = 10;
        let mut app = App::with_services(
            config,
            ClipboardService::terminal_only(Box::new(std::io::sink())),
            Box::new(RecordingOpener),
        );
        app.resize(120, 40);
        app
    }

    /// Links opened by the current test's app
    pub fn opened_urls() -> Vec<String> {
        OPENED.with(|opened| opened.borrow().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_support::test_app;

    #[test]
    fn test_events_queue_until_processed() {
        let mut app = test_app();
        let now = Instant::now();
        app.dispatch_carousel(CarouselEvent::Next);
        app.dispatch_carousel(CarouselEvent::Next);
        assert_eq!(app.carousel.current_index(), 0);
        app.process_carousel_events(now);
        assert_eq!(app.carousel.current_index(), 2);
    }

    #[test]
    fn test_last_writer_wins_across_channels() {
        let mut app = test_app();
        let now = Instant::now();
        app.dispatch_carousel(CarouselEvent::JumpTo(4));
        app.dispatch_carousel(CarouselEvent::Previous);
        app.dispatch_carousel(CarouselEvent::JumpTo(1));
        app.process_carousel_events(now);
        assert_eq!(app.carousel.current_index(), 1);
    }

    #[test]
    fn test_autoplay_fires_through_processing() {
        let mut app = test_app();
        let later = Instant::now() + Duration::from_secs(6);
        app.process_carousel_events(later);
        assert_eq!(app.carousel.current_index(), 1);
    }

    #[test]
    fn test_copy_prompt_shows_toast() {
        let mut app = test_app();
        app.copy_current_prompt();
        assert_eq!(app.status_toast_message(), Some("PROMPT COPIED"));
    }

    #[test]
    fn test_current_tool_follows_index() {
        let mut app = test_app();
        app.dispatch_carousel(CarouselEvent::Previous);
        app.process_carousel_events(Instant::now());
        assert_eq!(app.current_tool().map(|tool| tool.id), TOOLS.last().map(|tool| tool.id));
    }
}
