use ratatui::layout::Rect;

use crate::app::scroll::SectionId;

#[derive(Debug, Clone)]
pub struct StatusToast {
    pub message: String,
    pub created_at: std::time::Instant,
}

impl StatusToast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self, duration: std::time::Duration) -> bool {
        self.created_at.elapsed() >= duration
    }
}

/// Every actionable element reachable with Tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    HeroPrimary,
    HeroStories,
    StoryVideo(usize),
    StoriesPlaylist,
    CarouselPrevious,
    CarouselNext,
    OpenTool,
    CopyPrompt,
    Mission(usize),
    EmailField,
    JoinButton,
    Contact(usize),
    Explore(usize),
}

impl FocusTarget {
    /// Section the element is drawn in
    #[must_use]
    pub fn section(self) -> SectionId {
        match self {
            FocusTarget::HeroPrimary | FocusTarget::HeroStories => SectionId::Hero,
            FocusTarget::StoryVideo(_) | FocusTarget::StoriesPlaylist => SectionId::Stories,
            FocusTarget::CarouselPrevious
            | FocusTarget::CarouselNext
            | FocusTarget::OpenTool
            | FocusTarget::CopyPrompt => SectionId::Learn,
            FocusTarget::Mission(_) | FocusTarget::EmailField | FocusTarget::JoinButton => {
                SectionId::GetInvolved
            }
            FocusTarget::Contact(_) | FocusTarget::Explore(_) => SectionId::Footer,
        }
    }
}

/// What a mouse press at a screen cell lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// In-page link to a section fragment
    Anchor(&'static str),
    MenuToggle,
    Focusable(FocusTarget),
    CarouselIndicator(usize),
    /// The whole carousel card; drives hover pause and drag gestures
    CarouselArea,
}

/// Clickable regions recorded during the last draw, in screen coordinates
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    /// Topmost clickable target, ignoring the carousel backdrop
    #[must_use]
    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        self.regions
            .iter()
            .rev()
            .filter(|(_, target)| *target != HitTarget::CarouselArea)
            .find(|(area, _)| contains(*area, column, row))
            .map(|(_, target)| *target)
    }

    #[must_use]
    pub fn in_carousel(&self, column: u16, row: u16) -> bool {
        self.regions
            .iter()
            .any(|(area, target)| *target == HitTarget::CarouselArea && contains(*area, column, row))
    }

    pub fn regions(&self) -> impl Iterator<Item = &(Rect, HitTarget)> {
        self.regions.iter()
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
