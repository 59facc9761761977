//! Page geometry and scroll navigation.
//!
//! The page is one tall virtual column of sections. The navbar is drawn
//! over the first [`HEADER_HEIGHT`] screen rows, so anchors land just
//! below it.

use crate::content::{MISSIONS, NAV_ITEMS, STORIES, WHY_CARDS};

pub const HEADER_HEIGHT: usize = 3;
/// Extra rows left between the navbar and a scrolled-to section
pub const SCROLL_GAP: usize = 1;
/// How far below the top edge the scroll spy probes
pub const SPY_MARGIN: usize = 5;
/// Offset past which the navbar switches to its solid style
pub const SCROLLED_THRESHOLD: usize = 1;
/// Terminals narrower than this get the collapsed navigation menu
pub const COMPACT_NAV_WIDTH: u16 = 80;

pub const HERO_MIN_HEIGHT: usize = 24;
pub const SECTION_HEADING_HEIGHT: usize = 7;
pub const WHY_CARD_HEIGHT: usize = 9;
pub const STORY_CARD_HEIGHT: usize = 9;
pub const STORIES_FOOTER_HEIGHT: usize = 3;
pub const CAROUSEL_CARD_HEIGHT: usize = 14;
pub const CAROUSEL_INDICATOR_HEIGHT: usize = 3;
pub const MISSION_CARD_HEIGHT: usize = 9;
pub const SIGNUP_HEIGHT: usize = 12;
pub const FOOTER_HEIGHT: usize = 14;
pub const SECTION_PADDING: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Hero,
    Why,
    Stories,
    Learn,
    GetInvolved,
    Footer,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::Why,
        SectionId::Stories,
        SectionId::Learn,
        SectionId::GetInvolved,
        SectionId::Footer,
    ];

    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Why => "why",
            SectionId::Stories => "stories",
            SectionId::Learn => "learn",
            SectionId::GetInvolved => "get-involved",
            SectionId::Footer => "footer",
        }
    }

    /// Resolves a fragment. `main` wraps the whole page and lands on the hero.
    #[must_use]
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.trim_start_matches('#');
        if anchor == "main" {
            return Some(SectionId::Hero);
        }
        Self::ALL
            .into_iter()
            .find(|section| section.anchor() == anchor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub id: SectionId,
    pub top: usize,
    pub height: usize,
}

impl SectionSpan {
    #[must_use]
    pub fn bottom(&self) -> usize {
        self.top + self.height
    }
}

/// Number of grid columns for a card grid at `width`
#[must_use]
pub fn grid_columns(width: u16, breakpoints: &[(u16, usize)]) -> usize {
    breakpoints
        .iter()
        .find(|(min_width, _)| width >= *min_width)
        .map_or(1, |(_, columns)| *columns)
}

pub const WHY_BREAKPOINTS: [(u16, usize); 1] = [(90, 3)];
pub const STORY_BREAKPOINTS: [(u16, usize); 2] = [(120, 4), (70, 2)];
pub const MISSION_BREAKPOINTS: [(u16, usize); 1] = [(80, 2)];

fn grid_rows(items: usize, columns: usize) -> usize {
    items.div_ceil(columns.max(1))
}

/// Vertical placement of every section for a given terminal size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub width: u16,
    pub viewport_height: usize,
    sections: Vec<SectionSpan>,
}

impl PageLayout {
    pub fn compute(width: u16, viewport_height: u16) -> Self {
        let viewport_height = usize::from(viewport_height);
        let mut top = 0;
        let sections = SectionId::ALL
            .into_iter()
            .map(|id| {
                let height = section_height(id, width, viewport_height);
                let span = SectionSpan { id, top, height };
                top += height;
                span
            })
            .collect();
        Self {
            width,
            viewport_height,
            sections,
        }
    }

    #[must_use]
    pub fn sections(&self) -> &[SectionSpan] {
        &self.sections
    }

    #[must_use]
    pub fn section(&self, id: SectionId) -> Option<SectionSpan> {
        self.sections.iter().copied().find(|span| span.id == id)
    }

    #[must_use]
    pub fn total_height(&self) -> usize {
        self.sections.last().map_or(0, SectionSpan::bottom)
    }

    #[must_use]
    pub fn max_offset(&self) -> usize {
        self.total_height().saturating_sub(self.viewport_height)
    }
}

#[must_use]
pub fn section_height(id: SectionId, width: u16, viewport_height: usize) -> usize {
    match id {
        SectionId::Hero => viewport_height.max(HERO_MIN_HEIGHT),
        SectionId::Why => {
            let rows = grid_rows(WHY_CARDS.len(), grid_columns(width, &WHY_BREAKPOINTS));
            SECTION_HEADING_HEIGHT + rows * WHY_CARD_HEIGHT + SECTION_PADDING
        }
        SectionId::Stories => {
            let rows = grid_rows(STORIES.len(), grid_columns(width, &STORY_BREAKPOINTS));
            SECTION_HEADING_HEIGHT + rows * STORY_CARD_HEIGHT + STORIES_FOOTER_HEIGHT + SECTION_PADDING
        }
        SectionId::Learn => {
            SECTION_HEADING_HEIGHT + CAROUSEL_CARD_HEIGHT + CAROUSEL_INDICATOR_HEIGHT + SECTION_PADDING
        }
        SectionId::GetInvolved => {
            let rows = grid_rows(MISSIONS.len(), grid_columns(width, &MISSION_BREAKPOINTS));
            SECTION_HEADING_HEIGHT + rows * MISSION_CARD_HEIGHT + SIGNUP_HEIGHT + SECTION_PADDING
        }
        SectionId::Footer => FOOTER_HEIGHT,
    }
}

/// Offset that places `section_top` just below the fixed header
#[must_use]
pub fn target_scroll_offset(
    section_top: usize,
    header_height: usize,
    gap: usize,
    max_offset: usize,
) -> usize {
    section_top
        .saturating_sub(header_height + gap)
        .min(max_offset)
}

/// Navigation entry whose section contains the probe line, if any
#[must_use]
pub fn active_nav_section(layout: &PageLayout, offset: usize, margin: usize) -> Option<SectionId> {
    let probe = offset + margin;
    NAV_ITEMS
        .iter()
        .filter_map(|item| SectionId::from_anchor(item.id))
        .filter_map(|id| layout.section(id))
        .find(|span| span.top <= probe && span.bottom() > probe)
        .map(|span| span.id)
}

impl crate::app::App {
    /// Scrolls so the anchored section sits under the navbar and records the
    /// fragment as the current location. Unknown anchors only update the
    /// location.
    pub fn scroll_to_section(&mut self, anchor: &str) {
        let anchor = anchor.trim_start_matches('#');
        self.location = format!("#{anchor}");
        self.mode = crate::app::AppMode::Page;

        let Some(span) = SectionId::from_anchor(anchor).and_then(|id| self.layout.section(id)) else {
            tracing::debug!(anchor, "anchor has no section, location only");
            return;
        };
        self.scroll_offset = target_scroll_offset(
            span.top,
            HEADER_HEIGHT,
            SCROLL_GAP,
            self.layout.max_offset(),
        );
        tracing::debug!(anchor, offset = self.scroll_offset, "scrolled to section");
    }

    pub fn scroll_up_lines(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_down_lines(&mut self, lines: usize) {
        self.scroll_offset = self
            .scroll_offset
            .saturating_add(lines)
            .min(self.layout.max_offset());
    }

    pub fn scroll_up_page(&mut self) {
        self.scroll_up_lines(self.page_step());
    }

    pub fn scroll_down_page(&mut self) {
        self.scroll_down_lines(self.page_step());
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.layout.max_offset();
    }

    /// Ensures a section is on screen without moving when it already is
    pub fn reveal_section(&mut self, id: SectionId) {
        let Some(span) = self.layout.section(id) else {
            return;
        };
        let visible_top = self.scroll_offset + HEADER_HEIGHT;
        let visible_bottom = self.scroll_offset + self.layout.viewport_height;
        let fits = span.top >= visible_top && span.bottom() <= visible_bottom;
        let covers = span.top <= visible_top && span.bottom() >= visible_bottom;
        if !fits && !covers {
            self.scroll_to_section(id.anchor());
        }
    }

    #[must_use]
    pub fn active_section(&self) -> Option<SectionId> {
        active_nav_section(&self.layout, self.scroll_offset, SPY_MARGIN)
    }

    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scroll_offset >= SCROLLED_THRESHOLD
    }

    /// Recomputes geometry after a terminal resize, keeping the offset valid
    pub fn resize(&mut self, width: u16, height: u16) {
        self.layout = PageLayout::compute(width, height);
        self.swipe.cancel();
        self.clear_carousel_hover();
        self.scroll_offset = self.scroll_offset.min(self.layout.max_offset());
        self.starfield
            .resize(f64::from(width) * 2.0, f64::from(height) * 4.0);
    }

    fn page_step(&self) -> usize {
        self.layout
            .viewport_height
            .saturating_sub(HEADER_HEIGHT)
            .max(1)
    }
}
