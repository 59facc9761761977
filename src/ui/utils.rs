use ratatui::{buffer::Buffer, layout::Rect};

use crate::app::HitMap;

/// Creates a rectangle of at most `width` x `height` centred in `r`
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(
        r.x + (r.width - width) / 2,
        r.y + (r.height - height) / 2,
        width,
        height,
    )
}

/// Centred horizontal slice of `r`, at most `width` columns wide
pub fn centered_columns(width: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    Rect::new(r.x + (r.width - width) / 2, r.y, width, r.height)
}

/// Converts a page height to terminal rows, saturating
pub fn rows(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Card grid area below a section heading, with a two-column margin
pub fn grid_area(section: Rect, heading_height: usize) -> Rect {
    let heading = rows(heading_height).min(section.height);
    Rect::new(
        section.x + 2.min(section.width),
        section.y + heading,
        section.width.saturating_sub(4),
        section.height - heading,
    )
}

/// Window of the page that is currently on screen
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    /// Screen area the page is drawn into
    pub area: Rect,
    /// First page row shown at `area.y`
    pub offset: usize,
    /// Screen rows above this one are covered by the navbar
    pub clip_top: u16,
}

impl Viewport {
    /// Screen row of a page row, if it is visible
    fn screen_row(&self, page_row: usize) -> Option<u16> {
        let relative = page_row.checked_sub(self.offset)?;
        let relative = u16::try_from(relative).ok()?;
        (relative < self.area.height).then(|| self.area.y + relative)
    }
}

/// Copies the rows of a section buffer rendered at page row `section_top`
/// that fall inside the viewport
pub fn blit_section(scratch: &Buffer, section_top: usize, viewport: Viewport, target: &mut Buffer) {
    let local = scratch.area;
    for local_row in 0..local.height {
        let Some(screen_y) = viewport.screen_row(section_top + usize::from(local_row)) else {
            continue;
        };
        for column in 0..local.width.min(viewport.area.width) {
            let source = scratch.cell((local.x + column, local.y + local_row));
            let destination = target.cell_mut((viewport.area.x + column, screen_y));
            if let (Some(source), Some(destination)) = (source, destination) {
                *destination = source.clone();
            }
        }
    }
}

/// Moves section-local hit regions to screen coordinates, dropping the
/// parts that are scrolled away or hidden under the navbar
pub fn translate_hits(local: HitMap, section_top: usize, viewport: Viewport, hits: &mut HitMap) {
    let clip_top = i64::from(viewport.area.y.max(viewport.clip_top));
    let clip_bottom = i64::from(viewport.area.bottom());
    let shift = i64::try_from(section_top).unwrap_or(i64::MAX)
        - i64::try_from(viewport.offset).unwrap_or(i64::MAX)
        + i64::from(viewport.area.y);

    for (rect, target) in local.regions() {
        let top = (i64::from(rect.y) + shift).max(clip_top);
        let bottom = (i64::from(rect.bottom()) + shift).min(clip_bottom);
        if bottom <= top {
            continue;
        }
        let (Ok(y), Ok(height)) = (u16::try_from(top), u16::try_from(bottom - top)) else {
            continue;
        };
        hits.push(
            Rect::new(viewport.area.x + rect.x, y, rect.width, height),
            *target,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::HitTarget;

    #[test]
    fn test_centered_rect_never_exceeds_container() {
        let r = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(10, 4, r), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect(50, 50, r), r);
    }

    #[test]
    fn test_blit_copies_only_visible_rows() {
        let mut scratch = Buffer::empty(Rect::new(0, 0, 4, 4));
        for row in 0..4u16 {
            scratch.set_string(0, row, format!("r{row}"), ratatui::style::Style::default());
        }
        let mut target = Buffer::empty(Rect::new(0, 0, 4, 3));
        let viewport = Viewport {
            area: Rect::new(0, 0, 4, 3),
            offset: 12,
            clip_top: 0,
        };
        // section starts at page row 10, so rows 2 and 3 land on screen rows 0 and 1
        blit_section(&scratch, 10, viewport, &mut target);
        assert_eq!(target.cell((1, 0)).map(|cell| cell.symbol()), Some("2"));
        assert_eq!(target.cell((1, 1)).map(|cell| cell.symbol()), Some("3"));
        assert_eq!(target.cell((1, 2)).map(|cell| cell.symbol()), Some(" "));
    }

    #[test]
    fn test_hits_are_shifted_and_clipped() {
        let mut local = HitMap::default();
        local.push(Rect::new(2, 0, 5, 4), HitTarget::MenuToggle);
        local.push(Rect::new(0, 2, 3, 4), HitTarget::CarouselArea);
        local.push(Rect::new(2, 5, 5, 2), HitTarget::Anchor("why"));
        local.push(Rect::new(2, 30, 5, 2), HitTarget::Anchor("learn"));
        let viewport = Viewport {
            area: Rect::new(0, 0, 40, 20),
            offset: 101,
            clip_top: 3,
        };
        let mut hits = HitMap::default();
        translate_hits(local, 100, viewport, &mut hits);
        let regions: Vec<_> = hits.regions().copied().collect();
        assert_eq!(
            regions,
            vec![
                (Rect::new(0, 3, 3, 2), HitTarget::CarouselArea),
                (Rect::new(2, 4, 5, 2), HitTarget::Anchor("why")),
            ]
        );
    }
}
