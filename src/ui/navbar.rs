use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::scroll::{COMPACT_NAV_WIDTH, HEADER_HEIGHT, SectionId};
use crate::app::{App, AppMode, HitMap, HitTarget};
use crate::content::{BRAND, NAV_ITEMS};
use crate::ui::components;
use crate::ui::utils::rows;

const NAV_GAP: u16 = 3;
const CTA_LABEL: &str = "Join Community";

pub fn render_navbar(f: &mut Frame, app: &App, hits: &mut HitMap) {
    let screen = f.area();
    let area = Rect {
        height: rows(HEADER_HEIGHT).min(screen.height),
        ..screen
    };

    if app.is_scrolled() {
        f.render_widget(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray))
                .style(Style::default().bg(Color::Rgb(17, 24, 39))),
            area,
        );
    }

    let row = Rect::new(area.x + 2.min(area.width), area.y + 1.min(area.height), area.width.saturating_sub(4), 1);
    if row.height == 0 || row.y >= area.bottom() {
        return;
    }

    let logo = format!("✦ {BRAND}");
    let logo_rect = Rect {
        width: components::label_width(&logo).min(row.width),
        ..row
    };
    let logo_color = if app.is_scrolled() { Color::LightMagenta } else { Color::White };
    f.render_widget(
        Paragraph::new(Span::styled(
            logo,
            Style::default().fg(logo_color).add_modifier(Modifier::BOLD),
        )),
        logo_rect,
    );
    hits.push(logo_rect, HitTarget::Anchor("main"));

    if screen.width < COMPACT_NAV_WIDTH {
        render_menu_toggle(f, app, row, hits);
    } else {
        render_links(f, app, row, hits);
    }
}

fn render_menu_toggle(f: &mut Frame, app: &App, row: Rect, hits: &mut HitMap) {
    let label = if app.mode == AppMode::NavMenu { "✕ Close" } else { "☰ Menu" };
    let width = components::label_width(label) + 2;
    let rect = Rect {
        x: row.right().saturating_sub(width),
        width: width.min(row.width),
        ..row
    };
    f.render_widget(
        Paragraph::new(Span::styled(
            format!(" {label} "),
            Style::default().fg(Color::White).bg(Color::Magenta),
        )),
        rect,
    );
    hits.push(rect, HitTarget::MenuToggle);
}

/// Lays the links out right to left, call to action last
fn render_links(f: &mut Frame, app: &App, row: Rect, hits: &mut HitMap) {
    let cta_width = components::label_width(CTA_LABEL) + 2;
    let mut right = row.right();
    let cta = Rect {
        x: right.saturating_sub(cta_width),
        width: cta_width,
        ..row
    };
    f.render_widget(
        Paragraph::new(Span::styled(
            format!(" {CTA_LABEL} "),
            Style::default()
                .fg(Color::White)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        cta,
    );
    hits.push(cta, HitTarget::Anchor(SectionId::GetInvolved.anchor()));
    right = cta.x.saturating_sub(NAV_GAP);

    let active = app.active_section();
    for (index, item) in NAV_ITEMS.iter().enumerate().rev() {
        let number = format!("{} ", index + 1);
        let width = components::label_width(&number) + components::label_width(item.label);
        if right < row.x + width {
            break;
        }
        let rect = Rect {
            x: right - width,
            width,
            ..row
        };
        let is_active = active.is_some_and(|section| section.anchor() == item.id);
        let label_style = if is_active {
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(number, Style::default().fg(Color::DarkGray)),
                Span::styled(item.label, label_style),
            ])),
            rect,
        );
        hits.push(rect, HitTarget::Anchor(item.id));
        right = rect.x.saturating_sub(NAV_GAP);
    }
}
