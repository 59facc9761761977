use chrono::Datelike;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::app::{App, FocusTarget, HitMap, HitTarget};
use crate::content::{BRAND, CONTACT_LINKS, FOOTER_BLURB, FOOTER_EXPLORE, FOOTER_LEGAL, FOOTER_OWNER};
use crate::ui::components;

pub fn render_footer(buf: &mut Buffer, area: Rect, app: &App, hits: &mut HitMap) {
    let area = Rect {
        x: area.x + 2.min(area.width),
        width: area.width.saturating_sub(4),
        ..area
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Divider
            Constraint::Min(0),    // Columns
            Constraint::Length(3), // Copyright
        ])
        .split(area);

    if let [divider, columns, copyright] = &chunks[..] {
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray))
            .render(*divider, buf);
        render_columns(buf, *columns, app, hits);
        render_copyright(buf, *copyright);
    }
}

fn render_columns(buf: &mut Buffer, area: Rect, app: &App, hits: &mut HitMap) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    if let [brand, explore, legal] = &chunks[..] {
        render_brand(buf, *brand, app, hits);
        render_explore(buf, *explore, app, hits);
        render_legal(buf, *legal);
    }
}

fn render_brand(buf: &mut Buffer, area: Rect, app: &App, hits: &mut HitMap) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    if let [title, blurb, contacts] = &chunks[..] {
        Paragraph::new(Span::styled(
            format!("✦ {BRAND}"),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .render(*title, buf);
        Paragraph::new(Span::styled(FOOTER_BLURB, Style::default().fg(Color::Gray)))
            .wrap(Wrap { trim: true })
            .render(
                Rect {
                    width: blurb.width.saturating_sub(2),
                    ..*blurb
                },
                buf,
            );

        let focused = app.focused();
        let mut x = contacts.x;
        for (index, (label, _)) in CONTACT_LINKS.iter().enumerate() {
            let width = components::label_width(label) + 2;
            if x + width > contacts.right() {
                break;
            }
            let rect = Rect::new(x, contacts.y, width, contacts.height.min(1));
            let target = FocusTarget::Contact(index);
            components::render_button(
                buf,
                rect,
                label,
                Style::default().fg(Color::Cyan),
                focused == Some(target),
            );
            hits.push(rect, HitTarget::Focusable(target));
            x += width + 2;
        }
    }
}

fn render_explore(buf: &mut Buffer, area: Rect, app: &App, hits: &mut HitMap) {
    render_column_title(buf, area, "Explore");
    let focused = app.focused();
    for (index, (label, _)) in FOOTER_EXPLORE.iter().enumerate() {
        let Some(row) = column_row(area, index) else {
            break;
        };
        let rect = Rect {
            width: (components::label_width(label) + 2).min(row.width),
            ..row
        };
        let target = FocusTarget::Explore(index);
        components::render_button(
            buf,
            rect,
            label,
            Style::default().fg(Color::Gray),
            focused == Some(target),
        );
        hits.push(rect, HitTarget::Focusable(target));
    }
}

fn render_legal(buf: &mut Buffer, area: Rect) {
    render_column_title(buf, area, "Legal");
    for (index, label) in FOOTER_LEGAL.iter().enumerate() {
        let Some(row) = column_row(area, index) else {
            break;
        };
        Paragraph::new(Span::styled(
            format!(" {label}"),
            Style::default().fg(Color::DarkGray),
        ))
        .render(row, buf);
    }
}

fn render_column_title(buf: &mut Buffer, area: Rect, title: &str) {
    Paragraph::new(Span::styled(
        format!(" {title}"),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .render(Rect { height: area.height.min(1), ..area }, buf);
}

/// Row of the `index`-th link under a column title
fn column_row(area: Rect, index: usize) -> Option<Rect> {
    let offset = u16::try_from(index).ok()?.checked_add(2)?;
    (offset < area.height).then(|| Rect::new(area.x, area.y + offset, area.width, 1))
}

fn render_copyright(buf: &mut Buffer, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    block.render(area, buf);

    let year = chrono::Local::now().year();
    Paragraph::new(Line::from(Span::styled(
        format!("© {year} {FOOTER_OWNER}. All rights reserved."),
        Style::default().fg(Color::DarkGray),
    )))
    .render(inner, buf);
    Paragraph::new(Line::from(vec![
        Span::styled("Built with ", Style::default().fg(Color::DarkGray)),
        Span::styled("♥", Style::default().fg(Color::LightRed)),
        Span::styled(" and AI", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Right)
    .render(inner, buf);
}
