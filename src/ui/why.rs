use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::app::scroll::{SECTION_HEADING_HEIGHT, WHY_BREAKPOINTS, WHY_CARD_HEIGHT, grid_columns};
use crate::content::{WHY_CARDS, WHY_HEADING, WHY_INTRO, WhyCard};
use crate::ui::components;
use crate::ui::utils::{grid_area, rows};

pub fn render_why(buf: &mut Buffer, area: Rect) {
    components::render_section_heading(buf, area, WHY_HEADING, WHY_INTRO, false);

    let grid = grid_area(area, SECTION_HEADING_HEIGHT);
    let columns = grid_columns(area.width, &WHY_BREAKPOINTS);
    let cells = components::grid_cells(grid, WHY_CARDS.len(), columns, rows(WHY_CARD_HEIGHT), 2);
    for (card, cell) in WHY_CARDS.iter().zip(cells) {
        render_why_card(buf, cell, card);
    }
}

fn render_why_card(buf: &mut Buffer, area: Rect, card: &WhyCard) {
    let inner = components::render_card(buf, area, card.accent, false);
    Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", card.glyph),
                Style::default().fg(Color::Black).bg(card.accent),
            ),
            Span::raw(" "),
            Span::styled(
                card.title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(card.body, Style::default().fg(Color::Gray))),
    ])
    .wrap(Wrap { trim: true })
    .render(inner, buf);
}
