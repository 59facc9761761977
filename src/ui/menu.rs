use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::scroll::HEADER_HEIGHT;
use crate::app::{App, HitMap, HitTarget, nav_menu_entries};
use crate::ui::utils::rows;

const MENU_WIDTH: u16 = 30;

pub fn render_nav_menu(frame: &mut Frame, app: &App, hits: &mut HitMap) {
    let screen = frame.area();
    let entries = nav_menu_entries();
    let height = u16::try_from(entries.len()).unwrap_or(0) + 2;
    let width = MENU_WIDTH.min(screen.width);
    let top = rows(HEADER_HEIGHT).min(screen.height);
    let area = Rect::new(
        screen.right().saturating_sub(width + 1).max(screen.x),
        top,
        width,
        height.min(screen.height - top),
    );

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Magenta))
        .title(" Navigate ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (index, entry) in entries.iter().enumerate() {
        let Ok(offset) = u16::try_from(index) else {
            break;
        };
        if offset >= inner.height {
            break;
        }
        let row = Rect::new(inner.x, inner.y + offset, inner.width, 1);
        let selected = index == app.nav_menu_index;

        let mut style = if entry.highlighted {
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        if selected {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let marker = if selected { "▶ " } else { "  " };

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(entry.label, style),
            ])),
            row,
        );
        hits.push(row, HitTarget::Anchor(entry.anchor));
    }
}
