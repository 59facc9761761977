use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};
use std::time::Instant;

use crate::app::scroll::{CAROUSEL_CARD_HEIGHT, CAROUSEL_INDICATOR_HEIGHT, SECTION_HEADING_HEIGHT};
use crate::app::{App, FocusTarget, HitMap, HitTarget};
use crate::content::{TOOLS, TOOLS_HEADING, TOOLS_INTRO, Tool};
use crate::ui::components;
use crate::ui::utils::{centered_columns, grid_area, rows};

const BACKDROP: Color = Color::Rgb(15, 23, 42);
const ARROW_WIDTH: u16 = 7;
const CARD_MAX_WIDTH: u16 = 96;

pub fn render_carousel_section(buf: &mut Buffer, area: Rect, app: &App, hits: &mut HitMap) {
    Block::default()
        .style(Style::default().bg(BACKDROP))
        .render(area, buf);
    components::render_section_heading(buf, area, TOOLS_HEADING, TOOLS_INTRO, true);

    let body = grid_area(area, SECTION_HEADING_HEIGHT);
    let container = Rect {
        height: rows(CAROUSEL_CARD_HEIGHT + CAROUSEL_INDICATOR_HEIGHT).min(body.height),
        ..centered_columns(CARD_MAX_WIDTH + ARROW_WIDTH * 2, body)
    };
    hits.push(container, HitTarget::CarouselArea);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(rows(CAROUSEL_CARD_HEIGHT)),
            Constraint::Length(rows(CAROUSEL_INDICATOR_HEIGHT)),
        ])
        .split(container);

    if let [stage, indicators] = &chunks[..] {
        render_stage(buf, *stage, app, hits);
        render_indicators(buf, *indicators, app, hits);
    }
}

fn render_stage(buf: &mut Buffer, area: Rect, app: &App, hits: &mut HitMap) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(ARROW_WIDTH),
            Constraint::Min(0),
            Constraint::Length(ARROW_WIDTH),
        ])
        .split(area);

    if let [previous, card, next] = &chunks[..] {
        let focused = app.focused();
        render_arrow(buf, *previous, "‹", FocusTarget::CarouselPrevious, focused, hits);
        render_arrow(buf, *next, "›", FocusTarget::CarouselNext, focused, hits);
        if let Some(tool) = app.current_tool() {
            render_tool_card(buf, *card, tool, app, hits);
        }
    }
}

fn render_arrow(
    buf: &mut Buffer,
    column: Rect,
    glyph: &str,
    target: FocusTarget,
    focused: Option<FocusTarget>,
    hits: &mut HitMap,
) {
    let button = Rect::new(
        column.x + 1,
        column.y + column.height.saturating_sub(3) / 2,
        column.width.saturating_sub(2),
        3.min(column.height),
    );
    let border = if focused == Some(target) {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    Paragraph::new(Span::styled(
        glyph,
        components::button_style(
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            focused == Some(target),
        ),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border)),
    )
    .render(button, buf);
    hits.push(button, HitTarget::Focusable(target));
}

fn render_tool_card(buf: &mut Buffer, area: Rect, tool: &Tool, app: &App, hits: &mut HitMap) {
    let inner = components::render_card(buf, area, tool.color, false);
    let inner = Rect {
        x: inner.x + 2,
        width: inner.width.saturating_sub(4),
        ..inner
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Name
            Constraint::Length(2), // Description
            Constraint::Length(1), // Prompt label
            Constraint::Length(3), // Prompt
            Constraint::Length(2), // Actions
            Constraint::Length(1), // Status
        ])
        .split(inner);

    if let [_, name, description, prompt_label, prompt, actions, status] = &chunks[..] {
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" {} ", tool.glyph),
                Style::default()
                    .fg(Color::Black)
                    .bg(tool.color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                tool.name,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(" AI TOOL ", Style::default().fg(tool.color).bg(Color::Rgb(30, 41, 59))),
        ]))
        .render(*name, buf);

        Paragraph::new(Span::styled(tool.description, Style::default().fg(Color::Gray)))
            .wrap(Wrap { trim: true })
            .render(*description, buf);

        Paragraph::new(Span::styled(
            "Try this prompt:",
            Style::default().fg(Color::DarkGray),
        ))
        .render(*prompt_label, buf);

        Paragraph::new(Span::styled(
            format!("\"{}\"", tool.sample_prompt),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::ITALIC),
        ))
        .wrap(Wrap { trim: true })
        .render(*prompt, buf);

        render_tool_actions(buf, *actions, app, hits);
        render_status(buf, *status, app);
    }
}

fn render_tool_actions(buf: &mut Buffer, area: Rect, app: &App, hits: &mut HitMap) {
    let open_label = "Open Tool ↗";
    let copy_label = "Copy Prompt ⧉";
    let focused = app.focused();
    let buttons = components::button_row(area, &[open_label, copy_label]);
    let actions = [
        (
            open_label,
            FocusTarget::OpenTool,
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        (
            copy_label,
            FocusTarget::CopyPrompt,
            Style::default().fg(Color::White).bg(Color::Rgb(51, 65, 85)),
        ),
    ];
    for (rect, (label, target, style)) in buttons.into_iter().zip(actions) {
        components::render_button(buf, rect, label, style, focused == Some(target));
        hits.push(rect, HitTarget::Focusable(target));
    }
}

fn render_status(buf: &mut Buffer, area: Rect, app: &App) {
    let status = match app.carousel.time_until_advance(Instant::now()) {
        Some(remaining) => format!("⏵ next in {}s", remaining.as_millis().div_ceil(1000)),
        None => "⏸ paused".to_string(),
    };
    Paragraph::new(Span::styled(status, Style::default().fg(Color::DarkGray))).render(area, buf);
    Paragraph::new(Span::styled(
        "←/→ browse · drag to swipe",
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Right)
    .render(area, buf);
}

fn render_indicators(buf: &mut Buffer, area: Rect, app: &App, hits: &mut HitMap) {
    let current = app.carousel.current_index();
    let labels: Vec<&str> = (0..app.carousel.item_count())
        .map(|index| if index == current { "━━━" } else { "•" })
        .collect();
    let row = Rect {
        y: area.y + 1,
        height: 1.min(area.height.saturating_sub(1)),
        ..area
    };

    for (index, (rect, label)) in components::button_row(row, &labels)
        .into_iter()
        .zip(&labels)
        .enumerate()
    {
        let color = if index == current {
            TOOLS.get(index).map_or(Color::White, |tool| tool.color)
        } else {
            Color::DarkGray
        };
        components::render_button(buf, rect, label, Style::default().fg(color), false);
        hits.push(rect, HitTarget::CarouselIndicator(index));
    }
}
