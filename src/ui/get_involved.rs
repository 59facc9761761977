use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::app::scroll::{
    MISSION_BREAKPOINTS, MISSION_CARD_HEIGHT, SECTION_HEADING_HEIGHT, SIGNUP_HEIGHT, grid_columns,
};
use crate::app::{App, AppMode, FocusTarget, HitMap, HitTarget};
use crate::content::{
    MISSIONS, MISSIONS_HEADING, MISSIONS_INTRO, Mission, SIGNUP_BODY, SIGNUP_BUTTON,
    SIGNUP_FOOTNOTE, SIGNUP_HEADING, SIGNUP_PLACEHOLDER,
};
use crate::ui::components::{self, TextInputConfig};
use crate::ui::utils::{centered_columns, grid_area, rows};

const SIGNUP_MAX_WIDTH: u16 = 84;

pub fn render_get_involved(buf: &mut Buffer, area: Rect, app: &App, hits: &mut HitMap) {
    components::render_section_heading(buf, area, MISSIONS_HEADING, MISSIONS_INTRO, false);

    let grid = grid_area(area, SECTION_HEADING_HEIGHT);
    let columns = grid_columns(area.width, &MISSION_BREAKPOINTS);
    let cells = components::grid_cells(grid, MISSIONS.len(), columns, rows(MISSION_CARD_HEIGHT), 2);
    let focused = app.focused();
    let mut grid_bottom = grid.y;

    for (index, (mission, cell)) in MISSIONS.iter().zip(cells).enumerate() {
        let target = FocusTarget::Mission(index);
        render_mission_card(buf, cell, mission, focused == Some(target));
        hits.push(cell, HitTarget::Focusable(target));
        grid_bottom = grid_bottom.max(cell.bottom() + 1);
    }

    let signup = Rect {
        y: grid_bottom,
        height: rows(SIGNUP_HEIGHT)
            .saturating_sub(1)
            .min(area.bottom().saturating_sub(grid_bottom)),
        ..centered_columns(SIGNUP_MAX_WIDTH, grid)
    };
    render_signup(buf, signup, app, hits);
}

fn render_mission_card(buf: &mut Buffer, area: Rect, mission: &Mission, focused: bool) {
    let inner = components::render_card(buf, area, mission.accent, focused);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    if let [title, body, action] = &chunks[..] {
        Paragraph::new(Span::styled(
            mission.title,
            Style::default()
                .fg(mission.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .render(*title, buf);
        Paragraph::new(Span::styled(mission.instruction, Style::default().fg(Color::Gray)))
            .wrap(Wrap { trim: true })
            .render(*body, buf);
        components::render_button(
            buf,
            *action,
            &format!("{} →", mission.cta_text),
            Style::default().fg(Color::Black).bg(mission.accent),
            focused,
        );
    }
}

fn render_signup(buf: &mut Buffer, area: Rect, app: &App, hits: &mut HitMap) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Magenta))
        .style(Style::default().bg(Color::Rgb(17, 24, 39)));
    let inner = block.inner(area);
    block.render(area, buf);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Heading
            Constraint::Length(2), // Body
            Constraint::Length(3), // Form
            Constraint::Length(1), // Error
            Constraint::Length(1), // Footnote
        ])
        .split(inner);

    if let [heading, body, form, error, footnote] = &chunks[..] {
        Paragraph::new(Span::styled(
            SIGNUP_HEADING,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .render(*heading, buf);

        Paragraph::new(Span::styled(SIGNUP_BODY, Style::default().fg(Color::Gray)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(*body, buf);

        render_signup_form(buf, *form, app, hits);

        if let Some(message) = app.signup_error_message() {
            Paragraph::new(Span::styled(
                format!("⚠ {message}"),
                Style::default().fg(Color::LightRed),
            ))
            .alignment(Alignment::Center)
            .render(*error, buf);
        }

        Paragraph::new(Span::styled(
            SIGNUP_FOOTNOTE,
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center)
        .render(*footnote, buf);
    }
}

fn render_signup_form(buf: &mut Buffer, area: Rect, app: &App, hits: &mut HitMap) {
    let button_label = format!("{SIGNUP_BUTTON} →");
    let button_width = components::label_width(&button_label) + 4;
    let form = centered_columns(64, area);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(button_width),
        ])
        .split(form);

    if let [field, _, button] = &chunks[..] {
        let focused = app.focused();
        let editing = app.mode == AppMode::EmailInput;
        components::render_text_input(
            buf,
            *field,
            TextInputConfig::new(app.email_input.content(), app.email_input.cursor_position())
                .with_placeholder(SIGNUP_PLACEHOLDER)
                .with_editing(editing)
                .with_focus(focused == Some(FocusTarget::EmailField)),
        );
        hits.push(*field, HitTarget::Focusable(FocusTarget::EmailField));

        let join_focused = focused == Some(FocusTarget::JoinButton);
        Paragraph::new(Span::styled(
            button_label,
            components::button_style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                join_focused,
            ),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if join_focused {
                    Color::Yellow
                } else {
                    Color::Magenta
                })),
        )
        .render(*button, buf);
        hits.push(*button, HitTarget::Focusable(FocusTarget::JoinButton));
    }
}
