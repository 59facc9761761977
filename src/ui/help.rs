use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::content::BRAND;
use crate::ui::components;

/// (keys, description) groups shown on the help screen
const SHORTCUTS: [(&str, &[(&str, &str)]); 3] = [
    (
        "Page",
        &[
            ("↑/↓ PgUp/PgDn", "Scroll"),
            ("Home/End", "Top / bottom"),
            ("1-4", "Jump to a section"),
            ("m", "Navigation menu"),
            ("Tab/Shift+Tab", "Move focus"),
            ("Enter", "Activate focused item"),
            ("Esc", "Clear focus"),
        ],
    ),
    (
        "Tools carousel",
        &[
            ("←/→", "Previous / next tool"),
            ("drag", "Swipe between tools"),
            ("hover", "Pause autoplay"),
            ("o", "Open current tool"),
            ("c", "Copy its sample prompt"),
        ],
    ),
    (
        "Signup",
        &[
            ("e", "Edit email"),
            ("Enter", "Join"),
            ("q / Ctrl+C", "Quit"),
        ],
    ),
];

pub fn render_help_view(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    if let [header, body, footer] = &chunks[..] {
        render_help_header(f, *header);
        render_help_body(f, *body);
        components::render_navigation_footer(f, *footer, "HELP", &[("Esc", "back"), ("?", "close")]);
    }
}

fn render_help_header(f: &mut Frame, area: Rect) {
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(
                BRAND,
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled("Help", Style::default().fg(Color::Cyan)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Left),
        area,
    );
}

fn render_help_body(f: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for (group, shortcuts) in SHORTCUTS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {group}"),
            Style::default().fg(Color::Cyan),
        )));
        for (keys, description) in shortcuts {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<16}"), Style::default().fg(Color::Yellow)),
                Span::styled(*description, Style::default().fg(Color::White)),
            ]));
        }
    }

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Shortcuts ")
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}
