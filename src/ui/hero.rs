use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Paragraph, Widget, Wrap,
        canvas::{Canvas, Circle, Points},
    },
};
use std::time::Instant;

use crate::app::scroll::HEADER_HEIGHT;
use crate::app::{App, FocusTarget, HitMap, HitTarget};
use crate::content::HERO;
use crate::ui::components;
use crate::ui::utils::{centered_rect, rows};

const SKY: Color = Color::Rgb(10, 8, 28);
const GLOW_COLORS: [Color; 2] = [Color::Rgb(88, 28, 135), Color::Rgb(14, 116, 144)];
const CONTENT_WIDTH: u16 = 76;
const CONTENT_HEIGHT: u16 = 13;

pub fn render_hero(buf: &mut Buffer, area: Rect, app: &App, hits: &mut HitMap) {
    render_starfield(buf, area, app);

    let below_nav = Rect {
        y: area.y + rows(HEADER_HEIGHT),
        height: area.height.saturating_sub(rows(HEADER_HEIGHT) + 1),
        ..area
    };
    let content = centered_rect(CONTENT_WIDTH, CONTENT_HEIGHT, below_nav);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Badge
            Constraint::Length(3), // Headline
            Constraint::Length(4), // Subheading
            Constraint::Length(2), // Calls to action
            Constraint::Length(2), // Icons
        ])
        .split(content);

    if let [badge, headline, subheading, actions, icons] = &chunks[..] {
        render_badge(buf, *badge);
        render_headline(buf, *headline);
        render_subheading(buf, *subheading);
        render_actions(buf, *actions, app, hits);
        render_icons(buf, *icons);
    }

    let hint = Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1);
    Paragraph::new(Span::styled("↓ scroll", Style::default().fg(Color::DarkGray)))
        .alignment(Alignment::Center)
        .render(hint, buf);
}

fn render_starfield(buf: &mut Buffer, area: Rect, app: &App) {
    let (width, height) = app.starfield.bounds();
    let glows = app.starfield.glows(app.elapsed_ms(Instant::now()));

    // Canvas y grows upwards, the field's grows downwards
    let mut layers: [Vec<(f64, f64)>; 3] = Default::default();
    for star in app.starfield.stars() {
        let layer = match star.alpha {
            alpha if alpha < 0.4 => 0,
            alpha if alpha < 0.75 => 1,
            _ => 2,
        };
        if let Some(points) = layers.get_mut(layer) {
            points.push((star.x, height - star.y));
        }
    }
    let [dim, mid, bright] = &layers;

    Canvas::default()
        .background_color(SKY)
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for (glow, color) in glows.iter().zip(GLOW_COLORS) {
                ctx.draw(&Circle {
                    x: glow.x,
                    y: height - glow.y,
                    radius: glow.radius,
                    color,
                });
            }
            ctx.layer();
            ctx.draw(&Points {
                coords: dim,
                color: Color::DarkGray,
            });
            ctx.draw(&Points {
                coords: mid,
                color: Color::Gray,
            });
            ctx.draw(&Points {
                coords: bright,
                color: Color::White,
            });
        })
        .render(area, buf);
}

fn render_badge(buf: &mut Buffer, area: Rect) {
    Paragraph::new(Line::from(Span::styled(
        format!(" ✦ {} ", HERO.badge),
        Style::default().fg(Color::Yellow).bg(Color::Rgb(30, 27, 75)),
    )))
    .alignment(Alignment::Center)
    .render(area, buf);
}

fn render_headline(buf: &mut Buffer, area: Rect) {
    Paragraph::new(vec![
        Line::from(Span::styled(
            HERO.headline,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            HERO.headline_accent,
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        )),
    ])
    .alignment(Alignment::Center)
    .render(area, buf);
}

fn render_subheading(buf: &mut Buffer, area: Rect) {
    Paragraph::new(Span::styled(HERO.subheading, Style::default().fg(Color::Gray)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

fn render_actions(buf: &mut Buffer, area: Rect, app: &App, hits: &mut HitMap) {
    let primary = format!("{} →", HERO.cta_primary);
    let secondary = format!("❏ {}", HERO.cta_secondary);
    let buttons = components::button_row(area, &[primary.as_str(), secondary.as_str()]);
    let focused = app.focused();

    let actions = [
        (
            primary.as_str(),
            FocusTarget::HeroPrimary,
            Style::default()
                .fg(Color::White)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        (
            secondary.as_str(),
            FocusTarget::HeroStories,
            Style::default().fg(Color::White).bg(Color::Rgb(55, 48, 107)),
        ),
    ];
    for (rect, (label, target, style)) in buttons.into_iter().zip(actions) {
        components::render_button(buf, rect, label, style, focused == Some(target));
        hits.push(rect, HitTarget::Focusable(target));
    }
}

fn render_icons(buf: &mut Buffer, area: Rect) {
    let mut spans = Vec::new();
    for (index, (glyph, label, color)) in HERO.icons.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("     "));
        }
        spans.push(Span::styled(*glyph, Style::default().fg(*color)));
        spans.push(Span::styled(
            format!(" {label}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let row = Rect {
        y: area.y + 1,
        height: 1.min(area.height.saturating_sub(1)),
        ..area
    };
    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .render(row, buf);
}
