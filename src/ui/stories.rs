use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::app::scroll::{
    SECTION_HEADING_HEIGHT, STORIES_FOOTER_HEIGHT, STORY_BREAKPOINTS, STORY_CARD_HEIGHT,
    grid_columns,
};
use crate::app::{App, FocusTarget, HitMap, HitTarget};
use crate::content::{STORIES, STORIES_HEADING, STORIES_INTRO, Story};
use crate::ui::components;
use crate::ui::utils::{grid_area, rows};

const STORY_ACCENTS: [Color; 4] = [Color::Magenta, Color::Cyan, Color::LightRed, Color::Yellow];

pub fn render_stories(buf: &mut Buffer, area: Rect, app: &App, hits: &mut HitMap) {
    components::render_section_heading(buf, area, STORIES_HEADING, STORIES_INTRO, false);

    let grid = grid_area(area, SECTION_HEADING_HEIGHT);
    let columns = grid_columns(area.width, &STORY_BREAKPOINTS);
    let cells = components::grid_cells(grid, STORIES.len(), columns, rows(STORY_CARD_HEIGHT), 2);
    let focused = app.focused();

    for (index, (story, cell)) in STORIES.iter().zip(cells).enumerate() {
        let target = FocusTarget::StoryVideo(index);
        let accent = STORY_ACCENTS
            .get(index % STORY_ACCENTS.len())
            .copied()
            .unwrap_or(Color::Magenta);
        render_story_card(buf, cell, story, accent, focused == Some(target));
        hits.push(cell, HitTarget::Focusable(target));
    }

    let footer_height = rows(STORIES_FOOTER_HEIGHT);
    let footer = Rect::new(
        area.x,
        area.bottom().saturating_sub(footer_height + 1),
        area.width,
        footer_height,
    );
    let label = "View all stories →";
    if let Some(button) = components::button_row(Rect { y: footer.y + 1, ..footer }, &[label])
        .into_iter()
        .next()
    {
        components::render_button(
            buf,
            button,
            label,
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::UNDERLINED),
            focused == Some(FocusTarget::StoriesPlaylist),
        );
        hits.push(button, HitTarget::Focusable(FocusTarget::StoriesPlaylist));
    }
}

fn render_story_card(buf: &mut Buffer, area: Rect, story: &Story, accent: Color, focused: bool) {
    let inner = components::render_card(buf, area, accent, focused);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    if let [body, action] = &chunks[..] {
        Paragraph::new(vec![
            Line::from(Span::styled(
                story.title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(story.excerpt, Style::default().fg(Color::Gray))),
        ])
        .wrap(Wrap { trim: true })
        .render(*body, buf);

        components::render_button(
            buf,
            *action,
            "Read story →",
            Style::default().fg(accent),
            focused,
        );
    }
}
