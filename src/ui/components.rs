use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

const SEPARATOR: &str = "  ";
/// Columns between neighbouring buttons
const BUTTON_GAP: u16 = 3;

/// Configuration for text input rendering
pub struct TextInputConfig<'a> {
    pub content: &'a str,
    pub placeholder: Option<&'a str>,
    pub editing: bool,
    pub focused: bool,
    pub cursor_position: usize,
}

impl<'a> TextInputConfig<'a> {
    pub fn new(content: &'a str, cursor_position: usize) -> Self {
        Self {
            content,
            placeholder: None,
            editing: false,
            focused: false,
            cursor_position,
        }
    }

    pub fn with_placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Shows the cursor block while the field captures keys
    pub fn with_editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    pub fn with_focus(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

/// Renders a bordered single-line input with a cursor indicator
pub fn render_text_input(buf: &mut Buffer, area: Rect, config: TextInputConfig) {
    let cursor_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::SLOW_BLINK);

    let line = if config.content.is_empty() {
        let mut spans = vec![Span::styled("> ", Style::default().fg(Color::DarkGray))];
        if config.editing {
            spans.push(Span::styled("█", cursor_style));
        }
        if let Some(placeholder) = config.placeholder {
            spans.push(Span::styled(
                placeholder,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ));
        }
        Line::from(spans)
    } else {
        let available_width = usize::from(area.width.saturating_sub(5)).max(1);
        let (start, end) = visible_window(config.content, config.cursor_position, available_width);
        let relative_cursor = config.cursor_position.saturating_sub(start);
        let before = slice_by_chars(config.content, start, start + relative_cursor);
        let after = slice_by_chars(config.content, start + relative_cursor, end);

        let mut spans = vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::styled(before, Style::default().fg(Color::White)),
        ];
        if config.editing {
            spans.push(Span::styled("█", cursor_style));
        }
        spans.push(Span::styled(after, Style::default().fg(Color::White)));
        Line::from(spans)
    };

    let border_color = if config.editing {
        Color::Cyan
    } else if config.focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color)),
        )
        .render(area, buf);
}

fn visible_window(content: &str, cursor: usize, width: usize) -> (usize, usize) {
    let length = content.chars().count();
    let cursor = cursor.min(length);
    if length <= width {
        return (0, length);
    }
    let mut start = cursor.saturating_sub(width.saturating_sub(1));
    if start + width > length {
        start = length.saturating_sub(width);
    }
    (start, start + width)
}

fn slice_by_chars(value: &str, start: usize, end: usize) -> String {
    value
        .chars()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect()
}

/// Style of a clickable label, inverted while it holds keyboard focus
pub fn button_style(base: Style, focused: bool) -> Style {
    if focused {
        base.add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        base
    }
}

/// Display width of a label as drawn, in columns
pub fn label_width(label: &str) -> u16 {
    u16::try_from(label.width()).unwrap_or(u16::MAX)
}

/// Lays `labels` out on one row, centred in `area`, and returns one rect per
/// label (each padded by a column on both sides)
pub fn button_row(area: Rect, labels: &[&str]) -> Vec<Rect> {
    let widths: Vec<u16> = labels
        .iter()
        .map(|label| label_width(label).saturating_add(2))
        .collect();
    let gaps = BUTTON_GAP.saturating_mul(u16::try_from(labels.len().saturating_sub(1)).unwrap_or(0));
    let total = widths.iter().fold(gaps, |sum, width| sum.saturating_add(*width));
    let mut x = area.x + area.width.saturating_sub(total) / 2;
    widths
        .into_iter()
        .map(|width| {
            let width = width.min(area.right().saturating_sub(x));
            let rect = Rect::new(x, area.y, width, 1.min(area.height));
            x = x.saturating_add(width).saturating_add(BUTTON_GAP);
            rect
        })
        .collect()
}

/// Draws a single-row button
pub fn render_button(buf: &mut Buffer, area: Rect, label: &str, base: Style, focused: bool) {
    Paragraph::new(Line::from(Span::styled(
        format!(" {label} "),
        button_style(base, focused),
    )))
    .render(area, buf);
}

/// Splits `area` into a grid of `count` cells with `columns` per row
pub fn grid_cells(area: Rect, count: usize, columns: usize, cell_height: u16, gap: u16) -> Vec<Rect> {
    let columns = columns.max(1);
    let columns_u16 = u16::try_from(columns).unwrap_or(1);
    let gaps = gap.saturating_mul(columns_u16.saturating_sub(1));
    let cell_width = area.width.saturating_sub(gaps) / columns_u16;
    (0..count)
        .map(|index| {
            let column = u16::try_from(index % columns).unwrap_or(0);
            let row = u16::try_from(index / columns).unwrap_or(0);
            Rect::new(
                area.x + column * (cell_width + gap),
                area.y + row * cell_height,
                cell_width,
                cell_height.saturating_sub(1),
            )
        })
        .filter(|cell| cell.bottom() <= area.bottom())
        .collect()
}

/// Centred heading and wrapped intro shared by the content sections
pub fn render_section_heading(buf: &mut Buffer, area: Rect, title: &str, intro: &str, dark: bool) {
    let width = area.width.min(84);
    let inner = Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height);
    let title_color = if dark { Color::White } else { Color::Magenta };
    let intro_color = if dark { Color::Gray } else { Color::White };
    Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(intro, Style::default().fg(intro_color))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .render(inner, buf);
}

/// Rounded card frame in an accent colour; returns the inner area
pub fn render_card(buf: &mut Buffer, area: Rect, accent: Color, focused: bool) -> Rect {
    let border = if focused { Color::Yellow } else { accent };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    block.render(area, buf);
    inner
}

/// Renders a footer with mode indicator and keybindings
pub fn render_navigation_footer(f: &mut Frame, area: Rect, mode: &str, keybindings: &[(&str, &str)]) {
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            format!(" {} ", mode),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    for &(key, desc) in keybindings {
        spans.push(Span::raw(SEPARATOR));
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}

pub fn render_status_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast = Paragraph::new(Line::from(vec![Span::styled(
        format!(" {} ", message),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )]))
    .alignment(Alignment::Right);

    frame.render_widget(toast, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_row_is_centred() {
        let rects = button_row(Rect::new(0, 5, 40, 1), &["ab", "cd"]);
        // two 4-wide buttons + 3 gap = 11 columns, centred in 40
        assert_eq!(rects, vec![Rect::new(14, 5, 4, 1), Rect::new(21, 5, 4, 1)]);
    }

    #[test]
    fn test_grid_cells_wrap_rows() {
        let cells = grid_cells(Rect::new(0, 0, 62, 20), 3, 2, 10, 2);
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0], Rect::new(0, 0, 30, 9));
        assert_eq!(cells[1], Rect::new(32, 0, 30, 9));
        assert_eq!(cells[2], Rect::new(0, 10, 30, 9));
    }

    #[test]
    fn test_visible_window_follows_cursor() {
        assert_eq!(visible_window("abcdefghij", 10, 4), (6, 10));
        assert_eq!(visible_window("abcdefghij", 0, 4), (0, 4));
        assert_eq!(visible_window("abc", 1, 4), (0, 3));
    }
}
