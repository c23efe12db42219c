use carousel_core::format_count;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::app::{App, Hit};

const ARROW_WIDTH: u16 = 3;

pub struct CarouselWidget;

impl CarouselWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Track
                Constraint::Length(1), // Dots
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(ARROW_WIDTH),
                Constraint::Min(1),
                Constraint::Length(ARROW_WIDTH),
            ])
            .split(rows[0]);

        Self::render_arrow(frame, columns[0], app, Hit::Prev);
        Self::render_track(frame, columns[1], app);
        Self::render_arrow(frame, columns[2], app, Hit::Next);
        Self::render_dots(frame, rows[1], app);
    }

    fn render_arrow(frame: &mut Frame, area: Rect, app: &mut App, hit: Hit) {
        let (glyph, disabled) = match hit {
            Hit::Prev => ("‹", app.carousel.is_at_start()),
            _ => ("›", app.carousel.is_at_end()),
        };
        let color = if disabled {
            app.theme.disabled
        } else {
            app.theme.fg0
        };

        let mut lines = vec![Line::default(); (area.height / 2) as usize];
        lines.push(Line::from(Span::styled(
            glyph,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));

        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(Style::default().bg(app.theme.bg0)),
            area,
        );
        if !disabled {
            app.hits.push((area, hit));
        }
    }

    fn render_track(frame: &mut Frame, area: Rect, app: &mut App) {
        let width = area.width as f64;
        let slot_width = width * app.carousel.viewport().item_width() / 100.0;
        let offset = width * app.carousel.viewport().offset() / 100.0;
        if slot_width < 1.0 {
            return;
        }

        let focused = app.focused_slot();
        let first = (offset / slot_width).floor().max(0.0) as usize;
        let last = ((offset + width) / slot_width).ceil() as usize;

        for slot in first..last.min(app.carousel.track().len()) {
            let left = (slot as f64 * slot_width - offset).round();
            let right = ((slot + 1) as f64 * slot_width - offset).round();
            let clipped_left = left.max(0.0);
            let clipped_right = right.min(width);
            if clipped_right - clipped_left < 1.0 {
                continue;
            }

            let rect = Rect::new(
                area.x + clipped_left as u16,
                area.y,
                (clipped_right - clipped_left) as u16,
                area.height,
            );

            // open the border on any side cut off by the window edge
            let mut borders = Borders::TOP | Borders::BOTTOM;
            if left >= 0.0 {
                borders |= Borders::LEFT;
            }
            if right <= width {
                borders |= Borders::RIGHT;
            }

            Self::render_card(frame, rect, app, slot, borders, slot == focused);
            app.hits.push((rect, Hit::Card(slot)));
        }
    }

    fn render_card(
        frame: &mut Frame,
        area: Rect,
        app: &App,
        slot: usize,
        borders: Borders,
        focused: bool,
    ) {
        let Some(slide) = app.carousel.track().slot(slot) else {
            return;
        };
        let title = &slide.item;
        let count = app.likes.count(&title.id);
        let liked = app.likes.is_liked(&title.id);

        let border_color = if focused {
            app.theme.focus
        } else {
            app.theme.grey0
        };
        let block = Block::default()
            .borders(borders)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(app.theme.bg1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let name_style = if focused {
            Style::default()
                .fg(app.theme.fg0)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.fg0)
        };
        let (heart, heart_color) = if liked {
            ("♥", app.theme.liked)
        } else {
            ("♡", app.theme.grey1)
        };

        let max_width = inner.width as usize;
        let lines = vec![
            Line::from(Span::styled(truncate_to_width(&title.name, max_width), name_style)),
            Line::default(),
            Line::from(vec![
                Span::styled(heart, Style::default().fg(heart_color)),
                Span::styled(
                    format!(" {}", format_count(count)),
                    Style::default().fg(app.theme.grey1),
                ),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_dots(frame: &mut Frame, area: Rect, app: &mut App) {
        let page_count = app.carousel.pages().len();
        if page_count < 2 || !app.config.ui.show_pagination {
            return;
        }
        let active = app.carousel.active_page_index();

        // two cells per dot, centered
        let total_width = (page_count as u16 * 2).min(area.width);
        let start = area.x + (area.width.saturating_sub(total_width)) / 2;

        let mut spans = Vec::with_capacity(page_count);
        for page in 0..page_count {
            let x = start + page as u16 * 2;
            if x + 1 >= area.x + area.width {
                break;
            }
            let (glyph, color) = if page == active {
                ("● ", app.theme.dot_active)
            } else {
                ("○ ", app.theme.dot_inactive)
            };
            spans.push(Span::styled(glyph, Style::default().fg(color)));
            app.hits.push((Rect::new(x, area.y, 2, 1), Hit::Dot(page)));
        }

        let dots_area = Rect::new(start, area.y, total_width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), dots_area);
    }
}

/// Truncate to a display width, ending with an ellipsis when cut
pub(crate) fn truncate_to_width(s: &str, max_width: usize) -> String {
    let width: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if width <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
