use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, Hit};

const MENU_WIDTH: u16 = 24;

pub struct HeaderWidget;

impl HeaderWidget {
    /// Render the header row with its menu triggers, right-aligned
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                " Carousel",
                Style::default()
                    .fg(app.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )))
            .style(Style::default().bg(app.theme.bg0)),
            area,
        );

        let mut right = area.x + area.width;
        for index in (0..app.menus.len()).rev() {
            let kind = app.menus[index].kind();
            let label = format!(" {} ", kind.title());
            let width = label.chars().count() as u16;
            if right < area.x + width {
                break;
            }
            right -= width;

            let style = if app.menus[index].is_visible() {
                Style::default().fg(app.theme.bg0).bg(app.theme.focus)
            } else {
                Style::default().fg(app.theme.grey1).bg(app.theme.bg0)
            };
            let rect = Rect::new(right, area.y, width, 1);
            frame.render_widget(Paragraph::new(Span::styled(label, style)), rect);
            app.hits.push((rect, Hit::Trigger(kind)));
        }
    }
}

pub struct MenuWidget;

impl MenuWidget {
    /// Render every visible menu below its trigger; call after the rest of the frame
    pub fn render(frame: &mut Frame, app: &mut App) {
        let area = frame.area();
        let triggers: Vec<(Rect, Hit)> = app
            .hits
            .iter()
            .filter(|(_, hit)| matches!(hit, Hit::Trigger(_)))
            .copied()
            .collect();

        for (trigger, hit) in triggers {
            let Hit::Trigger(kind) = hit else {
                continue;
            };
            let Some(menu) = app.menus.iter().find(|m| m.kind() == kind) else {
                continue;
            };
            if !menu.is_visible() {
                continue;
            }

            let entries = kind.entries();
            let height = (entries.len() as u16 + 2).min(area.height.saturating_sub(trigger.y + 1));
            let width = MENU_WIDTH.min(area.width);
            let popup_area = anchored_rect(trigger, width, height, area);
            if popup_area.height < 3 {
                continue;
            }

            frame.render_widget(Clear, popup_area);

            let block = Block::default()
                .title(format!(" {} ", kind.title()))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.focus))
                .style(Style::default().bg(app.theme.bg1));
            let inner = block.inner(popup_area);
            frame.render_widget(block, popup_area);

            let lines: Vec<Line> = entries
                .iter()
                .map(|entry| {
                    Line::from(Span::styled(
                        format!(" {}", entry),
                        Style::default().fg(app.theme.fg0),
                    ))
                })
                .collect();
            frame.render_widget(Paragraph::new(lines), inner);

            app.hits.push((popup_area, Hit::Menu(kind)));
        }
    }
}

/// Rect directly below `anchor`, right edges aligned, kept inside `area`
fn anchored_rect(anchor: Rect, width: u16, height: u16, area: Rect) -> Rect {
    let right = (anchor.x + anchor.width).min(area.x + area.width);
    let x = right.saturating_sub(width).max(area.x);
    let y = anchor.y + 1;
    Rect::new(x, y, width, height)
}
