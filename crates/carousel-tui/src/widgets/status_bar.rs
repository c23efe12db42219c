use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let status = app.carousel.status();
        let mode_str = if app.carousel.is_infinite() {
            "LOOP"
        } else {
            "FINITE"
        };

        let status_text = if let Some(msg) = &app.status_message {
            msg.clone()
        } else {
            format!(
                " {} | Page {}/{} | Index {}/{} | Showing {}",
                mode_str,
                status.active_page + 1,
                status.page_count,
                status.logical_index,
                status.max_logical_index,
                app.carousel.config().slides_to_show,
            )
        };

        let help_hint = " q:quit h/l:page 1-9:dot j/k:focus space:like ";
        let padding_len = area
            .width
            .saturating_sub(status_text.chars().count() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(app.theme.fg0).bg(app.theme.bg2),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(app.theme.bg2)),
            Span::styled(
                help_hint,
                Style::default().fg(app.theme.grey1).bg(app.theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
