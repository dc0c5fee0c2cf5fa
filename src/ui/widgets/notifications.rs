//! Notification and error popups.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use std::time::Duration;

use crate::state::{Notification, NotificationLevel};
use crate::ui::format::countdown;

fn popup(frame: &mut Frame, area: Rect, content: Line<'_>, color: Color, footer: String) {
    frame.render_widget(Clear, area);
    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title_bottom(
                    Line::from(Span::styled(footer, Style::default().fg(Color::DarkGray)))
                        .right_aligned(),
                ),
        )
        .style(Style::default().fg(Color::White));
    frame.render_widget(paragraph, area);
}

/// Render a notification with the seconds it has left on screen.
pub fn render_notification(
    frame: &mut Frame,
    area: Rect,
    notification: &Notification,
    remaining: Duration,
) {
    let (color, icon) = match notification.level {
        NotificationLevel::Info => (Color::Cyan, "ℹ"),
        NotificationLevel::Success => (Color::Green, "✓"),
        NotificationLevel::Warning => (Color::Yellow, "⚠"),
    };
    let content = Line::from(vec![
        Span::styled(format!("{icon} "), Style::default().fg(color)),
        Span::raw(notification.message.as_str()),
    ]);
    popup(frame, area, content, color, format!(" {} ", countdown(remaining)));
}

/// Render an error that stays until dismissed with `dismiss_key`.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str, dismiss_key: &str) {
    let content = Line::from(vec![
        Span::styled(
            "✗ Error: ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw(error),
    ]);
    popup(frame, area, content, Color::Red, format!(" {dismiss_key} to dismiss "));
}
