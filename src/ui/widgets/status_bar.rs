//! Status bar widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::rotation_label;
use crate::state::Store;
use crate::ui::format::{compact_usd, pnl_style, signed_usd};
use tokio::time::Instant;

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, now: Instant) {
        let pnl = store.catalog.arena_pnl();

        let mut left_content = vec![
            Span::styled(
                " ⚔ Agent Arena ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | P&L "),
            Span::styled(signed_usd(pnl), pnl_style(pnl)),
            Span::raw(" | Vol "),
            Span::raw(compact_usd(store.catalog.arena_volume())),
        ];
        if let Some(best) = store.catalog.best_agent() {
            left_content.push(Span::raw(" | Top "));
            left_content.push(Span::styled(
                best.name.clone(),
                Style::default().fg(Color::Green),
            ));
        }

        let rotation_hint = Span::styled(
            format!(
                " agents {} · assets {} ",
                rotation_label(&store.agents, now),
                rotation_label(&store.assets, now)
            ),
            Style::default().fg(Color::Yellow),
        );

        let status_line = Line::from(left_content);

        // Pad so the rotation state sits at the right edge
        let left_len = status_line.width();
        let right_len = rotation_hint.width();
        let padding = usize::from(area.width).saturating_sub(left_len + right_len);

        let mut full_line = status_line.spans;
        full_line.push(Span::raw(" ".repeat(padding)));
        full_line.push(rotation_hint);

        let paragraph =
            Paragraph::new(Line::from(full_line)).style(Style::default().bg(Color::DarkGray));

        frame.render_widget(paragraph, area);
    }
}
