//! Agent leaderboard widget.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

use super::rotation_badge;
use crate::catalog::AgentStatus;
use crate::state::Store;
use crate::ui::format::{compact_usd, pnl_style, signed_percent, signed_usd};
use tokio::time::Instant;

/// Agent leaderboard widget.
pub struct Leaderboard;

impl Leaderboard {
    /// Render the leaderboard with the featured agent highlighted.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, now: Instant) {
        let header_cells = ["#", "Agent", "P&L", "P&L %", "Win", "Volume", "Status"]
            .iter()
            .map(|h| {
                Cell::from(*h).style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            });
        let header = Row::new(header_cells).height(1).bottom_margin(1);

        let rows = store.catalog.agents.iter().enumerate().map(|(i, agent)| {
            let status_style = match agent.status {
                AgentStatus::Active => Style::default().fg(Color::Green),
                AgentStatus::Liquidated => Style::default().fg(Color::Red),
                AgentStatus::Stopped => Style::default().fg(Color::Yellow),
            };

            Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(agent.name.clone()),
                Cell::from(signed_usd(agent.pnl)).style(pnl_style(agent.pnl)),
                Cell::from(signed_percent(agent.pnl_percent)).style(pnl_style(agent.pnl)),
                Cell::from(format!("{:.1}%", agent.win_rate)),
                Cell::from(compact_usd(agent.volume)),
                Cell::from(agent.status.to_string()).style(status_style),
            ])
            .height(1)
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Min(20),
                Constraint::Length(12),
                Constraint::Length(8),
                Constraint::Length(7),
                Constraint::Length(9),
                Constraint::Length(10),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(format!(" Agents ({}) ", store.catalog.agents.len()))
                .title_bottom(rotation_badge(&store.agents, now))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

        let mut state = TableState::default();
        state.select(Some(store.agents.current_index()));

        frame.render_stateful_widget(table, area, &mut state);
    }
}
