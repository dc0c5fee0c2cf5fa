//! Featured agent's trade log.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::catalog::{Direction, Trade, TradeStatus};
use crate::ui::format::{grouped, pnl_style};
use rust_decimal::Decimal;

/// Whole dollars with a sign: `+1,500`, `-800`.
fn signed_whole(value: Decimal) -> String {
    if value > Decimal::ZERO {
        format!("+{}", grouped(value, 0))
    } else {
        grouped(value, 0)
    }
}

/// Trade log table.
pub struct TradeLog;

impl TradeLog {
    /// Render the trades of `agent`.
    pub fn render(frame: &mut Frame, area: Rect, agent: &str, trades: &[&Trade]) {
        let header = Row::new(
            [
                "Time", "Asset", "Side", "Entry", "Exit", "Size", "Margin", "P&L", "Status",
                "Held",
            ]
            .map(|h| Cell::from(h).style(Style::default().fg(Color::Yellow))),
        );

        let rows = trades.iter().map(|trade| {
            let direction_style = match trade.direction {
                Direction::Long => Style::default().fg(Color::Green),
                Direction::Short => Style::default().fg(Color::Red),
            };
            let status_style = match trade.status {
                TradeStatus::Open => Style::default().fg(Color::Cyan),
                TradeStatus::Closed => Style::default(),
                TradeStatus::Liquidated => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            };
            let pnl = if trade.is_open() {
                Cell::from("-")
            } else {
                Cell::from(signed_whole(trade.pnl)).style(pnl_style(trade.pnl))
            };
            Row::new(vec![
                Cell::from(trade.time.format("%H:%M").to_string()),
                Cell::from(trade.asset.clone()),
                Cell::from(format!("{} {}x", trade.direction, trade.leverage))
                    .style(direction_style),
                Cell::from(grouped(trade.entry_price, 0)),
                Cell::from(trade.exit_price.map_or_else(|| "-".to_string(), |p| grouped(p, 0))),
                Cell::from(grouped(trade.size, 0)),
                Cell::from(grouped(trade.margin, 0)),
                pnl,
                Cell::from(trade.status.to_string()).style(status_style),
                Cell::from(trade.duration_label()),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(5),
                Constraint::Length(5),
                Constraint::Length(9),
                Constraint::Length(6),
                Constraint::Length(6),
                Constraint::Length(6),
                Constraint::Length(6),
                Constraint::Length(6),
                Constraint::Length(10),
                Constraint::Min(6),
            ],
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Trades: {agent} ({}) ", trades.len())),
        );
        frame.render_widget(table, area);
    }
}
