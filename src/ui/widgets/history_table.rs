//! Hourly PnL history widget.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::state::Store;
use crate::ui::format::{pnl_style, signed_usd};

/// PnL history table.
pub struct HistoryTable;

impl HistoryTable {
    /// Render one row per sample with a per-asset breakdown and total.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let history = &store.catalog.history;
        let symbols = store.catalog.asset_symbols();

        let header_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let header = Row::new(
            std::iter::once("Time".to_string())
                .chain(symbols.iter().cloned())
                .chain(std::iter::once("Total".to_string()))
                .map(|h| Cell::from(h).style(header_style)),
        )
        .height(1)
        .bottom_margin(1);

        let rows = history.iter().map(|entry| {
            let legs = symbols.iter().map(|symbol| match entry.pnl_for(symbol) {
                Some(pnl) => {
                    let leverage = entry
                        .legs
                        .iter()
                        .find(|leg| &leg.asset == symbol)
                        .map(|leg| leg.leverage)
                        .unwrap_or(1);
                    Cell::from(format!("{} {}x", signed_usd(pnl), leverage)).style(pnl_style(pnl))
                }
                None => Cell::from("-"),
            });
            let total = entry.total_pnl();

            Row::new(
                std::iter::once(Cell::from(entry.time.format("%Y-%m-%d %H:%M").to_string()))
                    .chain(legs)
                    .chain(std::iter::once(
                        Cell::from(signed_usd(total))
                            .style(pnl_style(total).add_modifier(Modifier::BOLD)),
                    )),
            )
        });

        let widths = std::iter::once(Constraint::Length(17))
            .chain(symbols.iter().map(|_| Constraint::Length(15)))
            .chain(std::iter::once(Constraint::Min(12)));

        let table = Table::new(rows, widths).header(header).block(
            Block::default()
                .title(format!(" P&L History ({}) ", history.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(table, area);
    }
}
