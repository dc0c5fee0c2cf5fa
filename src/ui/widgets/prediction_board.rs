//! Prediction market board.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

use crate::catalog::MarketStatus;
use crate::state::Store;
use crate::ui::format::compact_usd;

/// Prediction market list widget.
pub struct PredictionBoard;

impl PredictionBoard {
    /// Render markets passing the category filter, selected row highlighted.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let markets = store.visible_markets();

        let header_cells = ["Status", "Market", "Yes", "No", "Vol", "Users", "Ends"]
            .iter()
            .map(|h| {
                Cell::from(*h).style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            });
        let header = Row::new(header_cells).height(1).bottom_margin(1);

        let rows = markets.iter().map(|market| {
            let status_style = match market.status {
                MarketStatus::Open => Style::default().fg(Color::Green),
                MarketStatus::Locked => Style::default().fg(Color::Yellow),
                MarketStatus::Resolved => Style::default().fg(Color::DarkGray),
            };
            Row::new(vec![
                Cell::from(market.status.to_string()).style(status_style),
                Cell::from(market.title()),
                Cell::from(format!("{:.0}¢", market.yes_price))
                    .style(Style::default().fg(Color::Green)),
                Cell::from(format!("{:.0}¢", market.no_price))
                    .style(Style::default().fg(Color::Red)),
                Cell::from(compact_usd(market.volume)),
                Cell::from(market.participants.to_string()),
                Cell::from(market.time_left.clone()),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Min(20),
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Length(7),
                Constraint::Length(5),
                Constraint::Length(7),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(format!(
                    " Predictions: {} ({}) ",
                    store.predictions.filter_label(),
                    markets.len()
                ))
                .title_bottom(Line::from(" YES + NO = 100¢ ").right_aligned())
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
        if !markets.is_empty() {
            state.select(Some(store.predictions.selected));
        }
        frame.render_stateful_widget(table, area, &mut state);
    }
}
