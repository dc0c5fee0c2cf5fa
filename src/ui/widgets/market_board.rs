//! Asset market board widget.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

use super::{SeriesChart, rotation_badge};
use crate::catalog::{SeriesSource, featured_series};
use crate::state::Store;
use crate::ui::format::{grouped, pnl_style, price, signed_percent};
use crate::ui::layout::{table_height, split_vertical};
use tokio::time::Instant;

/// Market board widget.
pub struct MarketBoard;

impl MarketBoard {
    /// Render the asset list above the featured asset's price chart.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, now: Instant) {
        let (table_area, chart_area) =
            split_vertical(area, table_height(store.catalog.assets.len()));

        let header_cells = ["Symbol", "Name", "Price", "24h", "24h %", "Volume"]
            .iter()
            .map(|h| {
                Cell::from(*h).style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            });
        let header = Row::new(header_cells).height(1).bottom_margin(1);

        let rows = store.catalog.assets.iter().map(|asset| {
            let change_style = pnl_style(asset.change);
            let change = if asset.is_up() {
                format!("+{}", price(asset.change))
            } else {
                format!("-{}", price(asset.change.abs()))
            };
            Row::new(vec![
                Cell::from(asset.symbol.clone()).style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(asset.name.clone()),
                Cell::from(price(asset.price)),
                Cell::from(change).style(change_style),
                Cell::from(signed_percent(asset.change_percent)).style(change_style),
                Cell::from(grouped(asset.series.total_volume(), 0)),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Min(10),
                Constraint::Length(12),
                Constraint::Length(10),
                Constraint::Length(8),
                Constraint::Length(10),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(format!(" Markets ({}) ", store.catalog.assets.len()))
                .title_bottom(rotation_badge(&store.assets, now))
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
        state.select(Some(store.assets.current_index()));
        frame.render_stateful_widget(table, table_area, &mut state);

        let source: &dyn SeriesSource = &store.catalog;
        let series = featured_series(source, &store.assets).unwrap_or_default();
        let title = match store.featured_asset() {
            Some(asset) => format!("{} / USD", asset.symbol),
            None => store.assets.featured().clone(),
        };
        SeriesChart::render(frame, chart_area, &title, &series);
    }
}
