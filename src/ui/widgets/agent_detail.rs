//! Featured agent card.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use super::SeriesChart;
use crate::catalog::{SeriesSource, featured_series};
use crate::state::Store;
use crate::ui::format::{pnl_style, signed_usd, usd};
use crate::ui::layout::split_vertical;

/// Featured agent detail widget.
pub struct AgentDetail;

impl AgentDetail {
    /// Render the featured agent's summary, positions and portfolio curve.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let Some(agent) = store.featured_agent() else {
            let block = Block::default().title(" Agent ").borders(Borders::ALL);
            frame.render_widget(block, area);
            return;
        };

        let (summary_area, rest) = split_vertical(area, 6);
        let (positions_area, chart_area) = split_vertical(rest, agent.positions.len() as u16 + 4);

        let summary = vec![
            Line::from(vec![
                Span::styled(
                    format!("[{}] ", agent.initials()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    agent.name.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::raw("Equity "),
                Span::raw(usd(agent.equity())),
                Span::raw("  P&L "),
                Span::styled(signed_usd(agent.pnl), pnl_style(agent.pnl)),
            ]),
            Line::from(vec![
                Span::styled("YES ", Style::default().fg(Color::Green)),
                Span::raw(format!("{:.2}¢", agent.yes_price_cents())),
                Span::styled("  NO ", Style::default().fg(Color::Red)),
                Span::raw(format!("{:.2}¢", agent.no_price_cents())),
            ]),
            Line::from(Span::styled(
                agent.strategy.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let summary = Paragraph::new(summary)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(" Featured Agent "));
        frame.render_widget(summary, summary_area);

        let header = Row::new(["Asset", "Allocated", "P&L"].map(|h| {
            Cell::from(h).style(Style::default().fg(Color::Yellow))
        }));
        let rows = agent.positions.iter().map(|p| {
            Row::new(vec![
                Cell::from(p.asset.clone()),
                Cell::from(usd(p.amount)),
                Cell::from(signed_usd(p.pnl)).style(pnl_style(p.pnl)),
            ])
        });
        let total = Row::new(vec![
            Cell::from("Total").style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from(usd(agent.allocated())),
            Cell::from(signed_usd(agent.positions_pnl())).style(pnl_style(agent.positions_pnl())),
        ]);
        let positions = Table::new(
            rows.chain(std::iter::once(total)),
            [
                Constraint::Length(8),
                Constraint::Length(14),
                Constraint::Min(10),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(" Positions "));
        frame.render_widget(positions, positions_area);

        let source: &dyn SeriesSource = &store.catalog;
        let curve = featured_series(source, &store.agents).unwrap_or_default();
        SeriesChart::render(frame, chart_area, "Portfolio Value", &curve);
    }
}
