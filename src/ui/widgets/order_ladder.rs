//! YES/NO order ladder for the selected prediction market.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use crate::catalog::{Outcome, PredictionMarket, PriceLevel};
use crate::state::Store;
use crate::ui::format::{compact_usd, grouped};
use rust_decimal::Decimal;

/// Order ladder widget.
pub struct OrderLadder;

impl OrderLadder {
    /// Render the selected market's summary above its YES and NO ladders.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let block = Block::default()
            .title(" Order Book ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(market) = store.selected_market() else {
            let empty = Paragraph::new("No markets in this category")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, inner);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Summary
                Constraint::Min(0),    // Ladders
            ])
            .split(inner);
        Self::render_summary(frame, chunks[0], market);

        let sides = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
        Self::render_side(frame, sides[0], Outcome::Yes, &market.ladder(Outcome::Yes));
        Self::render_side(frame, sides[1], Outcome::No, &market.ladder(Outcome::No));
    }

    fn render_summary(frame: &mut Frame, area: Rect, market: &PredictionMarket) {
        let label = Style::default().fg(Color::Gray);
        let lines = vec![
            Line::from(Span::styled(
                market.title(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("YES ", label),
                Span::styled(
                    format!("{:.0}¢", market.yes_price),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::styled("  NO ", label),
                Span::styled(
                    format!("{:.0}¢", market.no_price),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled("  Vol ", label),
                Span::raw(compact_usd(market.volume)),
            ]),
            Line::from(vec![
                Span::styled("Status ", label),
                Span::raw(market.status.to_string()),
                Span::styled("  Ends in ", label),
                Span::raw(market.time_left.clone()),
                Span::styled("  Category ", label),
                Span::raw(market.category.to_string()),
            ]),
        ];
        let summary = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(summary, area);
    }

    fn render_side(frame: &mut Frame, area: Rect, outcome: Outcome, levels: &[PriceLevel]) {
        let color = match outcome {
            Outcome::Yes => Color::Green,
            Outcome::No => Color::Red,
        };
        let max_volume = levels.iter().map(|l| l.volume).max().unwrap_or(0);

        let rows = levels.iter().map(|level| {
            Row::new(vec![
                Cell::from(format!("${:.2}", level.price)).style(Style::default().fg(color)),
                Cell::from(format!("{:.0}%", level.percent())),
                Cell::from(grouped(Decimal::from(level.volume), 0)),
                Cell::from(depth_bar(level.volume, max_volume, 8))
                    .style(Style::default().fg(color)),
            ])
        });

        let header = Row::new(["Price", "%", "Volume", "Depth"].map(|h| {
            Cell::from(h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        }))
        .height(1)
        .bottom_margin(1);

        let table = Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Length(5),
                Constraint::Length(7),
                Constraint::Min(8),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(format!(" {outcome} "))
                .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        );

        frame.render_widget(table, area);
    }
}

/// Bar `width` cells wide, filled in proportion to `volume / max`.
fn depth_bar(volume: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (u64::from(volume) * width as u64).div_ceil(u64::from(max)) as usize
    };
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
