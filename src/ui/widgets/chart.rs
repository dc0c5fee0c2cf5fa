//! Line chart for a price series.

use crate::catalog::PriceSeries;
use crate::ui::format::{price, to_f64};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};
use rust_decimal::Decimal;

/// Series chart widget.
pub struct SeriesChart;

impl SeriesChart {
    /// Render `series` as a line chart, or a placeholder if it is empty.
    pub fn render(frame: &mut Frame, area: Rect, title: &str, series: &PriceSeries) {
        let block = Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let (Some(low), Some(high)) = (series.min(), series.max()) else {
            let empty = Paragraph::new("No data").block(block);
            frame.render_widget(empty, area);
            return;
        };

        let points: Vec<(f64, f64)> = series
            .points()
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, to_f64(p.price)))
            .collect();

        let color = if series.change().unwrap_or_default() >= Decimal::ZERO {
            Color::Green
        } else {
            Color::Red
        };

        let dataset = Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(color))
            .data(&points);

        let (y_min, y_max) = padded_bounds(to_f64(low), to_f64(high));
        let x_labels: Vec<Span> = match (series.points().first(), series.points().last()) {
            (Some(first), Some(last)) => vec![
                Span::raw(first.time.clone()),
                Span::raw(last.time.clone()),
            ],
            _ => Vec::new(),
        };

        let chart = Chart::new(vec![dataset])
            .block(block)
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([0.0, (points.len().saturating_sub(1)).max(1) as f64])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([y_min, y_max])
                    .labels(vec![Span::raw(price(low)), Span::raw(price(high))]),
            );

        frame.render_widget(chart, area);
    }
}

/// Pad a flat or tight range so the line is not drawn on the border.
fn padded_bounds(low: f64, high: f64) -> (f64, f64) {
    let span = high - low;
    let pad = if span > 0.0 { span * 0.1 } else { low.abs().max(1.0) * 0.01 };
    (low - pad, high + pad)
}
