//! TUI widgets.

mod agent_detail;
mod chart;
mod help;
mod history_table;
mod leaderboard;
mod market_board;
mod notifications;
mod order_ladder;
mod prediction_board;
mod status_bar;
mod tab_bar;
mod ticket;
mod trade_log;

pub use agent_detail::AgentDetail;
pub use chart::SeriesChart;
pub use help::{HelpPanel, HintBar};
pub use history_table::HistoryTable;
pub use leaderboard::Leaderboard;
pub use market_board::MarketBoard;
pub use notifications::{render_error, render_notification};
pub use order_ladder::OrderLadder;
pub use prediction_board::PredictionBoard;
pub use status_bar::StatusBar;
pub use tab_bar::TabBar;
pub use ticket::TicketPopup;
pub use trade_log::TradeLog;

use crate::rotation::RotationSelector;
use crate::ui::format::countdown;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use tokio::time::Instant;

/// Short rotation status: `AUTO 7s` or `PINNED 12s`.
pub fn rotation_label<T>(selector: &RotationSelector<T>, now: Instant) -> String {
    match selector.remaining_cooldown(now) {
        Some(remaining) => format!("PINNED {}", countdown(remaining)),
        None => format!("AUTO {}", countdown(selector.tick_period())),
    }
}

/// Rotation status styled for a block title.
pub fn rotation_badge<T>(selector: &RotationSelector<T>, now: Instant) -> Line<'static> {
    let style = if selector.is_manual() {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(vec![
        Span::raw(" "),
        Span::styled(rotation_label(selector, now), style),
        Span::raw(" "),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RotationConfig;
    use crate::rotation::ItemList;
    use std::time::Duration;

    #[test]
    fn test_rotation_label() {
        let items = ItemList::new("asset", vec!["BTC", "ETH", "SOL"]).unwrap();
        let mut selector = RotationSelector::new(items, &RotationConfig::default());
        let t0 = Instant::now();
        assert_eq!(rotation_label(&selector, t0), "AUTO 7s");

        selector.select(2, t0).unwrap();
        assert_eq!(
            rotation_label(&selector, t0 + Duration::from_millis(3_500)),
            "PINNED 12s"
        );
    }
}
