//! UI rendering using ratatui.
//!
//! This module contains all TUI components and rendering logic. Rendering
//! only reads the [`Store`]; the current instant is passed in so cooldown
//! countdowns are drawn against the same clock the selectors use.

pub mod format;
mod layout;
mod widgets;

pub use layout::{
    LIST_PERCENT, Layout, centered_rect, list_area, row_at, split_horizontal, split_vertical,
    table_height,
};
pub use widgets::{
    AgentDetail, HelpPanel, HintBar, HistoryTable, Leaderboard, MarketBoard, OrderLadder,
    PredictionBoard, SeriesChart, StatusBar, TabBar, TicketPopup, TradeLog, rotation_badge,
    rotation_label,
};

use crate::config::Config;
use crate::state::{Store, View};
use ratatui::Frame;
use tokio::time::Instant;

/// Main UI renderer.
pub struct Ui;

impl Ui {
    /// Render the entire UI.
    pub fn render(frame: &mut Frame, store: &Store, config: &Config, now: Instant) {
        let layout = Layout::new(frame.area(), &config.ui);
        let keys = &config.keybindings;

        if config.ui.show_status_bar {
            StatusBar::render(frame, layout.status_area, store, now);
        }

        TabBar::render(frame, layout.tab_area, store, keys);

        // Render main content based on current view
        match store.app.current_view {
            View::Arena => {
                let (left, detail_area) = split_horizontal(layout.main_area, LIST_PERCENT);
                let (board_area, trades_area) =
                    split_vertical(left, table_height(store.catalog.agents.len()));
                Leaderboard::render(frame, board_area, store, now);
                if let Some(agent) = store.featured_agent() {
                    let trades = store.catalog.trades_for(&agent.name);
                    TradeLog::render(frame, trades_area, &agent.name, &trades);
                }
                AgentDetail::render(frame, detail_area, store);
            }
            View::Markets => MarketBoard::render(frame, layout.main_area, store, now),
            View::Predictions => {
                let (board_area, ladder_area) = split_horizontal(layout.main_area, LIST_PERCENT);
                PredictionBoard::render(frame, board_area, store);
                OrderLadder::render(frame, ladder_area, store);
            }
            View::History => HistoryTable::render(frame, layout.main_area, store),
        }

        if config.ui.show_help_bar {
            HintBar::render(frame, layout.hint_area, store.app.current_view, keys);
        }

        if let Some(ticket) = &store.ticket {
            TicketPopup::render(frame, layout.main_area, ticket, keys);
        }

        // Render help panel if visible
        if store.app.show_help {
            HelpPanel::render(frame, frame.area(), keys);
        }

        // Render notification if present
        if let (Some((notification, _)), Some(remaining)) = (
            &store.app.notification,
            store.app.notification_remaining(now),
        ) {
            let area = layout.notification_area;
            widgets::render_notification(frame, area, notification, remaining);
        }

        // Render error if present
        if let Some(error) = &store.app.error {
            widgets::render_error(frame, layout.notification_area, error, &keys.back);
        }
    }
}
