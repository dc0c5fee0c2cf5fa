//! State management for Agent Arena.
//!
//! This module provides centralized state management with a unidirectional
//! data flow pattern inspired by Redux/Elm architecture. Timers and input
//! handlers only produce [`Action`]s; [`Store::reduce`] is the single place
//! state changes.

mod app_state;
mod prediction_state;
mod ticket_state;

pub use app_state::{AppState, View};
pub use prediction_state::PredictionState;
pub use ticket_state::{
    AMOUNT_STEP, BetTicket, DEFAULT_AMOUNT, TicketSide, potential_winnings, sell_proceeds,
};

use crate::catalog::{Agent, Asset, Catalog, PredictionMarket};
use crate::config::RotationSettings;
use crate::error::Result;
use crate::rotation::{ItemList, RotationSelector, RotationTarget};
use rust_decimal::Decimal;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    SetView(View),
    NextView,

    // Featured-item rotation
    RotationTick(RotationTarget),
    CooldownElapsed(RotationTarget),
    SelectFeatured(RotationTarget, usize),
    FeatureNext(RotationTarget),
    FeaturePrevious(RotationTarget),

    // Prediction board
    CycleCategory,
    SelectMarket(usize),
    NextMarket,
    PreviousMarket,

    // Bet ticket
    OpenTicket,
    CloseTicket,
    AdjustTicket(Decimal),
    ToggleTicketSide,
    ToggleTicketOutcome,
    SubmitTicket,

    // UI actions
    ToggleHelp,
    ShowNotification(Notification),
    DismissNotification,

    // Error handling
    SetError(String),
    ClearError,

    // Quit
    Quit,
}

impl Action {
    /// The rotation this action pins by hand, if any.
    pub fn pinned_target(&self) -> Option<RotationTarget> {
        match self {
            Self::SelectFeatured(target, _)
            | Self::FeatureNext(target)
            | Self::FeaturePrevious(target) => Some(*target),
            _ => None,
        }
    }
}

/// A notification to display to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration_secs: u64,
}

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Info,
            duration_secs: 3,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Success,
            duration_secs: 4,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Warning,
            duration_secs: 5,
        }
    }

    /// How long the notification stays on screen.
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }
}

/// The global state store.
#[derive(Debug)]
pub struct Store {
    /// Application state.
    pub app: AppState,
    /// Static dashboard data.
    pub catalog: Catalog,
    /// Featured agent rotation.
    pub agents: RotationSelector<String>,
    /// Featured asset rotation.
    pub assets: RotationSelector<String>,
    /// Prediction board filter and selection.
    pub predictions: PredictionState,
    /// Open bet ticket, if any.
    pub ticket: Option<BetTicket>,
    /// Action sender for dispatching actions.
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Store {
    /// Create a store over `catalog`. Fails if it has no agents or no assets.
    pub fn new(
        catalog: Catalog,
        rotation: &RotationSettings,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Result<Self> {
        let agents = RotationSelector::new(
            ItemList::new("agent", catalog.agent_names())?,
            &rotation.agents,
        );
        let assets = RotationSelector::new(
            ItemList::new("asset", catalog.asset_symbols())?,
            &rotation.assets,
        );

        Ok(Self {
            app: AppState::default(),
            catalog,
            agents,
            assets,
            predictions: PredictionState::default(),
            ticket: None,
            action_tx,
        })
    }

    /// Dispatch an action to the store.
    pub fn dispatch(&self, action: Action) -> Result<()> {
        self.action_tx
            .send(action)
            .map_err(|e| crate::Error::channel(e.to_string()))
    }

    /// Selector for a rotation target.
    pub fn selector(&self, target: RotationTarget) -> &RotationSelector<String> {
        match target {
            RotationTarget::Agents => &self.agents,
            RotationTarget::Assets => &self.assets,
        }
    }

    fn selector_mut(&mut self, target: RotationTarget) -> &mut RotationSelector<String> {
        match target {
            RotationTarget::Agents => &mut self.agents,
            RotationTarget::Assets => &mut self.assets,
        }
    }

    /// The agent currently featured on the arena view.
    pub fn featured_agent(&self) -> Option<&Agent> {
        self.catalog.agent(self.agents.featured())
    }

    /// The asset currently featured on the markets view.
    pub fn featured_asset(&self) -> Option<&Asset> {
        self.catalog.asset(self.assets.featured())
    }

    /// Markets passing the category filter.
    pub fn visible_markets(&self) -> Vec<&PredictionMarket> {
        self.catalog.markets_in(self.predictions.filter)
    }

    /// The market selected on the prediction board.
    pub fn selected_market(&self) -> Option<&PredictionMarket> {
        self.visible_markets()
            .get(self.predictions.selected)
            .copied()
    }

    /// Ticket for the selected market on the prediction board, otherwise
    /// for the featured agent.
    fn ticket_for_view(&self) -> std::result::Result<BetTicket, Notification> {
        if self.app.current_view == View::Predictions {
            let market = self
                .selected_market()
                .ok_or_else(|| Notification::info("No market selected"))?;
            if !market.is_tradable() {
                return Err(Notification::warning(format!(
                    "Market is {}",
                    market.status.to_string().to_lowercase()
                )));
            }
            return Ok(BetTicket::new(
                market.title(),
                market.yes_price,
                market.no_price,
            ));
        }
        self.featured_agent()
            .map(|agent| {
                BetTicket::new(
                    agent.name.clone(),
                    agent.yes_price_cents(),
                    agent.no_price_cents(),
                )
            })
            .ok_or_else(|| Notification::info("No agent featured"))
    }

    /// Apply an action to update state.
    pub fn reduce(&mut self, action: Action) {
        self.reduce_at(action, Instant::now());
    }

    /// Apply an action as of `now`.
    pub fn reduce_at(&mut self, action: Action, now: Instant) {
        match action {
            // Navigation
            Action::SetView(view) => self.app.current_view = view,
            Action::NextView => self.app.current_view = self.app.current_view.next(),

            // Featured-item rotation
            Action::RotationTick(target) => self.selector_mut(target).tick(now),
            Action::CooldownElapsed(target) => {
                let selector = self.selector_mut(target);
                selector.expire(now);
                if !selector.is_manual() {
                    tracing::debug!(%target, "Cooldown elapsed, rotation resumed");
                }
            }
            Action::SelectFeatured(target, index) => {
                if let Err(e) = self.selector_mut(target).select(index, now) {
                    tracing::warn!(%target, "Ignoring selection: {}", e);
                    return;
                }
                self.log_pinned(target);
            }
            Action::FeatureNext(target) => {
                self.selector_mut(target).select_next(now);
                self.log_pinned(target);
            }
            Action::FeaturePrevious(target) => {
                self.selector_mut(target).select_previous(now);
                self.log_pinned(target);
            }

            // Prediction board
            Action::CycleCategory => {
                self.predictions.cycle_filter();
                tracing::debug!(filter = %self.predictions.filter_label(), "Category filter changed");
            }
            Action::SelectMarket(index) => {
                let len = self.visible_markets().len();
                if !self.predictions.select(index, len) {
                    tracing::warn!(index, len, "Ignoring market selection out of range");
                }
            }
            Action::NextMarket => {
                let len = self.visible_markets().len();
                self.predictions.select_next(len);
            }
            Action::PreviousMarket => {
                let len = self.visible_markets().len();
                self.predictions.select_previous(len);
            }

            // Bet ticket
            Action::OpenTicket => match self.ticket_for_view() {
                Ok(ticket) => self.ticket = Some(ticket),
                Err(notification) => self.app.notification = Some((notification, now)),
            },
            Action::CloseTicket => self.ticket = None,
            Action::AdjustTicket(delta) => {
                if let Some(ticket) = &mut self.ticket {
                    ticket.adjust(delta);
                }
            }
            Action::ToggleTicketSide => {
                if let Some(ticket) = &mut self.ticket {
                    ticket.toggle_side();
                }
            }
            Action::ToggleTicketOutcome => {
                if let Some(ticket) = &mut self.ticket {
                    ticket.toggle_outcome();
                }
            }
            Action::SubmitTicket => {
                let Some(ticket) = self.ticket.take() else {
                    return;
                };
                if ticket.amount.is_zero() {
                    self.ticket = Some(ticket);
                    self.app.notification = Some((
                        Notification::warning("Enter an amount before submitting"),
                        now,
                    ));
                } else {
                    tracing::info!(
                        title = %ticket.title,
                        outcome = %ticket.outcome,
                        side = %ticket.side,
                        amount = %ticket.amount,
                        "Simulated bet"
                    );
                    self.app.notification = Some((Notification::success(ticket.summary()), now));
                }
            }

            // UI actions
            Action::ToggleHelp => self.app.show_help = !self.app.show_help,
            Action::ShowNotification(notification) => {
                self.app.notification = Some((notification, now));
            }
            Action::DismissNotification => {
                self.app.notification = None;
            }

            // Error handling
            Action::SetError(error) => {
                self.app.error = Some(error);
            }
            Action::ClearError => {
                self.app.error = None;
            }

            // Quit
            Action::Quit => {
                self.app.should_quit = true;
            }
        }
    }

    fn log_pinned(&self, target: RotationTarget) {
        let selector = self.selector(target);
        tracing::info!(
            %target,
            featured = %selector.featured(),
            cooldown = ?selector.cooldown(),
            "Featured item pinned"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, MarketStatus, Outcome};
    use crate::error::Error;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn store() -> (Store, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let store = Store::new(Catalog::demo(), &RotationSettings::default(), tx).unwrap();
        (store, rx)
    }

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn test_empty_catalog_fails_fast() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut catalog = Catalog::demo();
        catalog.assets.clear();
        let err = Store::new(catalog, &RotationSettings::default(), tx).unwrap_err();
        assert!(matches!(err, Error::EmptyItemList(ref what) if what == "asset"));
    }

    #[test]
    fn test_initial_featured_items() {
        let (store, _rx) = store();
        assert_eq!(store.agents.current_index(), 0);
        assert_eq!(store.assets.current_index(), 0);
        assert_eq!(
            store.featured_agent().map(|a| a.name.as_str()),
            Some("QuantumTrader AI")
        );
        assert_eq!(store.featured_asset().map(|a| a.symbol.as_str()), Some("BTC"));
    }

    #[test]
    fn test_rotation_targets_are_independent() {
        let (mut store, _rx) = store();
        let now = Instant::now();
        store.reduce_at(Action::RotationTick(RotationTarget::Assets), now);
        store.reduce_at(Action::RotationTick(RotationTarget::Assets), now);
        assert_eq!(store.featured_asset().map(|a| a.symbol.as_str()), Some("SOL"));
        assert_eq!(store.agents.current_index(), 0);
    }

    #[test]
    fn test_select_pins_until_cooldown_elapsed() {
        let (mut store, _rx) = store();
        let t0 = Instant::now();
        store.reduce_at(Action::SelectFeatured(RotationTarget::Assets, 3), t0 + secs(5));
        assert!(store.assets.is_manual());

        store.reduce_at(Action::RotationTick(RotationTarget::Assets), t0 + secs(7));
        store.reduce_at(Action::RotationTick(RotationTarget::Assets), t0 + secs(14));
        assert_eq!(store.assets.current_index(), 3);

        store.reduce_at(Action::CooldownElapsed(RotationTarget::Assets), t0 + secs(20));
        assert!(!store.assets.is_manual());

        store.reduce_at(Action::RotationTick(RotationTarget::Assets), t0 + secs(21));
        assert_eq!(store.featured_asset().map(|a| a.symbol.as_str()), Some("BNB"));
    }

    #[test]
    fn test_out_of_range_selection_is_ignored() {
        let (mut store, _rx) = store();
        store.reduce(Action::SelectFeatured(RotationTarget::Agents, 42));
        assert_eq!(store.agents.current_index(), 0);
        assert!(!store.agents.is_manual());
    }

    #[test]
    fn test_feature_previous_wraps_and_pins() {
        let (mut store, _rx) = store();
        store.reduce(Action::FeaturePrevious(RotationTarget::Agents));
        assert_eq!(
            store.featured_agent().map(|a| a.name.as_str()),
            Some("DeepLearning Trader")
        );
        assert!(store.agents.is_manual());
    }

    #[test]
    fn test_ticket_flow() {
        let (mut store, _rx) = store();
        store.reduce(Action::FeatureNext(RotationTarget::Agents));
        store.reduce(Action::OpenTicket);
        assert_eq!(
            store.ticket,
            Some(BetTicket::new("ArbitrageHunter Pro", dec!(68.7), dec!(31.3)))
        );

        store.reduce(Action::AdjustTicket(AMOUNT_STEP));
        store.reduce(Action::ToggleTicketSide);
        let ticket = store.ticket.clone().unwrap();
        assert_eq!(ticket.amount, dec!(20));
        assert_eq!(ticket.side, TicketSide::Sell);

        store.reduce(Action::SubmitTicket);
        assert!(store.ticket.is_none());
        let (notification, _) = store.app.notification.clone().unwrap();
        assert_eq!(notification.level, NotificationLevel::Success);
        assert!(notification.message.contains("ArbitrageHunter Pro"));
    }

    #[test]
    fn test_zero_amount_ticket_stays_open() {
        let (mut store, _rx) = store();
        store.reduce(Action::OpenTicket);
        store.reduce(Action::AdjustTicket(dec!(-100)));
        store.reduce(Action::SubmitTicket);
        assert!(store.ticket.is_some());
        let (notification, _) = store.app.notification.clone().unwrap();
        assert_eq!(notification.level, NotificationLevel::Warning);
    }

    #[test]
    fn test_dispatch_sends_to_channel() {
        let (store, mut rx) = store();
        store.dispatch(Action::ToggleHelp).unwrap();
        assert!(matches!(rx.try_recv(), Ok(Action::ToggleHelp)));
    }

    #[test]
    fn test_pinned_target() {
        assert_eq!(
            Action::SelectFeatured(RotationTarget::Assets, 1).pinned_target(),
            Some(RotationTarget::Assets)
        );
        assert_eq!(
            Action::FeatureNext(RotationTarget::Agents).pinned_target(),
            Some(RotationTarget::Agents)
        );
        assert_eq!(Action::RotationTick(RotationTarget::Agents).pinned_target(), None);
    }

    #[test]
    fn test_category_filter_narrows_board() {
        let (mut store, _rx) = store();
        store.reduce(Action::SelectMarket(5));
        assert_eq!(store.predictions.selected, 5);

        store.reduce(Action::CycleCategory);
        store.reduce(Action::CycleCategory);
        assert_eq!(store.predictions.filter, Some(Category::Risk));
        assert_eq!(store.predictions.selected, 0);
        assert_eq!(store.visible_markets().len(), 1);

        store.reduce(Action::NextMarket);
        assert_eq!(store.predictions.selected, 0);
    }

    #[test]
    fn test_market_selection_wraps_and_rejects_out_of_range() {
        let (mut store, _rx) = store();
        store.reduce(Action::PreviousMarket);
        assert_eq!(
            store.selected_market().map(|m| m.id.as_str()),
            Some("multi-2-epsilon")
        );
        store.reduce(Action::SelectMarket(99));
        assert_eq!(store.predictions.selected, 12);
    }

    #[test]
    fn test_ticket_on_prediction_board_uses_selected_market() {
        let (mut store, _rx) = store();
        store.reduce(Action::SetView(View::Predictions));
        store.reduce(Action::NextMarket);
        store.reduce(Action::OpenTicket);
        store.reduce(Action::ToggleTicketOutcome);

        let ticket = store.ticket.clone().unwrap();
        assert_eq!(ticket.title, "Will ArbitrageHunter Pro get liquidated?");
        assert_eq!(ticket.outcome, Outcome::No);
        assert_eq!(ticket.price_cents(), dec!(77));
    }

    #[test]
    fn test_ticket_refused_on_locked_market() {
        let (mut store, _rx) = store();
        store.catalog.markets[0].status = MarketStatus::Locked;
        store.reduce(Action::SetView(View::Predictions));
        store.reduce(Action::OpenTicket);

        assert!(store.ticket.is_none());
        let (notification, _) = store.app.notification.clone().unwrap();
        assert_eq!(notification.level, NotificationLevel::Warning);
        assert_eq!(notification.message, "Market is locked");
    }
}
