//! Event handler for processing input events.

use super::KeyMap;
use crate::config::UiConfig;
use crate::error::Result;
use crate::rotation::RotationTarget;
use crate::state::{AMOUNT_STEP, Action, Store, View};
use crate::ui::{Layout, list_area, row_at};
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::time::Duration;

/// Handles input events and produces actions.
pub struct EventHandler {
    /// Parsed key bindings.
    keymap: KeyMap,
    /// Layout settings, needed to map clicks onto rows.
    ui: UiConfig,
    /// How long to wait for input before returning.
    poll_timeout: Duration,
    /// Store state relevant to input routing.
    store_snapshot: Option<StoreSnapshot>,
}

/// Snapshot of relevant store state for event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StoreSnapshot {
    current_view: View,
    show_help: bool,
    ticket_open: bool,
    has_error: bool,
    /// Terminal area of the last frame.
    area: Rect,
    agents: ListSnapshot,
    assets: ListSnapshot,
    markets: ListSnapshot,
}

/// Selection and length of a drawn list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ListSnapshot {
    selected: usize,
    len: usize,
}

/// The rotation a view's selection keys act on.
pub fn view_target(view: View) -> Option<RotationTarget> {
    match view {
        View::Arena => Some(RotationTarget::Agents),
        View::Markets => Some(RotationTarget::Assets),
        View::Predictions | View::History => None,
    }
}

impl EventHandler {
    /// Create a new event handler.
    pub fn new(keymap: KeyMap, ui: &UiConfig) -> Self {
        Self {
            keymap,
            ui: ui.clone(),
            poll_timeout: ui.tick_rate(),
            store_snapshot: None,
        }
    }

    /// Update the store snapshot for state-aware event handling. `area` is
    /// the terminal area the store was last drawn into.
    pub fn update_store_snapshot(&mut self, store: &Store, area: Rect) {
        self.store_snapshot = Some(StoreSnapshot {
            current_view: store.app.current_view,
            show_help: store.app.show_help,
            ticket_open: store.ticket.is_some(),
            has_error: store.app.error.is_some(),
            area,
            agents: ListSnapshot {
                selected: store.agents.current_index(),
                len: store.catalog.agents.len(),
            },
            assets: ListSnapshot {
                selected: store.assets.current_index(),
                len: store.catalog.assets.len(),
            },
            markets: ListSnapshot {
                selected: store.predictions.selected,
                len: store.visible_markets().len(),
            },
        });
    }

    /// Get the next action from user input.
    ///
    /// Blocks the current thread for at most the configured tick rate.
    pub async fn next(&mut self) -> Result<Option<Action>> {
        if event::poll(self.poll_timeout)? {
            return Ok(match event::read()? {
                CrosstermEvent::Key(key) => self.handle_key(key),
                CrosstermEvent::Mouse(mouse) => self.handle_mouse(mouse),
                _ => None,
            });
        }
        Ok(None)
    }

    /// Handle a key event and return an optional action.
    fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        // Only process key press events
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let snapshot = self.store_snapshot.as_ref()?;

        if snapshot.ticket_open {
            self.handle_ticket(&key)
        } else if snapshot.show_help {
            self.handle_help(&key)
        } else {
            self.handle_normal(&key, snapshot)
        }
    }

    /// Handle a mouse event and return an optional action.
    fn handle_mouse(&self, mouse: MouseEvent) -> Option<Action> {
        if !self.ui.mouse_support {
            return None;
        }
        let snapshot = self.store_snapshot.as_ref()?;
        if snapshot.ticket_open || snapshot.show_help {
            return None;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(&mouse, snapshot),
            MouseEventKind::ScrollUp if snapshot.current_view == View::Predictions => {
                Some(Action::PreviousMarket)
            }
            MouseEventKind::ScrollDown if snapshot.current_view == View::Predictions => {
                Some(Action::NextMarket)
            }
            MouseEventKind::ScrollUp => {
                view_target(snapshot.current_view).map(Action::FeaturePrevious)
            }
            MouseEventKind::ScrollDown => view_target(snapshot.current_view).map(Action::FeatureNext),
            _ => None,
        }
    }

    /// A left click on a list row selects that row.
    fn handle_click(&self, mouse: &MouseEvent, snapshot: &StoreSnapshot) -> Option<Action> {
        let layout = Layout::new(snapshot.area, &self.ui);
        let view = snapshot.current_view;
        let list = match view {
            View::Arena => snapshot.agents,
            View::Markets => snapshot.assets,
            View::Predictions => snapshot.markets,
            View::History => return None,
        };
        let table = list_area(view, layout.main_area, list.len)?;
        let index = row_at(table, list.selected, list.len, mouse.column, mouse.row)?;
        Some(match view_target(view) {
            Some(target) => Action::SelectFeatured(target, index),
            None => Action::SelectMarket(index),
        })
    }

    fn handle_ticket(&self, key: &KeyEvent) -> Option<Action> {
        let keys = &self.keymap;
        if keys.back.matches(key) {
            Some(Action::CloseTicket)
        } else if keys.submit.matches(key) {
            Some(Action::SubmitTicket)
        } else if keys.increase.matches(key) || key.code == KeyCode::Up {
            Some(Action::AdjustTicket(AMOUNT_STEP))
        } else if keys.decrease.matches(key) || key.code == KeyCode::Down {
            Some(Action::AdjustTicket(-AMOUNT_STEP))
        } else if keys.toggle_side.matches(key) {
            Some(Action::ToggleTicketSide)
        } else if keys.toggle_outcome.matches(key) {
            Some(Action::ToggleTicketOutcome)
        } else {
            None
        }
    }

    fn handle_help(&self, key: &KeyEvent) -> Option<Action> {
        let keys = &self.keymap;
        if keys.quit.matches(key) {
            Some(Action::Quit)
        } else if keys.help.matches(key) || keys.back.matches(key) {
            Some(Action::ToggleHelp)
        } else {
            None
        }
    }

    fn handle_normal(&self, key: &KeyEvent, snapshot: &StoreSnapshot) -> Option<Action> {
        let keys = &self.keymap;

        // Global shortcuts
        if keys.quit.matches(key) {
            return Some(Action::Quit);
        }
        if keys.help.matches(key) {
            return Some(Action::ToggleHelp);
        }
        if keys.back.matches(key) {
            return Some(if snapshot.has_error {
                Action::ClearError
            } else {
                Action::DismissNotification
            });
        }

        // View switching
        if keys.arena.matches(key) {
            return Some(Action::SetView(View::Arena));
        }
        if keys.markets.matches(key) {
            return Some(Action::SetView(View::Markets));
        }
        if keys.predictions.matches(key) {
            return Some(Action::SetView(View::Predictions));
        }
        if keys.history.matches(key) {
            return Some(Action::SetView(View::History));
        }
        if keys.next_view.matches(key) {
            return Some(Action::NextView);
        }

        if snapshot.current_view == View::Predictions {
            return self.handle_predictions(key);
        }

        // Featured item selection
        let target = view_target(snapshot.current_view)?;
        if keys.next.matches(key) || key.code == KeyCode::Down {
            return Some(Action::FeatureNext(target));
        }
        if keys.previous.matches(key) || key.code == KeyCode::Up {
            return Some(Action::FeaturePrevious(target));
        }
        if key.code == KeyCode::Home {
            return Some(Action::SelectFeatured(target, 0));
        }

        if snapshot.current_view == View::Arena && keys.open_ticket.matches(key) {
            return Some(Action::OpenTicket);
        }

        None
    }

    fn handle_predictions(&self, key: &KeyEvent) -> Option<Action> {
        let keys = &self.keymap;
        if keys.next.matches(key) || key.code == KeyCode::Down {
            Some(Action::NextMarket)
        } else if keys.previous.matches(key) || key.code == KeyCode::Up {
            Some(Action::PreviousMarket)
        } else if key.code == KeyCode::Home {
            Some(Action::SelectMarket(0))
        } else if keys.filter.matches(key) {
            Some(Action::CycleCategory)
        } else if keys.open_ticket.matches(key) {
            Some(Action::OpenTicket)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeyBindings;
    use crossterm::event::KeyModifiers;

    fn handler(snapshot: StoreSnapshot) -> EventHandler {
        let mut handler = EventHandler::new(
            KeyBindings::default().compile().unwrap(),
            &UiConfig::default(),
        );
        handler.store_snapshot = Some(snapshot);
        handler
    }

    fn snapshot(view: View) -> StoreSnapshot {
        StoreSnapshot {
            current_view: view,
            show_help: false,
            ticket_open: false,
            has_error: false,
            area: Rect::new(0, 0, 120, 40),
            agents: ListSnapshot { selected: 0, len: 5 },
            assets: ListSnapshot { selected: 0, len: 5 },
            markets: ListSnapshot { selected: 0, len: 13 },
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn press(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_selection_keys_follow_view() {
        let arena = handler(snapshot(View::Arena));
        assert!(matches!(
            arena.handle_key(press('j')),
            Some(Action::FeatureNext(RotationTarget::Agents))
        ));

        let markets = handler(snapshot(View::Markets));
        assert!(matches!(
            markets.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
            Some(Action::FeaturePrevious(RotationTarget::Assets))
        ));

        let history = handler(snapshot(View::History));
        assert!(history.handle_key(press('j')).is_none());
    }

    #[test]
    fn test_ticket_keys_take_priority() {
        let h = handler(StoreSnapshot {
            ticket_open: true,
            ..snapshot(View::Arena)
        });
        assert!(matches!(
            h.handle_key(press('+')),
            Some(Action::AdjustTicket(step)) if step == AMOUNT_STEP
        ));
        assert!(matches!(
            h.handle_key(press('-')),
            Some(Action::AdjustTicket(step)) if step == -AMOUNT_STEP
        ));
        assert!(matches!(
            h.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Action::SubmitTicket)
        ));
        assert!(h.handle_key(press('j')).is_none());
    }

    #[test]
    fn test_open_ticket_on_arena_and_predictions() {
        let arena = handler(snapshot(View::Arena));
        assert!(matches!(arena.handle_key(press('b')), Some(Action::OpenTicket)));
        let predictions = handler(snapshot(View::Predictions));
        assert!(matches!(predictions.handle_key(press('b')), Some(Action::OpenTicket)));
        let markets = handler(snapshot(View::Markets));
        assert!(markets.handle_key(press('b')).is_none());
    }

    #[test]
    fn test_prediction_keys() {
        let h = handler(snapshot(View::Predictions));
        assert!(matches!(h.handle_key(press('j')), Some(Action::NextMarket)));
        assert!(matches!(
            h.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
            Some(Action::PreviousMarket)
        ));
        assert!(matches!(
            h.handle_key(KeyEvent::new(KeyCode::Home, KeyModifiers::NONE)),
            Some(Action::SelectMarket(0))
        ));
        assert!(matches!(h.handle_key(press('f')), Some(Action::CycleCategory)));
        let arena = handler(snapshot(View::Arena));
        assert!(arena.handle_key(press('f')).is_none());
    }

    #[test]
    fn test_ticket_outcome_key() {
        let h = handler(StoreSnapshot {
            ticket_open: true,
            ..snapshot(View::Predictions)
        });
        assert!(matches!(h.handle_key(press('o')), Some(Action::ToggleTicketOutcome)));
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let h = handler(StoreSnapshot {
            show_help: true,
            ..snapshot(View::Arena)
        });
        assert!(h.handle_key(press('j')).is_none());
        assert!(matches!(h.handle_key(press('?')), Some(Action::ToggleHelp)));
        assert!(matches!(h.handle_key(press('q')), Some(Action::Quit)));
    }

    #[test]
    fn test_back_clears_error_first() {
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        let h = handler(StoreSnapshot {
            has_error: true,
            ..snapshot(View::Markets)
        });
        assert!(matches!(h.handle_key(esc), Some(Action::ClearError)));
        let h = handler(snapshot(View::Markets));
        assert!(matches!(h.handle_key(esc), Some(Action::DismissNotification)));
    }

    #[test]
    fn test_view_switching() {
        let h = handler(snapshot(View::Arena));
        assert!(matches!(
            h.handle_key(press('2')),
            Some(Action::SetView(View::Markets))
        ));
        assert!(matches!(
            h.handle_key(press('3')),
            Some(Action::SetView(View::Predictions))
        ));
        assert!(matches!(
            h.handle_key(press('4')),
            Some(Action::SetView(View::History))
        ));
        assert!(matches!(
            h.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            Some(Action::NextView)
        ));
    }

    #[test]
    fn test_mouse_scroll_moves_featured_item() {
        let h = handler(snapshot(View::Markets));
        let scroll = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert!(matches!(
            h.handle_mouse(scroll),
            Some(Action::FeatureNext(RotationTarget::Assets))
        ));
    }

    // Default layout on 120x40: status bar at 0, tabs at 1, main from 2.
    // Tables start three lines below their top border.
    #[test]
    fn test_click_on_leaderboard_row_selects_agent() {
        let h = handler(snapshot(View::Arena));
        assert!(matches!(
            h.handle_mouse(click(5, 8)),
            Some(Action::SelectFeatured(RotationTarget::Agents, 3))
        ));
        assert!(matches!(
            h.handle_mouse(click(5, 5)),
            Some(Action::SelectFeatured(RotationTarget::Agents, 0))
        ));
    }

    #[test]
    fn test_click_on_market_board_row_selects_asset() {
        let h = handler(snapshot(View::Markets));
        assert!(matches!(
            h.handle_mouse(click(40, 8)),
            Some(Action::SelectFeatured(RotationTarget::Assets, 3))
        ));
        // below the asset table, inside the chart
        assert!(h.handle_mouse(click(40, 20)).is_none());
    }

    #[test]
    fn test_click_on_prediction_row_selects_market() {
        let h = handler(snapshot(View::Predictions));
        assert!(matches!(
            h.handle_mouse(click(10, 15)),
            Some(Action::SelectMarket(10))
        ));
        // right-hand ladder pane
        assert!(h.handle_mouse(click(100, 8)).is_none());
    }

    #[test]
    fn test_click_outside_rows_is_ignored() {
        let h = handler(snapshot(View::Arena));
        // header line and the row past the last agent
        assert!(h.handle_mouse(click(5, 3)).is_none());
        assert!(h.handle_mouse(click(5, 10)).is_none());
        let history = handler(snapshot(View::History));
        assert!(history.handle_mouse(click(5, 8)).is_none());

        let ui = UiConfig {
            mouse_support: false,
            ..UiConfig::default()
        };
        let mut off = EventHandler::new(KeyBindings::default().compile().unwrap(), &ui);
        off.store_snapshot = Some(snapshot(View::Arena));
        assert!(off.handle_mouse(click(5, 8)).is_none());
    }

    #[test]
    fn test_scroll_moves_prediction_selection() {
        let h = handler(snapshot(View::Predictions));
        let scroll = MouseEvent {
            kind: MouseEventKind::ScrollUp,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert!(matches!(h.handle_mouse(scroll), Some(Action::PreviousMarket)));
    }

    #[test]
    fn test_no_snapshot_no_action() {
        let h = EventHandler::new(
            KeyBindings::default().compile().unwrap(),
            &UiConfig::default(),
        );
        assert!(h.handle_key(press('q')).is_none());
    }
}
