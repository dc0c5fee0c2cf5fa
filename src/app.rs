//! Main application module.
//!
//! This module contains the main `App` struct that coordinates
//! the event loop, rotation timers, state management, and rendering.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::events::EventHandler;
use crate::rotation::{RotationTarget, RotationTimers};
use crate::state::{Action, Store};
use crate::ui::Ui;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use tokio::sync::mpsc;
use tokio::time::Instant;

/// The main application.
pub struct App {
    /// Terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application store.
    store: Store,
    /// Event handler.
    event_handler: EventHandler,
    /// Action receiver.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// One set of timers per rotation target.
    timers: Vec<RotationTimers>,
    /// Configuration.
    config: Config,
}

impl App {
    /// Create a new application.
    ///
    /// The catalog is loaded before the terminal is switched to raw mode so
    /// load errors print normally.
    pub async fn new(config: Config) -> Result<Self> {
        let catalog = Catalog::load_or_demo(config.catalog_path.as_deref())?;

        // Create action channel
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        // Create store
        let store = Store::new(catalog, &config.rotation, action_tx.clone())?;

        // Create event handler
        let event_handler = EventHandler::new(config.keybindings.compile()?, &config.ui);

        let timers = start_timers(&config, &action_tx);

        // Set up terminal
        enable_raw_mode().map_err(|e| Error::terminal(format!("enable raw mode: {e}")))?;
        let mouse_support = config.ui.mouse_support;
        let terminal = restore_on_error(
            || {
                let mut stdout = io::stdout();
                execute!(stdout, EnterAlternateScreen)?;
                if mouse_support {
                    execute!(stdout, EnableMouseCapture)?;
                }
                Ok(Terminal::new(CrosstermBackend::new(stdout))?)
            },
            restore_terminal,
        )?;

        tracing::info!(
            agents = store.agents.items().len().get(),
            assets = store.assets.items().len().get(),
            "Agent Arena started"
        );

        Ok(Self {
            terminal,
            store,
            event_handler,
            action_rx,
            timers,
            config,
        })
    }

    /// Run the application event loop.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            let now = Instant::now();
            self.store.app.expire_notification(now);

            // Render UI
            let (store, config) = (&self.store, &self.config);
            let mut area = Rect::default();
            self.terminal.draw(|frame| {
                area = frame.area();
                Ui::render(frame, store, config, now);
            })?;

            // Clicks are mapped against what was just drawn
            self.event_handler.update_store_snapshot(&self.store, area);

            // Handle events and actions
            tokio::select! {
                // Handle terminal events
                result = self.event_handler.next() => {
                    match result {
                        Ok(Some(action)) => handle_action(&mut self.store, &mut self.timers, action),
                        Ok(None) => {}
                        Err(e) if e.is_recoverable() => {
                            tracing::warn!("Input error: {}", e);
                            self.store.reduce(Action::SetError(e.to_string()));
                        }
                        Err(e) => return Err(e),
                    }
                }

                // Handle actions from the channel
                Some(action) = self.action_rx.recv() => {
                    handle_action(&mut self.store, &mut self.timers, action);
                }
            }

            // Check if we should quit
            if self.store.app.should_quit {
                break;
            }
        }

        tracing::info!("Agent Arena shutting down");
        Ok(())
    }
}

/// Start tick timers for every rotation target.
fn start_timers(config: &Config, action_tx: &mpsc::UnboundedSender<Action>) -> Vec<RotationTimers> {
    RotationTarget::ALL
        .into_iter()
        .map(|target| {
            let timing = config.rotation.for_target(target);
            RotationTimers::start(
                target,
                timing.tick_period(),
                timing.cooldown(),
                action_tx.clone(),
            )
        })
        .collect()
}

/// Reduce `action`, then restart the cooldown timer if it pinned an item.
fn handle_action(store: &mut Store, timers: &mut [RotationTimers], action: Action) {
    let pinned = action.pinned_target();
    store.reduce(action);

    let Some(target) = pinned else {
        return;
    };
    if !store.selector(target).is_manual() {
        return;
    }
    if let Some(timer) = timers.iter_mut().find(|t| t.target() == target) {
        timer.arm_cooldown();
    }
}

/// Run `setup`; if it fails, call `restore` before returning the error.
fn restore_on_error<T>(setup: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    setup().inspect_err(|e| {
        tracing::error!("Terminal setup failed: {}", e);
        restore();
    })
}

/// Leave raw mode and the alternate screen. Errors are ignored.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

impl Drop for App {
    fn drop(&mut self) {
        for timer in &mut self.timers {
            timer.stop();
        }

        restore_terminal();
        let _ = self.terminal.show_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RotationSettings;
    use std::time::Duration;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    fn setup() -> (Store, Vec<RotationTimers>, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let config = Config::default();
        let store = Store::new(Catalog::demo(), &RotationSettings::default(), tx.clone()).unwrap();
        let timers = start_timers(&config, &tx);
        (store, timers, rx)
    }

    /// Feed every timer action due by `until` back into the store.
    async fn drain_until(
        store: &mut Store,
        timers: &mut [RotationTimers],
        rx: &mut mpsc::UnboundedReceiver<Action>,
        until: Instant,
    ) {
        while let Ok(Some(action)) = tokio::time::timeout_at(until, rx.recv()).await {
            handle_action(store, timers, action);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_assets_rotate_on_schedule() {
        let (mut store, mut timers, mut rx) = setup();
        let start = Instant::now();

        drain_until(&mut store, &mut timers, &mut rx, start + secs(22)).await;
        // ticks at 7, 14 and 21
        assert_eq!(store.assets.current_index(), 3);
        // agent ticks at 10 and 20
        assert_eq!(store.agents.current_index(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_selection_holds_then_resumes() {
        let (mut store, mut timers, mut rx) = setup();
        let start = Instant::now();

        drain_until(&mut store, &mut timers, &mut rx, start + secs(5)).await;
        handle_action(
            &mut store,
            &mut timers,
            Action::SelectFeatured(RotationTarget::Assets, 3),
        );
        assert!(store.assets.is_manual());

        // Ticks at 7, 14 are ignored while pinned.
        drain_until(&mut store, &mut timers, &mut rx, start + secs(19)).await;
        assert_eq!(store.assets.current_index(), 3);
        assert!(store.assets.is_manual());

        // Cooldown elapses at 20, tick at 21 advances.
        drain_until(&mut store, &mut timers, &mut rx, start + secs(22)).await;
        assert!(!store.assets.is_manual());
        assert_eq!(store.assets.current_index(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reselect_restarts_cooldown() {
        let (mut store, mut timers, mut rx) = setup();
        let start = Instant::now();

        handle_action(&mut store, &mut timers, Action::FeatureNext(RotationTarget::Agents));
        drain_until(&mut store, &mut timers, &mut rx, start + secs(20)).await;
        handle_action(&mut store, &mut timers, Action::FeatureNext(RotationTarget::Agents));

        // First window would have ended at 30; the second runs to 50.
        drain_until(&mut store, &mut timers, &mut rx, start + secs(45)).await;
        assert!(store.agents.is_manual());
        assert_eq!(store.agents.current_index(), 2);

        drain_until(&mut store, &mut timers, &mut rx, start + secs(51)).await;
        assert!(!store.agents.is_manual());
    }

    #[tokio::test(start_paused = true)]
    async fn test_out_of_range_selection_does_not_arm() {
        let (mut store, mut timers, _rx) = setup();
        handle_action(
            &mut store,
            &mut timers,
            Action::SelectFeatured(RotationTarget::Assets, 99),
        );
        assert!(!store.assets.is_manual());
        assert_eq!(store.assets.current_index(), 0);
    }

    #[test]
    fn test_failed_setup_restores_terminal() {
        let mut restored = false;
        let result: Result<()> =
            restore_on_error(|| Err(Error::terminal("no tty")), || restored = true);
        assert!(matches!(result, Err(Error::Terminal(_))));
        assert!(restored);

        let mut restored = false;
        let value = restore_on_error(|| Ok(7), || restored = true).unwrap();
        assert_eq!(value, 7);
        assert!(!restored);
    }
}
