//! Tokio timers that drive a rotation.

use super::RotationTarget;
use crate::state::Action;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Periodic tick and cooldown timers for one rotation target.
///
/// Timers never touch state directly; they send [`Action`]s to the
/// store's channel. All tasks are aborted on [`stop`](Self::stop) or drop.
#[derive(Debug)]
pub struct RotationTimers {
    target: RotationTarget,
    cooldown: Duration,
    action_tx: mpsc::UnboundedSender<Action>,
    ticker: Option<JoinHandle<()>>,
    cooldown_task: Option<JoinHandle<()>>,
}

impl RotationTimers {
    /// Start the periodic ticker. The first tick fires one period from now.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(
        target: RotationTarget,
        tick_period: Duration,
        cooldown: Duration,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        let tx = action_tx.clone();
        let mut interval = tokio::time::interval_at(Instant::now() + tick_period, tick_period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let ticker = tokio::spawn(async move {
            loop {
                interval.tick().await;
                if tx.send(Action::RotationTick(target)).is_err() {
                    break;
                }
            }
        });

        tracing::debug!(%target, ?tick_period, ?cooldown, "Rotation timers started");

        Self {
            target,
            cooldown,
            action_tx,
            ticker: Some(ticker),
            cooldown_task: None,
        }
    }

    /// Schedule the cooldown reset, replacing any pending one.
    pub fn arm_cooldown(&mut self) {
        if let Some(task) = self.cooldown_task.take() {
            task.abort();
        }

        let tx = self.action_tx.clone();
        let target = self.target;
        let cooldown = self.cooldown;
        self.cooldown_task = Some(tokio::spawn(async move {
            tokio::time::sleep(cooldown).await;
            let _ = tx.send(Action::CooldownElapsed(target));
        }));
    }

    /// Cancel all timers.
    pub fn stop(&mut self) {
        if let Some(task) = self.ticker.take() {
            task.abort();
        }
        if let Some(task) = self.cooldown_task.take() {
            task.abort();
        }
    }

    /// Whether the periodic ticker is still running.
    pub fn is_running(&self) -> bool {
        self.ticker.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// The rotation these timers drive.
    pub fn target(&self) -> RotationTarget {
        self.target
    }
}

impl Drop for RotationTimers {
    fn drop(&mut self) {
        self.stop();
    }
}
