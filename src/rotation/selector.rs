//! Rotation state machine.

use crate::config::RotationConfig;
use crate::error::{Error, Result};
use std::num::NonZeroUsize;
use std::time::Duration;
use tokio::time::Instant;

/// A fixed, non-empty list of item identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemList<T> {
    items: Box<[T]>,
}

impl<T> ItemList<T> {
    /// Build a list, rejecting an empty one. `what` names the items in the error.
    pub fn new(what: &str, items: Vec<T>) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::empty_item_list(what));
        }
        Ok(Self {
            items: items.into_boxed_slice(),
        })
    }

    /// Number of items. Never zero.
    pub fn len(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.items.len()).unwrap_or(NonZeroUsize::MIN)
    }

    /// Get an item by index.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterate over the items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The items as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

/// Whether the rotation is advancing on its own or pinned by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationMode {
    #[default]
    Auto,
    /// Pinned until the given instant.
    Manual { until: Instant },
}

/// Input to the rotation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationEvent {
    /// Periodic timer fired.
    Tick { now: Instant },
    /// User picked an item.
    Select { index: usize, now: Instant },
    /// Cooldown timer fired.
    Expire { now: Instant },
}

/// Fixed parameters the transition function needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Length of the item list.
    pub len: NonZeroUsize,
    /// How long a manual selection stays pinned.
    pub cooldown: Duration,
}

/// Current position and mode of a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RotationState {
    current_index: usize,
    mode: RotationMode,
}

impl RotationState {
    /// Index of the featured item.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Current mode.
    pub fn mode(&self) -> RotationMode {
        self.mode
    }

    /// Whether a manual selection is pinned.
    pub fn is_manual(&self) -> bool {
        matches!(self.mode, RotationMode::Manual { .. })
    }

    /// When the manual pin expires, if pinned.
    pub fn manual_until(&self) -> Option<Instant> {
        match self.mode {
            RotationMode::Auto => None,
            RotationMode::Manual { until } => Some(until),
        }
    }

    /// Apply one event and return the next state.
    ///
    /// A pin whose deadline has passed is released before a tick is
    /// considered, so a tick landing at or after the deadline advances.
    /// Out-of-range selections leave the state untouched.
    pub fn apply(self, event: RotationEvent, policy: &RotationPolicy) -> Self {
        match event {
            RotationEvent::Tick { now } => {
                let state = self.release_if_due(now);
                match state.mode {
                    RotationMode::Auto => Self {
                        current_index: (state.current_index + 1) % policy.len.get(),
                        ..state
                    },
                    RotationMode::Manual { .. } => state,
                }
            }
            RotationEvent::Select { index, now } => {
                if index >= policy.len.get() {
                    return self;
                }
                Self {
                    current_index: index,
                    mode: RotationMode::Manual {
                        until: now + policy.cooldown,
                    },
                }
            }
            RotationEvent::Expire { now } => self.release_if_due(now),
        }
    }

    fn release_if_due(self, now: Instant) -> Self {
        match self.mode {
            RotationMode::Manual { until } if now >= until => Self {
                mode: RotationMode::Auto,
                ..self
            },
            _ => self,
        }
    }
}

/// Picks the featured item out of a fixed list.
#[derive(Debug, Clone)]
pub struct RotationSelector<T> {
    items: ItemList<T>,
    policy: RotationPolicy,
    tick_period: Duration,
    state: RotationState,
}

impl<T> RotationSelector<T> {
    /// Create a selector starting at the first item in auto mode.
    pub fn new(items: ItemList<T>, config: &RotationConfig) -> Self {
        let policy = RotationPolicy {
            len: items.len(),
            cooldown: config.cooldown(),
        };
        Self {
            items,
            policy,
            tick_period: config.tick_period(),
            state: RotationState::default(),
        }
    }

    /// Advance if not pinned.
    pub fn tick(&mut self, now: Instant) {
        let before = self.state;
        self.state = before.apply(RotationEvent::Tick { now }, &self.policy);
        if before.is_manual() && !self.state.is_manual() {
            tracing::debug!("Cooldown elapsed at tick, resuming rotation");
        }
        if before.current_index() != self.state.current_index() {
            tracing::debug!(
                from = before.current_index(),
                to = self.state.current_index(),
                "Rotation advanced"
            );
        }
    }

    /// Pin the item at `index` for one cooldown window, restarting any active one.
    pub fn select(&mut self, index: usize, now: Instant) -> Result<()> {
        if index >= self.policy.len.get() {
            return Err(Error::invalid_input(format!(
                "index {} out of range for {} items",
                index, self.policy.len
            )));
        }
        self.state = self
            .state
            .apply(RotationEvent::Select { index, now }, &self.policy);
        Ok(())
    }

    /// Release the pin if its cooldown has elapsed.
    pub fn expire(&mut self, now: Instant) {
        self.state = self.state.apply(RotationEvent::Expire { now }, &self.policy);
    }

    /// Select the item after the current one, wrapping around.
    pub fn select_next(&mut self, now: Instant) {
        let index = (self.state.current_index() + 1) % self.policy.len.get();
        self.state = self
            .state
            .apply(RotationEvent::Select { index, now }, &self.policy);
    }

    /// Select the item before the current one, wrapping around.
    pub fn select_previous(&mut self, now: Instant) {
        let len = self.policy.len.get();
        let index = (self.state.current_index() + len - 1) % len;
        self.state = self
            .state
            .apply(RotationEvent::Select { index, now }, &self.policy);
    }

    /// Index of the featured item.
    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    /// The featured item.
    pub fn featured(&self) -> &T {
        // current_index < len is upheld by `apply`
        &self.items.as_slice()[self.state.current_index()]
    }

    /// Whether a manual selection is pinned.
    pub fn is_manual(&self) -> bool {
        self.state.is_manual()
    }

    /// Time left on the manual pin, if pinned.
    pub fn remaining_cooldown(&self, now: Instant) -> Option<Duration> {
        self.state
            .manual_until()
            .map(|until| until.saturating_duration_since(now))
    }

    /// Current state snapshot.
    pub fn state(&self) -> RotationState {
        self.state
    }

    /// The items being rotated over.
    pub fn items(&self) -> &ItemList<T> {
        &self.items
    }

    /// Period between automatic advances.
    pub fn tick_period(&self) -> Duration {
        self.tick_period
    }

    /// Length of the manual pin.
    pub fn cooldown(&self) -> Duration {
        self.policy.cooldown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    fn symbols(n: usize) -> ItemList<String> {
        let items = ["BTC", "ETH", "SOL", "XRP", "BNB", "DOGE", "ADA"]
            .iter()
            .take(n)
            .map(|s| s.to_string())
            .collect();
        ItemList::new("asset", items).unwrap()
    }

    fn selector(n: usize, tick: u64, cooldown: u64) -> RotationSelector<String> {
        let config = RotationConfig {
            tick_secs: tick,
            cooldown_secs: cooldown,
        };
        RotationSelector::new(symbols(n), &config)
    }

    #[test]
    fn test_empty_list_is_rejected() {
        let err = ItemList::<String>::new("agent", Vec::new()).unwrap_err();
        assert!(matches!(err, Error::EmptyItemList(ref what) if what == "agent"));
    }

    #[test]
    fn test_starts_at_first_item_in_auto() {
        let s = selector(3, 7, 15);
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.featured(), "BTC");
        assert!(!s.is_manual());
        assert_eq!(s.state().manual_until(), None);
    }

    #[test]
    fn test_ticks_cycle_modulo_len() {
        let start = Instant::now();
        for len in 1..=7 {
            let mut s = selector(len, 7, 15);
            for n in 1..=30u64 {
                s.tick(start + secs(7 * n));
                assert_eq!(s.current_index(), n as usize % len, "len={len} n={n}");
            }
        }
    }

    #[test]
    fn test_select_sets_index_immediately() {
        let now = Instant::now();
        let mut s = selector(5, 7, 15);
        s.tick(now);
        s.tick(now);
        s.select(1, now).unwrap();
        assert_eq!(s.current_index(), 1);
        assert_eq!(s.featured(), "ETH");
        assert!(s.is_manual());
        assert_eq!(s.state().manual_until(), Some(now + secs(15)));
    }

    #[test]
    fn test_select_out_of_range_is_rejected_without_change() {
        let now = Instant::now();
        let mut s = selector(3, 7, 15);
        let before = s.state();
        let err = s.select(3, now).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(s.state(), before);
    }

    #[test]
    fn test_ticks_ignored_while_pinned() {
        let start = Instant::now();
        let mut s = selector(4, 7, 15);
        s.select(2, start).unwrap();
        for n in 0..14 {
            s.tick(start + secs(n));
            assert_eq!(s.current_index(), 2);
            assert!(s.is_manual());
        }
    }

    #[test]
    fn test_expire_releases_pin_and_next_tick_advances() {
        let start = Instant::now();
        let mut s = selector(4, 7, 15);
        s.select(2, start).unwrap();

        s.expire(start + secs(14));
        assert!(s.is_manual());

        s.expire(start + secs(15));
        assert!(!s.is_manual());
        assert_eq!(s.current_index(), 2);

        s.tick(start + secs(16));
        assert_eq!(s.current_index(), 3);
    }

    #[test]
    fn test_second_select_restarts_cooldown() {
        let start = Instant::now();
        let mut s = selector(5, 7, 15);
        s.select(1, start).unwrap();
        s.select(4, start + secs(10)).unwrap();

        // A reset armed by the first select must not cut the second pin short.
        s.expire(start + secs(15));
        assert!(s.is_manual());
        s.tick(start + secs(21));
        assert_eq!(s.current_index(), 4);

        s.tick(start + secs(25));
        assert!(!s.is_manual());
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn test_reselect_same_item_extends_pin() {
        let start = Instant::now();
        let mut s = selector(3, 10, 30);
        s.select(2, start).unwrap();
        s.select(2, start + secs(29)).unwrap();
        assert_eq!(s.remaining_cooldown(start + secs(30)), Some(secs(29)));
    }

    #[test]
    fn test_featured_scenario_five_items() {
        // Tick every 7s, select(3) at t=5s with a 15s cooldown.
        let t0 = Instant::now();
        let at = |n: u64| t0 + secs(n);
        let mut s = selector(5, 7, 15);

        s.select(3, at(5)).unwrap();
        assert_eq!(s.current_index(), 3);

        s.tick(at(7));
        assert_eq!(s.current_index(), 3);
        s.tick(at(14));
        assert_eq!(s.current_index(), 3);
        assert!(s.is_manual());
        assert_eq!(s.remaining_cooldown(at(14)), Some(secs(6)));

        s.expire(at(20));
        assert!(!s.is_manual());
        assert_eq!(s.current_index(), 3);

        s.tick(at(21));
        assert_eq!(s.current_index(), 4);
    }

    #[test]
    fn test_tick_at_deadline_without_expire_advances() {
        let t0 = Instant::now();
        let mut s = selector(5, 7, 15);
        s.select(3, t0).unwrap();
        s.tick(t0 + secs(15));
        assert!(!s.is_manual());
        assert_eq!(s.current_index(), 4);
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let now = Instant::now();
        let mut s = selector(3, 7, 15);
        s.select_previous(now);
        assert_eq!(s.current_index(), 2);
        assert!(s.is_manual());
        s.select_next(now);
        assert_eq!(s.current_index(), 0);
        s.select_next(now);
        assert_eq!(s.current_index(), 1);
    }

    #[test]
    fn test_apply_is_pure() {
        let now = Instant::now();
        let policy = RotationPolicy {
            len: NonZeroUsize::new(2).unwrap(),
            cooldown: secs(15),
        };
        let initial = RotationState::default();
        let next = initial.apply(RotationEvent::Tick { now }, &policy);
        assert_eq!(initial.current_index(), 0);
        assert_eq!(next.current_index(), 1);
        let ignored = next.apply(RotationEvent::Select { index: 5, now }, &policy);
        assert_eq!(ignored, next);
    }
}
