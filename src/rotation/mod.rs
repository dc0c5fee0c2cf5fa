//! Featured-item rotation.
//!
//! The dashboard highlights one agent and one asset at a time. Each of
//! those highlights is a [`RotationSelector`]: it advances on a fixed
//! period and pauses for a cooldown after the user picks an item by hand.
//!
//! The selector itself is a pure state machine driven by
//! [`RotationEvent`]s; [`RotationTimers`] is the tokio side that turns
//! wall-clock time into `Action`s for the store.

mod selector;
mod timers;

pub use selector::{
    ItemList, RotationEvent, RotationMode, RotationPolicy, RotationSelector, RotationState,
};
pub use timers::RotationTimers;

/// Which featured list a rotation event applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationTarget {
    /// The featured agent on the arena view.
    Agents,
    /// The featured asset on the markets view.
    Assets,
}

impl RotationTarget {
    /// All rotation targets.
    pub const ALL: [RotationTarget; 2] = [RotationTarget::Agents, RotationTarget::Assets];
}

impl std::fmt::Display for RotationTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Agents => write!(f, "agent"),
            Self::Assets => write!(f, "asset"),
        }
    }
}
