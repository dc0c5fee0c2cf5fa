//! Event handling for Agent Arena.
//!
//! Terminal input is turned into [`Action`](crate::state::Action)s here;
//! timer-driven actions come from [`crate::rotation::RotationTimers`].

mod handler;
mod input;

pub use handler::{EventHandler, view_target};
pub use input::{KeyBinding, KeyMap};
