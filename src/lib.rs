//! # Agent Arena
//!
//! A terminal dashboard for a simulated arena of AI trading agents.
//! Built with ratatui and tokio.
//!
//! ## Architecture
//!
//! The application follows a unidirectional data flow:
//!
//! - **Rotation**: The featured-item selector and the timers that drive it
//! - **State**: Centralized store; every change goes through `Store::reduce`
//! - **Events**: Keyboard and mouse input turned into actions
//! - **Catalog**: Static agents, assets, prediction markets, trades and P&L history
//! - **UI**: Layout and rendering logic
//! - **Config**: Configuration management
//! - **App**: Terminal lifecycle and the main loop

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod rotation;
pub mod state;
pub mod ui;

pub use app::App;
pub use catalog::Catalog;
pub use config::Config;
pub use error::{Error, Result};
pub use rotation::{RotationSelector, RotationTarget, RotationTimers};
pub use state::{Action, Store};
