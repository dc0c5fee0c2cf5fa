//! Hourly PnL history.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// PnL on one asset at one point in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetPnl {
    /// Asset symbol.
    pub asset: String,
    /// PnL.
    pub pnl: Decimal,
    /// Leverage multiple.
    pub leverage: u32,
}

/// PnL across all assets at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Sample time.
    pub time: NaiveDateTime,
    /// Per-asset breakdown.
    pub legs: Vec<AssetPnl>,
}

impl HistoryEntry {
    /// Aggregate PnL over all assets.
    pub fn total_pnl(&self) -> Decimal {
        self.legs.iter().map(|leg| leg.pnl).sum()
    }

    /// PnL for one asset, if present.
    pub fn pnl_for(&self, asset: &str) -> Option<Decimal> {
        self.legs.iter().find(|leg| leg.asset == asset).map(|leg| leg.pnl)
    }
}
