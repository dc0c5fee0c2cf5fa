//! Per-agent trade log.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Trade direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Long,
    Short,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Long => write!(f, "Long"),
            Self::Short => write!(f, "Short"),
        }
    }
}

/// Trade status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeStatus {
    Closed,
    Open,
    Liquidated,
}

impl std::fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closed => write!(f, "Closed"),
            Self::Open => write!(f, "Open"),
            Self::Liquidated => write!(f, "Liquidated"),
        }
    }
}

/// One leveraged trade by an agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Agent name.
    pub agent: String,
    /// When the trade was opened.
    pub time: NaiveDateTime,
    /// Asset symbol.
    pub asset: String,
    /// Long or short.
    pub direction: Direction,
    /// Leverage multiple.
    pub leverage: u32,
    /// Entry price.
    pub entry_price: Decimal,
    /// Exit price; absent while open.
    #[serde(default)]
    pub exit_price: Option<Decimal>,
    /// Position size.
    pub size: Decimal,
    /// Margin posted.
    pub margin: Decimal,
    /// Realized PnL; zero while open.
    #[serde(default)]
    pub pnl: Decimal,
    /// Status.
    pub status: TradeStatus,
    /// Minutes held; absent while open.
    #[serde(default)]
    pub duration_mins: Option<u32>,
}

impl Trade {
    /// Whether the position is still open.
    pub fn is_open(&self) -> bool {
        self.status == TradeStatus::Open
    }

    /// PnL as a percent of margin.
    pub fn return_on_margin(&self) -> Decimal {
        if self.margin.is_zero() {
            return Decimal::ZERO;
        }
        self.pnl / self.margin * Decimal::ONE_HUNDRED
    }

    /// Holding time as `1h 23m` / `45m`, or `-` while open.
    pub fn duration_label(&self) -> String {
        match self.duration_mins {
            Some(mins) if mins >= 60 => format!("{}h {}m", mins / 60, mins % 60),
            Some(mins) => format!("{mins}m"),
            None => "-".to_string(),
        }
    }

    /// Reason the record is inconsistent, if it is.
    pub fn problem(&self) -> Option<&'static str> {
        if self.leverage == 0 {
            return Some("leverage must be at least 1");
        }
        if self.margin <= Decimal::ZERO {
            return Some("margin must be positive");
        }
        match (self.is_open(), self.exit_price.is_some()) {
            (true, true) => Some("open trade has an exit price"),
            (false, false) => Some("closed trade has no exit price"),
            _ => None,
        }
    }
}
