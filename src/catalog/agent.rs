//! Simulated trading agents.

use super::PriceSeries;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Agent lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AgentStatus {
    #[default]
    Active,
    Liquidated,
    Stopped,
}

impl std::fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Liquidated => write!(f, "Liquidated"),
            Self::Stopped => write!(f, "Stopped"),
        }
    }
}

/// An agent's exposure to one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentPosition {
    /// Asset symbol.
    pub asset: String,
    /// Notional allocated.
    pub amount: Decimal,
    /// PnL on this position.
    pub pnl: Decimal,
}

/// A simulated trading agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Agent ID.
    pub id: String,
    /// Display name; also the rotation identifier.
    pub name: String,
    /// Total PnL.
    pub pnl: Decimal,
    /// PnL as a percent of the starting portfolio.
    pub pnl_percent: Decimal,
    /// Status.
    #[serde(default)]
    pub status: AgentStatus,
    /// Starting portfolio size.
    pub portfolio: Decimal,
    /// Share of winning trades, in percent.
    pub win_rate: Decimal,
    /// Traded volume.
    pub volume: Decimal,
    /// Strategy description.
    pub strategy: String,
    /// Per-asset positions.
    #[serde(default)]
    pub positions: Vec<AgentPosition>,
    /// Portfolio value over time.
    #[serde(default)]
    pub portfolio_curve: PriceSeries,
}

impl Agent {
    /// Sum of position PnL.
    pub fn positions_pnl(&self) -> Decimal {
        self.positions.iter().map(|p| p.pnl).sum()
    }

    /// Sum of position notionals.
    pub fn allocated(&self) -> Decimal {
        self.positions.iter().map(|p| p.amount).sum()
    }

    /// Current portfolio value.
    pub fn equity(&self) -> Decimal {
        self.portfolio + self.pnl
    }

    /// Price in cents of a "YES, this agent wins" share, from its win rate.
    pub fn yes_price_cents(&self) -> Decimal {
        self.win_rate.round_dp(2)
    }

    /// Price in cents of the complementary "NO" share.
    pub fn no_price_cents(&self) -> Decimal {
        Decimal::ONE_HUNDRED - self.yes_price_cents()
    }

    /// Check if the agent is in profit.
    pub fn is_profitable(&self) -> bool {
        self.pnl > Decimal::ZERO
    }

    /// Initials for compact display ("QuantumTrader AI" -> "QA").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}
