//! Static dashboard data.
//!
//! The catalog is built once at startup, either from the built-in demo
//! set or from a TOML file, and handed to the store. Nothing mutates it
//! afterwards.

mod agent;
mod demo;
mod history;
mod market;
mod prediction;
mod trade;

pub use agent::{Agent, AgentPosition, AgentStatus};
pub use history::{AssetPnl, HistoryEntry};
pub use market::{Asset, PricePoint, PriceSeries};
pub use prediction::{
    ladder, Category, MarketStatus, Outcome, PredictionMarket, PriceLevel, LADDER_DEPTH,
    MAX_SHARE_PRICE, MIN_SHARE_PRICE,
};
pub use trade::{Direction, Trade, TradeStatus};

use crate::error::{Error, Result};
use crate::rotation::RotationSelector;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Looks up the series to chart for a featured item.
#[cfg_attr(test, mockall::automock)]
pub trait SeriesSource {
    /// Series for an agent name or asset symbol, if known.
    fn series_for(&self, item: &str) -> Option<PriceSeries>;
}

/// Series for whatever the selector currently features.
pub fn featured_series(
    source: &dyn SeriesSource,
    selector: &RotationSelector<String>,
) -> Option<PriceSeries> {
    source.series_for(selector.featured())
}

/// Everything the dashboard shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Agents, in leaderboard order.
    pub agents: Vec<Agent>,
    /// Assets, in board order.
    pub assets: Vec<Asset>,
    /// Hourly PnL history.
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    /// Prediction markets, in board order.
    #[serde(default)]
    pub markets: Vec<PredictionMarket>,
    /// Agent trade log, newest first per agent.
    #[serde(default)]
    pub trades: Vec<Trade>,
}

impl Catalog {
    /// The built-in demo data set.
    pub fn demo() -> Self {
        demo::catalog()
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            agents = catalog.agents.len(),
            assets = catalog.assets.len(),
            markets = catalog.markets.len(),
            trades = catalog.trades.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse and validate a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let catalog: Self = toml::from_str(content).map_err(|e| Error::catalog(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load from `path` if given, otherwise use the demo set.
    pub fn load_or_demo(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::demo()),
        }
    }

    /// Reject empty lists, duplicates, out-of-range share prices and
    /// markets or trades naming an unknown agent.
    pub fn validate(&self) -> Result<()> {
        if self.agents.is_empty() {
            return Err(Error::catalog("catalog has no agents"));
        }
        if self.assets.is_empty() {
            return Err(Error::catalog("catalog has no assets"));
        }
        let mut names = HashSet::new();
        if let Some(dup) = self.agents.iter().find(|a| !names.insert(a.name.as_str())) {
            return Err(Error::catalog(format!("duplicate agent name: {}", dup.name)));
        }
        let mut symbols = HashSet::new();
        if let Some(dup) = self
            .assets
            .iter()
            .find(|a| !symbols.insert(a.symbol.as_str()))
        {
            return Err(Error::catalog(format!(
                "duplicate asset symbol: {}",
                dup.symbol
            )));
        }

        let mut ids = HashSet::new();
        for market in &self.markets {
            if !ids.insert(market.id.as_str()) {
                return Err(Error::catalog(format!("duplicate market id: {}", market.id)));
            }
            let cents = Decimal::ONE..=Decimal::from(99);
            if !cents.contains(&market.yes_price) || !cents.contains(&market.no_price) {
                return Err(Error::catalog(format!(
                    "market {}: share prices must be within 1-99 cents",
                    market.id
                )));
            }
            if let Some(agent) = market.agent.as_deref().filter(|a| self.agent(a).is_none()) {
                return Err(Error::catalog(format!(
                    "market {}: unknown agent {agent}",
                    market.id
                )));
            }
        }

        for trade in &self.trades {
            if self.agent(&trade.agent).is_none() {
                return Err(Error::catalog(format!(
                    "trade at {}: unknown agent {}",
                    trade.time, trade.agent
                )));
            }
            if let Some(problem) = trade.problem() {
                return Err(Error::catalog(format!(
                    "trade by {} at {}: {problem}",
                    trade.agent, trade.time
                )));
            }
        }
        Ok(())
    }

    /// Agent names, in order.
    pub fn agent_names(&self) -> Vec<String> {
        self.agents.iter().map(|a| a.name.clone()).collect()
    }

    /// Asset symbols, in order.
    pub fn asset_symbols(&self) -> Vec<String> {
        self.assets.iter().map(|a| a.symbol.clone()).collect()
    }

    /// Find an agent by name.
    pub fn agent(&self, name: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.name == name)
    }

    /// Find an asset by symbol.
    pub fn asset(&self, symbol: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.symbol == symbol)
    }

    /// Combined PnL of every agent.
    pub fn arena_pnl(&self) -> Decimal {
        self.agents.iter().map(|a| a.pnl).sum()
    }

    /// Combined traded volume of every agent.
    pub fn arena_volume(&self) -> Decimal {
        self.agents.iter().map(|a| a.volume).sum()
    }

    /// Agent with the highest PnL.
    pub fn best_agent(&self) -> Option<&Agent> {
        self.agents.iter().max_by_key(|a| a.pnl)
    }

    /// Markets in `category`, or all of them.
    pub fn markets_in(&self, category: Option<Category>) -> Vec<&PredictionMarket> {
        self.markets
            .iter()
            .filter(|m| category.is_none_or(|c| m.category == c))
            .collect()
    }

    /// Trades made by `agent`.
    pub fn trades_for(&self, agent: &str) -> Vec<&Trade> {
        self.trades.iter().filter(|t| t.agent == agent).collect()
    }
}

impl SeriesSource for Catalog {
    fn series_for(&self, item: &str) -> Option<PriceSeries> {
        self.agent(item)
            .map(|a| a.portfolio_curve.clone())
            .or_else(|| self.asset(item).map(|a| a.series.clone()))
    }
}
