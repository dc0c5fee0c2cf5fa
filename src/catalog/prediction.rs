//! Prediction markets on agent performance and their order ladders.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::hash::{DefaultHasher, Hash, Hasher};

/// Levels shown on each side of a ladder.
pub const LADDER_DEPTH: usize = 8;

/// Lowest price a share can trade at, in dollars.
pub const MIN_SHARE_PRICE: Decimal = dec!(0.01);

/// Highest price a share can trade at, in dollars.
pub const MAX_SHARE_PRICE: Decimal = dec!(0.99);

/// Market lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarketStatus {
    #[default]
    Open,
    Locked,
    Resolved,
}

impl std::fmt::Display for MarketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "Open"),
            Self::Locked => write!(f, "Locked"),
            Self::Resolved => write!(f, "Resolved"),
        }
    }
}

/// What a market asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Performance,
    Risk,
    Returns,
}

impl Category {
    /// Categories in filter order.
    pub const ALL: [Category; 3] = [Category::Performance, Category::Risk, Category::Returns];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Performance => write!(f, "Performance"),
            Self::Risk => write!(f, "Risk"),
            Self::Returns => write!(f, "Returns"),
        }
    }
}

/// Which share of a binary market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Yes,
    No,
}

impl Outcome {
    /// The other outcome.
    pub fn opposite(self) -> Self {
        match self {
            Self::Yes => Self::No,
            Self::No => Self::Yes,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yes => write!(f, "YES"),
            Self::No => write!(f, "NO"),
        }
    }
}

/// A binary prediction market. Multi-agent questions are stored as one
/// market per agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionMarket {
    /// Market ID.
    pub id: String,
    /// The question being predicted.
    pub question: String,
    /// Status.
    #[serde(default)]
    pub status: MarketStatus,
    /// Time until the market locks, as displayed.
    pub time_left: String,
    /// YES share price in cents.
    pub yes_price: Decimal,
    /// NO share price in cents.
    pub no_price: Decimal,
    /// Traded volume in dollars.
    pub volume: Decimal,
    /// Number of participants.
    pub participants: u32,
    /// Category.
    pub category: Category,
    /// Agent this option refers to, for multi-agent questions.
    #[serde(default)]
    pub agent: Option<String>,
}

impl PredictionMarket {
    /// `Agent - question` for multi-agent options, the question otherwise.
    pub fn title(&self) -> String {
        match &self.agent {
            Some(agent) => format!("{agent} - {}", self.question),
            None => self.question.clone(),
        }
    }

    /// Share price in cents for `outcome`.
    pub fn price(&self, outcome: Outcome) -> Decimal {
        match outcome {
            Outcome::Yes => self.yes_price,
            Outcome::No => self.no_price,
        }
    }

    /// Whether new tickets may be opened.
    pub fn is_tradable(&self) -> bool {
        self.status == MarketStatus::Open
    }

    /// Resting orders for `outcome`, stepping one cent away from its price.
    pub fn ladder(&self, outcome: Outcome) -> Vec<PriceLevel> {
        let mut hasher = DefaultHasher::new();
        self.id.hash(&mut hasher);
        outcome.hash(&mut hasher);
        ladder(self.price(outcome), outcome, LADDER_DEPTH, hasher.finish())
    }
}

/// One resting price level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceLevel {
    /// Price in dollars per share, within 0.01..=0.99.
    pub price: Decimal,
    /// Shares resting at this price.
    pub volume: u32,
}

impl PriceLevel {
    /// Implied probability in percent.
    pub fn percent(&self) -> Decimal {
        self.price * Decimal::ONE_HUNDRED
    }
}

/// Build `depth` levels from `base_cents`. YES steps down a cent per level,
/// NO steps up; prices are clamped to one cent from either bound.
/// Volumes are 500..5500 and fixed for a given `seed`.
pub fn ladder(base_cents: Decimal, outcome: Outcome, depth: usize, seed: u64) -> Vec<PriceLevel> {
    let base = base_cents / Decimal::ONE_HUNDRED;
    let step = match outcome {
        Outcome::Yes => -MIN_SHARE_PRICE,
        Outcome::No => MIN_SHARE_PRICE,
    };

    let mut state = seed | 1;
    (0..depth)
        .map(|i| {
            // xorshift64
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            PriceLevel {
                price: (base + step * Decimal::from(i)).clamp(MIN_SHARE_PRICE, MAX_SHARE_PRICE),
                volume: 500 + (state % 5000) as u32,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn market(agent: Option<&str>) -> PredictionMarket {
        PredictionMarket {
            id: "multi-1-alpha".to_string(),
            question: "Which agents will finish in Top 3?".to_string(),
            status: MarketStatus::Open,
            time_left: "3h 15m".to_string(),
            yes_price: dec!(45),
            no_price: dec!(55),
            volume: dec!(2100),
            participants: 89,
            category: Category::Performance,
            agent: agent.map(str::to_string),
        }
    }

    #[test]
    fn test_title_prefixes_agent() {
        assert_eq!(
            market(Some("QuantumTrader AI")).title(),
            "QuantumTrader AI - Which agents will finish in Top 3?"
        );
        assert_eq!(market(None).title(), "Which agents will finish in Top 3?");
    }

    #[test]
    fn test_ladder_steps_away_from_price() {
        let m = market(None);
        let yes: Vec<Decimal> = m.ladder(Outcome::Yes).iter().map(|l| l.price).collect();
        assert_eq!(yes[0], dec!(0.45));
        assert_eq!(yes[7], dec!(0.38));
        let no: Vec<Decimal> = m.ladder(Outcome::No).iter().map(|l| l.price).collect();
        assert_eq!(no[0], dec!(0.55));
        assert_eq!(no[7], dec!(0.62));
    }

    #[test]
    fn test_ladder_clamps_at_bounds() {
        let low = ladder(dec!(3), Outcome::Yes, 8, 7);
        assert_eq!(low[2].price, dec!(0.01));
        assert!(low.iter().all(|l| l.price >= MIN_SHARE_PRICE));
        assert_eq!(low[7].price, dec!(0.01));

        let high = ladder(dec!(97), Outcome::No, 8, 7);
        assert_eq!(high[2].price, dec!(0.99));
        assert_eq!(high[7].price, dec!(0.99));
        assert_eq!(high[7].percent(), dec!(99));
    }

    #[test]
    fn test_ladder_volumes_are_stable() {
        let m = market(None);
        let first = m.ladder(Outcome::Yes);
        assert_eq!(first, m.ladder(Outcome::Yes));
        assert!(first.iter().all(|l| (500..5500).contains(&l.volume)));
    }

    #[test]
    fn test_outcome_prices() {
        let m = market(None);
        assert_eq!(m.price(Outcome::No), dec!(55));
        assert_eq!(Outcome::Yes.opposite(), Outcome::No);
        assert!(m.is_tradable());
    }
}
