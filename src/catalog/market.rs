//! Asset markets and price series.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One sample of a price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Axis label (e.g. "18:00").
    pub time: String,
    /// Price or value at this sample.
    pub price: Decimal,
    /// Traded volume in the sample window.
    #[serde(default)]
    pub volume: Decimal,
}

impl PricePoint {
    /// Create a new price point.
    pub fn new(time: impl Into<String>, price: Decimal, volume: Decimal) -> Self {
        Self {
            time: time.into(),
            price,
            volume,
        }
    }
}

/// An ordered price series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Create a series from points in time order.
    pub fn new(points: Vec<PricePoint>) -> Self {
        Self { points }
    }

    /// All points.
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First price.
    pub fn first(&self) -> Option<Decimal> {
        self.points.first().map(|p| p.price)
    }

    /// Latest price.
    pub fn last(&self) -> Option<Decimal> {
        self.points.last().map(|p| p.price)
    }

    /// Lowest price.
    pub fn min(&self) -> Option<Decimal> {
        self.points.iter().map(|p| p.price).min()
    }

    /// Highest price.
    pub fn max(&self) -> Option<Decimal> {
        self.points.iter().map(|p| p.price).max()
    }

    /// Last minus first.
    pub fn change(&self) -> Option<Decimal> {
        Some(self.last()? - self.first()?)
    }

    /// Total volume across all points.
    pub fn total_volume(&self) -> Decimal {
        self.points.iter().map(|p| p.volume).sum()
    }
}

/// A tradeable crypto asset shown on the markets view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Ticker symbol (e.g. "BTC").
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// Current price.
    pub price: Decimal,
    /// Absolute 24h change.
    pub change: Decimal,
    /// 24h change in percent.
    pub change_percent: Decimal,
    /// Recent price history.
    pub series: PriceSeries,
}

impl Asset {
    /// Whether the asset is up over the day.
    pub fn is_up(&self) -> bool {
        self.change >= Decimal::ZERO
    }
}
