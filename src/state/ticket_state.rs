//! Bet ticket for an agent or a prediction market.

use crate::catalog::Outcome;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Amount a fresh ticket starts with.
pub const DEFAULT_AMOUNT: Decimal = dec!(10);

/// Step applied by the increase/decrease keys.
pub const AMOUNT_STEP: Decimal = dec!(10);

/// Shares won per dollar at `price_cents`, times `amount`. Zero for a non-positive price.
pub fn potential_winnings(amount: Decimal, price_cents: Decimal) -> Decimal {
    if price_cents <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    amount / price_cents * Decimal::ONE_HUNDRED
}

/// Dollars received for selling `shares` at `price_cents`.
pub fn sell_proceeds(shares: Decimal, price_cents: Decimal) -> Decimal {
    shares * price_cents / Decimal::ONE_HUNDRED
}

/// Ticket side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TicketSide {
    #[default]
    Buy,
    Sell,
}

impl std::fmt::Display for TicketSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "Buy"),
            Self::Sell => write!(f, "Sell"),
        }
    }
}

/// An open bet ticket.
#[derive(Debug, Clone, PartialEq)]
pub struct BetTicket {
    /// What is being bet on: an agent name or a market title.
    pub title: String,
    /// YES or NO shares.
    pub outcome: Outcome,
    /// Buy or sell.
    pub side: TicketSide,
    /// Dollars to spend (buy) or shares to sell (sell).
    pub amount: Decimal,
    /// YES share price in cents.
    pub yes_cents: Decimal,
    /// NO share price in cents.
    pub no_cents: Decimal,
}

impl BetTicket {
    /// Open a YES buy ticket on `title`.
    pub fn new(title: impl Into<String>, yes_cents: Decimal, no_cents: Decimal) -> Self {
        Self {
            title: title.into(),
            outcome: Outcome::Yes,
            side: TicketSide::Buy,
            amount: DEFAULT_AMOUNT,
            yes_cents,
            no_cents,
        }
    }

    /// Price in cents of the chosen outcome.
    pub fn price_cents(&self) -> Decimal {
        self.price_of(self.outcome)
    }

    /// Price in cents of `outcome`.
    pub fn price_of(&self, outcome: Outcome) -> Decimal {
        match outcome {
            Outcome::Yes => self.yes_cents,
            Outcome::No => self.no_cents,
        }
    }

    /// Change the amount, never going below zero.
    pub fn adjust(&mut self, delta: Decimal) {
        self.amount = (self.amount + delta).max(Decimal::ZERO);
    }

    /// Switch between buy and sell.
    pub fn toggle_side(&mut self) {
        self.side = match self.side {
            TicketSide::Buy => TicketSide::Sell,
            TicketSide::Sell => TicketSide::Buy,
        };
    }

    /// Switch between YES and NO.
    pub fn toggle_outcome(&mut self) {
        self.outcome = self.outcome.opposite();
    }

    /// Winnings if buying, proceeds if selling.
    pub fn estimate(&self) -> Decimal {
        match self.side {
            TicketSide::Buy => potential_winnings(self.amount, self.price_cents()),
            TicketSide::Sell => sell_proceeds(self.amount, self.price_cents()),
        }
    }

    /// One-line summary used for the confirmation notification.
    pub fn summary(&self) -> String {
        match self.side {
            TicketSide::Buy => format!(
                "Bought ${:.2} of {} {} at {:.2}¢, to win ${:.2}",
                self.amount,
                self.title,
                self.outcome,
                self.price_cents(),
                self.estimate()
            ),
            TicketSide::Sell => format!(
                "Sold {:.2} shares of {} {} at {:.2}¢ for ${:.2}",
                self.amount,
                self.title,
                self.outcome,
                self.price_cents(),
                self.estimate()
            ),
        }
    }
}
