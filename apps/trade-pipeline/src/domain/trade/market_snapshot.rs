//! Market data records captured by the Market stage.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{Symbol, Timestamp};

/// Top-of-book quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Instrument symbol.
    pub symbol: Symbol,
    /// Best bid price.
    #[serde(with = "rust_decimal::serde::float")]
    pub bid: Decimal,
    /// Best ask price.
    #[serde(with = "rust_decimal::serde::float")]
    pub ask: Decimal,
    /// Bid size.
    pub bid_size: u64,
    /// Ask size.
    pub ask_size: u64,
    /// Quote timestamp.
    pub ts: Timestamp,
}

impl Quote {
    /// Get the spread.
    #[must_use]
    pub fn spread(&self) -> Decimal {
        self.ask - self.bid
    }
}

/// Most recent trade print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastTrade {
    /// Instrument symbol.
    pub symbol: Symbol,
    /// Trade price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Trade size.
    pub size: u64,
    /// Trade timestamp.
    pub ts: Timestamp,
}

/// Quote and last trade for the symbol under consideration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Latest quote.
    pub quote: Quote,
    /// Latest trade.
    pub trade: LastTrade,
}

impl MarketSnapshot {
    /// Price used as the recommendation entry.
    #[must_use]
    pub const fn entry_price(&self) -> Decimal {
        self.trade.price
    }
}
