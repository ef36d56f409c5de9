//! Recommended order built by the Risk stage.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{OrderSide, OrderType, Signal};
use crate::domain::shared::Symbol;

/// Candidate order derived from a signal and the last trade price.
///
/// Exit levels serialize as `null` when the signal carried none, so the
/// journal always shows whether a stop was considered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Symbol to trade.
    pub symbol: Symbol,
    /// Order side.
    pub side: OrderSide,
    /// Quantity.
    #[serde(rename = "qty", with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    /// Reference entry price (last trade).
    #[serde(with = "rust_decimal::serde::float")]
    pub entry: Decimal,
    /// Stop-loss price.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub stop: Option<Decimal>,
    /// Take-profit price.
    #[serde(rename = "tp", default, with = "rust_decimal::serde::float_option")]
    pub take_profit: Option<Decimal>,
    /// Order type.
    #[serde(rename = "type")]
    pub order_type: OrderType,
}

impl Recommendation {
    /// Build a market-order recommendation from a signal.
    #[must_use]
    pub fn from_signal(symbol: Symbol, signal: &Signal, entry: Decimal) -> Self {
        Self {
            symbol,
            side: signal.side,
            quantity: signal.quantity,
            entry,
            stop: signal.stop,
            take_profit: signal.take_profit,
            order_type: OrderType::Market,
        }
    }

    /// Whether a stop-loss price is attached.
    #[must_use]
    pub const fn has_stop(&self) -> bool {
        self.stop.is_some()
    }
}
