//! Broker Port (Driven Port)
//!
//! Interface for interacting with a brokerage for order execution.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::Symbol;
use crate::domain::trade::{ExecutionReport, OrderSide, OrderType, Recommendation};

/// Request to place an order with the broker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Symbol to trade.
    pub symbol: Symbol,
    /// Order side.
    pub side: OrderSide,
    /// Quantity.
    #[serde(rename = "qty", with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    /// Order type.
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Attached stop-loss price.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub stop: Option<Decimal>,
    /// Attached take-profit price.
    #[serde(rename = "tp", default, with = "rust_decimal::serde::float_option")]
    pub take_profit: Option<Decimal>,
}

impl OrderRequest {
    /// Create a market order request.
    #[must_use]
    pub const fn market(symbol: Symbol, side: OrderSide, quantity: Decimal) -> Self {
        Self {
            symbol,
            side,
            quantity,
            order_type: OrderType::Market,
            stop: None,
            take_profit: None,
        }
    }

    /// Create a market order carrying the recommendation's exit levels.
    #[must_use]
    pub fn from_recommendation(recommendation: &Recommendation) -> Self {
        Self::market(
            recommendation.symbol.clone(),
            recommendation.side,
            recommendation.quantity,
        )
        .with_exits(recommendation.stop, recommendation.take_profit)
    }

    /// Attach stop-loss and take-profit prices.
    #[must_use]
    pub const fn with_exits(mut self, stop: Option<Decimal>, take_profit: Option<Decimal>) -> Self {
        self.stop = stop;
        self.take_profit = take_profit;
        self
    }
}

/// Broker port error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BrokerError {
    /// The broker could not be reached or gave no decision.
    #[error("Broker unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },
}

/// Port for broker interactions.
///
/// A broker refusal is reported through [`ExecutionReport::status`];
/// `Err` is reserved for failures to reach a decision at all.
pub trait BrokerPort: Send + Sync {
    /// Place an order.
    fn place_order(&self, request: OrderRequest) -> Result<ExecutionReport, BrokerError>;
}
