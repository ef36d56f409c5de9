//! Broker acknowledgment written by the Exec stage.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{OrderSide, OrderStatus};
use crate::domain::shared::Symbol;

/// Result of placing an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionReport {
    /// Broker-assigned order ID.
    pub id: String,
    /// Symbol traded.
    pub symbol: Symbol,
    /// Order side.
    pub side: OrderSide,
    /// Quantity sent.
    #[serde(rename = "qty", with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    /// Broker status.
    pub status: OrderStatus,
}

impl ExecutionReport {
    /// Whether the broker accepted the order.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.status == OrderStatus::Accepted
    }
}
