//! Trade signal supplied by the caller.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::OrderSide;
use crate::domain::shared::DomainError;

/// A trade idea: direction, size and optional exit levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    /// Direction of the trade.
    pub side: OrderSide,
    /// Number of shares.
    #[serde(rename = "qty", with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    /// Stop-loss price.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub stop: Option<Decimal>,
    /// Take-profit price.
    #[serde(
        rename = "tp",
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub take_profit: Option<Decimal>,
}

impl Signal {
    /// Create a signal without exit levels.
    #[must_use]
    pub const fn new(side: OrderSide, quantity: Decimal) -> Self {
        Self {
            side,
            quantity,
            stop: None,
            take_profit: None,
        }
    }

    /// Set the stop-loss price.
    #[must_use]
    pub const fn with_stop(mut self, stop: Decimal) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Set the take-profit price.
    #[must_use]
    pub const fn with_take_profit(mut self, take_profit: Decimal) -> Self {
        self.take_profit = Some(take_profit);
        self
    }

    /// Validate the signal size.
    ///
    /// # Errors
    ///
    /// Returns error if the quantity is zero or negative.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.quantity <= Decimal::ZERO {
            return Err(DomainError::invalid_value("qty", "must be positive"));
        }
        Ok(())
    }
}
