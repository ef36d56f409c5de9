//! Risk report value objects.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Limits the risk check reports alongside its verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskLimits {
    /// Maximum risk allowed per trade, in account currency.
    #[serde(with = "rust_decimal::serde::float")]
    pub max_trade_risk: Decimal,
}

impl RiskLimits {
    /// Create limits with the given per-trade risk cap.
    #[must_use]
    pub const fn new(max_trade_risk: Decimal) -> Self {
        Self { max_trade_risk }
    }
}

impl Default for RiskLimits {
    fn default() -> Self {
        Self::new(dec!(100.0))
    }
}

/// Outcome of a risk check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskReport {
    /// Whether the order may proceed.
    #[serde(rename = "pass")]
    pub passed: bool,
    /// Human-readable reasons for a failed check.
    pub reasons: Vec<String>,
    /// Limits in force for the check.
    pub limits: RiskLimits,
}

impl RiskReport {
    /// Build a report that passes exactly when there are no reasons.
    #[must_use]
    pub fn from_reasons(reasons: Vec<String>, limits: RiskLimits) -> Self {
        Self {
            passed: reasons.is_empty(),
            reasons,
            limits,
        }
    }
}
