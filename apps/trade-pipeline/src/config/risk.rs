//! Risk check configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::risk_management::RiskLimits;

/// Risk check configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Per-trade risk cap reported with every risk report.
    #[serde(default = "default_max_trade_risk", with = "rust_decimal::serde::float")]
    pub max_trade_risk: Decimal,
}

impl RiskConfig {
    /// Limits handed to the risk evaluator.
    #[must_use]
    pub const fn limits(&self) -> RiskLimits {
        RiskLimits::new(self.max_trade_risk)
    }
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            max_trade_risk: default_max_trade_risk(),
        }
    }
}

pub(crate) fn default_max_trade_risk() -> Decimal {
    RiskLimits::default().max_trade_risk
}
