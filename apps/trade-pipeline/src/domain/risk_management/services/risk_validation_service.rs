//! Risk Validation Service
//!
//! Pre-trade check applied to every recommendation. Orders must carry a
//! stop-loss; nothing else is evaluated yet.

use crate::domain::risk_management::{RiskLimits, RiskReport};
use crate::domain::trade::Recommendation;

/// Reason reported when a recommendation has no stop-loss.
pub const MISSING_STOP_REASON: &str = "No stop provided (required).";

/// Domain service that validates recommendations against risk limits.
#[derive(Debug, Clone, Default)]
pub struct RiskValidationService {
    limits: RiskLimits,
}

impl RiskValidationService {
    /// Create a service reporting the given limits.
    #[must_use]
    pub const fn new(limits: RiskLimits) -> Self {
        Self { limits }
    }

    /// Validate a recommendation.
    #[must_use]
    pub fn validate(&self, recommendation: &Recommendation) -> RiskReport {
        let mut reasons = Vec::new();

        if !recommendation.has_stop() {
            reasons.push(MISSING_STOP_REASON.to_string());
        }

        RiskReport::from_reasons(reasons, self.limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::Symbol;
    use crate::domain::trade::{OrderSide, Signal};
    use rust_decimal_macros::dec;

    fn recommendation(signal: &Signal) -> Recommendation {
        Recommendation::from_signal(Symbol::new("AAPL"), signal, dec!(100.0))
    }

    #[test]
    fn requires_stop() {
        let service = RiskValidationService::default();
        let report = service.validate(&recommendation(&Signal::new(OrderSide::Buy, dec!(5))));

        assert!(!report.passed);
        assert_eq!(report.reasons, vec![MISSING_STOP_REASON.to_string()]);
        assert!(report.reasons.iter().any(|r| r.to_lowercase().contains("stop")));
    }

    #[test]
    fn passes_with_stop() {
        let service = RiskValidationService::default();
        let signal = Signal::new(OrderSide::Buy, dec!(5)).with_stop(dec!(98.0));
        let report = service.validate(&recommendation(&signal));

        assert!(report.passed);
        assert!(report.reasons.is_empty());
    }

    #[test]
    fn take_profit_alone_is_not_enough() {
        let service = RiskValidationService::default();
        let signal = Signal::new(OrderSide::Sell, dec!(2)).with_take_profit(dec!(95.0));

        assert!(!service.validate(&recommendation(&signal)).passed);
    }

    #[test]
    fn reports_configured_limits() {
        let service = RiskValidationService::new(RiskLimits::new(dec!(250)));
        let report = service.validate(&recommendation(&Signal::new(OrderSide::Buy, dec!(1))));

        assert_eq!(report.limits.max_trade_risk, dec!(250));
    }
}
