//! Approval Port (Driven Port)
//!
//! Decides whether a risk-checked recommendation may be executed.

use crate::domain::trade::TradeState;

/// Port for the approval decision.
pub trait ApprovalPort: Send + Sync {
    /// Decide on the state as it stands after the Risk stage.
    fn decide(&self, state: &TradeState) -> bool;
}

/// Approves exactly when the risk report passed.
///
/// An absent risk report is a rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoApproval;

impl ApprovalPort for AutoApproval {
    fn decide(&self, state: &TradeState) -> bool {
        state.risk_passed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::risk_management::{RiskLimits, RiskReport};

    #[test]
    fn approves_passing_report() {
        let mut state = TradeState::new();
        state
            .record_risk_report(RiskReport::from_reasons(vec![], RiskLimits::default()))
            .unwrap();

        assert!(AutoApproval.decide(&state));
    }

    #[test]
    fn rejects_failing_report() {
        let mut state = TradeState::new();
        state
            .record_risk_report(RiskReport::from_reasons(
                vec!["No stop provided (required).".to_string()],
                RiskLimits::default(),
            ))
            .unwrap();

        assert!(!AutoApproval.decide(&state));
    }

    #[test]
    fn rejects_missing_report() {
        assert!(!AutoApproval.decide(&TradeState::new()));
    }
}
