//! Risk Check Port (Driven Port)
//!
//! Interface for the pre-trade risk engine.

use crate::domain::risk_management::{RiskReport, RiskValidationService};
use crate::domain::trade::Recommendation;

/// Port for evaluating a recommendation before approval.
///
/// A check always yields a report; a failed check is a report with
/// `passed == false`, not an error.
pub trait RiskCheckPort: Send + Sync {
    /// Evaluate a candidate order.
    fn check(&self, recommendation: &Recommendation) -> RiskReport;
}

impl RiskCheckPort for RiskValidationService {
    fn check(&self, recommendation: &Recommendation) -> RiskReport {
        self.validate(recommendation)
    }
}
