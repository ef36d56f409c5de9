//! Risk Management Context
//!
//! Risk reports and the pre-trade risk check.

mod risk_report;
pub mod services;

pub use risk_report::{RiskLimits, RiskReport};
pub use services::{MISSING_STOP_REASON, RiskValidationService};
