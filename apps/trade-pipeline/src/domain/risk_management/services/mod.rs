//! Risk domain services.

mod risk_validation_service;

pub use risk_validation_service::{MISSING_STOP_REASON, RiskValidationService};
