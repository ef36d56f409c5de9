//! Pipeline stages and routing.

use std::fmt;

use crate::domain::trade::TradeState;

/// A node of the pipeline graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Resolve the symbol and capture a market snapshot.
    Market,
    /// Build the recommendation and run the risk check.
    Risk,
    /// Record the approval decision.
    Approval,
    /// Place the order when approved.
    Exec,
    /// Append the state to the journal. Always the last stage.
    Journal,
}

impl Stage {
    /// Entry point of every run.
    pub const FIRST: Self = Self::Market;

    /// Stage name as it appears in logs and errors.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Market => "market",
            Self::Risk => "risk",
            Self::Approval => "approval",
            Self::Exec => "exec",
            Self::Journal => "journal",
        }
    }

    /// Stage to run after `self`, given the state it produced.
    ///
    /// Returns `None` after [`Stage::Journal`].
    #[must_use]
    pub fn next(self, state: &TradeState) -> Option<Self> {
        match self {
            Self::Market => Some(Self::Risk),
            Self::Risk if state.risk_passed() => Some(Self::Approval),
            Self::Approval if state.is_approved() => Some(Self::Exec),
            Self::Risk | Self::Approval | Self::Exec => Some(Self::Journal),
            Self::Journal => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::risk_management::{RiskLimits, RiskReport};
    use test_case::test_case;

    fn state_with(risk_passed: Option<bool>, approved: Option<bool>) -> TradeState {
        let mut state = TradeState::new();
        if let Some(passed) = risk_passed {
            let reasons = if passed {
                vec![]
            } else {
                vec!["No stop provided (required).".to_string()]
            };
            state
                .record_risk_report(RiskReport::from_reasons(reasons, RiskLimits::default()))
                .unwrap();
        }
        if let Some(approved) = approved {
            state.record_approval(approved).unwrap();
        }
        state
    }

    #[test_case(Stage::Market, None, None => Some(Stage::Risk); "market always goes to risk")]
    #[test_case(Stage::Risk, Some(true), None => Some(Stage::Approval); "passing risk goes to approval")]
    #[test_case(Stage::Risk, Some(false), None => Some(Stage::Journal); "failing risk skips to journal")]
    #[test_case(Stage::Risk, None, None => Some(Stage::Journal); "missing report skips to journal")]
    #[test_case(Stage::Approval, Some(true), Some(true) => Some(Stage::Exec); "approved goes to exec")]
    #[test_case(Stage::Approval, Some(true), Some(false) => Some(Stage::Journal); "rejected skips to journal")]
    #[test_case(Stage::Exec, Some(true), Some(true) => Some(Stage::Journal); "exec goes to journal")]
    #[test_case(Stage::Journal, Some(true), Some(true) => None; "journal ends the run")]
    fn routing(stage: Stage, risk_passed: Option<bool>, approved: Option<bool>) -> Option<Stage> {
        stage.next(&state_with(risk_passed, approved))
    }

    #[test]
    fn first_stage_is_market() {
        assert_eq!(Stage::FIRST, Stage::Market);
    }

    #[test]
    fn display_uses_stage_name() {
        assert_eq!(Stage::Exec.to_string(), "exec");
        assert_eq!(format!("{}", Stage::Journal), "journal");
    }
}
