//! Typed solve errors.
//!
//! "Unsolvable" is a legitimate negative result of an exhaustive search, not
//! a fault; it gets its own variant so callers can always tell it apart from
//! a search that was cut short by a budget. Oracle misuse (see
//! [`crate::contract::ProblemOracle`]) is a precondition and has no variant
//! here.

use std::time::Duration;

/// Why a solve invocation did not return a solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The frontier exhausted without ever reaching a cleared state: the
    /// problem has no solution.
    Unsolvable,
    /// The expansion budget ran out before the search resolved either way.
    ExpansionBudgetExceeded {
        /// The configured cap that was hit.
        limit: u64,
    },
    /// The wall-clock deadline passed before the search resolved either way.
    DeadlineExpired {
        /// The configured deadline that was hit.
        deadline: Duration,
    },
}

impl SolveError {
    /// `true` for budget/deadline aborts, `false` for a proven negative.
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        !matches!(self, Self::Unsolvable)
    }
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsolvable => write!(f, "no action sequence clears every target"),
            Self::ExpansionBudgetExceeded { limit } => {
                write!(f, "search aborted: expansion budget of {limit} exceeded")
            }
            Self::DeadlineExpired { deadline } => {
                write!(f, "search aborted: deadline of {deadline:?} expired")
            }
        }
    }
}

impl std::error::Error for SolveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsolvable_is_not_an_abort() {
        assert!(!SolveError::Unsolvable.is_aborted());
        assert!(SolveError::ExpansionBudgetExceeded { limit: 10 }.is_aborted());
        assert!(SolveError::DeadlineExpired {
            deadline: Duration::from_secs(1)
        }
        .is_aborted());
    }

    #[test]
    fn display_distinguishes_kinds() {
        let unsolvable = SolveError::Unsolvable.to_string();
        let budget = SolveError::ExpansionBudgetExceeded { limit: 10 }.to_string();
        assert_ne!(unsolvable, budget);
        assert!(budget.contains("aborted"));
        assert!(!unsolvable.contains("aborted"));
    }
}
