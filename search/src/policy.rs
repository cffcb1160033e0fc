//! Search budget configuration.

use std::time::Duration;

/// Resource limits for one solve invocation.
///
/// Both limits are checked once per loop iteration, before the next pop.
/// Exceeding either aborts the search with an explicit error distinct from
/// "no solution" (see [`crate::error::SolveError`]). The default policy is
/// unbounded, matching the reference behavior.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPolicy {
    /// Hard cap on node expansions; `None` means unbounded.
    pub max_expansions: Option<u64>,
    /// Wall-clock deadline measured from the start of the solve; `None`
    /// means unbounded.
    pub deadline: Option<Duration>,
}

impl SearchPolicy {
    /// Unbounded policy.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Policy with only an expansion cap.
    #[must_use]
    pub fn with_max_expansions(limit: u64) -> Self {
        Self {
            max_expansions: Some(limit),
            deadline: None,
        }
    }
}
