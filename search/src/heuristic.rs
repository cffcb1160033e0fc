//! Remaining-cost estimation.

use crate::state::{Location, TargetSet};

/// Trait for goal-distance estimators.
///
/// The solver's optimality guarantee holds only for admissible estimators:
/// `estimate` must never exceed the true minimum remaining cost. Consistency
/// (`|h(s) - h(s')| <= cost(s -> s')` for adjacent states) additionally
/// guarantees each state is expanded with its optimal g the first time.
pub trait Heuristic {
    /// Estimated cost from `location` to a state with no remaining targets.
    ///
    /// Must run in O(remaining targets); it is called once per generated
    /// child.
    fn estimate(&self, location: Location, remaining: &TargetSet) -> u64;
}

/// Sum of Manhattan distances from the current location to every remaining
/// target; 0 when the set is empty.
///
/// Deliberately ignores inter-target travel order. Each term is a relaxation
/// of the cost of reaching that target, and reaching every target costs at
/// least as much as each isolated leg, so the sum of independent
/// point-to-point lower bounds never overestimates the cost of a full
/// clearing tour under unit-or-greater step costs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetDistanceSum;

impl Heuristic for TargetDistanceSum {
    fn estimate(&self, location: Location, remaining: &TargetSet) -> u64 {
        remaining
            .iter()
            .map(|target| location.manhattan_to(target))
            .sum()
    }
}
