//! Problem oracle contract trait.

use crate::state::{Location, TargetSet};

/// One legal transition out of a state, as reported by the oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// World-defined action label (e.g. a compass direction).
    pub action: String,
    /// Where the agent ends up after taking the action.
    pub next_location: Location,
    /// The subset of remaining targets this action neutralizes.
    pub targets_hit: Vec<Location>,
}

/// Trait for problem oracles consumed by [`crate::search::solve`].
///
/// The oracle owns everything the core does not: maze layout, movement and
/// collision legality, and per-action cost tables. The core only ever asks
/// it for the initial state and for transitions out of states it discovers.
///
/// # Contract
///
/// These are preconditions, not runtime-checked conditions; violating them
/// is documented misuse and voids the optimality guarantee:
///
/// - `transitions` must enumerate the full branching factor eagerly and be
///   deterministic: same `(location, remaining)` in, same transitions out.
///   The solver sorts transitions by action label before expansion, so the
///   *order* of enumeration may vary but the *set* may not.
/// - `transition_cost` must be stable for a given `(action, location)` pair.
///   Costs are `u64`, so negativity is unrepresentable; a cost model that
///   makes the Manhattan-sum heuristic overestimate (e.g. fractional
///   per-step costs below 1 rounded up elsewhere) is likewise misuse.
/// - `targets_hit` must be a subset of the `remaining` set passed in; the
///   remaining set only ever shrinks along an edge.
pub trait ProblemOracle {
    /// The agent's starting location.
    fn initial_location(&self) -> Location;

    /// The full set of targets to neutralize.
    fn initial_targets(&self) -> TargetSet;

    /// All legal transitions out of `(location, remaining)`.
    fn transitions(&self, location: Location, remaining: &TargetSet) -> Vec<Transition>;

    /// Cost of taking `action` from `location`; accumulated into g.
    fn transition_cost(&self, action: &str, location: Location) -> u64;
}
