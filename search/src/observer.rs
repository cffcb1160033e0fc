//! Optional search progress hook.
//!
//! The reference behavior printed per-expansion diagnostics unconditionally;
//! that output is not part of the contract. Progress is exposed here as an
//! explicit observer instead, so instrumentation never sits on the hot path
//! unless a caller asks for it.

use crate::state::Location;

/// A single frontier-pop + expansion, reported just after the popped state
/// is closed and before its children are generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandEvent {
    /// Total order of expansions, starting at 0.
    pub expansion_order: u64,
    /// The agent location of the expanded state.
    pub location: Location,
    /// Targets still un-neutralized in the expanded state.
    pub targets_remaining: usize,
    /// Path cost of the expanded node.
    pub g: u64,
    /// Expansion priority of the expanded node.
    pub f: u64,
    /// Frontier size after the pop.
    pub frontier_len: usize,
}

/// Callback hook for search progress.
///
/// All methods default to no-ops; implement only what you need.
pub trait SearchObserver {
    /// Called once per expansion.
    fn on_expand(&mut self, event: &ExpandEvent) {
        let _ = event;
    }

    /// Called once when a goal node is popped, with the final path cost.
    fn on_goal(&mut self, cost: u64) {
        let _ = cost;
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SearchObserver for NullObserver {}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingObserver {
        expansions: u64,
        goal_cost: Option<u64>,
    }

    impl SearchObserver for CountingObserver {
        fn on_expand(&mut self, _event: &ExpandEvent) {
            self.expansions += 1;
        }

        fn on_goal(&mut self, cost: u64) {
            self.goal_cost = Some(cost);
        }
    }

    #[test]
    fn default_methods_are_no_ops() {
        let mut observer = NullObserver;
        observer.on_expand(&ExpandEvent {
            expansion_order: 0,
            location: Location::new(0, 0),
            targets_remaining: 1,
            g: 0,
            f: 2,
            frontier_len: 0,
        });
        observer.on_goal(2);
    }

    #[test]
    fn custom_observer_receives_events() {
        let mut observer = CountingObserver {
            expansions: 0,
            goal_cost: None,
        };
        observer.on_expand(&ExpandEvent {
            expansion_order: 0,
            location: Location::new(0, 0),
            targets_remaining: 0,
            g: 5,
            f: 5,
            frontier_len: 3,
        });
        observer.on_goal(5);
        assert_eq!(observer.expansions, 1);
        assert_eq!(observer.goal_cost, Some(5));
    }
}
