//! Closed set of finalized states.

use std::collections::HashSet;

use crate::state::State;

/// States already expanded, preventing re-expansion.
///
/// Membership must stay O(1) amortized; the search loop tests it once per
/// pop and once per generated child.
#[derive(Debug, Default)]
pub struct ClosedSet {
    states: HashSet<State>,
}

impl ClosedSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a state; returns `false` if it was already closed.
    pub fn insert(&mut self, state: State) -> bool {
        self.states.insert(state)
    }

    #[must_use]
    pub fn contains(&self, state: &State) -> bool {
        self.states.contains(state)
    }

    /// Number of distinct states expanded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
