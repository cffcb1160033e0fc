//! Search tree nodes and frontier ordering keys.
//!
//! Nodes live in an arena (`Vec<SearchNode>`) owned by the search loop and
//! are addressed by [`NodeId`]. Parent links are arena indices, so a node
//! can sit in the frontier while any number of children point back at it
//! without shared-ownership bookkeeping.

use crate::state::State;

/// Arena index of a [`SearchNode`].
pub type NodeId = usize;

/// A node in the search tree.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Full state at this node.
    pub state: State,
    /// Cumulative path cost from the root.
    pub g: u64,
    /// Heuristic estimate at this state.
    pub h: u64,
    /// The action that produced this node from its parent; `None` only for
    /// the root. A typed sentinel rather than an empty string, so a world
    /// with a legitimate `""` action label cannot collide with the root.
    pub action: Option<String>,
    /// Arena index of the parent (`None` for the root).
    pub parent: Option<NodeId>,
}

impl SearchNode {
    /// Expansion priority `f = g + h`.
    #[must_use]
    pub fn f(&self) -> u64 {
        self.g.saturating_add(self.h)
    }
}

/// The frontier ordering key: `(f, seq)`.
///
/// Lower `f` first; ties broken by the stable insertion sequence number the
/// frontier assigns at push time. This makes pop order a deterministic total
/// order regardless of heap internals, so repeated runs yield identical
/// action sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub f: u64,
    pub seq: u64,
}
