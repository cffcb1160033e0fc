//! Gridshot Search: optimal multi-target grid pathfinding.
//!
//! Best-first (A*) graph search over the combinatorial state space of
//! (agent location, remaining-target-set). The crate consumes a problem
//! oracle — maze layout, movement legality, and cost tables all live behind
//! [`contract::ProblemOracle`] — and returns either a minimum-cost action
//! sequence or a proof that none exists.
//!
//! # Key types
//!
//! - [`state::State`] — location + order-independent remaining-target set
//! - [`node::SearchNode`] — g/h/f node in an index-addressed arena
//! - [`frontier::Frontier`] — deterministic min-f priority queue
//! - [`closed::ClosedSet`] — expanded states, O(1) membership
//! - [`heuristic::TargetDistanceSum`] — admissible Manhattan-sum estimate
//! - [`policy::SearchPolicy`] — optional expansion/deadline budgets
//! - [`search::solve`] — the single public operation
//!
//! Single-threaded and synchronous by design: all mutable search state is
//! local to one solve call, so independent searches over distinct problems
//! are safe to run concurrently.

#![forbid(unsafe_code)]

pub mod closed;
pub mod contract;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod observer;
pub mod policy;
pub mod search;
pub mod state;
