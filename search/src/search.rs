//! Solve entry points and the best-first expansion loop.

use std::time::Instant;

use sha2::{Digest, Sha256};

use crate::closed::ClosedSet;
use crate::contract::ProblemOracle;
use crate::error::SolveError;
use crate::frontier::Frontier;
use crate::heuristic::{Heuristic, TargetDistanceSum};
use crate::node::{NodeId, SearchNode};
use crate::observer::{ExpandEvent, NullObserver, SearchObserver};
use crate::policy::SearchPolicy;
use crate::state::State;

/// Domain prefix for solution content digests.
pub const DOMAIN_SOLUTION: &[u8] = b"GRIDSHOT::SOLUTION::V1\0";

/// A cost-optimal clearing of every target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Start-to-goal action sequence; empty if the start state was already
    /// cleared.
    pub actions: Vec<String>,
    /// Total path cost (the goal node's g).
    pub cost: u64,
    /// Counters describing the search that produced this solution.
    pub stats: SolveStats,
}

impl Solution {
    /// Content digest of the action sequence and cost, in
    /// `"sha256:<hex>"` format.
    ///
    /// Two runs over the same problem must produce the same digest; golden
    /// and determinism tests compare digests instead of whole transcripts.
    #[must_use]
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(DOMAIN_SOLUTION);
        hasher.update(self.cost.to_le_bytes());
        for action in &self.actions {
            hasher.update(action.as_bytes());
            hasher.update([0u8]);
        }
        format!("sha256:{}", hex::encode(hasher.finalize()))
    }
}

/// Counters from one solve invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolveStats {
    /// States expanded (closed). At most one per distinct reachable state.
    pub expansions: u64,
    /// Nodes created and pushed to the frontier, root included.
    pub generated: u64,
    /// Frontier entries dropped at pop time because their state was already
    /// closed (lazy deletion of stale duplicates).
    pub stale_dropped: u64,
    /// Children skipped at generation time because their state was already
    /// closed.
    pub duplicates_skipped: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
    /// Distinct states in the closed set when the search finished.
    pub distinct_states: u64,
}

/// Solve with an unbounded policy and no observer.
///
/// # Errors
///
/// [`SolveError::Unsolvable`] when the frontier exhausts without reaching a
/// cleared state.
pub fn solve(oracle: &dyn ProblemOracle) -> Result<Solution, SolveError> {
    solve_with(oracle, &SearchPolicy::default(), &mut NullObserver)
}

/// Solve under a budget policy, reporting progress to `observer`.
///
/// Pops the minimal-(f, seq) node, lazily drops stale frontier entries,
/// closes each state exactly once, and pushes children computed from the
/// oracle's transitions. Transitions are sorted by action label before
/// expansion so the result never depends on oracle enumeration order.
///
/// # Errors
///
/// - [`SolveError::Unsolvable`] when the frontier exhausts without reaching
///   a cleared state — a proven negative, not a fault.
/// - [`SolveError::ExpansionBudgetExceeded`] / [`SolveError::DeadlineExpired`]
///   when the policy cuts the search short; checked once per loop iteration.
pub fn solve_with(
    oracle: &dyn ProblemOracle,
    policy: &SearchPolicy,
    observer: &mut dyn SearchObserver,
) -> Result<Solution, SolveError> {
    let heuristic = TargetDistanceSum;
    let started = Instant::now();

    let mut frontier = Frontier::new();
    let mut closed = ClosedSet::new();
    let mut arena: Vec<SearchNode> = Vec::new();
    let mut stats = SolveStats::default();

    let start = State::new(oracle.initial_location(), oracle.initial_targets());
    let h0 = heuristic.estimate(start.location, &start.remaining);
    arena.push(SearchNode {
        state: start,
        g: 0,
        h: h0,
        action: None,
        parent: None,
    });
    frontier.push(h0, 0);
    stats.generated = 1;

    while let Some(node_id) = frontier.pop() {
        if let Some(limit) = policy.max_expansions {
            if stats.expansions >= limit {
                return Err(SolveError::ExpansionBudgetExceeded { limit });
            }
        }
        if let Some(deadline) = policy.deadline {
            if started.elapsed() >= deadline {
                return Err(SolveError::DeadlineExpired { deadline });
            }
        }

        let state = arena[node_id].state.clone();
        if !closed.insert(state.clone()) {
            stats.stale_dropped += 1;
            continue;
        }

        let g = arena[node_id].g;
        observer.on_expand(&ExpandEvent {
            expansion_order: stats.expansions,
            location: state.location,
            targets_remaining: state.remaining.len(),
            g,
            f: arena[node_id].f(),
            frontier_len: frontier.len(),
        });
        stats.expansions += 1;

        if state.remaining.is_empty() {
            observer.on_goal(g);
            stats.frontier_high_water = frontier.high_water();
            stats.distinct_states = closed.len() as u64;
            return Ok(Solution {
                actions: reconstruct(&arena, node_id),
                cost: g,
                stats,
            });
        }

        let mut transitions = oracle.transitions(state.location, &state.remaining);
        transitions.sort_by(|a, b| a.action.cmp(&b.action));

        for transition in transitions {
            let remaining = state.remaining.without(&transition.targets_hit);
            let child_state = State::new(transition.next_location, remaining);
            if closed.contains(&child_state) {
                stats.duplicates_skipped += 1;
                continue;
            }

            let child_g = g + oracle.transition_cost(&transition.action, state.location);
            let child_h = heuristic.estimate(child_state.location, &child_state.remaining);
            let child = SearchNode {
                state: child_state,
                g: child_g,
                h: child_h,
                action: Some(transition.action),
                parent: Some(node_id),
            };
            let child_f = child.f();
            let child_id = arena.len();
            arena.push(child);
            frontier.push(child_f, child_id);
            stats.generated += 1;
        }
    }

    Err(SolveError::Unsolvable)
}

/// Walk parent links from the goal back to the root sentinel, then reverse
/// into the start-to-goal action sequence.
fn reconstruct(arena: &[SearchNode], goal: NodeId) -> Vec<String> {
    let mut actions = Vec::new();
    let mut current = goal;
    while let (Some(action), Some(parent)) = (&arena[current].action, arena[current].parent) {
        actions.push(action.clone());
        current = parent;
    }
    actions.reverse();
    actions
}
