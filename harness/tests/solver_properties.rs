//! End-to-end solver properties over `TargetRange` worlds.
//!
//! Optimality checks compare the solver's cost against a brute-force
//! minimum: Dijkstra between waypoints, minimized over every target
//! visitation order. Any legal clearing walk touches its targets in some
//! chronological order and costs at least the chained shortest-path sum for
//! that order, so the permutation minimum is exactly the true optimum.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::time::Duration;

use gridshot_harness::worlds::target_range::TargetRange;
use gridshot_search::contract::ProblemOracle;
use gridshot_search::error::SolveError;
use gridshot_search::heuristic::{Heuristic, TargetDistanceSum};
use gridshot_search::observer::NullObserver;
use gridshot_search::policy::SearchPolicy;
use gridshot_search::search::{solve, solve_with};
use gridshot_search::state::{Location, TargetSet};

const CROSS: &str = "\
..T..
.....
T.@.T
.....
..T..";

const MUD_DETOUR: &str = "\
######
#@MMT#
#....#
######";

fn dijkstra_from(range: &TargetRange, from: Location) -> HashMap<Location, u64> {
    let mut dist: HashMap<Location, u64> = HashMap::new();
    let mut heap = BinaryHeap::new();
    dist.insert(from, 0);
    heap.push(Reverse((0u64, from)));

    while let Some(Reverse((d, loc))) = heap.pop() {
        if dist.get(&loc).is_some_and(|&best| d > best) {
            continue;
        }
        for transition in range.transitions(loc, &TargetSet::default()) {
            let next_d = d + range.transition_cost(&transition.action, loc);
            if dist
                .get(&transition.next_location)
                .is_none_or(|&best| next_d < best)
            {
                dist.insert(transition.next_location, next_d);
                heap.push(Reverse((next_d, transition.next_location)));
            }
        }
    }
    dist
}

fn permutations(items: &[Location]) -> Vec<Vec<Location>> {
    if items.is_empty() {
        return vec![Vec::new()];
    }
    let mut out = Vec::new();
    for (i, &item) in items.iter().enumerate() {
        let mut rest = items.to_vec();
        rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, item);
            out.push(tail);
        }
    }
    out
}

/// Minimum clearing cost over every target visitation order, or `None` if
/// some target is unreachable.
fn brute_force_optimum(range: &TargetRange) -> Option<u64> {
    let targets: Vec<Location> = range.initial_targets().iter().collect();
    let mut best: Option<u64> = None;

    for order in permutations(&targets) {
        let mut total = 0u64;
        let mut here = range.initial_location();
        let mut feasible = true;
        for target in order {
            match dijkstra_from(range, here).get(&target) {
                Some(&d) => {
                    total += d;
                    here = target;
                }
                None => {
                    feasible = false;
                    break;
                }
            }
        }
        if feasible {
            best = Some(best.map_or(total, |b| b.min(total)));
        }
    }
    best
}

#[test]
fn corridor_returns_two_east_moves() {
    let range = TargetRange::parse("@.T").unwrap();
    let solution = solve(&range).unwrap();
    assert_eq!(solution.actions, vec!["E", "E"]);
    assert_eq!(solution.cost, 2);
}

#[test]
fn zero_target_range_is_already_done() {
    let range = TargetRange::parse("@..\n...").unwrap();
    let solution = solve(&range).unwrap();
    assert!(solution.actions.is_empty());
    assert_eq!(solution.cost, 0);
}

#[test]
fn walled_off_target_is_unsolvable() {
    let range = TargetRange::parse("@.#T").unwrap();
    assert_eq!(solve(&range), Err(SolveError::Unsolvable));
}

#[test]
fn single_target_mud_detour_is_optimal() {
    let range = TargetRange::parse(MUD_DETOUR).unwrap();
    let solution = solve(&range).unwrap();
    // Direct E/E/E wades through two mud cells for 7; the southern detour
    // costs 5.
    assert_eq!(solution.cost, 5);
    assert_eq!(Some(solution.cost), brute_force_optimum(&range));
}

#[test]
fn two_opposing_targets_are_cleared_optimally() {
    let range = TargetRange::parse("T.@.T").unwrap();
    let solution = solve(&range).unwrap();
    assert_eq!(solution.cost, 6);
    assert_eq!(Some(solution.cost), brute_force_optimum(&range));
}

#[test]
fn four_target_cross_matches_brute_force() {
    let range = TargetRange::parse(CROSS).unwrap();
    let solution = solve(&range).unwrap();
    assert_eq!(Some(solution.cost), brute_force_optimum(&range));
    assert_eq!(solution.cost, 14);
}

#[test]
fn repeated_runs_are_identical() {
    let range = TargetRange::parse(CROSS).unwrap();
    let first = solve(&range).unwrap();
    let second = solve(&range).unwrap();
    assert_eq!(first.actions, second.actions);
    assert_eq!(first.cost, second.cost);
    assert_eq!(first.digest(), second.digest());
}

#[test]
fn expansions_bounded_by_distinct_reachable_states() {
    let range = TargetRange::parse("T.@.T").unwrap();
    let solution = solve(&range).unwrap();
    assert_eq!(solution.stats.expansions, solution.stats.distinct_states);

    // 5 open cells x 2^2 target subsets bounds the state space.
    let bound = (range.open_locations().len() as u64) << range.target_count();
    assert!(solution.stats.expansions <= bound);
}

#[test]
fn heuristic_is_consistent_across_adjacent_states() {
    let range = TargetRange::parse(MUD_DETOUR).unwrap();
    let heuristic = TargetDistanceSum;
    let remaining = range.initial_targets();

    for loc in range.open_locations() {
        let h_here = heuristic.estimate(loc, &remaining);
        for transition in range.transitions(loc, &remaining) {
            let after = remaining.without(&transition.targets_hit);
            let h_there = heuristic.estimate(transition.next_location, &after);
            let edge_cost = range.transition_cost(&transition.action, loc);
            assert!(
                h_here.abs_diff(h_there) <= edge_cost,
                "heuristic jumped by more than the edge cost from {loc} via {}",
                transition.action
            );
        }
    }
}

#[test]
fn expansion_budget_abort_is_not_unsolvable() {
    let range = TargetRange::parse(CROSS).unwrap();
    let policy = SearchPolicy::with_max_expansions(0);
    let result = solve_with(&range, &policy, &mut NullObserver);
    assert_eq!(result, Err(SolveError::ExpansionBudgetExceeded { limit: 0 }));
    assert!(result.unwrap_err().is_aborted());
}

#[test]
fn zero_deadline_expires_immediately() {
    let range = TargetRange::parse(CROSS).unwrap();
    let policy = SearchPolicy {
        max_expansions: None,
        deadline: Some(Duration::ZERO),
    };
    let result = solve_with(&range, &policy, &mut NullObserver);
    assert_eq!(
        result,
        Err(SolveError::DeadlineExpired {
            deadline: Duration::ZERO
        })
    );
}
