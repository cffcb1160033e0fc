//! Shared fixtures for gridshot benchmark suites.

use gridshot_harness::worlds::target_range::TargetRange;

/// A 9x9 open range with four corner targets and mud patches; enough state
/// space to make frontier and heuristic costs visible without multi-second
/// solves.
pub const QUAD_RANGE: &str = "\
T.......T
.MM...MM.
.M.....M.
.........
....@....
.........
.M.....M.
.MM...MM.
T.......T";

/// Parse a benchmark range.
///
/// # Panics
///
/// Panics on a malformed grid. Benchmark setup failures are fatal.
#[must_use]
pub fn parse_range(text: &str) -> TargetRange {
    TargetRange::parse(text).expect("benchmark range must parse")
}
