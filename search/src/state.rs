//! Grid locations, remaining-target sets, and the composite search state.
//!
//! `TargetSet` keeps its locations sorted so equality and hashing are
//! independent of insertion order. The set only ever shrinks along a search
//! path (`without`), which is what makes the state space finite.

use std::fmt;

/// A pair of integer grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub row: i32,
    pub col: i32,
}

impl Location {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another location.
    #[must_use]
    pub fn manhattan_to(self, other: Self) -> u64 {
        let dr = u64::from(self.row.abs_diff(other.row));
        let dc = u64::from(self.col.abs_diff(other.col));
        dr + dc
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An immutable set of un-neutralized target locations.
///
/// Backed by a sorted, deduplicated `Vec` so two sets built from the same
/// locations in any order are equal and hash identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TargetSet {
    locations: Vec<Location>,
}

impl TargetSet {
    /// Build a set from any iterator of locations; order and duplicates in
    /// the input are irrelevant.
    pub fn from_locations<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        let mut locations: Vec<Location> = iter.into_iter().collect();
        locations.sort_unstable();
        locations.dedup();
        Self { locations }
    }

    /// The set with every location in `hit` removed.
    ///
    /// The result is never larger than `self`; this is the only way a
    /// target set changes along a search edge.
    #[must_use]
    pub fn without(&self, hit: &[Location]) -> Self {
        if hit.is_empty() {
            return self.clone();
        }
        Self {
            locations: self
                .locations
                .iter()
                .copied()
                .filter(|loc| !hit.contains(loc))
                .collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, loc: Location) -> bool {
        self.locations.binary_search(&loc).is_ok()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Location> + '_ {
        self.locations.iter().copied()
    }

    /// Sorted view of the remaining locations.
    #[must_use]
    pub fn as_slice(&self) -> &[Location] {
        &self.locations
    }
}

impl<'a> IntoIterator for &'a TargetSet {
    type Item = Location;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Location>>;

    fn into_iter(self) -> Self::IntoIter {
        self.locations.iter().copied()
    }
}

/// The composite search state: where the agent is and what remains to clear.
///
/// Equality and hashing cover both components, so the closed set
/// distinguishes "at (2, 3) with two targets left" from "at (2, 3) with one
/// target left".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    pub location: Location,
    pub remaining: TargetSet,
}

impl State {
    #[must_use]
    pub fn new(location: Location, remaining: TargetSet) -> Self {
        Self {
            location,
            remaining,
        }
    }

    /// Goal condition: no targets left to neutralize.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.remaining.is_empty()
    }
}
