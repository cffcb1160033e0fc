//! Best-first frontier over arena node indices.
//!
//! `BinaryHeap` is a max-heap, so entries wrap their key in `Reverse` to get
//! min-heap behavior (lowest `f` first). The frontier assigns each pushed
//! entry a monotonically increasing sequence number; together with `f` that
//! fixes a deterministic total pop order (see [`FrontierKey`]).
//!
//! Stale duplicate entries for an already-closed state are expected here:
//! the search loop drops them lazily at pop time instead of updating keys
//! in place.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::node::{FrontierKey, NodeId};

#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Priority collection of discovered-but-unexpanded nodes.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
    high_water: u64,
}

impl Frontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a node with priority `f`, assigning it the next insertion
    /// sequence number.
    pub fn push(&mut self, f: u64, node: NodeId) {
        let key = FrontierKey {
            f,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node,
        });
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the best node: lowest `f`, oldest insertion on ties.
    pub fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|entry| entry.node)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size; never decreases on pop.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}
