//! The A* open set.
//!
//! Entries are stored in a min-heap keyed by `(f, seq)`. `seq` is a strictly
//! increasing insertion counter, so among equal f-scores the node queued
//! first is popped first. A membership set mirrors the heap for O(1)
//! "already queued" checks.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use gridstar_core::Pos;

#[derive(Debug, Clone, Copy)]
struct Entry {
    pos: Pos,
    f: i32,
    seq: u64,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Wrapped in Reverse for the BinaryHeap: smaller f first, then
        // smaller seq.
        self.f.cmp(&other.f).then(self.seq.cmp(&other.seq))
    }
}

/// Priority queue of positions ordered by `(f, insertion order)`.
///
/// An entry keeps the f-score it was pushed with. A position is queued at
/// most once at a time.
#[derive(Debug, Default)]
pub struct OpenSet {
    heap: BinaryHeap<Reverse<Entry>>,
    members: HashSet<Pos>,
    seq: u64,
}

impl OpenSet {
    /// Create an empty open set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `pos` with score `f`, assigning it the next sequence number.
    /// Returns `false` (and does nothing) if `pos` is already queued.
    pub fn push(&mut self, pos: Pos, f: i32) -> bool {
        if !self.members.insert(pos) {
            return false;
        }
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { pos, f, seq }));
        true
    }

    /// Pop the entry with the lowest `(f, seq)` and drop it from membership.
    pub fn pop(&mut self) -> Option<Pos> {
        let Reverse(entry) = self.heap.pop()?;
        self.members.remove(&entry.pos);
        Some(entry.pos)
    }

    /// Pop the lowest entry, also returning its f-score and sequence number.
    pub fn pop_entry(&mut self) -> Option<(Pos, i32, u64)> {
        let Reverse(entry) = self.heap.pop()?;
        self.members.remove(&entry.pos);
        Some((entry.pos, entry.f, entry.seq))
    }

    /// Whether `pos` is currently queued.
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.members.contains(&pos)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Sequence number the next push will receive.
    #[inline]
    pub fn next_seq(&self) -> u64 {
        self.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowest_f_first() {
        let mut q = OpenSet::new();
        q.push(Pos::new(0, 0), 5);
        q.push(Pos::new(0, 1), 2);
        q.push(Pos::new(0, 2), 9);
        assert_eq!(q.pop(), Some(Pos::new(0, 1)));
        assert_eq!(q.pop(), Some(Pos::new(0, 0)));
        assert_eq!(q.pop(), Some(Pos::new(0, 2)));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn ties_are_fifo() {
        let mut q = OpenSet::new();
        for c in 0..5 {
            q.push(Pos::new(3, c), 4);
        }
        let order: Vec<i32> = std::iter::from_fn(|| q.pop()).map(|p| p.col).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn membership_mirrors_heap() {
        let mut q = OpenSet::new();
        assert!(q.push(Pos::new(1, 1), 3));
        assert!(!q.push(Pos::new(1, 1), 1));
        assert_eq!(q.len(), 1);
        assert!(q.contains(Pos::new(1, 1)));
        assert_eq!(q.pop_entry(), Some((Pos::new(1, 1), 3, 0)));
        assert!(!q.contains(Pos::new(1, 1)));
        assert!(q.is_empty());
        // Requeueing after a pop is allowed and gets a fresh sequence.
        assert!(q.push(Pos::new(1, 1), 3));
        assert_eq!(q.pop_entry(), Some((Pos::new(1, 1), 3, 1)));
        assert_eq!(q.next_seq(), 2);
    }
}
