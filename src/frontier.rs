//! The open set of a search: a binary min-heap with decrease-key.

use crate::Cost;

use hashbrown::HashMap;
use std::hash::Hash;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Entry<K> {
    key: K,
    score: Cost,
    seq: u64,
}

impl<K> Entry<K> {
    /// lower score first, older push first among equal scores
    fn precedes(&self, other: &Self) -> bool {
        (self.score, self.seq) < (other.score, other.seq)
    }
}

/// A binary min-heap of keys ordered by a mutable score.
///
/// Keys with the same score come out in the order they were pushed. Changing the score of a
/// queued key through [`rescore`](Frontier::rescore) keeps its original place in that order.
///
/// Every key can be queued at most once. The heap remembers where each key is stored, so
/// `rescore` is `O(log n)` like `push` and `pop_min`.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use weighted_pathfinding::Frontier;
/// let mut frontier = Frontier::new();
/// frontier.push('a', 5);
/// frontier.push('b', 3);
/// frontier.push('c', 3);
/// frontier.rescore('a', 1);
///
/// assert_eq!(frontier.pop_min(), Some(('a', 1)));
/// assert_eq!(frontier.pop_min(), Some(('b', 3)));
/// assert_eq!(frontier.pop_min(), Some(('c', 3)));
/// assert_eq!(frontier.pop_min(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Frontier<K> {
    heap: Vec<Entry<K>>,
    positions: HashMap<K, usize>,
    next_seq: u64,
}

impl<K: Copy + Eq + Hash> Frontier<K> {
    /// Creates an empty Frontier
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty Frontier with room for `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// The number of queued keys
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// `true` if nothing is queued
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// `true` if `key` is currently queued
    pub fn contains(&self, key: K) -> bool {
        self.positions.contains_key(&key)
    }

    /// The current score of `key`, if it is queued
    pub fn score_of(&self, key: K) -> Option<Cost> {
        self.positions.get(&key).map(|&pos| self.heap[pos].score)
    }

    /// The key that [`pop_min`](Frontier::pop_min) would return, without removing it
    pub fn peek_min(&self) -> Option<(K, Cost)> {
        self.heap.first().map(|entry| (entry.key, entry.score))
    }

    /// Queues `key` with the given score.
    ///
    /// If `key` is already queued, this is the same as calling [`rescore`](Frontier::rescore).
    pub fn push(&mut self, key: K, score: Cost) {
        if self.rescore(key, score) {
            return;
        }
        let seq = self.next_seq;
        self.next_seq += 1;

        let pos = self.heap.len();
        self.heap.push(Entry { key, score, seq });
        self.positions.insert(key, pos);
        self.sift_up(pos);
    }

    /// Removes and returns the key with the lowest score, or `None` if the Frontier is empty.
    pub fn pop_min(&mut self) -> Option<(K, Cost)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop()?;
        self.positions.remove(&entry.key);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((entry.key, entry.score))
    }

    /// Changes the score of a queued key and restores the heap order.
    ///
    /// Works for both lower and higher scores. Returns `false` (and does nothing) if `key`
    /// is not queued.
    pub fn rescore(&mut self, key: K, score: Cost) -> bool {
        let Some(&pos) = self.positions.get(&key) else {
            return false;
        };
        let old = std::mem::replace(&mut self.heap[pos].score, score);
        if score < old {
            self.sift_up(pos);
        } else {
            self.sift_down(pos);
        }
        true
    }

    /// Removes all keys
    pub fn clear(&mut self) {
        self.heap.clear();
        self.positions.clear();
        self.next_seq = 0;
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.heap[pos].precedes(&self.heap[parent]) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut smallest = pos;
            if left < len && self.heap[left].precedes(&self.heap[smallest]) {
                smallest = left;
            }
            if right < len && self.heap[right].precedes(&self.heap[smallest]) {
                smallest = right;
            }
            if smallest == pos {
                break;
            }
            self.swap(pos, smallest);
            pos = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.positions.insert(self.heap[a].key, a);
        self.positions.insert(self.heap[b].key, b);
    }
}

impl<K: Copy + Eq + Hash> Default for Frontier<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(frontier: &mut Frontier<u32>) -> Vec<(u32, Cost)> {
        std::iter::from_fn(|| frontier.pop_min()).collect()
    }

    #[test]
    fn pops_in_score_order() {
        let mut frontier = Frontier::new();
        for (key, score) in [(0, 7), (1, 2), (2, 9), (3, 0), (4, 4)] {
            frontier.push(key, score);
        }
        assert_eq!(frontier.len(), 5);
        assert_eq!(frontier.peek_min(), Some((3, 0)));
        assert_eq!(
            drain(&mut frontier),
            vec![(3, 0), (1, 2), (4, 4), (0, 7), (2, 9)]
        );
        assert!(frontier.is_empty());
    }

    #[test]
    fn equal_scores_are_fifo() {
        let mut frontier = Frontier::new();
        for key in 0..20 {
            frontier.push(key, 1);
        }
        let keys: Vec<u32> = drain(&mut frontier).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn decrease_key() {
        let mut frontier = Frontier::new();
        frontier.push(0, 10);
        frontier.push(1, 5);
        frontier.push(2, 8);

        assert!(frontier.rescore(0, 1));
        assert_eq!(frontier.score_of(0), Some(1));
        assert_eq!(drain(&mut frontier), vec![(0, 1), (1, 5), (2, 8)]);
    }

    #[test]
    fn increase_key() {
        let mut frontier = Frontier::new();
        frontier.push(0, 1);
        frontier.push(1, 5);
        frontier.push(2, 8);

        assert!(frontier.rescore(0, 6));
        assert_eq!(drain(&mut frontier), vec![(1, 5), (0, 6), (2, 8)]);
    }

    #[test]
    fn rescore_keeps_push_order() {
        let mut frontier = Frontier::new();
        frontier.push(0, 3);
        frontier.push(1, 9);
        frontier.push(2, 3);
        // 1 was pushed before 2, so it wins the tie after the rescore
        frontier.rescore(1, 3);

        assert_eq!(drain(&mut frontier), vec![(0, 3), (1, 3), (2, 3)]);
    }

    #[test]
    fn push_existing_rescores() {
        let mut frontier = Frontier::new();
        frontier.push(0, 3);
        frontier.push(0, 1);

        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.pop_min(), Some((0, 1)));
    }

    #[test]
    fn rescore_missing() {
        let mut frontier = Frontier::new();
        assert!(!frontier.rescore(4, 1));
        frontier.push(4, 2);
        frontier.pop_min();
        assert!(!frontier.rescore(4, 1));
        assert!(!frontier.contains(4));
        assert_eq!(frontier.score_of(4), None);
    }

    #[test]
    fn clear() {
        let mut frontier = Frontier::new();
        frontier.push(1, 1);
        frontier.push(2, 2);
        frontier.clear();

        assert!(frontier.is_empty());
        assert_eq!(frontier.pop_min(), None);
        assert!(!frontier.contains(1));
    }
}
