//! Per-search bookkeeping of how every discovered Node was reached.

use crate::Cost;

use hashbrown::HashMap;
use std::hash::Hash;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Record<K> {
    predecessor: Option<K>,
    cost: Cost,
    closed: bool,
}

/// Records the best known predecessor and cost of every Node discovered during one search.
///
/// A Node goes through three states: undiscovered, discovered ([`open`](Ledger::open)) and
/// closed ([`close`](Ledger::close)). While discovered, a cheaper route may replace the
/// recorded one through [`relax`](Ledger::relax). Once closed, the record is final.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use weighted_pathfinding::Ledger;
/// let mut ledger = Ledger::new();
/// ledger.open('a', None, 0);
/// ledger.open('b', Some('a'), 5);
/// ledger.open('c', Some('a'), 1);
/// ledger.close('a');
///
/// // a cheaper route to b via c
/// assert!(ledger.relax('b', 'c', 3));
/// assert_eq!(ledger.reconstruct('b'), vec!['a', 'c', 'b']);
/// assert_eq!(ledger.cost('b'), Some(3));
/// ```
#[derive(Clone, Debug)]
pub struct Ledger<K> {
    records: HashMap<K, Record<K>>,
    closed: usize,
}

impl<K: Copy + Eq + Hash> Ledger<K> {
    /// Creates an empty Ledger
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty Ledger with room for `capacity` Nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: HashMap::with_capacity(capacity),
            closed: 0,
        }
    }

    /// Records the first discovery of `node`. The start Node has no `predecessor`.
    ///
    /// Must only be called for undiscovered Nodes.
    pub fn open(&mut self, node: K, predecessor: Option<K>, cost: Cost) {
        let previous = self.records.insert(
            node,
            Record {
                predecessor,
                cost,
                closed: false,
            },
        );
        debug_assert!(previous.is_none(), "Node was opened twice");
    }

    /// Replaces the route to `node` if `cost` is strictly lower than the recorded one.
    ///
    /// Closed and undiscovered Nodes are never changed. Returns `true` if the record was updated,
    /// in which case the caller has to rescore the Node in its Frontier.
    pub fn relax(&mut self, node: K, predecessor: K, cost: Cost) -> bool {
        match self.records.get_mut(&node) {
            Some(record) if !record.closed && cost < record.cost => {
                record.cost = cost;
                record.predecessor = Some(predecessor);
                true
            }
            _ => false,
        }
    }

    /// Marks `node` as expanded. Its cost and predecessor are final from now on.
    pub fn close(&mut self, node: K) {
        match self.records.get_mut(&node) {
            Some(record) => {
                debug_assert!(!record.closed, "Node was closed twice");
                if !record.closed {
                    record.closed = true;
                    self.closed += 1;
                }
            }
            None => debug_assert!(false, "closed an undiscovered Node"),
        }
    }

    /// `true` once `node` was opened
    pub fn is_discovered(&self, node: K) -> bool {
        self.records.contains_key(&node)
    }

    /// `true` once `node` was closed
    pub fn is_closed(&self, node: K) -> bool {
        self.records.get(&node).map_or(false, |record| record.closed)
    }

    /// The best known cost to reach `node`, or `None` if it is undiscovered
    pub fn cost(&self, node: K) -> Option<Cost> {
        self.records.get(&node).map(|record| record.cost)
    }

    /// The Node from which `node` is best reached. `None` for the start and for undiscovered Nodes.
    pub fn predecessor(&self, node: K) -> Option<K> {
        self.records.get(&node).and_then(|record| record.predecessor)
    }

    /// The number of discovered Nodes, closed ones included
    pub fn discovered_count(&self) -> usize {
        self.records.len()
    }

    /// The number of closed Nodes
    pub fn closed_count(&self) -> usize {
        self.closed
    }

    /// Walks the predecessors back from `goal` and returns the route from the start to `goal`.
    ///
    /// Returns `[goal]` if `goal` is the start and an empty Vec if `goal` was never discovered or
    /// its predecessors loop without reaching a start.
    pub fn reconstruct(&self, goal: K) -> Vec<K> {
        if !self.is_discovered(goal) {
            return vec![];
        }
        let mut steps = vec![goal];
        let mut current = goal;
        while let Some(prev) = self.predecessor(current) {
            if steps.len() >= self.records.len() {
                // predecessors form a cycle, there is no start to walk back to
                return vec![];
            }
            steps.push(prev);
            current = prev;
        }
        steps.reverse();
        steps
    }
}

impl<K: Copy + Eq + Hash> Default for Ledger<K> {
    fn default() -> Self {
        Self::new()
    }
}
