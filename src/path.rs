use crate::Cost;

/// The outcome of a search.
///
/// Stores the sequence of Nodes from the start to the goal (both included) in `path` and the sum
/// of the Edge weights along it in `cost`.
///
/// An empty `path` means that no route was found: the start or goal is not in the Graph, or the
/// goal cannot be reached. The length of `path` says nothing about the distance between the
/// Nodes, only `cost` does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<Id> {
    /// the Nodes from start to goal, or nothing if there is no route
    pub path: Vec<Id>,
    /// the total weight of the Edges along `path`. `0` if `path` has less than 2 Nodes
    pub cost: Cost,
}

impl<Id> SearchResult<Id> {
    /// creates a new SearchResult with the given sequence of Nodes and total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use weighted_pathfinding::SearchResult;
    /// let result = SearchResult::new(vec!['a', 'b', 'c'], 42);
    ///
    /// assert_eq!(result.path, vec!['a', 'b', 'c']);
    /// assert_eq!(result.cost, 42);
    /// ```
    pub fn new(path: Vec<Id>, cost: Cost) -> SearchResult<Id> {
        SearchResult { path, cost }
    }

    /// the result for "no route found"
    pub fn not_found() -> SearchResult<Id> {
        SearchResult::new(vec![], 0)
    }

    /// `true` if a route was found
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// The number of steps (Edges) along the path
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// The first Node of the path
    pub fn start(&self) -> Option<&Id> {
        self.path.first()
    }

    /// The last Node of the path
    pub fn goal(&self) -> Option<&Id> {
        self.path.last()
    }
}

impl<Id> Default for SearchResult<Id> {
    fn default() -> Self {
        Self::not_found()
    }
}

use std::ops::{Deref, Index};

impl<Id> Index<usize> for SearchResult<Id> {
    type Output = Id;
    fn index(&self, index: usize) -> &Id {
        &self.path[index]
    }
}

impl<Id> Deref for SearchResult<Id> {
    type Target = [Id];
    fn deref(&self) -> &[Id] {
        &self.path
    }
}

use std::cmp::Ordering;

impl<Id: Eq> Ord for SearchResult<Id> {
    fn cmp(&self, other: &SearchResult<Id>) -> Ordering {
        self.cost.cmp(&other.cost)
    }
}

impl<Id: Eq> PartialOrd for SearchResult<Id> {
    fn partial_cmp(&self, other: &SearchResult<Id>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

use std::fmt;
impl<Id: fmt::Display> fmt::Display for SearchResult<Id> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {}", p)?;
            }
            Ok(())
        }
    }
}
