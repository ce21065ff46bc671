use crate::search::Strategy;

/// Errors returned by [`Graph`](crate::Graph) operations.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A Node was queried that was never added to the Graph.
    #[error("Unknown Node: the Id is not registered in this Graph")]
    UnknownNode,
    /// An Edge was inserted with a negative weight.
    ///
    /// The Graph is left unchanged in that case.
    #[error("Negative edge weight: {weight}")]
    NegativeWeight {
        /// the rejected weight
        weight: isize,
    },
}

/// Errors returned by [`search`](crate::search::search) and [`Search::run`](crate::search::Search::run).
///
/// An unreachable Goal is **not** an error. It produces an empty [`SearchResult`](crate::SearchResult).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The name could not be parsed into a [`Strategy`].
    #[error("Invalid strategy: {0:?} (expected one of bfs, greedy, dijkstra, astar)")]
    InvalidStrategy(String),
    /// Greedy and A* need a Heuristic, but none was supplied.
    #[error("The {0} strategy requires a heuristic")]
    MissingHeuristic(Strategy),
    /// The cancel flag was set while the search was running.
    #[error("Search was cancelled")]
    Cancelled,
}
