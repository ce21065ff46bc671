#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find Paths on weighted Graphs with BFS, Greedy Best-First, Dijkstra or A*.
//!
//! ## Introduction
//! All four algorithms are the same loop: take the most promising Node out of the
//! [`Frontier`], stop if it is the goal, otherwise look at its neighbors and record how they
//! were reached in the [`Ledger`]. The only difference between them is what "most promising"
//! means and whether a cheaper route to an already discovered Node replaces the old one:
//!
//! | Strategy | score of a Node | replaces routes | cheapest Path |
//! |---|---|---|---|
//! | [`Bfs`](search::Strategy::Bfs) | steps from the start | no | only by step count |
//! | [`Greedy`](search::Strategy::Greedy) | Heuristic | no | no |
//! | [`Dijkstra`](search::Strategy::Dijkstra) | cost from the start | yes | yes |
//! | [`AStar`](search::Strategy::AStar) | cost + Heuristic | yes | if the Heuristic is admissible |
//!
//! This crate implements that loop once, in [`search`], and exposes the four algorithms as
//! [`Strategy`](search::Strategy) values.
//!
//! Nodes with the same score are expanded in the order they were discovered, so the same
//! input always produces the same Path, even when several Paths have the same cost.
//!
//! ## Examples
//! Creating a Graph and searching it:
//! ```
//! use weighted_pathfinding::prelude::*;
//!
//! //  A--1--B--1--C
//! //   \         /
//! //    ----5----
//! let mut graph = Graph::new();
//! graph.add_edge('A', 'B', 1).unwrap();
//! graph.add_edge('B', 'C', 1).unwrap();
//! graph.add_edge('A', 'C', 5).unwrap();
//!
//! let result = dijkstra(&graph, 'A', 'C');
//! assert_eq!(result.path, vec!['A', 'B', 'C']);
//! assert_eq!(result.cost, 2);
//!
//! // BFS only counts steps
//! let result = bfs(&graph, 'A', 'C');
//! assert_eq!(result.path, vec!['A', 'C']);
//! assert_eq!(result.cost, 5);
//! ```
//!
//! An unreachable goal is not an error, the result is simply empty:
//! ```
//! # use weighted_pathfinding::prelude::*;
//! let mut graph = Graph::new();
//! graph.add_node('A');
//! graph.add_node('B');
//!
//! let result = bfs(&graph, 'A', 'B');
//! assert!(!result.is_found());
//! assert_eq!(result.cost, 0);
//! ```
//!
//! ### Choosing the Strategy at runtime
//! ```
//! # use weighted_pathfinding::prelude::*;
//! # let mut graph = Graph::new();
//! # graph.add_edge(0, 1, 1).unwrap();
//! # graph.add_edge(1, 2, 1).unwrap();
//! let distance = |a: i32, b: i32| (a - b).unsigned_abs() as usize;
//!
//! for name in ["bfs", "greedy", "dijkstra", "astar"] {
//!     let strategy: Strategy = name.parse().unwrap();
//!     let result = search(strategy, &graph, 0, 2, Some(&distance)).unwrap();
//!     assert_eq!(result.path, vec![0, 1, 2]);
//! }
//!
//! assert!("dfs".parse::<Strategy>().is_err());
//! ```
//!
//! ### Grids
//! Grids are not searched directly. The [`grid`] module turns them into a Graph first, with
//! the help of a [`Neighborhood`](neighbors::Neighborhood) that also provides the Heuristic:
//! ```
//! use weighted_pathfinding::{prelude::*, grid};
//!
//! // 0 = empty, 1 = swamp, 2 = wall
//! let map = [
//!     [0, 2, 0, 0, 0],
//!     [0, 2, 2, 2, 2],
//!     [0, 1, 0, 0, 0],
//!     [0, 1, 0, 2, 0],
//!     [0, 0, 0, 2, 0],
//! ];
//! let cost_map = [1, 10, -1];
//!
//! let neighborhood = ManhattanNeighborhood::new(5, 5);
//! let graph = grid::grid_graph((5, 5), |(x, y)| cost_map[map[y][x]], &neighborhood);
//! let heuristic = grid::heuristic_for(&neighborhood);
//!
//! let result = a_star(&graph, (0, 0), (4, 4), &heuristic);
//! assert_eq!(result.cost, 12);
//! ```
//!
//! ### Configuration
//! [`SearchConfig`] adjusts A* and the memory pre-allocated by a search.
//! [`Search`](search::Search) bundles the Strategy, Heuristic, config and an optional cancel
//! flag, and can also run many queries at once with
//! [`run_batch`](search::Search::run_batch).
//!
//! ## Features
//! - `parallel` (default): `run_batch` uses rayon
//! - `log`: debug and trace output through the `log` crate

/// The Type used for weights, costs, Heuristics and scores
pub type Cost = usize;

/// The Type accepted for Edge weights. Negative values are rejected.
pub type Weight = isize;

/// A shorthand for Points on a Grid
pub type Point = (usize, usize);

#[macro_use]
mod utils;

mod config;
pub use self::config::SearchConfig;

mod error;
pub use self::error::{GraphError, SearchError};

mod graph;
pub use self::graph::Graph;

mod frontier;
pub use self::frontier::Frontier;

mod ledger;
pub use self::ledger::Ledger;

mod path;
pub use self::path::SearchResult;

pub mod search;

pub mod neighbors;

pub mod grid;

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        neighbors::{ManhattanNeighborhood, MooreNeighborhood, Neighborhood},
        search::{a_star, bfs, dijkstra, greedy, search, Search, Strategy},
        Cost, Graph, GraphError, SearchConfig, SearchError, SearchResult,
    };
}
