//! BFS, Greedy, Dijkstra and A* as one generalized best-first search.
//!
//! Every search owns a fresh [`Frontier`](crate::Frontier) and [`Ledger`](crate::Ledger), so any
//! number of searches may run on the same `&Graph` at once, including from different threads.
//! The Graph must not be modified during a search, which the borrow checker already ensures.

mod best_first;
use best_first::{best_first_search, Outcome};

mod strategy;
pub use strategy::Strategy;

mod batch;

use crate::{Cost, Graph, SearchConfig, SearchError, SearchResult};

use std::fmt;
use std::hash::Hash;
use std::sync::atomic::AtomicBool;

/// A Heuristic: estimates the cost of getting from the first Node to the second (the goal).
///
/// A* only returns the cheapest Path if the Heuristic never overestimates that cost. This is
/// not checked.
pub type Heuristic<'a, Id> = &'a (dyn Fn(Id, Id) -> Cost + Sync);

fn no_heuristic<Id>(_: Id, _: Id) -> Cost {
    0
}

/// A configured search that can be run on any number of Graphs and queries.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use weighted_pathfinding::{Graph, search::{Search, Strategy}};
/// //  A--1--B--1--C
/// //   \         /
/// //    ----5----
/// let mut graph = Graph::new();
/// graph.add_edge('A', 'B', 1).unwrap();
/// graph.add_edge('B', 'C', 1).unwrap();
/// graph.add_edge('A', 'C', 5).unwrap();
///
/// let result = Search::new(Strategy::Dijkstra).run(&graph, 'A', 'C').unwrap();
///
/// assert_eq!(result.path, vec!['A', 'B', 'C']);
/// assert_eq!(result.cost, 2);
/// ```
///
/// With a Heuristic and a cancel flag:
/// ```
/// # use weighted_pathfinding::{Graph, SearchConfig, search::{Search, Strategy}};
/// use std::sync::atomic::AtomicBool;
///
/// let mut graph = Graph::new();
/// for i in 0..10 {
///     graph.add_edge(i, i + 1, 1).unwrap();
/// }
/// let distance = |a: i32, b: i32| (a - b).unsigned_abs() as usize;
/// let cancel = AtomicBool::new(false);
///
/// let result = Search::new(Strategy::AStar)
///     .heuristic(&distance)
///     .config(SearchConfig::FAST)
///     .cancel_flag(&cancel)
///     .run(&graph, 0, 10)
///     .unwrap();
///
/// assert_eq!(result.cost, 10);
/// ```
#[derive(Clone, Copy)]
pub struct Search<'a, Id> {
    strategy: Strategy,
    heuristic: Option<Heuristic<'a, Id>>,
    config: SearchConfig,
    cancel: Option<&'a AtomicBool>,
}

impl<'a, Id: Copy + Eq + Hash> Search<'a, Id> {
    /// Creates a Search with the given Strategy, no Heuristic and the default config
    pub fn new(strategy: Strategy) -> Self {
        Search {
            strategy,
            heuristic: None,
            config: SearchConfig::default(),
            cancel: None,
        }
    }

    /// Sets the Heuristic. Required for Greedy and A*, ignored by BFS and Dijkstra.
    pub fn heuristic(mut self, heuristic: Heuristic<'a, Id>) -> Self {
        self.heuristic = Some(heuristic);
        self
    }

    /// Sets the config. See [`SearchConfig`]
    pub fn config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets a flag that stops the search once it is `true`.
    ///
    /// The flag is checked once before each Node is expanded.
    pub fn cancel_flag(mut self, cancel: &'a AtomicBool) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// The Strategy of this Search
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Searches a route from `start` to `goal`.
    ///
    /// If `start` or `goal` are not in the Graph, or `goal` cannot be reached, the result is
    /// empty with a cost of `0`. If `start == goal`, the path is `[start]` with a cost of `0`.
    ///
    /// ## Errors
    /// - [`SearchError::MissingHeuristic`] if the Strategy needs a Heuristic and none was set
    /// - [`SearchError::Cancelled`] if the cancel flag was set during the search
    pub fn run(
        &self,
        graph: &Graph<Id>,
        start: Id,
        goal: Id,
    ) -> Result<SearchResult<Id>, SearchError> {
        if self.strategy.requires_heuristic() && self.heuristic.is_none() {
            return Err(SearchError::MissingHeuristic(self.strategy));
        }
        let (Some(start_slot), Some(goal_slot)) = (graph.slot_of(start), graph.slot_of(goal)) else {
            log_debug!("{} search: start or goal is not in the Graph", self.strategy);
            return Ok(SearchResult::not_found());
        };

        #[cfg(feature = "log")]
        let timer = std::time::Instant::now();

        let outcome = match self.heuristic {
            Some(heuristic) => best_first_search(
                graph,
                self.strategy,
                start_slot,
                goal_slot,
                heuristic,
                &self.config,
                self.cancel,
            ),
            None => best_first_search(
                graph,
                self.strategy,
                start_slot,
                goal_slot,
                &no_heuristic::<Id>,
                &self.config,
                self.cancel,
            ),
        };

        #[cfg(feature = "log")]
        log::debug!("{} search took {:?}", self.strategy, timer.elapsed());

        match outcome {
            Outcome::Found(slots) => Ok(to_result(graph, &slots)),
            Outcome::Unreachable => Ok(SearchResult::not_found()),
            Outcome::Cancelled => Err(SearchError::Cancelled),
        }
    }
}

impl<Id> fmt::Debug for Search<'_, Id> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Search")
            .field("strategy", &self.strategy)
            .field("heuristic", &self.heuristic.map(|_| "<fn>"))
            .field("config", &self.config)
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}

/// Maps the slots back to Ids and sums the Edge weights along them.
fn to_result<Id: Copy + Eq + Hash>(graph: &Graph<Id>, slots: &[usize]) -> SearchResult<Id> {
    let cost = slots
        .windows(2)
        // every step was taken along an existing Edge
        .filter_map(|step| graph.slot_cost(step[0], step[1]))
        .fold(0, Cost::saturating_add);
    let path = slots.iter().map(|&slot| graph.id_at(slot)).collect();
    SearchResult::new(path, cost)
}

/// Searches a route from `start` to `goal` with the given Strategy.
///
/// `heuristic` is required for [`Strategy::Greedy`] and [`Strategy::AStar`] and ignored
/// otherwise. See [`Search::run`] for the details.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use weighted_pathfinding::{Graph, search::{search, Strategy}, SearchError};
/// let mut graph = Graph::new();
/// graph.add_edge(1, 2, 3).unwrap();
///
/// let strategy: Strategy = "dijkstra".parse().unwrap();
/// let result = search(strategy, &graph, 1, 2, None).unwrap();
/// assert_eq!(result.path, vec![1, 2]);
/// assert_eq!(result.cost, 3);
///
/// assert_eq!(
///     search(Strategy::AStar, &graph, 1, 2, None),
///     Err(SearchError::MissingHeuristic(Strategy::AStar))
/// );
/// ```
pub fn search<Id: Copy + Eq + Hash>(
    strategy: Strategy,
    graph: &Graph<Id>,
    start: Id,
    goal: Id,
    heuristic: Option<Heuristic<Id>>,
) -> Result<SearchResult<Id>, SearchError> {
    let mut search = Search::new(strategy);
    search.heuristic = heuristic;
    search.run(graph, start, goal)
}

fn run_infallible<Id: Copy + Eq + Hash>(
    search: Search<Id>,
    graph: &Graph<Id>,
    start: Id,
    goal: Id,
) -> SearchResult<Id> {
    match search.run(graph, start, goal) {
        Ok(result) => result,
        // no cancel flag and the Heuristic is always set when required
        Err(err) => unreachable!("infallible search failed: {}", err),
    }
}

/// Breadth-first search: the route with the fewest steps, ignoring weights.
///
/// The cost of the result is still the sum of the weights along it.
///
/// ## Examples
/// ```
/// # use weighted_pathfinding::{Graph, search::bfs};
/// let mut graph = Graph::new();
/// graph.add_edge('A', 'B', 1).unwrap();
/// graph.add_edge('B', 'C', 1).unwrap();
/// graph.add_edge('A', 'C', 5).unwrap();
///
/// let result = bfs(&graph, 'A', 'C');
/// assert_eq!(result.path, vec!['A', 'C']);
/// assert_eq!(result.cost, 5);
/// ```
pub fn bfs<Id: Copy + Eq + Hash>(graph: &Graph<Id>, start: Id, goal: Id) -> SearchResult<Id> {
    run_infallible(Search::new(Strategy::Bfs), graph, start, goal)
}

/// Greedy best-first search: always expands the Node that the Heuristic considers closest to the goal.
///
/// Fast, but the route is not necessarily the cheapest.
pub fn greedy<Id: Copy + Eq + Hash>(
    graph: &Graph<Id>,
    start: Id,
    goal: Id,
    heuristic: Heuristic<Id>,
) -> SearchResult<Id> {
    run_infallible(Search::new(Strategy::Greedy).heuristic(heuristic), graph, start, goal)
}

/// Dijkstra's algorithm: the cheapest route.
pub fn dijkstra<Id: Copy + Eq + Hash>(graph: &Graph<Id>, start: Id, goal: Id) -> SearchResult<Id> {
    run_infallible(Search::new(Strategy::Dijkstra), graph, start, goal)
}

/// A*: the cheapest route, found faster than with Dijkstra thanks to the Heuristic.
///
/// The route is only guaranteed to be the cheapest if `heuristic` never overestimates the
/// remaining cost and never decreases by more than the weight of an Edge along that Edge
/// (for example the Manhattan distance on a 4-connected Grid where every step costs at least 1).
///
/// ## Examples
/// ```
/// # use weighted_pathfinding::{prelude::*, grid};
/// let neighborhood = ManhattanNeighborhood::new(3, 3);
/// let graph = grid::grid_graph((3, 3), |_| 1, &neighborhood);
/// let heuristic = grid::heuristic_for(&neighborhood);
///
/// let result = a_star(&graph, (0, 0), (2, 2), &heuristic);
/// assert_eq!(result.len(), 5);
/// assert_eq!(result.cost, 4);
/// ```
pub fn a_star<Id: Copy + Eq + Hash>(
    graph: &Graph<Id>,
    start: Id,
    goal: Id,
    heuristic: Heuristic<Id>,
) -> SearchResult<Id> {
    run_infallible(Search::new(Strategy::AStar).heuristic(heuristic), graph, start, goal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Graph<char> {
        let mut graph = Graph::new();
        graph.add_edge('A', 'B', 1).unwrap();
        graph.add_edge('B', 'C', 1).unwrap();
        graph
    }

    fn letter_distance(a: char, b: char) -> Cost {
        (a as i64 - b as i64).unsigned_abs() as Cost
    }

    #[test]
    fn missing_heuristic() {
        let graph = chain();
        for strategy in [Strategy::Greedy, Strategy::AStar] {
            assert_eq!(
                search(strategy, &graph, 'A', 'C', None),
                Err(SearchError::MissingHeuristic(strategy))
            );
        }
        // ignored when not needed
        for strategy in [Strategy::Bfs, Strategy::Dijkstra] {
            assert!(search(strategy, &graph, 'A', 'C', Some(&letter_distance)).is_ok());
        }
    }

    #[test]
    fn absent_endpoints() {
        let graph = chain();
        for strategy in Strategy::ALL {
            let h: Heuristic<char> = &letter_distance;
            assert_eq!(
                search(strategy, &graph, 'X', 'C', Some(h)),
                Ok(SearchResult::not_found())
            );
            assert_eq!(
                search(strategy, &graph, 'A', 'X', Some(h)),
                Ok(SearchResult::not_found())
            );
        }
    }

    #[test]
    fn start_is_goal() {
        let graph = chain();
        for strategy in Strategy::ALL {
            let result = search(strategy, &graph, 'B', 'B', Some(&letter_distance)).unwrap();
            assert_eq!(result, SearchResult::new(vec!['B'], 0));
        }
    }

    #[test]
    fn cancel_flag() {
        let graph = chain();
        let cancel = AtomicBool::new(true);
        let search = Search::new(Strategy::Bfs).cancel_flag(&cancel);
        assert_eq!(search.run(&graph, 'A', 'C'), Err(SearchError::Cancelled));
    }

    #[test]
    fn convenience_functions() {
        let graph = chain();
        let expected = SearchResult::new(vec!['A', 'B', 'C'], 2);
        assert_eq!(bfs(&graph, 'A', 'C'), expected);
        assert_eq!(dijkstra(&graph, 'A', 'C'), expected);
        assert_eq!(greedy(&graph, 'A', 'C', &letter_distance), expected);
        assert_eq!(a_star(&graph, 'A', 'C', &letter_distance), expected);
    }

    #[test]
    fn oversized_size_hint() {
        let graph = chain();
        let config = SearchConfig {
            heuristic_weight: 1,
            size_hint: usize::MAX,
        };
        for strategy in Strategy::ALL {
            let result = Search::new(strategy)
                .heuristic(&letter_distance)
                .config(config)
                .run(&graph, 'A', 'C');
            assert_eq!(result, Ok(SearchResult::new(vec!['A', 'B', 'C'], 2)));
        }
    }

    #[test]
    fn debug_output() {
        let search = Search::<u8>::new(Strategy::Greedy);
        let text = format!("{:?}", search);
        assert!(text.contains("Greedy"));
        assert!(text.contains("heuristic: None"));
    }
}
