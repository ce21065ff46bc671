use super::Search;
use crate::{Graph, SearchError, SearchResult};

use std::hash::Hash;

impl<Id: Copy + Eq + Hash + Send + Sync> Search<'_, Id> {
    /// Runs one search for every `(start, goal)` pair on the same Graph.
    ///
    /// The results are in the same order as `queries`. Each query gets its own Frontier and Ledger;
    /// with the `parallel` feature (enabled by default) the queries are spread over the rayon
    /// thread pool.
    ///
    /// A set cancel flag cancels every query that has not finished yet.
    ///
    /// ## Examples
    /// ```
    /// # use weighted_pathfinding::{Graph, search::{Search, Strategy}};
    /// let mut graph = Graph::new();
    /// graph.add_edge(0, 1, 2).unwrap();
    /// graph.add_edge(1, 2, 2).unwrap();
    /// graph.add_node(3);
    ///
    /// let results = Search::new(Strategy::Dijkstra).run_batch(&graph, &[(0, 2), (2, 1), (0, 3)]);
    ///
    /// let costs: Vec<_> = results.into_iter().map(|r| r.unwrap().cost).collect();
    /// assert_eq!(costs, vec![4, 2, 0]);
    /// ```
    pub fn run_batch(
        &self,
        graph: &Graph<Id>,
        queries: &[(Id, Id)],
    ) -> Vec<Result<SearchResult<Id>, SearchError>> {
        log_debug!("running {} {} queries", queries.len(), self.strategy);

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            queries
                .par_iter()
                .map(|&(start, goal)| self.run(graph, start, goal))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            queries
                .iter()
                .map(|&(start, goal)| self.run(graph, start, goal))
                .collect()
        }
    }
}
