use crate::Cost;

/// Options for configuring a [`Search`](crate::search::Search)
///
/// Default options:
/// ```
/// # use weighted_pathfinding::SearchConfig;
/// assert_eq!(
///     SearchConfig {
///         heuristic_weight: 1,
///         size_hint: 64,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// The factor applied to the Heuristic in A* (defaults to `1`).
    ///
    /// `1` gives regular A*, which finds the cheapest Path as long as the Heuristic never
    /// overestimates. Higher values make A* expand fewer Nodes and head more directly towards
    /// the goal, at the price of Paths that may be up to `heuristic_weight` times more expensive
    /// than the cheapest one. `0` turns A* into Dijkstra.
    ///
    /// Only A* uses this value.
    pub heuristic_weight: Cost,
    /// The number of Nodes the search expects to discover (defaults to `64`).
    ///
    /// Only used to pre-allocate the internal storage, and capped at the number of Nodes in the
    /// Graph. Any value is correct.
    pub size_hint: usize,
}

impl SearchConfig {
    /// a SearchConfig that keeps A* optimal
    ///
    /// Values:
    /// ```
    /// # use weighted_pathfinding::SearchConfig;
    /// assert_eq!(
    ///     SearchConfig {
    ///         heuristic_weight: 1,
    ///         size_hint: 64,
    ///     },
    ///     SearchConfig::OPTIMAL
    /// );
    /// ```
    pub const OPTIMAL: SearchConfig = SearchConfig {
        heuristic_weight: 1,
        size_hint: 64,
    };
    /// a SearchConfig that trades Path quality for fewer expanded Nodes in A*
    ///
    /// Values:
    /// ```
    /// # use weighted_pathfinding::SearchConfig;
    /// assert_eq!(
    ///     SearchConfig {
    ///         heuristic_weight: 2,
    ///         size_hint: 64,
    ///     },
    ///     SearchConfig::FAST
    /// );
    /// ```
    pub const FAST: SearchConfig = SearchConfig {
        heuristic_weight: 2,
        size_hint: 64,
    };

    /// The default config with a different [`heuristic_weight`](SearchConfig::heuristic_weight)
    pub fn with_heuristic_weight(heuristic_weight: Cost) -> SearchConfig {
        SearchConfig {
            heuristic_weight,
            ..Default::default()
        }
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig::OPTIMAL
    }
}
