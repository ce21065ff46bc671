use crate::{Cost, SearchError};

use std::fmt;
use std::str::FromStr;

/// The four ways of ordering the expansion of Nodes.
///
/// | Strategy | expands first | cheapest Path |
/// |---|---|---|
/// | `Bfs` | fewest steps from the start | only if all weights are equal |
/// | `Greedy` | lowest Heuristic | no |
/// | `Dijkstra` | lowest cost from the start | yes |
/// | `AStar` | lowest cost + Heuristic | if the Heuristic never overestimates |
///
/// Strategies can be parsed from their names:
/// ```
/// # use weighted_pathfinding::search::Strategy;
/// assert_eq!("astar".parse(), Ok(Strategy::AStar));
/// assert_eq!("Dijkstra".parse(), Ok(Strategy::Dijkstra));
/// assert!("dfs".parse::<Strategy>().is_err());
///
/// assert_eq!(Strategy::Greedy.to_string(), "greedy");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Breadth-first search. Ignores weights and counts steps.
    Bfs,
    /// Greedy best-first search. Only looks at the Heuristic.
    Greedy,
    /// Dijkstra's algorithm. Only looks at the accumulated cost.
    Dijkstra,
    /// A*. Looks at the accumulated cost plus the Heuristic.
    AStar,
}

impl Strategy {
    /// All Strategies
    pub const ALL: [Strategy; 4] = [
        Strategy::Bfs,
        Strategy::Greedy,
        Strategy::Dijkstra,
        Strategy::AStar,
    ];

    /// The canonical name, as accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::Greedy => "greedy",
            Strategy::Dijkstra => "dijkstra",
            Strategy::AStar => "astar",
        }
    }

    /// `true` for the Strategies that cannot run without a Heuristic
    pub fn requires_heuristic(self) -> bool {
        matches!(self, Strategy::Greedy | Strategy::AStar)
    }

    /// `true` if a cheaper route to an already discovered Node replaces the recorded one.
    ///
    /// BFS and Greedy keep the first route they find to every Node.
    pub fn relaxes(self) -> bool {
        matches!(self, Strategy::Dijkstra | Strategy::AStar)
    }

    /// How much one step over an Edge of the given weight adds to `g`.
    pub(crate) fn step_cost(self, weight: Cost) -> Cost {
        if self.relaxes() {
            weight
        } else {
            1
        }
    }

    /// The Frontier score of a Node with accumulated cost `g`.
    ///
    /// `h` is only evaluated by the Strategies that use it.
    pub(crate) fn priority(self, g: Cost, h: impl FnOnce() -> Cost, heuristic_weight: Cost) -> Cost {
        match self {
            Strategy::Bfs | Strategy::Dijkstra => g,
            Strategy::Greedy => h(),
            Strategy::AStar => g.saturating_add(heuristic_weight.saturating_mul(h())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Strategy::Bfs),
            "greedy" => Ok(Strategy::Greedy),
            "dijkstra" => Ok(Strategy::Dijkstra),
            "astar" | "a*" | "a_star" => Ok(Strategy::AStar),
            _ => Err(SearchError::InvalidStrategy(s.to_owned())),
        }
    }
}
