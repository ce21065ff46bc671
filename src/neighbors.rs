//! The most common ways of moving on a Grid, each with a matching Heuristic.

use crate::{Cost, Point};
use std::fmt::Debug;

/// Defines how a Path can move along a Grid.
///
/// Provides the Points reachable in one step from a Point, and a Heuristic for how far it is
/// from a Point to a goal. The Heuristic is expressed in steps, so it never overestimates as
/// long as every step costs at least `1`.
///
/// Provided implementations:
/// - [`ManhattanNeighborhood`] for moving up, down, left or right
/// - [`MooreNeighborhood`] for moving in those 4 directions and the 4 diagonals
pub trait Neighborhood: Clone + Debug {
    /// Appends all neighbors of `point` that are inside the Grid to `target`.
    ///
    /// Whether the Tiles can be walked on is decided later.
    fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>);
    /// The minimum number of steps from `point` to `goal`.
    fn heuristic(&self, point: Point, goal: Point) -> Cost;
}

fn offset_neighbors(
    (width, height): (usize, usize),
    point: Point,
    offsets: &[(isize, isize)],
    target: &mut Vec<Point>,
) {
    let (x, y) = (point.0 as isize, point.1 as isize);
    target.extend(
        offsets
            .iter()
            .map(|(dx, dy)| (x + dx, y + dy))
            .filter(|&(x, y)| x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < height)
            .map(|(x, y)| (x as usize, y as usize)),
    );
}

/// A Neighborhood for moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood).
/// The Heuristic is the [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// ```text
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManhattanNeighborhood {
    width: usize,
    height: usize,
}

impl ManhattanNeighborhood {
    /// Creates a new ManhattanNeighborhood for a Grid of the given size.
    pub fn new(width: usize, height: usize) -> ManhattanNeighborhood {
        ManhattanNeighborhood { width, height }
    }
}

impl Neighborhood for ManhattanNeighborhood {
    fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>) {
        const OFFSETS: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
        offset_neighbors((self.width, self.height), point, &OFFSETS, target);
    }
    fn heuristic(&self, point: Point, goal: Point) -> Cost {
        point.0.abs_diff(goal.0) + point.1.abs_diff(goal.1)
    }
}

/// A Neighborhood for moving along the 4 cardinal directions and the 4 diagonals.
///
/// Also known as [Moore Neighborhood](https://en.wikipedia.org/wiki/Moore_neighborhood).
/// The Heuristic is the [Chebyshev distance](https://en.wikipedia.org/wiki/Chebyshev_distance).
///
/// ```text
/// A: Agent, o: reachable in one step
/// o o o
///  \|/
/// o-A-o
///  /|\
/// o o o
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MooreNeighborhood {
    width: usize,
    height: usize,
}

impl MooreNeighborhood {
    /// Creates a new MooreNeighborhood for a Grid of the given size.
    pub fn new(width: usize, height: usize) -> MooreNeighborhood {
        MooreNeighborhood { width, height }
    }
}

impl Neighborhood for MooreNeighborhood {
    fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>) {
        const OFFSETS: [(isize, isize); 8] = [
            (0, -1),
            (1, -1),
            (1, 0),
            (1, 1),
            (0, 1),
            (-1, 1),
            (-1, 0),
            (-1, -1),
        ];
        offset_neighbors((self.width, self.height), point, &OFFSETS, target);
    }
    fn heuristic(&self, point: Point, goal: Point) -> Cost {
        point.0.abs_diff(goal.0).max(point.1.abs_diff(goal.1))
    }
}
