//! Building a [`Graph`] from a 2D Grid of Tiles.
//!
//! Every Tile with a cost `>= 0` becomes a Node. Tiles with a negative cost are solid and are
//! left out. For every walkable neighbor `b` of a walkable Tile `a` (as defined by the
//! [`Neighborhood`]), the Graph gets a directed Edge `a -> b` whose weight is the cost of
//! walking onto `b`.

use crate::{neighbors::Neighborhood, Cost, Graph, Point};

use std::hash::Hash;

/// Builds a Graph whose Node Ids are the Grid positions `(x, y)`.
///
/// ## Examples
/// Basic usage:
/// ```
/// use weighted_pathfinding::{prelude::*, grid, Point};
///
/// // 0 = empty, 1 = swamp, 2 = wall
/// let grid = [
///     [0, 2, 0],
///     [0, 1, 0],
///     [0, 0, 0],
/// ];
/// const COST_MAP: [isize; 3] = [1, 10, -1];
///
/// let neighborhood = ManhattanNeighborhood::new(3, 3);
/// let graph = grid::grid_graph((3, 3), |(x, y)| COST_MAP[grid[y][x]], &neighborhood);
///
/// assert_eq!(graph.len(), 8); // the wall is left out
/// assert_eq!(graph.cost((0, 1), (1, 1)), Ok(Some(10))); // walking into the swamp
/// assert_eq!(graph.cost((1, 1), (0, 1)), Ok(Some(1)));
///
/// let result = dijkstra(&graph, (0, 0), (2, 0));
/// assert_eq!(result.cost, 6);
/// ```
pub fn grid_graph<N: Neighborhood>(
    (width, height): (usize, usize),
    get_cost: impl Fn(Point) -> isize,
    neighborhood: &N,
) -> Graph<Point> {
    build((width, height), get_cost, neighborhood, |point| point)
}

/// Builds a Graph from rows of Tiles, with caller-defined Node Ids.
///
/// - `node_id` - maps `(row, column, tile)` to the Id of the Node. Must be unique per Tile.
/// - `tile_cost` - the cost of walking onto a Tile. Negative values mark solid Tiles.
///
/// Rows may have different lengths. Missing Tiles are treated as solid. The `neighborhood`
/// works on `(column, row)` Points.
///
/// ## Examples
/// ```
/// use weighted_pathfinding::{prelude::*, grid};
///
/// let rows = vec!["..#", ".~.", "..."];
/// let rows: Vec<Vec<char>> = rows.iter().map(|row| row.chars().collect()).collect();
/// let tile_cost = |tile: &char| match tile {
///     '.' => 1,
///     '~' => 4,
///     _ => -1,
/// };
///
/// let graph = grid::from_rows(
///     &rows,
///     |row, column, _| row * 3 + column, // dense index
///     tile_cost,
///     &MooreNeighborhood::new(3, 3),
/// );
///
/// assert_eq!(graph.len(), 8);
/// assert!(!graph.contains(2));
/// assert_eq!(graph.cost(0, 4), Ok(Some(4)));
/// ```
pub fn from_rows<T, R, Id, N>(
    rows: &[R],
    node_id: impl Fn(usize, usize, &T) -> Id,
    tile_cost: impl Fn(&T) -> isize,
    neighborhood: &N,
) -> Graph<Id>
where
    R: AsRef<[T]>,
    Id: Copy + Eq + Hash,
    N: Neighborhood,
{
    let width = rows.iter().map(|row| row.as_ref().len()).max().unwrap_or(0);
    let height = rows.len();
    let tile = |(column, row): Point| rows[row].as_ref().get(column);

    build(
        (width, height),
        |point| tile(point).map_or(-1, &tile_cost),
        neighborhood,
        |point| match tile(point) {
            Some(t) => node_id(point.1, point.0, t),
            // only called for walkable Tiles, which exist
            None => unreachable!("Node Id requested for a missing Tile"),
        },
    )
}

/// A Heuristic for searches on Graphs built by this module, using the Neighborhood's distance.
///
/// Admissible as long as every Tile costs at least `1`.
pub fn heuristic_for<N: Neighborhood + Sync>(
    neighborhood: &N,
) -> impl Fn(Point, Point) -> Cost + Sync + '_ {
    move |point, goal| neighborhood.heuristic(point, goal)
}

fn build<Id: Copy + Eq + Hash, N: Neighborhood>(
    (width, height): (usize, usize),
    get_cost: impl Fn(Point) -> isize,
    neighborhood: &N,
    node_id: impl Fn(Point) -> Id,
) -> Graph<Id> {
    let costs: Vec<isize> = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .map(&get_cost)
        .collect();
    // Points from a Neighborhood larger than the Grid count as solid
    let cost_at = |(x, y): Point| {
        if x >= width || y >= height {
            return -1;
        }
        costs.get(x + y * width).copied().unwrap_or(-1)
    };

    let mut graph = Graph::with_capacity(costs.iter().filter(|&&c| c >= 0).count());
    let mut all_neighbors = vec![];

    for y in 0..height {
        for x in 0..width {
            let point = (x, y);
            if cost_at(point) < 0 {
                continue;
            }
            let id = node_id(point);
            graph.add_node(id);

            all_neighbors.clear();
            neighborhood.get_all_neighbors(point, &mut all_neighbors);
            for &other in all_neighbors.iter() {
                let other_cost = cost_at(other);
                if other_cost < 0 {
                    continue;
                }
                graph.connect_directed(id, node_id(other), other_cost as Cost);
            }
        }
    }
    log_debug!(
        "built Graph with {} Nodes and {} Edges from a {}x{} Grid",
        graph.len(),
        graph.edge_count(),
        width,
        height
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighbors::{ManhattanNeighborhood, MooreNeighborhood};
    use crate::search::{a_star, bfs, dijkstra};

    // 0 = empty, 1 = swamp, 2 = wall
    const GRID: [[usize; 5]; 5] = [
        [0, 2, 0, 0, 0],
        [0, 2, 2, 2, 2],
        [0, 1, 0, 0, 0],
        [0, 1, 0, 2, 0],
        [0, 0, 0, 2, 0],
    ];
    const COST_MAP: [isize; 3] = [1, 10, -1];

    fn cost_fn(grid: &[[usize; 5]; 5]) -> impl '_ + Fn(Point) -> isize {
        move |(x, y)| COST_MAP[grid[y][x]]
    }

    #[test]
    fn uniform_grid() {
        let neighborhood = ManhattanNeighborhood::new(3, 3);
        let graph = grid_graph((3, 3), |_| 1, &neighborhood);

        assert_eq!(graph.len(), 9);
        // 12 adjacent pairs, both directions
        assert_eq!(graph.edge_count(), 24);

        let heuristic = heuristic_for(&neighborhood);
        let result = a_star(&graph, (0, 0), (2, 2), &heuristic);
        assert_eq!(result.len(), 5);
        assert_eq!(result.cost, 4);
    }

    #[test]
    fn diagonal_grid() {
        let neighborhood = MooreNeighborhood::new(3, 3);
        let graph = grid_graph((3, 3), |_| 1, &neighborhood);
        let heuristic = heuristic_for(&neighborhood);

        let result = a_star(&graph, (0, 0), (2, 2), &heuristic);
        assert_eq!(result.path, vec![(0, 0), (1, 1), (2, 2)]);
        assert_eq!(result.cost, 2);
    }

    #[test]
    fn walls_and_swamps() {
        let neighborhood = ManhattanNeighborhood::new(5, 5);
        let graph = grid_graph((5, 5), cost_fn(&GRID), &neighborhood);
        let heuristic = heuristic_for(&neighborhood);

        let result = a_star(&graph, (0, 0), (4, 4), &heuristic);
        assert_eq!(result.cost, 12);
        assert_eq!(dijkstra(&graph, (0, 0), (4, 4)).cost, 12);
        // the swamp is avoided, the detour through (2, 4) is cheaper
        assert!(!result.path.contains(&(1, 2)));

        // the right half of the top row is walled off
        assert!(!bfs(&graph, (0, 0), (2, 0)).is_found());
        // walls are not part of the Graph at all
        assert!(!graph.contains((1, 0)));
    }

    #[test]
    fn neighborhood_larger_than_grid() {
        let wider = grid_graph((3, 3), |_| 1, &ManhattanNeighborhood::new(4, 3));
        let uniform = grid_graph((3, 3), |_| 1, &ManhattanNeighborhood::new(3, 3));
        assert_eq!(wider.len(), 9);
        assert_eq!(wider.edge_count(), uniform.edge_count());
        assert!(!wider.contains((3, 0)));

        let wrapped = grid_graph((3, 3), |_| 1, &ManhattanNeighborhood::new(4, 2));
        assert_eq!(wrapped.len(), 9);
        assert!(!wrapped.contains((3, 0)));
        assert!(!dijkstra(&wrapped, (0, 0), (3, 1)).is_found());
        // the last column has no Edge to the first one of the next row
        assert_eq!(wrapped.cost((2, 0), (0, 1)), Ok(None));

        let rows: Vec<Vec<u8>> = vec![vec![1, 1], vec![1, 1]];
        let graph = from_rows(
            &rows,
            |row, column, _| (column, row),
            |&tile| tile as isize,
            &MooreNeighborhood::new(5, 5),
        );
        assert_eq!(graph.len(), 4);
        assert_eq!(graph.edge_count(), 12);
    }

    #[test]
    fn ragged_rows() {
        let rows: Vec<Vec<u8>> = vec![vec![1, 1, 1], vec![1]];
        let graph = from_rows(
            &rows,
            |row, column, _| (column, row),
            |&tile| tile as isize,
            &ManhattanNeighborhood::new(3, 2),
        );
        assert_eq!(graph.len(), 4);
        assert!(!graph.contains((1, 1)));
        assert_eq!(graph.cost((0, 0), (0, 1)), Ok(Some(1)));
    }

    #[test]
    fn empty_grid() {
        let rows: Vec<Vec<u8>> = vec![];
        let graph = from_rows(
            &rows,
            |row, column, _| (column, row),
            |_| 1,
            &ManhattanNeighborhood::new(0, 0),
        );
        assert!(graph.is_empty());
    }
}
