//! The weighted Graph that all searches run on.

mod node;
use node::Node;

use crate::{Cost, GraphError, Weight};

use hashbrown::HashMap;
use std::hash::Hash;

/// A weighted Graph of Nodes identified by `Id`.
///
/// `Id` may be anything that can be compared, hashed and copied: a Number, a Grid position, ...
/// The Graph never looks at what an `Id` means. Any data attached to a Node (terrain, coordinates,
/// ...) stays with the caller.
///
/// Edges are stored per direction. [`add_edge`](Graph::add_edge) stores both directions,
/// [`add_directed_edge`](Graph::add_directed_edge) only the forward one. Adding an Edge between
/// the same pair again overwrites the previous weight. Self-loops and zero-weight Edges are
/// allowed, negative weights are rejected.
///
/// The order of [`neighbors`](Graph::neighbors) is the order in which the Edges were first
/// added, so it does not change as long as the Graph is not modified.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use weighted_pathfinding::Graph;
/// let mut graph = Graph::new();
/// graph.add_edge('a', 'b', 1).unwrap();
/// graph.add_edge('b', 'c', 4).unwrap();
/// graph.add_directed_edge('c', 'd', 2).unwrap();
///
/// assert_eq!(graph.len(), 4);
/// assert_eq!(graph.cost('b', 'c'), Ok(Some(4)));
/// assert_eq!(graph.cost('d', 'c'), Ok(None)); // directed
/// assert_eq!(graph.neighbors('b').unwrap().collect::<Vec<_>>(), vec!['a', 'c']);
///
/// // negative weights are refused
/// assert!(graph.add_edge('a', 'd', -1).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Graph<Id> {
    nodes: slab::Slab<Node<Id>>,
    index: HashMap<Id, usize>,
    edge_count: usize,
}

impl<Id: Copy + Eq + Hash> Graph<Id> {
    /// Creates an empty Graph
    pub fn new() -> Self {
        Self {
            nodes: slab::Slab::new(),
            index: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Creates an empty Graph with room for `capacity` Nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: slab::Slab::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            edge_count: 0,
        }
    }

    /// The number of Nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if the Graph has no Nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The number of directed Edges. An undirected Edge between two different Nodes counts twice.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// `true` if `id` is registered in the Graph
    pub fn contains(&self, id: Id) -> bool {
        self.index.contains_key(&id)
    }

    /// Iterates over all Nodes
    pub fn nodes(&self) -> impl Iterator<Item = Id> + '_ {
        self.nodes.iter().map(|(_, node)| node.id)
    }

    /// Registers a Node without any Edges.
    ///
    /// Does nothing if the Node already exists. Returns `true` if the Node was new.
    pub fn add_node(&mut self, id: Id) -> bool {
        let before = self.nodes.len();
        self.insert_node(id);
        self.nodes.len() != before
    }

    /// Adds an undirected Edge between `a` and `b`, registering both if necessary.
    ///
    /// Any previous weight between the two is overwritten in both directions.
    ///
    /// ## Errors
    /// [`GraphError::NegativeWeight`] if `weight < 0`. The Graph is not modified in that case.
    pub fn add_edge(&mut self, a: Id, b: Id, weight: Weight) -> Result<(), GraphError> {
        let cost = validate(weight)?;
        let a = self.insert_node(a);
        let b = self.insert_node(b);
        self.set_edge(a, b, cost);
        if a != b {
            self.set_edge(b, a, cost);
        }
        Ok(())
    }

    /// Adds an Edge from `a` to `b` only, registering both if necessary.
    ///
    /// ## Errors
    /// [`GraphError::NegativeWeight`] if `weight < 0`. The Graph is not modified in that case.
    pub fn add_directed_edge(&mut self, a: Id, b: Id, weight: Weight) -> Result<(), GraphError> {
        let cost = validate(weight)?;
        self.connect_directed(a, b, cost);
        Ok(())
    }

    /// `add_directed_edge` for weights that are already known to be valid
    pub(crate) fn connect_directed(&mut self, a: Id, b: Id, cost: Cost) {
        let a = self.insert_node(a);
        let b = self.insert_node(b);
        self.set_edge(a, b, cost);
    }

    /// Removes the Edges between `a` and `b` in both directions.
    ///
    /// Returns `true` if at least one direction existed.
    pub fn remove_edge(&mut self, a: Id, b: Id) -> Result<bool, GraphError> {
        let forward = self.remove_directed_edge(a, b)?;
        let backward = self.remove_directed_edge(b, a)?;
        Ok(forward || backward)
    }

    /// Removes the Edge from `a` to `b`.
    ///
    /// Returns `true` if the Edge existed.
    pub fn remove_directed_edge(&mut self, a: Id, b: Id) -> Result<bool, GraphError> {
        let a = self.slot(a)?;
        let b = self.slot(b)?;
        let removed = self.nodes[a].remove_edge(b);
        if removed {
            self.edge_count -= 1;
        }
        Ok(removed)
    }

    /// Removes a Node together with every Edge that starts or ends at it.
    pub fn remove_node(&mut self, id: Id) -> Result<(), GraphError> {
        let slot = self.index.remove(&id).ok_or(GraphError::UnknownNode)?;
        let node = self.nodes.remove(slot);
        self.edge_count -= node.edges.len();
        // directed Edges may point here from anywhere
        for (_, other) in self.nodes.iter_mut() {
            if other.remove_edge(slot) {
                self.edge_count -= 1;
            }
        }
        Ok(())
    }

    /// Removes all Nodes and Edges
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
        self.edge_count = 0;
    }

    /// Iterates over all Nodes reachable in one step from `id`.
    ///
    /// ## Errors
    /// [`GraphError::UnknownNode`] if `id` is not in the Graph.
    pub fn neighbors(&self, id: Id) -> Result<impl Iterator<Item = Id> + '_, GraphError> {
        Ok(self.edges(id)?.map(|(other, _)| other))
    }

    /// Iterates over all outgoing Edges of `id` as `(neighbor, weight)`.
    ///
    /// ## Errors
    /// [`GraphError::UnknownNode`] if `id` is not in the Graph.
    pub fn edges(&self, id: Id) -> Result<impl Iterator<Item = (Id, Cost)> + '_, GraphError> {
        let slot = self.slot(id)?;
        Ok(self.nodes[slot]
            .edges
            .iter()
            .map(move |&(other, cost)| (self.nodes[other].id, cost)))
    }

    /// The weight of the Edge from `a` to `b`, or `None` if there is no such Edge.
    ///
    /// ## Errors
    /// [`GraphError::UnknownNode`] if either Node is not in the Graph.
    pub fn cost(&self, a: Id, b: Id) -> Result<Option<Cost>, GraphError> {
        let a = self.slot(a)?;
        let b = self.slot(b)?;
        Ok(self.nodes[a].cost_to(b))
    }

    pub(crate) fn slot_of(&self, id: Id) -> Option<usize> {
        self.index.get(&id).copied()
    }

    #[track_caller]
    pub(crate) fn id_at(&self, slot: usize) -> Id {
        self.nodes[slot].id
    }

    pub(crate) fn slot_cost(&self, a: usize, b: usize) -> Option<Cost> {
        self.nodes.get(a).and_then(|node| node.cost_to(b))
    }

    #[track_caller]
    pub(crate) fn slot_edges(&self, slot: usize) -> &[(usize, Cost)] {
        &self.nodes[slot].edges
    }

    fn slot(&self, id: Id) -> Result<usize, GraphError> {
        self.slot_of(id).ok_or(GraphError::UnknownNode)
    }

    fn insert_node(&mut self, id: Id) -> usize {
        if let Some(slot) = self.slot_of(id) {
            return slot;
        }
        let slot = self.nodes.insert(Node::new(id));
        self.index.insert(id, slot);
        slot
    }

    fn set_edge(&mut self, a: usize, b: usize, cost: Cost) {
        if self.nodes[a].set_edge(b, cost) {
            self.edge_count += 1;
        }
    }
}

impl<Id: Copy + Eq + Hash> Default for Graph<Id> {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(weight: Weight) -> Result<Cost, GraphError> {
    if weight < 0 {
        log_warn!("rejected negative edge weight {}", weight);
        return Err(GraphError::NegativeWeight { weight });
    }
    Ok(weight as Cost)
}
