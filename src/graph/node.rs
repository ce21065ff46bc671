use crate::Cost;

#[derive(Clone, Debug)]
pub(crate) struct Node<Id> {
    pub id: Id,
    /// outgoing Edges as `(slot of the target, weight)`, in insertion order
    pub edges: Vec<(usize, Cost)>,
}

impl<Id> Node<Id> {
    pub fn new(id: Id) -> Self {
        Self {
            id,
            edges: Vec::new(),
        }
    }

    pub fn cost_to(&self, target: usize) -> Option<Cost> {
        self.edges
            .iter()
            .find(|&&(other, _)| other == target)
            .map(|&(_, cost)| cost)
    }

    /// Returns `true` if the Edge did not exist before.
    pub fn set_edge(&mut self, target: usize, cost: Cost) -> bool {
        match self.edges.iter_mut().find(|(other, _)| *other == target) {
            Some(existing) => {
                existing.1 = cost;
                false
            }
            None => {
                self.edges.push((target, cost));
                true
            }
        }
    }

    /// Returns `true` if there was an Edge to remove.
    pub fn remove_edge(&mut self, target: usize) -> bool {
        let before = self.edges.len();
        // `retain` keeps the order of the remaining Edges
        self.edges.retain(|&(other, _)| other != target);
        self.edges.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::Node;

    #[test]
    fn overwrite_keeps_order() {
        let mut node = Node::new('a');
        assert!(node.set_edge(3, 1));
        assert!(node.set_edge(1, 2));
        assert!(!node.set_edge(3, 7));

        assert_eq!(node.edges, vec![(3, 7), (1, 2)]);
        assert_eq!(node.cost_to(3), Some(7));
        assert_eq!(node.cost_to(2), None);

        assert!(node.remove_edge(3));
        assert!(!node.remove_edge(3));
        assert_eq!(node.edges, vec![(1, 2)]);
    }
}
