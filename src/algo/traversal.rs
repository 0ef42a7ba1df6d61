//! Breadth-first traversal with a one-hop lookahead at the start node.
use std::collections::VecDeque;

use serde::Serialize;

use crate::graph::adjacency::AdjacencyMatrix;
use crate::graph::core::GraphError;
use crate::graph::ids::NodeId;
use crate::graph::index_vec::{Idx, IndexVec};
use crate::graph::structure::Weight;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Traversal {
    pub start: NodeId,
    /// Nodes in the order they were dequeued.
    pub order: Vec<NodeId>,
    /// Direct links of the start node, in index order.
    pub contacts: Vec<(NodeId, Weight)>,
    /// Contact with the strictly largest link weight; the lowest index wins ties.
    pub riskiest: Option<(NodeId, Weight)>,
}

impl Traversal {
    pub fn visited(&self, node: NodeId) -> bool {
        self.order.contains(&node)
    }
}

/// BFS from `start`, visiting neighbours in ascending index order.
pub fn bfs_with_lookahead(matrix: &AdjacencyMatrix, start: NodeId) -> Result<Traversal, GraphError> {
    matrix.check_node(start)?;

    let contacts: Vec<(NodeId, Weight)> = matrix.neighbors(start).collect();
    let riskiest = contacts.iter().fold(None, |best: Option<(NodeId, Weight)>, &contact| {
        match best {
            Some((_, weight)) if weight >= contact.1 => best,
            _ => Some(contact),
        }
    });
    for (node, weight) in &contacts {
        log::debug!("bfs: direct contact {} (weight {weight})", node.index());
    }

    let mut visited: IndexVec<NodeId, bool> = IndexVec::from_elem(false, matrix.size());
    let mut queue = VecDeque::new();
    let mut order = Vec::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for (neighbor, _) in matrix.neighbors(current) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                queue.push_back(neighbor);
            }
        }
    }

    Ok(Traversal {
        start,
        order,
        contacts,
        riskiest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::core::WeightedGraph;

    fn n(raw: u32) -> NodeId {
        NodeId::new(raw)
    }

    fn diamond() -> AdjacencyMatrix {
        let graph =
            WeightedGraph::from_edges(5, [(0, 2, 3), (0, 1, 7), (1, 3, 1), (2, 3, 9)]).unwrap();
        AdjacencyMatrix::from_undirected(&graph)
    }

    #[test]
    fn visits_level_by_level_in_index_order() {
        let traversal = bfs_with_lookahead(&diamond(), n(0)).unwrap();
        assert_eq!(traversal.order, vec![n(0), n(1), n(2), n(3)]);
        assert!(!traversal.visited(n(4)));
    }

    #[test]
    fn riskiest_contact_has_the_heaviest_link() {
        let traversal = bfs_with_lookahead(&diamond(), n(3)).unwrap();
        assert_eq!(traversal.contacts, vec![(n(1), 1), (n(2), 9)]);
        assert_eq!(traversal.riskiest, Some((n(2), 9)));
    }

    #[test]
    fn ties_keep_the_lowest_index() {
        let graph = WeightedGraph::from_edges(3, [(0, 2, 4), (0, 1, 4)]).unwrap();
        let matrix = AdjacencyMatrix::from_undirected(&graph);
        let traversal = bfs_with_lookahead(&matrix, n(0)).unwrap();
        assert_eq!(traversal.riskiest, Some((n(1), 4)));
    }

    #[test]
    fn isolated_start_has_no_contacts() {
        let traversal = bfs_with_lookahead(&diamond(), n(4)).unwrap();
        assert_eq!(traversal.order, vec![n(4)]);
        assert!(traversal.contacts.is_empty());
        assert_eq!(traversal.riskiest, None);
    }

    #[test]
    fn start_out_of_range_is_an_error() {
        assert!(bfs_with_lookahead(&diamond(), n(5)).is_err());
    }
}
