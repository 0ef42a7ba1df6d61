//! Dense adjacency matrix over a fixed node set.
//!
//! Weight `0` means "no link", matching how the traversal demos encode their
//! networks, so zero-cost links cannot be expressed here.
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::graph::core::{GraphError, WeightedGraph};
use crate::graph::ids::NodeId;
use crate::graph::index_vec::{Idx, IndexVec};
use crate::graph::structure::Weight;

type SmallRow<T> = SmallVec<[T; 8]>;

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdjacencyMatrix {
    rows: IndexVec<NodeId, SmallRow<Weight>>,
}

impl AdjacencyMatrix {
    pub fn new(size: usize) -> Self {
        Self {
            rows: IndexVec::from_fn(size, |_| SmallRow::from_elem(0, size)),
        }
    }

    /// Symmetric matrix holding every edge of `graph` in both directions.
    /// A later edge between the same pair overwrites an earlier one.
    pub fn from_undirected(graph: &WeightedGraph) -> Self {
        let mut matrix = Self::new(graph.node_count());
        for edge in graph.edges().iter() {
            matrix.rows[edge.source][edge.destination.index()] = edge.weight;
            matrix.rows[edge.destination][edge.source.index()] = edge.weight;
        }
        matrix
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn check_node(&self, node: NodeId) -> Result<(), GraphError> {
        if self.rows.contains_index(node) {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                node: node.index(),
                node_count: self.size(),
            })
        }
    }

    pub fn set(&mut self, from: NodeId, to: NodeId, weight: Weight) -> Result<(), GraphError> {
        self.check_node(from)?;
        self.check_node(to)?;
        self.rows[from][to.index()] = weight;
        Ok(())
    }

    pub fn set_symmetric(&mut self, a: NodeId, b: NodeId, weight: Weight) -> Result<(), GraphError> {
        self.set(a, b, weight)?;
        self.set(b, a, weight)
    }

    pub fn get(&self, from: NodeId, to: NodeId) -> Weight {
        self.rows[from][to.index()]
    }

    /// Neighbours of `node` with a positive link weight, in index order.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        self.rows[node]
            .iter()
            .enumerate()
            .filter(|(_, weight)| **weight > 0)
            .map(|(idx, weight)| (NodeId::from_index(idx), *weight))
    }

    pub fn is_symmetric(&self) -> bool {
        self.rows.iter_enumerated().all(|(from, row)| {
            row.iter()
                .enumerate()
                .all(|(to, weight)| self.rows[NodeId::from_index(to)][from.index()] == *weight)
        })
    }
}

impl fmt::Debug for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.rows.iter().map(|row| row.as_slice()))
            .finish()
    }
}
