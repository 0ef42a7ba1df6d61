//! Edge-list graph shared by every algorithm in the crate.
use std::fmt::{self, Write as FmtWrite};
use std::fs;
use std::path::Path;

use petgraph::graph::UnGraph;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::ids::{EdgeId, NodeId};
use crate::graph::index_vec::{Idx, IndexVec};
use crate::graph::naming::NodeNaming;
use crate::graph::structure::{Edge, Weight};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("node {node} is out of range for a graph with {node_count} nodes")]
    NodeOutOfRange { node: usize, node_count: usize },
    #[error("capacity exceeded: at most {capacity} entries allowed")]
    CapacityExceeded { capacity: usize },
    #[error("weight sum overflows at edge {edge}")]
    WeightOverflow { edge: Edge },
}

/// Connectivity diagnostics for a graph.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DiagnosticReport {
    /// Nodes with no incident edge, with their display labels.
    pub isolated_nodes: Vec<(NodeId, String)>,
    /// Edges whose endpoints coincide.
    pub self_loops: Vec<EdgeId>,
    pub total_nodes: usize,
    pub total_edges: usize,
}

impl DiagnosticReport {
    pub fn has_issues(&self) -> bool {
        !self.isolated_nodes.is_empty() || !self.self_loops.is_empty()
    }
}

/// Serialized shape of a [`WeightedGraph`]. Deserialization goes through
/// [`WeightedGraph::try_from`] so out-of-range endpoints are rejected.
#[derive(Clone, Serialize, Deserialize)]
struct RawGraph {
    node_count: usize,
    #[serde(default)]
    edges: Vec<Edge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    edge_limit: Option<usize>,
}

/// A fixed node set `[0, V)` plus an ordered edge list.
///
/// Edge order is significant only for tie-breaking: algorithms that sort by
/// weight keep equal-weight edges in insertion order.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGraph", into = "RawGraph")]
pub struct WeightedGraph {
    node_count: usize,
    edges: IndexVec<EdgeId, Edge>,
    edge_limit: Option<usize>,
}

impl fmt::Debug for WeightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightedGraph")
            .field("node_count", &self.node_count)
            .field("edges", &self.edges)
            .finish()
    }
}

impl WeightedGraph {
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            edges: IndexVec::new(),
            edge_limit: None,
        }
    }

    /// A graph that refuses to hold more than `edge_limit` edge records.
    pub fn with_edge_limit(node_count: usize, edge_limit: usize) -> Self {
        Self {
            node_count,
            edges: IndexVec::with_capacity(edge_limit),
            edge_limit: Some(edge_limit),
        }
    }

    pub fn from_edges<I>(node_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize, Weight)>,
    {
        let mut graph = Self::new(node_count);
        for (source, destination, weight) in edges {
            graph.add_edge(source, destination, weight)?;
        }
        Ok(graph)
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_limit(&self) -> Option<usize> {
        self.edge_limit
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + use<> {
        (0..self.node_count).map(NodeId::from_index)
    }

    pub fn edges(&self) -> &IndexVec<EdgeId, Edge> {
        &self.edges
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.node_count
    }

    pub fn check_node(&self, node: NodeId) -> Result<(), GraphError> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                node: node.index(),
                node_count: self.node_count,
            })
        }
    }

    /// The id of node `index`, if the graph has such a node.
    pub fn node(&self, index: usize) -> Result<NodeId, GraphError> {
        u32::try_from(index)
            .ok()
            .filter(|_| index < self.node_count)
            .map(NodeId::new)
            .ok_or(GraphError::NodeOutOfRange {
                node: index,
                node_count: self.node_count,
            })
    }

    pub fn add_edge(
        &mut self,
        source: usize,
        destination: usize,
        weight: Weight,
    ) -> Result<EdgeId, GraphError> {
        let edge = Edge::new(self.node(source)?, self.node(destination)?, weight);
        self.push_edge(edge)
    }

    /// Stores `source -> destination` and `destination -> source` with the same
    /// weight. This is the representation the shortest-path solver expects for
    /// an undirected link.
    pub fn add_bidirectional_edge(
        &mut self,
        source: usize,
        destination: usize,
        weight: Weight,
    ) -> Result<(EdgeId, EdgeId), GraphError> {
        let edge = Edge::new(self.node(source)?, self.node(destination)?, weight);
        self.reserve_records(2)?;
        let forward = self.edges.push(edge);
        let backward = self.edges.push(edge.reversed());
        Ok((forward, backward))
    }

    fn push_edge(&mut self, edge: Edge) -> Result<EdgeId, GraphError> {
        self.check_edge(&edge)?;
        self.reserve_records(1)?;
        Ok(self.edges.push(edge))
    }

    fn check_edge(&self, edge: &Edge) -> Result<(), GraphError> {
        self.check_node(edge.source)?;
        self.check_node(edge.destination)
    }

    fn reserve_records(&self, additional: usize) -> Result<(), GraphError> {
        match self.edge_limit {
            Some(capacity) if self.edges.len() + additional > capacity => {
                Err(GraphError::CapacityExceeded { capacity })
            }
            _ => Ok(()),
        }
    }

    /// Expands every stored edge into a directed pair, turning a
    /// once-per-link undirected edge list into shortest-path input.
    pub fn bidirected(&self) -> WeightedGraph {
        let mut edges = IndexVec::with_capacity(self.edges.len() * 2);
        for edge in self.edges.iter() {
            edges.push(*edge);
            edges.push(edge.reversed());
        }
        WeightedGraph {
            node_count: self.node_count,
            edges,
            edge_limit: self.edge_limit.map(|limit| limit.max(self.edges.len() * 2)),
        }
    }

    /// Number of edge records touching `node`; a self loop counts once.
    pub fn degree(&self, node: NodeId) -> usize {
        self.edges.iter().filter(|edge| edge.touches(node)).count()
    }

    pub fn isolated_nodes(&self) -> Vec<NodeId> {
        let mut touched = vec![false; self.node_count];
        for edge in self.edges.iter() {
            touched[edge.source.index()] = true;
            touched[edge.destination.index()] = true;
        }
        self.nodes()
            .filter(|node| !touched[node.index()])
            .collect()
    }

    pub fn diagnose_connectivity(&self, naming: &dyn NodeNaming) -> DiagnosticReport {
        let isolated_nodes = self
            .isolated_nodes()
            .into_iter()
            .map(|node| (node, naming.label(node)))
            .collect();
        let self_loops = self
            .edges
            .iter_enumerated()
            .filter(|(_, edge)| edge.is_self_loop())
            .map(|(id, _)| id)
            .collect();

        DiagnosticReport {
            isolated_nodes,
            self_loops,
            total_nodes: self.node_count,
            total_edges: self.edges.len(),
        }
    }

    pub fn log_diagnostics(&self, naming: &dyn NodeNaming) {
        let report = self.diagnose_connectivity(naming);

        if report.has_issues() {
            log::warn!(
                "graph has {} nodes and {} edges",
                report.total_nodes,
                report.total_edges
            );
            for (id, name) in &report.isolated_nodes {
                log::warn!("  isolated node [{}] {}", id.index(), name);
            }
            for id in &report.self_loops {
                log::warn!("  self loop on edge {}", id.index());
            }
        } else {
            log::info!("connectivity check passed, no isolated nodes");
        }
    }

    /// Graphviz rendering. Undirected graphs print each stored edge once as `--`.
    pub fn to_dot(&self, naming: &dyn NodeNaming, directed: bool) -> String {
        let (keyword, connector) = if directed {
            ("digraph", "->")
        } else {
            ("graph", "--")
        };
        let mut dot = String::new();
        let _ = writeln!(&mut dot, "{keyword} Network {{");
        let _ = writeln!(&mut dot, "    node [fontname=\"Helvetica\", shape=circle];");

        for node in self.nodes() {
            let _ = writeln!(
                &mut dot,
                "    node_{} [label=\"{}\"];",
                node.index(),
                escape_label(&naming.label(node))
            );
        }

        for edge in self.edges.iter() {
            let _ = writeln!(
                &mut dot,
                "    node_{} {} node_{} [label=\"{}\"];",
                edge.source.index(),
                connector,
                edge.destination.index(),
                edge.weight
            );
        }

        let _ = writeln!(&mut dot, "}}");
        dot
    }

    pub fn write_dot<P: AsRef<Path>>(
        &self,
        path: P,
        naming: &dyn NodeNaming,
        directed: bool,
    ) -> std::io::Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_dot(naming, directed))
    }

    /// Undirected petgraph view; node weights carry the `NodeId` of each node.
    pub fn to_petgraph(&self) -> UnGraph<NodeId, Weight> {
        let mut graph = UnGraph::with_capacity(self.node_count, self.edges.len());
        let indices: Vec<_> = self.nodes().map(|node| graph.add_node(node)).collect();
        for edge in self.edges.iter() {
            graph.add_edge(
                indices[edge.source.index()],
                indices[edge.destination.index()],
                edge.weight,
            );
        }
        graph
    }
}

impl TryFrom<RawGraph> for WeightedGraph {
    type Error = GraphError;

    fn try_from(raw: RawGraph) -> Result<Self, Self::Error> {
        let mut graph = match raw.edge_limit {
            Some(limit) => WeightedGraph::with_edge_limit(raw.node_count, limit),
            None => WeightedGraph::new(raw.node_count),
        };
        for edge in raw.edges {
            graph.push_edge(edge)?;
        }
        Ok(graph)
    }
}

impl From<WeightedGraph> for RawGraph {
    fn from(graph: WeightedGraph) -> Self {
        RawGraph {
            node_count: graph.node_count,
            edges: graph.edges.into_vec(),
            edge_limit: graph.edge_limit,
        }
    }
}

fn escape_label(input: &str) -> String {
    input.replace('\\', "\\\\").replace('"', "\\\"")
}
