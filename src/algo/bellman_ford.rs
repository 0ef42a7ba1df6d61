//! Bellman-Ford single-source shortest paths over a directed edge list.
//!
//! Variables:
//!   V       = number of nodes
//!   E       = directed edges `(u, v, w)`; undirected links appear as two records
//!   dist[v] = best known distance from the source, `Unreachable` until reached
//!
//! Relaxation (V - 1 rounds):
//!   for each (u, v, w) in E: if dist[u] is finite and dist[u] + w < dist[v],
//!   set dist[v] = dist[u] + w
//!
//! Detection (one more scan): every edge that still relaxes lies on, or is
//! reachable from, a negative cycle that is itself reachable from the source.
//! All such edges are reported. Distances are left as they were after the last
//! round and are unstable for nodes downstream of the cycle.
//!
//! Range: a candidate below `Weight::MIN` is clamped to it and always counts
//! as relaxing, so a cycle that drives distances past the range is still
//! reported. A reachable node whose only distances lie above `Weight::MAX`
//! is a `WeightOverflow` error.
//!
//! Complexity: O(V * E).
use serde::Serialize;

use crate::graph::core::{GraphError, WeightedGraph};
use crate::graph::ids::NodeId;
use crate::graph::index_vec::{Idx, IndexVec};
use crate::graph::structure::{Distance, Edge, Weight};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    pub source: NodeId,
    pub distances: IndexVec<NodeId, Distance>,
    /// Last node that improved each distance; `None` for the source and
    /// unreachable nodes.
    pub predecessors: IndexVec<NodeId, Option<NodeId>>,
    /// Relaxation rounds actually performed.
    pub rounds: usize,
    /// Edges that still relaxed after the final round.
    pub violations: Vec<Edge>,
}

impl ShortestPaths {
    pub fn has_negative_cycle(&self) -> bool {
        !self.violations.is_empty()
    }

    pub fn distance(&self, node: NodeId) -> Option<Distance> {
        self.distances.get(node).copied()
    }

    pub fn unreachable(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.distances
            .iter_enumerated()
            .filter(|(_, distance)| !distance.is_finite())
            .map(|(node, _)| node)
    }

    /// Node sequence from the source to `target` along recorded predecessors.
    /// `None` when the target is unreachable or the chain does not lead back to
    /// the source (which happens once a negative cycle has been relaxed).
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        if !self.distance(target)?.is_finite() {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessors[current]?;
            path.push(current);
            if path.len() > self.distances.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Bellman-Ford runner.
#[derive(Debug, Clone, Copy, Default)]
pub struct BellmanFord {
    early_exit: bool,
}

impl BellmanFord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop relaxing once a whole round changes nothing. Final distances are
    /// the same; only [`ShortestPaths::rounds`] differs.
    pub fn early_exit(mut self, enabled: bool) -> Self {
        self.early_exit = enabled;
        self
    }

    pub fn solve(&self, graph: &WeightedGraph, source: NodeId) -> Result<ShortestPaths, GraphError> {
        graph.check_node(source)?;

        let node_count = graph.node_count();
        let mut distances = IndexVec::from_elem(Distance::Unreachable, node_count);
        let mut predecessors = IndexVec::from_elem(None, node_count);
        distances[source] = Distance::Finite(0);

        let mut rounds = 0;
        for round in 1..node_count {
            rounds = round;
            let mut updated = false;

            for edge in graph.edges().iter() {
                if let Some(candidate) = relaxed(&distances, edge) {
                    distances[edge.destination] = candidate;
                    predecessors[edge.destination] = Some(edge.source);
                    updated = true;
                }
            }

            log::debug!("bellman-ford: round {round} updated={updated}");
            if !updated && self.early_exit {
                break;
            }
        }

        if let Some(edge) = graph
            .edges()
            .iter()
            .find(|edge| overflows_into_unreachable(&distances, edge))
        {
            return Err(GraphError::WeightOverflow { edge: *edge });
        }

        let violations: Vec<Edge> = graph
            .edges()
            .iter()
            .filter(|edge| relaxed(&distances, edge).is_some())
            .copied()
            .collect();

        for edge in &violations {
            log::warn!(
                "bellman-ford: negative cycle detected between {} and {}",
                edge.source.index(),
                edge.destination.index()
            );
        }

        Ok(ShortestPaths {
            source,
            distances,
            predecessors,
            rounds,
            violations,
        })
    }
}

/// The improved distance for `edge.destination`, if `edge` relaxes.
fn relaxed(distances: &IndexVec<NodeId, Distance>, edge: &Edge) -> Option<Distance> {
    let from = distances[edge.source];
    if !from.is_finite() {
        return None;
    }
    match from.checked_extend(edge.weight) {
        Some(candidate) => (candidate < distances[edge.destination]).then_some(candidate),
        None if edge.weight < 0 => Some(Distance::Finite(Weight::MIN)),
        None => None,
    }
}

/// `edge` would reach an unreached node, but only past `Weight::MAX`.
fn overflows_into_unreachable(distances: &IndexVec<NodeId, Distance>, edge: &Edge) -> bool {
    edge.weight > 0
        && distances[edge.destination] == Distance::Unreachable
        && distances[edge.source].checked_extend(edge.weight).is_none()
}

/// Bellman-Ford with exactly `V - 1` rounds.
pub fn shortest_paths(graph: &WeightedGraph, source: NodeId) -> Result<ShortestPaths, GraphError> {
    BellmanFord::new().solve(graph, source)
}
