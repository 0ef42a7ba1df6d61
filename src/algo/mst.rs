//! Minimum spanning forest via Kruskal's algorithm.
//!
//! Edges are scanned in ascending weight order (a stable sort, so equal
//! weights keep insertion order) and accepted whenever their endpoints still
//! sit in different sets of a [`DisjointSet`]. The scan stops after `V - 1`
//! acceptances or when the edge list runs out; a disconnected input simply
//! yields a forest with fewer edges.
use serde::Serialize;

use crate::algo::disjoint_set::DisjointSet;
use crate::graph::core::{GraphError, WeightedGraph};
use crate::graph::ids::EdgeId;
use crate::graph::structure::{Edge, Weight};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepDecision {
    Accepted,
    /// Both endpoints were already connected; taking the edge would close a cycle.
    Rejected,
}

/// One edge examined by the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KruskalStep {
    pub edge_id: EdgeId,
    pub edge: Edge,
    pub decision: StepDecision,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningForest {
    pub node_count: usize,
    /// Accepted edges in acceptance order.
    pub edges: Vec<Edge>,
    pub total_weight: Weight,
    /// Every examined edge, present only when step tracing is enabled.
    pub steps: Vec<KruskalStep>,
}

impl SpanningForest {
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// `true` when the forest is a single tree covering every node.
    pub fn is_spanning_tree(&self) -> bool {
        self.edges.len() + 1 == self.node_count.max(1)
    }

    /// Connected components of the input graph; each accepted edge merges two.
    pub fn component_count(&self) -> usize {
        self.node_count - self.edges.len()
    }

    pub fn rejected(&self) -> impl Iterator<Item = &KruskalStep> {
        self.steps
            .iter()
            .filter(|step| step.decision == StepDecision::Rejected)
    }
}

/// Kruskal runner. Input edges are taken as undirected, one record per link.
#[derive(Debug, Clone, Copy)]
pub struct KruskalBuilder {
    trace_steps: bool,
}

impl Default for KruskalBuilder {
    fn default() -> Self {
        Self { trace_steps: true }
    }
}

impl KruskalBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trace_steps(mut self, enabled: bool) -> Self {
        self.trace_steps = enabled;
        self
    }

    pub fn build(&self, graph: &WeightedGraph) -> Result<SpanningForest, GraphError> {
        let node_count = graph.node_count();
        let target = node_count.saturating_sub(1);

        let mut sorted: Vec<(EdgeId, Edge)> = graph
            .edges()
            .iter_enumerated()
            .map(|(id, edge)| (id, *edge))
            .collect();
        sorted.sort_by_key(|(_, edge)| edge.weight);

        let mut sets = DisjointSet::new(node_count);
        let mut edges = Vec::with_capacity(target);
        let mut steps = Vec::new();
        let mut total_weight: Weight = 0;

        for (edge_id, edge) in sorted {
            if edges.len() == target {
                break;
            }

            let root_source = sets.find(edge.source)?;
            let root_destination = sets.find(edge.destination)?;
            let decision = if root_source != root_destination {
                sets.union(root_source, root_destination)?;
                total_weight = total_weight
                    .checked_add(edge.weight)
                    .ok_or(GraphError::WeightOverflow { edge })?;
                edges.push(edge);
                log::debug!("kruskal: accepted {edge}");
                StepDecision::Accepted
            } else {
                log::debug!("kruskal: rejected {edge}, would close a cycle");
                StepDecision::Rejected
            };

            if self.trace_steps {
                steps.push(KruskalStep {
                    edge_id,
                    edge,
                    decision,
                });
            }
        }

        if edges.len() < target {
            log::info!(
                "kruskal: graph is disconnected, forest has {} of {} edges",
                edges.len(),
                target
            );
        }

        Ok(SpanningForest {
            node_count,
            edges,
            total_weight,
            steps,
        })
    }
}

/// Kruskal with step tracing enabled.
pub fn minimum_spanning_forest(graph: &WeightedGraph) -> Result<SpanningForest, GraphError> {
    KruskalBuilder::new().build(graph)
}
