use serde::Serialize;
use std::fmt;
use std::fs;
use std::time::Duration;

use itertools::Itertools;

use crate::algo::bellman_ford::ShortestPaths;
use crate::algo::mst::{SpanningForest, StepDecision};
use crate::algo::traversal::Traversal;
use crate::graph::ids::NodeId;
use crate::graph::io::{write_json, IoError};
use crate::graph::naming::NodeNaming;
use crate::graph::structure::{Distance, Edge, Weight};
use crate::queue::{Entry, MaxPriorityQueue};

const RULE: &str = "-------------------------------------------------";

/// An edge with its endpoints already resolved to labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledEdge {
    pub from: String,
    pub to: String,
    pub cost: Weight,
}

impl LabeledEdge {
    fn new(edge: &Edge, naming: &dyn NodeNaming) -> Self {
        Self {
            from: naming.label(edge.source),
            to: naming.label(edge.destination),
            cost: edge.weight,
        }
    }
}

impl fmt::Display for LabeledEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {} (Cost: {})", self.from, self.to, self.cost)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MstStep {
    pub edge: LabeledEdge,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MstReport {
    pub title: String,
    pub node_count: usize,
    pub steps: Vec<MstStep>,
    pub selected: Vec<LabeledEdge>,
    pub total_cost: Weight,
    pub spanning: bool,
    pub analysis_time: Duration,
}

impl MstReport {
    pub fn new(
        title: impl Into<String>,
        forest: &SpanningForest,
        naming: &dyn NodeNaming,
        analysis_time: Duration,
    ) -> Self {
        Self {
            title: title.into(),
            node_count: forest.node_count,
            steps: forest
                .steps
                .iter()
                .map(|step| MstStep {
                    edge: LabeledEdge::new(&step.edge, naming),
                    selected: step.decision == StepDecision::Accepted,
                })
                .collect(),
            selected: forest
                .edges
                .iter()
                .map(|edge| LabeledEdge::new(edge, naming))
                .collect(),
            total_cost: forest.total_weight,
            spanning: forest.is_spanning_tree(),
            analysis_time,
        }
    }

    pub fn save_to_file(&self, path: &str) -> Result<(), IoError> {
        save_text_and_json(self, path)
    }
}

impl fmt::Display for MstReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.steps.is_empty() {
            writeln!(f, "--- Kruskal's Algorithm Steps ---")?;
            for step in &self.steps {
                if step.selected {
                    writeln!(f, "Selected: {}", step.edge)?;
                } else {
                    writeln!(f, "Skipped:  {} -> Forms Cycle", step.edge)?;
                }
            }
            writeln!(f)?;
        }

        writeln!(f, "{RULE}")?;
        writeln!(f, "MINIMUM SPANNING TREE: {}", self.title)?;
        writeln!(f, "{RULE}")?;
        for edge in &self.selected {
            writeln!(f, "{} -- {} : {}", edge.from, edge.to, edge.cost)?;
        }
        writeln!(f, "{RULE}")?;
        writeln!(f, "Total cost: {}", self.total_cost)?;
        if !self.spanning {
            writeln!(
                f,
                "Note: input is disconnected; result is a forest of {} trees.",
                self.node_count - self.selected.len()
            )?;
        }
        write!(f, "Analysis time: {:?}", self.analysis_time)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathRow {
    pub target: String,
    pub distance: Distance,
}

#[derive(Debug, Clone, Serialize)]
pub struct PathReport {
    pub title: String,
    pub source: String,
    pub rounds: usize,
    pub rows: Vec<PathRow>,
    /// Endpoint labels of every edge that still relaxed after the last round.
    pub alerts: Vec<(String, String)>,
    pub analysis_time: Duration,
}

impl PathReport {
    pub fn new(
        title: impl Into<String>,
        paths: &ShortestPaths,
        naming: &dyn NodeNaming,
        analysis_time: Duration,
    ) -> Self {
        Self {
            title: title.into(),
            source: naming.label(paths.source),
            rounds: paths.rounds,
            rows: paths
                .distances
                .iter_enumerated()
                .map(|(node, distance)| PathRow {
                    target: naming.label(node),
                    distance: *distance,
                })
                .collect(),
            alerts: paths
                .violations
                .iter()
                .map(|edge| (naming.label(edge.source), naming.label(edge.destination)))
                .collect(),
            analysis_time,
        }
    }

    pub fn has_negative_cycle(&self) -> bool {
        !self.alerts.is_empty()
    }

    pub fn save_to_file(&self, path: &str) -> Result<(), IoError> {
        save_text_and_json(self, path)
    }
}

impl fmt::Display for PathReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({} relaxation rounds)", self.title, self.rounds)?;
        if self.alerts.is_empty() {
            writeln!(f, "[Status] No negative-weight cycles detected.")?;
        }
        for (from, to) in &self.alerts {
            writeln!(f, "[ALERT] Negative weight cycle detected between {from} and {to}!")?;
        }

        writeln!(f, "\n--- Shortest paths from {} ---", self.source)?;
        writeln!(f, "{:<15} | {:<10}", "Target", "Min Cost")?;
        writeln!(f, "--------------------------------")?;
        for row in &self.rows {
            writeln!(f, "{:<15} | {}", row.target, row.distance)?;
        }
        writeln!(f, "--------------------------------")?;
        write!(f, "Analysis time: {:?}", self.analysis_time)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TraversalReport {
    pub start: String,
    pub order: Vec<String>,
    pub contacts: Vec<(String, Weight)>,
    pub riskiest: Option<(String, Weight)>,
}

impl TraversalReport {
    pub fn new(traversal: &Traversal, naming: &dyn NodeNaming) -> Self {
        let label = |(node, weight): &(NodeId, Weight)| (naming.label(*node), *weight);
        Self {
            start: naming.label(traversal.start),
            order: traversal.order.iter().map(|&node| naming.label(node)).collect(),
            contacts: traversal.contacts.iter().map(label).collect(),
            riskiest: traversal.riskiest.as_ref().map(label),
        }
    }

    pub fn save_to_file(&self, path: &str) -> Result<(), IoError> {
        save_text_and_json(self, path)
    }
}

impl fmt::Display for TraversalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Traversal starting from {} ---", self.start)?;
        writeln!(f, "BFS order: {}", self.order.iter().join(" "))?;
        for (contact, weight) in &self.contacts {
            writeln!(f, "  > direct contact {contact} (weight {weight})")?;
        }
        writeln!(f, "{RULE}")?;
        match &self.riskiest {
            Some((contact, weight)) => {
                writeln!(f, "Highest risk exposure: {contact}")?;
                writeln!(f, "Reason: heaviest direct link ({weight}).")?;
            }
            None => writeln!(f, "No direct contacts from {}.", self.start)?,
        }
        write!(f, "{RULE}")
    }
}

/// Heap contents, in array order, after one operation.
#[derive(Debug, Clone, Serialize)]
pub struct QueueSnapshot {
    pub operation: String,
    pub entries: Vec<Entry<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueueReport {
    pub title: String,
    pub snapshots: Vec<QueueSnapshot>,
    pub processing_order: Vec<Entry<String>>,
}

impl QueueReport {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            snapshots: Vec::new(),
            processing_order: Vec::new(),
        }
    }

    pub fn snapshot<T: fmt::Display>(&mut self, operation: impl Into<String>, queue: &MaxPriorityQueue<T>) {
        self.snapshots.push(QueueSnapshot {
            operation: operation.into(),
            entries: stringify(queue.as_slice()),
        });
    }

    pub fn record_processing_order<T: fmt::Display + Clone>(&mut self, queue: &MaxPriorityQueue<T>) {
        self.processing_order = stringify(&queue.processing_order());
    }

    pub fn save_to_file(&self, path: &str) -> Result<(), IoError> {
        save_text_and_json(self, path)
    }
}

fn stringify<T: fmt::Display>(entries: &[Entry<T>]) -> Vec<Entry<String>> {
    entries
        .iter()
        .map(|entry| Entry::new(entry.item.to_string(), entry.priority))
        .collect()
}

impl fmt::Display for QueueReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for snapshot in &self.snapshots {
            writeln!(f, "\n[{}]", snapshot.operation)?;
            if snapshot.entries.is_empty() {
                writeln!(f, "  [Empty]")?;
            } else {
                writeln!(f, "  {}", snapshot.entries.iter().join(" "))?;
            }
        }
        if !self.processing_order.is_empty() {
            writeln!(f, "\n--- Processing order (highest first) ---")?;
            for entry in &self.processing_order {
                writeln!(f, "Processing: {} ({})", entry.item, entry.priority)?;
            }
        }
        Ok(())
    }
}

fn save_text_and_json<R: fmt::Display + Serialize>(report: &R, path: &str) -> Result<(), IoError> {
    fs::write(path, format!("{report}\n"))?;
    write_json(format!("{path}.json"), report)
}
