//! Display labels for nodes.
//!
//! Labels only ever feed reports. Two indices may share a label (a junction
//! drawn as two nodes, for instance), so nothing in the algorithms compares
//! or looks up by label.
use serde::{Deserialize, Serialize};

use crate::graph::ids::NodeId;
use crate::graph::index_vec::Idx;

/// Label shown for indices a naming scheme does not cover.
pub const UNKNOWN_LABEL: &str = "?";

pub trait NodeNaming {
    fn label(&self, node: NodeId) -> String;
}

/// `A`, `B`, ... `Z`, `AA`, `AB`, ... in spreadsheet column order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Alphabetic;

impl NodeNaming for Alphabetic {
    fn label(&self, node: NodeId) -> String {
        let mut remaining = node.index() + 1;
        let mut letters = Vec::new();
        while remaining > 0 {
            remaining -= 1;
            letters.push(b'A' + (remaining % 26) as u8);
            remaining /= 26;
        }
        letters.reverse();
        String::from_utf8(letters).unwrap_or_else(|_| UNKNOWN_LABEL.to_string())
    }
}

/// The bare index.
#[derive(Debug, Clone, Copy, Default)]
pub struct Indexed;

impl NodeNaming for Indexed {
    fn label(&self, node: NodeId) -> String {
        node.index().to_string()
    }
}

/// An explicit label table. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Labels(Vec<String>);

impl Labels {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(labels.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every index carrying `label`, in ascending order.
    pub fn indices_of(&self, label: &str) -> Vec<NodeId> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, candidate)| candidate.as_str() == label)
            .map(|(idx, _)| NodeId::from_index(idx))
            .collect()
    }

    pub fn has_duplicates(&self) -> bool {
        self.0
            .iter()
            .enumerate()
            .any(|(idx, label)| self.0[..idx].contains(label))
    }
}

impl NodeNaming for Labels {
    fn label(&self, node: NodeId) -> String {
        self.0
            .get(node.index())
            .cloned()
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
    }
}

/// Naming scheme selected in a run configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingScheme {
    #[default]
    Alphabetic,
    Indexed,
    Labels(Labels),
}

impl NodeNaming for NamingScheme {
    fn label(&self, node: NodeId) -> String {
        match self {
            NamingScheme::Alphabetic => Alphabetic.label(node),
            NamingScheme::Indexed => Indexed.label(node),
            NamingScheme::Labels(labels) => labels.label(node),
        }
    }
}

impl<F> NodeNaming for F
where
    F: Fn(NodeId) -> String,
{
    fn label(&self, node: NodeId) -> String {
        self(node)
    }
}
