//! Static graph elements: weighted edges and distances.
use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::ids::NodeId;

pub type Weight = i64;

/// A directed, weighted edge. Undirected links are stored either once (for
/// spanning trees) or as two records of equal weight (for shortest paths).
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct Edge {
    pub source: NodeId,
    pub destination: NodeId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: NodeId, destination: NodeId, weight: Weight) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    pub fn reversed(self) -> Self {
        Self {
            source: self.destination,
            destination: self.source,
            weight: self.weight,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }

    pub fn touches(&self, node: NodeId) -> bool {
        self.source == node || self.destination == node
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({})",
            self.source, self.destination, self.weight
        )
    }
}

/// Tentative or converged shortest distance from a source node.
///
/// `Unreachable` orders after every finite distance.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distance {
    Finite(Weight),
    Unreachable,
}

impl Distance {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn finite(self) -> Option<Weight> {
        match self {
            Distance::Finite(value) => Some(value),
            Distance::Unreachable => None,
        }
    }

    /// Distance reached by following an edge of `weight` from here, or
    /// `None` when the sum leaves the `Weight` range.
    pub fn checked_extend(self, weight: Weight) -> Option<Distance> {
        match self {
            Distance::Finite(value) => value.checked_add(weight).map(Distance::Finite),
            Distance::Unreachable => Some(Distance::Unreachable),
        }
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a.cmp(b),
            (Distance::Finite(_), Distance::Unreachable) => Ordering::Less,
            (Distance::Unreachable, Distance::Finite(_)) => Ordering::Greater,
            (Distance::Unreachable, Distance::Unreachable) => Ordering::Equal,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(value) => write!(f, "{value}"),
            Distance::Unreachable => write!(f, "Unreachable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_sorts_after_finite() {
        assert!(Distance::Finite(i64::MAX) < Distance::Unreachable);
        assert!(Distance::Finite(-3) < Distance::Finite(2));
    }

    #[test]
    fn extending_unreachable_stays_unreachable() {
        assert_eq!(
            Distance::Unreachable.checked_extend(-100),
            Some(Distance::Unreachable)
        );
        assert_eq!(Distance::Finite(4).checked_extend(-6), Some(Distance::Finite(-2)));
        assert_eq!(Distance::Finite(i64::MAX).checked_extend(1), None);
        assert_eq!(Distance::Finite(i64::MIN).checked_extend(-1), None);
    }

    #[test]
    fn reversed_swaps_endpoints_only() {
        let edge = Edge::new(NodeId::new(1), NodeId::new(4), 7);
        let back = edge.reversed();
        assert_eq!(back.source, NodeId::new(4));
        assert_eq!(back.destination, NodeId::new(1));
        assert_eq!(back.weight, 7);
    }
}
