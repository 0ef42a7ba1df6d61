//! Graph algorithms: disjoint sets, Kruskal, Bellman-Ford and BFS.
//!
//! The spanning-tree builder and the shortest-path solver never interact;
//! both read a [`WeightedGraph`](crate::graph::WeightedGraph) and return an
//! owned result the caller can report on.
//!
//! ```rust
//! use spanpath::algo::{minimum_spanning_forest, shortest_paths};
//! use spanpath::graph::{Distance, NodeId, WeightedGraph};
//!
//! let graph = WeightedGraph::from_edges(3, [(0, 1, 1), (1, 2, 2), (0, 2, 3)]).unwrap();
//! let forest = minimum_spanning_forest(&graph).unwrap();
//! assert_eq!(forest.total_weight, 3);
//!
//! let paths = shortest_paths(&graph.bidirected(), NodeId::new(0)).unwrap();
//! assert_eq!(paths.distance(NodeId::new(2)), Some(Distance::Finite(3)));
//! assert!(!paths.has_negative_cycle());
//! ```

pub mod bellman_ford;
pub mod disjoint_set;
pub mod mst;
pub mod traversal;

pub use bellman_ford::{shortest_paths, BellmanFord, ShortestPaths};
pub use disjoint_set::{DisjointSet, Subset};
pub use mst::{minimum_spanning_forest, KruskalBuilder, KruskalStep, SpanningForest, StepDecision};
pub use traversal::{bfs_with_lookahead, Traversal};
