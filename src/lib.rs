//! Minimum spanning forests (Kruskal over a union-find), single-source
//! shortest paths with negative-cycle detection (Bellman-Ford), breadth-first
//! traversal and a bounded max-priority queue, over small weighted networks.

pub mod algo;
pub mod config;
pub mod datasets;
pub mod graph;
pub mod options;
pub mod queue;
pub mod report;
