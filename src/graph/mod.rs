//! # Weighted graphs
//!
//! A graph is a fixed node set `V = {0, …, n-1}` and an ordered list of
//! weighted edges `(u, v, w)`. An undirected link is stored once when it feeds
//! a spanning-tree computation and as the directed pair `(u, v, w)`,
//! `(v, u, w)` when it feeds a shortest-path computation;
//! [`WeightedGraph::bidirected`] converts the first form into the second.
//!
//! ## Example
//!
//! ```rust
//! use spanpath::graph::*;
//!
//! let mut graph = WeightedGraph::new(3);
//! graph.add_edge(0, 1, 4).unwrap();
//! graph.add_edge(1, 2, 2).unwrap();
//! assert!(graph.add_edge(2, 3, 1).is_err());
//!
//! let directed = graph.bidirected();
//! assert_eq!(directed.edge_count(), 4);
//! assert_eq!(Alphabetic.label(NodeId::new(2)), "C");
//! ```

pub mod adjacency;
pub mod core;
pub mod ids;
pub mod index_vec;
pub mod io;
pub mod naming;
pub mod structure;

pub use adjacency::AdjacencyMatrix;
pub use self::core::{DiagnosticReport, GraphError, WeightedGraph};
pub use ids::{EdgeId, NodeId};
pub use index_vec::{Idx, IndexVec};
pub use naming::{Alphabetic, Indexed, Labels, NamingScheme, NodeNaming};
pub use structure::{Distance, Edge, Weight};
