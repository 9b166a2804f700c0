//! # graphx Core
//!
//! Core library for graphx: the graph model and the algorithms that run on it.
//!
//! Every entry point is a pure function over a [`Graph`] value. Nothing is
//! cached between calls and the input is never modified.
//!
//! - [`incidence_matrix`] / [`adjacency_matrix`] - dense matrices over the edge-derived node set
//! - [`shortest_path`] / [`all_shortest_paths`] / [`all_paths`] - exhaustive path search
//! - [`hamiltonian_path`] - backtracking Hamiltonian circuit search
//! - [`eulerian_cycle`] - parity check plus Hierholzer's algorithm
//! - [`find_diameter`] / [`find_radius`] / [`find_center`] - eccentricity metrics
//! - [`planar_check`] / [`planar_reduction`] - edge-count planarity heuristic
//! - [`tree`] / [`is_tree`] - tree transform and detection
//! - [`cartesian`] - Cartesian product of two graphs
//!
//! ## Example
//!
//! ```rust
//! use graphx_core::{Edge, Graph, Node, find_radius, hamiltonian_path};
//!
//! let graph = Graph::from_edges(vec![
//!     Edge::new(1, Node::new(1), Node::new(2)),
//!     Edge::new(2, Node::new(2), Node::new(3)),
//!     Edge::new(3, Node::new(3), Node::new(1)),
//! ]);
//!
//! let (circuit, found) = hamiltonian_path(&graph, 1);
//! assert!(found);
//! assert_eq!(circuit.len(), 4);
//! assert_eq!(find_radius(&graph), 1);
//! ```

pub mod analysis;
pub mod error;
pub mod eulerian;
pub mod graph;
pub mod hamiltonian;
pub mod matrix;
pub mod paths;
pub mod product;

mod topology;

pub use analysis::{
    eccentricity, find_center, find_diameter, find_radius, is_tree, planar_check, planar_reduction, tree,
    DISCONNECTED,
};
pub use error::{Error, Result};
pub use eulerian::eulerian_cycle;
pub use graph::{Angle, Edge, EdgeId, Graph, GraphId, Node, NodeId, NodeShape};
pub use hamiltonian::hamiltonian_path;
pub use matrix::{adjacency_matrix, incidence_matrix, AdjacencyMatrix, IncidenceMatrix};
pub use paths::{all_paths, all_shortest_paths, shortest_path};
pub use product::cartesian;
