//! # graphx
//!
//! A graph-theory engine behind a small REST service.
//!
//! Graphs are posted as JSON snapshots, stored in memory under generated ids,
//! and queried for matrices, paths, circuits and structural metrics.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install graphx
//! graphx --host 127.0.0.1 --http-port 8080
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use graphx::prelude::*;
//!
//! let graph = Graph::from_edges(vec![
//!     Edge::new(1, Node::new(1), Node::new(2)),
//!     Edge::new(2, Node::new(2), Node::new(3)),
//!     Edge::new(3, Node::new(3), Node::new(4)),
//! ]);
//!
//! assert!(is_tree(&graph));
//! assert_eq!(find_diameter(&graph), 3);
//! assert_eq!(shortest_path(&graph, 1, 4).len(), 4);
//! ```
//!
//! ## Crate Structure
//!
//! - [`graphx-core`](https://docs.rs/graphx-core) - Graph model and algorithms
//! - [`graphx-storage`](https://docs.rs/graphx-storage) - In-memory graph store
//! - [`graphx-api`](https://docs.rs/graphx-api) - Service layer and REST API

// Re-export core types
pub use graphx_core::{
    adjacency_matrix, all_paths, all_shortest_paths, cartesian, eccentricity, eulerian_cycle,
    find_center, find_diameter, find_radius, hamiltonian_path, incidence_matrix, is_tree,
    planar_check, planar_reduction, shortest_path, tree, AdjacencyMatrix, Angle, Edge, EdgeId,
    Error, Graph, GraphId, IncidenceMatrix, Node, NodeId, NodeShape, Result, DISCONNECTED,
};

// Re-export storage
pub use graphx_storage::{GraphRepository, GraphStore};

// Re-export API
pub use graphx_api::{GraphService, RestApi};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Edge, Graph, GraphId, Node, NodeId,
        Error, Result,
        GraphRepository, GraphStore,
        GraphService, RestApi,
        adjacency_matrix, incidence_matrix,
        shortest_path, all_shortest_paths, all_paths,
        hamiltonian_path, eulerian_cycle,
        find_diameter, find_radius, find_center,
        planar_check, planar_reduction, tree, is_tree,
        cartesian,
    };
}
