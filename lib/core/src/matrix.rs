// Incidence and adjacency matrices keyed by whole node/edge values
use std::collections::HashMap;

use crate::graph::{Edge, Graph, Node};
use crate::topology::Topology;

/// Edge -> node -> {-1, 0, 1}. Dense over the edge-derived node set.
pub type IncidenceMatrix = HashMap<Edge, HashMap<Node, i8>>;

/// Node -> node -> {0, 1}. Dense over the edge-derived node set.
pub type AdjacencyMatrix = HashMap<Node, HashMap<Node, u8>>;

/// Builds the incidence matrix.
///
/// Directed edges mark `from` with +1 and `to` with -1; on a self-loop the +1
/// wins. Undirected edges mark both endpoints with +1.
pub fn incidence_matrix(graph: &Graph) -> IncidenceMatrix {
    let nodes = graph.edge_nodes();

    let mut matrix = IncidenceMatrix::with_capacity(graph.edges.len());
    for edge in &graph.edges {
        let row = nodes
            .iter()
            .map(|node| (node.clone(), incidence(edge, node)))
            .collect();
        matrix.insert(edge.clone(), row);
    }
    matrix
}

#[inline]
fn incidence(edge: &Edge, node: &Node) -> i8 {
    if edge.from == *node {
        1
    } else if edge.to == *node {
        if edge.is_directed {
            -1
        } else {
            1
        }
    } else {
        0
    }
}

/// Builds the adjacency matrix. Directed edges only connect `from -> to`.
pub fn adjacency_matrix(graph: &Graph) -> AdjacencyMatrix {
    let topology = Topology::directed(graph);

    let mut matrix = AdjacencyMatrix::with_capacity(topology.len());
    for (i, node) in topology.nodes.iter().enumerate() {
        let row = topology
            .nodes
            .iter()
            .enumerate()
            .map(|(j, other)| (other.clone(), u8::from(topology.has_edge(i, j))))
            .collect();
        matrix.insert(node.clone(), row);
    }
    matrix
}
