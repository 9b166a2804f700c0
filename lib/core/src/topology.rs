// Index-based adjacency over the edge-derived node set
use ahash::AHashMap;

use crate::graph::{Graph, Node};

/// Adjacency lists over [`Graph::edge_nodes`], addressed by position.
///
/// `out[i]` holds the neighbours of `nodes[i]` sorted by position and without
/// duplicates, so parallel edges collapse to one adjacency exactly as they do
/// in a 0/1 adjacency matrix.
#[derive(Debug, Clone)]
pub(crate) struct Topology {
    pub nodes: Vec<Node>,
    pub out: Vec<Vec<usize>>,
}

impl Topology {
    /// Directed edges contribute `from -> to` only.
    pub fn directed(graph: &Graph) -> Self {
        Self::build(graph, false)
    }

    /// Every edge contributes both directions.
    pub fn undirected(graph: &Graph) -> Self {
        Self::build(graph, true)
    }

    fn build(graph: &Graph, ignore_direction: bool) -> Self {
        let nodes = graph.edge_nodes();
        let index: AHashMap<&Node, usize> = nodes.iter().enumerate().map(|(i, n)| (n, i)).collect();

        let mut out = vec![Vec::new(); nodes.len()];
        for edge in &graph.edges {
            let from = index[&edge.from];
            let to = index[&edge.to];
            out[from].push(to);
            if ignore_direction || !edge.is_directed {
                out[to].push(from);
            }
        }
        for list in &mut out {
            list.sort_unstable();
            list.dedup();
        }

        Self { nodes, out }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn position(&self, node: &Node) -> Option<usize> {
        self.nodes.iter().position(|n| n == node)
    }

    #[inline]
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.out[from].binary_search(&to).is_ok()
    }

    pub fn to_nodes(&self, path: &[usize]) -> Vec<Node> {
        path.iter().map(|&i| self.nodes[i].clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    #[test]
    fn test_parallel_edges_collapse() {
        let graph = Graph::from_edges(vec![
            Edge::new(1, Node::new(1), Node::new(2)),
            Edge::new(2, Node::new(2), Node::new(1)),
        ]);
        let topology = Topology::directed(&graph);

        assert_eq!(topology.out, vec![vec![1], vec![0]]);
    }

    #[test]
    fn test_direction_handling() {
        let graph = Graph::from_edges(vec![Edge::directed(1, Node::new(1), Node::new(2))]);

        let directed = Topology::directed(&graph);
        assert!(directed.has_edge(0, 1));
        assert!(!directed.has_edge(1, 0));

        let undirected = Topology::undirected(&graph);
        assert!(undirected.has_edge(1, 0));
    }
}
