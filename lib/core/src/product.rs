// Cartesian product of two graphs
use ahash::AHashMap;
use tracing::debug;

use crate::graph::{Edge, Graph, Node, NodeId};

/// Builds the Cartesian product `g1 □ g2`.
///
/// Node `(i, j)` (positions in `g1.nodes` and `g2.nodes`) gets id
/// `i * |g2.nodes| + j`, x from the `g1` node and y from the `g2` node.
/// `(i, j)` and `(k, j)` are joined when an edge of `g1` connects nodes `i`
/// and `k`; `(i, j)` and `(i, l)` when an edge of `g2` connects `j` and `l`.
/// Each product edge is emitted once, from the endpoint with the smaller id.
/// Edge incidence is matched on node ids.
pub fn cartesian(g1: &Graph, g2: &Graph) -> Graph {
    let width = g2.nodes.len() as u64;
    let linear = |i: usize, j: usize| i as u64 * width + j as u64;

    let mut nodes = Vec::with_capacity(g1.nodes.len() * g2.nodes.len());
    for (i, a) in g1.nodes.iter().enumerate() {
        for (j, b) in g2.nodes.iter().enumerate() {
            nodes.push(Node {
                id: linear(i, j),
                x: a.x,
                y: b.y,
                name: format!("({}, {})", a.name, b.name),
                shape: a.shape.clone(),
                color: a.color.clone(),
            });
        }
    }

    let incident1 = incident_edges(g1);
    let incident2 = incident_edges(g2);

    let mut edges = Vec::new();
    for (i, a) in g1.nodes.iter().enumerate() {
        for (j, b) in g2.nodes.iter().enumerate() {
            let source = linear(i, j);
            let across_g1 = incident1.get(&a.id).into_iter().flatten().map(|&(k, edge)| (linear(k, j), edge));
            let across_g2 = incident2.get(&b.id).into_iter().flatten().map(|&(l, edge)| (linear(i, l), edge));

            for (target, factor) in across_g1.chain(across_g2) {
                if source > target {
                    continue;
                }
                edges.push(Edge {
                    id: edges.len() as u64 + 1,
                    name: factor.name.clone(),
                    color: factor.color.clone(),
                    from: nodes[source as usize].clone(),
                    to: nodes[target as usize].clone(),
                    ..Edge::default()
                });
            }
        }
    }

    debug!(nodes = nodes.len(), edges = edges.len(), "cartesian product built");
    Graph {
        id: 0,
        name: format!("{} x {}", g1.name, g2.name),
        edges,
        nodes,
    }
}

/// Node id -> (position of the opposite endpoint, edge) for every edge whose
/// endpoints are both listed in `graph.nodes`.
fn incident_edges(graph: &Graph) -> AHashMap<NodeId, Vec<(usize, &Edge)>> {
    let mut position: AHashMap<NodeId, usize> = AHashMap::with_capacity(graph.nodes.len());
    for (i, node) in graph.nodes.iter().enumerate() {
        position.entry(node.id).or_insert(i);
    }

    let mut incident: AHashMap<NodeId, Vec<(usize, &Edge)>> = AHashMap::new();
    for edge in &graph.edges {
        let (Some(&from), Some(&to)) = (position.get(&edge.from.id), position.get(&edge.to.id)) else {
            continue;
        };
        incident.entry(edge.from.id).or_default().push((to, edge));
        if edge.from.id != edge.to.id {
            incident.entry(edge.to.id).or_default().push((from, edge));
        }
    }
    incident
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::is_tree;

    fn path_graph(name: &str, len: u64) -> Graph {
        let nodes: Vec<Node> = (1..=len).map(|i| Node::new(i).at(i * 10, i * 100)).collect();
        let edges = nodes
            .windows(2)
            .enumerate()
            .map(|(i, pair)| Edge::new(i as u64 + 1, pair[0].clone(), pair[1].clone()))
            .collect();
        Graph::new(name).with_nodes(nodes).with_edges(edges)
    }

    #[test]
    fn test_product_node_ids_and_coordinates() {
        let product = cartesian(&path_graph("a", 2), &path_graph("b", 3));

        assert_eq!(product.nodes.len(), 6);
        let ids: Vec<u64> = product.nodes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
        // node (1, 2): second node of a, third node of b
        assert_eq!(product.nodes[5].x, 20);
        assert_eq!(product.nodes[5].y, 300);
        assert_eq!(product.name, "a x b");
    }

    #[test]
    fn test_p2_times_p3_is_a_ladder() {
        let product = cartesian(&path_graph("a", 2), &path_graph("b", 3));

        // |E| = |E1||V2| + |V1||E2| = 1*3 + 2*2
        assert_eq!(product.edges.len(), 7);
        let mut pairs: Vec<(u64, u64)> = product.edges.iter().map(|e| (e.from.id, e.to.id)).collect();
        pairs.sort_unstable();
        assert_eq!(pairs, vec![(0, 1), (0, 3), (1, 2), (1, 4), (2, 5), (3, 4), (4, 5)]);
        assert!(product.edges.iter().all(|e| e.from.id <= e.to.id && !e.is_directed));
    }

    #[test]
    fn test_product_with_single_node_is_a_copy_of_topology() {
        let single = Graph::new("k1").with_nodes(vec![Node::new(7)]);
        let product = cartesian(&path_graph("p", 4), &single);

        assert_eq!(product.nodes.len(), 4);
        assert_eq!(product.edges.len(), 3);
        assert!(is_tree(&product));
    }

    #[test]
    fn test_product_with_empty_graph() {
        let product = cartesian(&path_graph("p", 3), &Graph::default());
        assert!(product.nodes.is_empty());
        assert!(product.edges.is_empty());
    }
}
