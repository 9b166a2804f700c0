// Structural metrics: eccentricity, diameter/radius/center, planarity, trees
use tracing::debug;

use crate::graph::{Edge, Graph, Node};
use crate::paths::{search_shortest, start_position};
use crate::topology::Topology;

/// Eccentricity reported when some node cannot be reached. Indistinguishable
/// from a genuine eccentricity of zero.
pub const DISCONNECTED: u64 = 0;

/// Largest shortest-path distance (in edges) from `node` to any other node of
/// the edge-derived node set, or [`DISCONNECTED`] if any of them is
/// unreachable.
pub fn eccentricity(graph: &Graph, node: &Node) -> u64 {
    let topology = Topology::directed(graph);
    eccentricity_in(graph, &topology, node)
}

fn eccentricity_in(graph: &Graph, topology: &Topology, node: &Node) -> u64 {
    let Some(start) = start_position(graph, topology, node.id) else {
        return DISCONNECTED;
    };

    let mut max = 0;
    for other in topology.nodes.iter().filter(|other| *other != node) {
        let Some(path) = search_shortest(topology, start, other.id).into_iter().next() else {
            return DISCONNECTED;
        };
        max = max.max(path.len() as u64 - 1);
    }
    max
}

fn eccentricities(graph: &Graph) -> Vec<(Node, u64)> {
    let topology = Topology::directed(graph);
    let mut all = Vec::with_capacity(topology.len());
    for node in &topology.nodes {
        let ecc = eccentricity_in(graph, &topology, node);
        if ecc == DISCONNECTED {
            debug!(node = node.id, "graph is disconnected");
            return Vec::new();
        }
        all.push((node.clone(), ecc));
    }
    all
}

/// Maximum eccentricity, or [`DISCONNECTED`].
pub fn find_diameter(graph: &Graph) -> u64 {
    eccentricities(graph)
        .iter()
        .map(|(_, ecc)| *ecc)
        .max()
        .unwrap_or(DISCONNECTED)
}

/// Minimum eccentricity, or [`DISCONNECTED`].
pub fn find_radius(graph: &Graph) -> u64 {
    eccentricities(graph)
        .iter()
        .map(|(_, ecc)| *ecc)
        .min()
        .unwrap_or(DISCONNECTED)
}

/// Nodes whose eccentricity equals the radius. Empty when disconnected.
pub fn find_center(graph: &Graph) -> Vec<Node> {
    let all = eccentricities(graph);
    let Some(radius) = all.iter().map(|(_, ecc)| *ecc).min() else {
        return Vec::new();
    };
    all.into_iter()
        .filter(|(_, ecc)| *ecc == radius)
        .map(|(node, _)| node)
        .collect()
}

/// `3n - 6` over the edge-derived node count; negative below three nodes.
#[inline]
fn planar_edge_bound(graph: &Graph) -> i64 {
    3 * graph.edge_nodes().len() as i64 - 6
}

/// Necessary condition for planarity only: `|E| <= 3|V| - 6`.
///
/// Not a planarity test. Non-planar graphs that satisfy the bound (K3,3 has
/// 9 edges against a bound of 12) are reported as planar, and graphs with
/// fewer than three nodes never satisfy it.
pub fn planar_check(graph: &Graph) -> bool {
    graph.edges.len() as i64 <= planar_edge_bound(graph)
}

/// Returns the graph unchanged if [`planar_check`] passes, otherwise a copy
/// with trailing edges dropped until the edge count meets the bound computed
/// on the input. The node list is kept as is.
pub fn planar_reduction(graph: &Graph) -> Graph {
    let bound = planar_edge_bound(graph);
    let mut reduced = graph.clone();
    if graph.edges.len() as i64 > bound {
        reduced.edges.truncate(bound.max(0) as usize);
        debug!(graph = graph.id, dropped = graph.edges.len() - reduced.edges.len(), "planar reduction");
    }
    reduced
}

/// Rewrites the graph into a path over its first five nodes.
///
/// The first four edges keep their identity and display attributes but are
/// reconnected as `n0-n1`, `n1-n2`, `n2-n3`, `n3-n4`; the result holds just
/// those nodes and edges. A graph with fewer nodes or edges yields a shorter
/// path instead of failing.
pub fn tree(graph: &Graph) -> Graph {
    let nodes: Vec<Node> = graph.nodes.iter().take(5).cloned().collect();
    let edges = graph
        .edges
        .iter()
        .take(4)
        .zip(nodes.windows(2))
        .map(|(edge, pair)| Edge {
            from: pair[0].clone(),
            to: pair[1].clone(),
            ..edge.clone()
        })
        .collect();

    Graph {
        id: graph.id,
        name: graph.name.clone(),
        edges,
        nodes,
    }
}

/// True iff the edge-derived node set is connected and acyclic, edges taken
/// as undirected. A graph without edges is not a tree.
pub fn is_tree(graph: &Graph) -> bool {
    let topology = Topology::undirected(graph);
    let Some(root) = (0..topology.len()).min_by_key(|&i| topology.nodes[i].id) else {
        return false;
    };

    let mut visited = vec![false; topology.len()];
    visited[root] = true;
    // (node, parent, next neighbour index)
    let mut stack: Vec<(usize, Option<usize>, usize)> = vec![(root, None, 0)];
    while let Some(frame) = stack.last_mut() {
        let (node, parent, cursor) = *frame;
        let Some(&next) = topology.out[node].get(cursor) else {
            stack.pop();
            continue;
        };
        frame.2 += 1;

        if !visited[next] {
            visited[next] = true;
            stack.push((next, Some(node), 0));
        } else if Some(next) != parent {
            debug!(graph = graph.id, "cycle found");
            return false;
        }
    }

    visited.iter().all(|&v| v)
}
