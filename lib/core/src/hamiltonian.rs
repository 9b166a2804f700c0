// Backtracking search for a Hamiltonian circuit
use ahash::{AHashMap, AHashSet};
use tracing::debug;

use crate::graph::{Graph, Node, NodeId};

/// Searches for a walk that starts at `origin`, visits every node exactly
/// once and returns to `origin`.
///
/// Adjacency is built by node id and ignores edge direction. The destination
/// of the search is the origin itself, so what is found is a circuit: the
/// origin may only be re-entered as the final step, once every other node has
/// been visited. Returns the node sequence (origin first and last) and whether
/// one was found; the sequence is empty when none exists.
///
/// Exponential in the worst case.
pub fn hamiltonian_path(graph: &Graph, origin: NodeId) -> (Vec<Node>, bool) {
    let adjacency = id_adjacency(graph);
    if !adjacency.contains_key(&origin) {
        return (Vec::new(), false);
    }

    let destination = origin;
    let total = adjacency.len();
    let mut visited: AHashSet<NodeId> = AHashSet::with_capacity(total);
    let mut path = vec![origin];
    // cursor into the neighbour list of each node on `path`
    let mut cursors = vec![0usize];
    visited.insert(origin);

    while let Some(&cursor) = cursors.last() {
        let depth = cursors.len() - 1;
        let current = path[depth];
        let neighbours = &adjacency[&current];

        if cursor == neighbours.len() {
            cursors.pop();
            if let Some(node) = path.pop() {
                visited.remove(&node);
            }
            continue;
        }
        cursors[depth] += 1;

        let next = neighbours[cursor];
        if next == destination {
            if visited.len() == total {
                path.push(next);
                debug!(origin, length = path.len(), "hamiltonian circuit found");
                return (to_nodes(graph, &path), true);
            }
            continue;
        }
        if visited.insert(next) {
            path.push(next);
            cursors.push(0);
        }
    }

    debug!(origin, "no hamiltonian circuit");
    (Vec::new(), false)
}

fn id_adjacency(graph: &Graph) -> AHashMap<NodeId, Vec<NodeId>> {
    let mut adjacency: AHashMap<NodeId, Vec<NodeId>> = AHashMap::new();
    for edge in &graph.edges {
        let (a, b) = (edge.from.id, edge.to.id);
        for (from, to) in [(a, b), (b, a)] {
            let list = adjacency.entry(from).or_default();
            if !list.contains(&to) {
                list.push(to);
            }
        }
    }
    adjacency
}

fn to_nodes(graph: &Graph, ids: &[NodeId]) -> Vec<Node> {
    ids.iter()
        .filter_map(|&id| graph.resolve_node(id).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    fn n(id: u64) -> Node {
        Node::new(id)
    }

    fn ids(path: &[Node]) -> Vec<u64> {
        path.iter().map(|n| n.id).collect()
    }

    #[test]
    fn test_triangle_circuit() {
        let first = Node::new(1).with_name("First").with_color("BLue");
        let graph = Graph::from_edges(vec![
            Edge::new(1, first.clone(), n(2)),
            Edge::new(2, n(2), n(3)),
            Edge::new(3, n(3), first.clone()),
        ]);

        let (path, found) = hamiltonian_path(&graph, 1);
        assert!(found);
        assert_eq!(path, vec![first.clone(), n(2), n(3), first]);
    }

    #[test]
    fn test_directed_triangle_ignores_direction() {
        let graph = Graph::from_edges(vec![
            Edge::directed(1, n(1), n(2)),
            Edge::directed(2, n(2), n(3)),
            Edge::directed(3, n(3), n(1)),
        ]);

        let (path, found) = hamiltonian_path(&graph, 1);
        assert!(found);
        assert_eq!(ids(&path), vec![1, 2, 3, 1]);
    }

    #[test]
    fn test_star_has_no_circuit() {
        let graph = Graph::from_edges(vec![
            Edge::new(1, n(1), n(2)),
            Edge::new(2, n(1), n(3)),
            Edge::new(3, n(1), n(4)),
        ]);

        let (path, found) = hamiltonian_path(&graph, 1);
        assert!(!found);
        assert!(path.is_empty());
    }

    #[test]
    fn test_backtracks_out_of_dead_end() {
        // 1-2, 1-3, 2-3, 2-4, 3-4: the first branch 1-2-3 must be abandoned
        let graph = Graph::from_edges(vec![
            Edge::new(1, n(1), n(2)),
            Edge::new(2, n(1), n(3)),
            Edge::new(3, n(2), n(3)),
            Edge::new(4, n(2), n(4)),
            Edge::new(5, n(3), n(4)),
        ]);

        let (path, found) = hamiltonian_path(&graph, 1);
        assert!(found);
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), path.last());
        let mut inner = ids(&path[..4]);
        inner.sort_unstable();
        assert_eq!(inner, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_unknown_origin() {
        let graph = Graph::from_edges(vec![Edge::new(1, n(1), n(2))]);
        assert_eq!(hamiltonian_path(&graph, 7), (Vec::new(), false));
    }
}
