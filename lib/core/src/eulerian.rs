// Eulerian circuit via Hierholzer's algorithm
use std::collections::BTreeMap;

use ahash::AHashMap;
use tracing::debug;

use crate::graph::{Graph, Node, NodeId};

/// Finds a closed walk from `start` that uses every edge once.
///
/// Edges are treated as undirected. Any node of odd degree, or a start node
/// that no edge touches, reports not-found straight away. Parallel edges are
/// each walked once and a self-loop counts as a single edge. Connectivity is
/// not checked: on a disconnected graph with only even degrees the walk
/// covers just the component of `start` and is still reported as found.
pub fn eulerian_cycle(graph: &Graph, start: NodeId) -> (Vec<Node>, bool) {
    let mut degree: AHashMap<NodeId, usize> = AHashMap::new();
    // node -> neighbour -> number of unused edges between them
    let mut unused: AHashMap<NodeId, BTreeMap<NodeId, usize>> = AHashMap::new();
    for edge in &graph.edges {
        let (a, b) = (edge.from.id, edge.to.id);
        *degree.entry(a).or_default() += 1;
        *degree.entry(b).or_default() += 1;
        *unused.entry(a).or_default().entry(b).or_default() += 1;
        if a != b {
            *unused.entry(b).or_default().entry(a).or_default() += 1;
        }
    }

    if !degree.contains_key(&start) {
        return (Vec::new(), false);
    }
    if let Some((&node, _)) = degree.iter().find(|&(_, &d)| d % 2 == 1) {
        debug!(start, odd = node, "eulerian cycle impossible: odd degree");
        return (Vec::new(), false);
    }

    let mut stack = vec![start];
    let mut tour = Vec::with_capacity(graph.edges.len() + 1);
    while let Some(&top) = stack.last() {
        let next = unused
            .get(&top)
            .and_then(|neighbours| neighbours.keys().next().copied());
        match next {
            Some(next) => {
                consume(&mut unused, top, next);
                if next != top {
                    consume(&mut unused, next, top);
                }
                stack.push(next);
            }
            None => {
                stack.pop();
                tour.push(top);
            }
        }
    }

    debug!(start, length = tour.len(), "eulerian cycle built");
    let nodes = tour
        .iter()
        .filter_map(|&id| graph.resolve_node(id).cloned())
        .collect();
    (nodes, true)
}

fn consume(unused: &mut AHashMap<NodeId, BTreeMap<NodeId, usize>>, from: NodeId, to: NodeId) {
    let Some(neighbours) = unused.get_mut(&from) else {
        return;
    };
    if let Some(count) = neighbours.get_mut(&to) {
        *count -= 1;
        if *count == 0 {
            neighbours.remove(&to);
        }
    }
}
