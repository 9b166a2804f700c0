//! Exhaustive path search.
//!
//! This is not Dijkstra. [`all_shortest_paths`] runs a depth-first search that
//! remembers, per node, the cheapest cost at which the node has been entered
//! and only re-enters a node when the current path is no more expensive. Every
//! arrival at the destination that does not exceed the cheapest arrival so far
//! is recorded, and the recorded paths are finally filtered down to those as
//! long as the *last* recorded one.
//!
//! All search state lives in a search context created per call, so
//! concurrent searches over the same graph never observe each other.

use tracing::debug;

use crate::graph::{Graph, Node, NodeId};
use crate::topology::Topology;

/// Cost of a node that has not been entered yet.
const UNVISITED: usize = usize::MAX;

struct SearchContext<'a> {
    topology: &'a Topology,
    target: NodeId,
    best: Vec<usize>,
    path: Vec<usize>,
    candidates: Vec<Vec<usize>>,
    shortest: usize,
}

impl<'a> SearchContext<'a> {
    fn new(topology: &'a Topology, start: usize, target: NodeId) -> Self {
        Self {
            topology,
            target,
            best: vec![UNVISITED; topology.len()],
            path: vec![start],
            candidates: Vec::new(),
            shortest: UNVISITED,
        }
    }

    fn search(&mut self, current: usize, cost: usize) {
        if self.topology.nodes[current].id == self.target {
            if self.shortest >= cost {
                self.candidates.push(self.path.clone());
                self.shortest = cost;
            }
            return;
        }

        let cost = cost + 1;
        let topology = self.topology;
        for &next in &topology.out[current] {
            if self.best[next] >= cost {
                self.best[next] = cost;
                self.path.push(next);
                self.search(next, cost);
                self.path.pop();
            }
        }
    }

    /// Candidates as long as the last recorded one.
    fn into_shortest(self) -> Vec<Vec<usize>> {
        let Some(last_len) = self.candidates.last().map(Vec::len) else {
            return Vec::new();
        };
        self.candidates
            .into_iter()
            .filter(|path| path.len() == last_len)
            .collect()
    }
}

/// Runs the exhaustive search on a prebuilt topology and returns the
/// surviving candidates as node positions.
pub(crate) fn search_shortest(topology: &Topology, start: usize, to: NodeId) -> Vec<Vec<usize>> {
    let mut ctx = SearchContext::new(topology, start, to);
    ctx.search(start, 0);
    debug!(to, candidates = ctx.candidates.len(), "shortest path search finished");
    ctx.into_shortest()
}

pub(crate) fn start_position(graph: &Graph, topology: &Topology, from: NodeId) -> Option<usize> {
    let start = graph.resolve_node(from)?;
    topology.position(start)
}

/// Every minimal path from `from` to `to` found by the exhaustive search.
/// Empty when the destination is unreachable or either node is unknown.
pub fn all_shortest_paths(graph: &Graph, from: NodeId, to: NodeId) -> Vec<Vec<Node>> {
    let topology = Topology::directed(graph);
    let Some(start) = start_position(graph, &topology, from) else {
        return Vec::new();
    };

    search_shortest(&topology, start, to)
        .iter()
        .map(|path| topology.to_nodes(path))
        .collect()
}

/// First of [`all_shortest_paths`], or an empty sequence.
pub fn shortest_path(graph: &Graph, from: NodeId, to: NodeId) -> Vec<Node> {
    all_shortest_paths(graph, from, to)
        .into_iter()
        .next()
        .unwrap_or_default()
}

/// Every simple path from `from` to `to`, without any length filtering.
pub fn all_paths(graph: &Graph, from: NodeId, to: NodeId) -> Vec<Vec<Node>> {
    let topology = Topology::directed(graph);
    let Some(start) = start_position(graph, &topology, from) else {
        return Vec::new();
    };

    let mut on_path = vec![false; topology.len()];
    let mut path = vec![start];
    let mut found = Vec::new();
    on_path[start] = true;
    enumerate(&topology, start, to, &mut on_path, &mut path, &mut found);
    debug!(from, to, paths = found.len(), "path enumeration finished");

    found
}

fn enumerate(
    topology: &Topology,
    current: usize,
    target: NodeId,
    on_path: &mut [bool],
    path: &mut Vec<usize>,
    found: &mut Vec<Vec<Node>>,
) {
    if topology.nodes[current].id == target {
        found.push(topology.to_nodes(path));
        return;
    }

    for &next in &topology.out[current] {
        if on_path[next] {
            continue;
        }
        on_path[next] = true;
        path.push(next);
        enumerate(topology, next, target, on_path, path, found);
        path.pop();
        on_path[next] = false;
    }
}
