// Graph model - nodes, edges and whole-graph snapshots
use ahash::AHashSet;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

pub type NodeId = u64;
pub type EdgeId = u64;
pub type GraphId = u64;

/// Display shape tag of a node (`"circle"`, `"square"`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeShape(pub String);

impl From<&str> for NodeShape {
    fn from(s: &str) -> Self {
        NodeShape(s.to_string())
    }
}

/// A vertex.
///
/// Equality and hashing cover every field, not just `id`: two nodes sharing an
/// id but differing in name, color, shape or position are distinct vertices
/// wherever nodes are used as map keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(default)]
pub struct Node {
    pub id: NodeId,
    pub x: u64,
    pub y: u64,
    pub name: String,
    pub shape: NodeShape,
    pub color: String,
}

impl Node {
    #[inline]
    #[must_use]
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_shape(mut self, shape: impl Into<NodeShape>) -> Self {
        self.shape = shape.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn at(mut self, x: u64, y: u64) -> Self {
        self.x = x;
        self.y = y;
        self
    }
}

/// Rendering hint for an edge end. Not used by any algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(default)]
pub struct Angle {
    pub sin: OrderedFloat<f64>,
    pub cos: OrderedFloat<f64>,
}

impl Angle {
    #[inline]
    #[must_use]
    pub fn new(sin: f64, cos: f64) -> Self {
        Self {
            sin: OrderedFloat(sin),
            cos: OrderedFloat(cos),
        }
    }
}

/// An edge between two nodes.
///
/// Endpoints are copies of the nodes as they were when the edge was drawn;
/// later edits to a node in [`Graph::nodes`] are not reflected here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(default)]
pub struct Edge {
    pub id: EdgeId,
    pub name: String,
    pub color: String,
    #[serde(rename = "vertex1")]
    pub from: Node,
    #[serde(rename = "vertex2")]
    pub to: Node,
    pub angle12: Angle,
    pub angle21: Angle,
    #[serde(rename = "isDirected")]
    pub is_directed: bool,
}

impl Edge {
    /// Undirected edge.
    #[inline]
    #[must_use]
    pub fn new(id: EdgeId, from: Node, to: Node) -> Self {
        Self {
            id,
            from,
            to,
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn directed(id: EdgeId, from: Node, to: Node) -> Self {
        Self {
            is_directed: true,
            ..Self::new(id, from, to)
        }
    }

    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// A whole graph snapshot as produced by the store and consumed by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Graph {
    pub id: GraphId,
    pub name: String,
    #[serde(rename = "arcs")]
    pub edges: Vec<Edge>,
    #[serde(rename = "vertexes")]
    pub nodes: Vec<Node>,
}

impl Graph {
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn with_nodes(mut self, nodes: Vec<Node>) -> Self {
        self.nodes = nodes;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_edges(mut self, edges: Vec<Edge>) -> Self {
        self.edges = edges;
        self
    }

    /// Builds a graph whose node list is the edge endpoints, for callers that
    /// only care about topology.
    #[must_use]
    pub fn from_edges(edges: Vec<Edge>) -> Self {
        let graph = Self::default().with_edges(edges);
        let nodes = graph.edge_nodes();
        graph.with_nodes(nodes)
    }

    /// The node set the algorithms work on: every edge endpoint, deduplicated
    /// by whole value, in order of first appearance (`from` before `to`).
    /// Nodes that appear in [`Graph::nodes`] but in no edge are not included.
    pub fn edge_nodes(&self) -> Vec<Node> {
        let mut seen = AHashSet::with_capacity(self.edges.len() * 2);
        let mut nodes = Vec::new();
        for edge in &self.edges {
            for node in [&edge.from, &edge.to] {
                if seen.insert(node) {
                    nodes.push(node.clone());
                }
            }
        }
        nodes
    }

    /// Resolves a node id to the value the algorithms start from: the `from`
    /// endpoint of the first edge leaving a node with that id, otherwise the
    /// `to` endpoint of the first edge reaching one.
    pub fn resolve_node(&self, id: NodeId) -> Option<&Node> {
        self.edges
            .iter()
            .map(|e| &e.from)
            .find(|n| n.id == id)
            .or_else(|| self.edges.iter().map(|e| &e.to).find(|n| n.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_equality_covers_all_fields() {
        let plain = Node::new(1);
        let named = Node::new(1).with_name("First").with_color("Blue");
        assert_ne!(plain, named);
        assert_eq!(named, Node::new(1).with_name("First").with_color("Blue"));
    }

    #[test]
    fn test_edge_nodes_ignores_isolated_nodes() {
        let graph = Graph::new("g")
            .with_nodes(vec![Node::new(1), Node::new(2), Node::new(9)])
            .with_edges(vec![Edge::new(1, Node::new(1), Node::new(2))]);

        assert_eq!(graph.edge_nodes(), vec![Node::new(1), Node::new(2)]);
    }

    #[test]
    fn test_edge_nodes_keeps_same_id_variants_apart() {
        let graph = Graph::from_edges(vec![
            Edge::new(1, Node::new(1), Node::new(2)),
            Edge::new(2, Node::new(1).with_name("First"), Node::new(2)),
        ]);

        assert_eq!(graph.edge_nodes().len(), 3);
    }

    #[test]
    fn test_resolve_node_prefers_from_endpoint() {
        let first = Node::new(1).with_name("First");
        let graph = Graph::from_edges(vec![
            Edge::new(1, Node::new(2), Node::new(1)),
            Edge::new(2, first.clone(), Node::new(3)),
        ]);

        assert_eq!(graph.resolve_node(1), Some(&first));
        assert_eq!(graph.resolve_node(3), Some(&Node::new(3)));
        assert_eq!(graph.resolve_node(7), None);
    }

    #[test]
    fn test_json_field_names() {
        let edge = Edge::directed(4, Node::new(1), Node::new(2)).with_name("a");
        let graph = Graph::from_edges(vec![edge]);
        let json = serde_json::to_value(&graph).unwrap();

        assert!(json.get("arcs").is_some());
        assert!(json.get("vertexes").is_some());
        let arc = &json["arcs"][0];
        assert_eq!(arc["isDirected"], serde_json::json!(true));
        assert_eq!(arc["vertex1"]["id"], serde_json::json!(1));
        assert_eq!(arc["vertex2"]["id"], serde_json::json!(2));
        assert_eq!(arc["angle12"]["sin"], serde_json::json!(0.0));
    }

    #[test]
    fn test_display_attributes_serialize() {
        let node = Node::new(3).with_shape("square").at(4, 5);
        let edge = Edge {
            angle12: Angle::new(0.5, -0.25),
            ..Edge::new(1, node.clone(), Node::new(4))
        };
        let json = serde_json::to_value(&edge).unwrap();

        assert_eq!(json["vertex1"]["shape"], serde_json::json!("square"));
        assert_eq!(json["vertex1"]["x"], serde_json::json!(4));
        assert_eq!(json["angle12"]["cos"], serde_json::json!(-0.25));
    }

    #[test]
    fn test_missing_fields_decode_to_zero_values() {
        let graph: Graph = serde_json::from_str(
            r#"{"name": "g", "arcs": [{"vertex1": {"id": 1}, "vertex2": {"id": 2}}]}"#,
        )
        .unwrap();

        assert_eq!(graph.id, 0);
        assert!(graph.nodes.is_empty());
        assert!(!graph.edges[0].is_directed);
        assert_eq!(graph.edges[0].from, Node::new(1));
    }
}
