use graphx_core::{Error, Graph, GraphId, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::repository::GraphRepository;

/// Attempts at drawing an unused id before giving up.
const MAX_ID_ATTEMPTS: usize = 16;

/// In-memory graph store shared between request handlers
#[derive(Clone, Default)]
pub struct GraphStore {
    graphs: Arc<RwLock<HashMap<GraphId, Graph>>>,
}

impl GraphStore {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.graphs.read().len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graphs.read().is_empty()
    }

    /// Non-zero id taken from the leading 32 bits of a random UUID.
    fn generate_id(graphs: &HashMap<GraphId, Graph>) -> Result<GraphId> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = GraphId::from(Uuid::new_v4().as_fields().0);
            if id != 0 && !graphs.contains_key(&id) {
                return Ok(id);
            }
        }
        Err(Error::Storage("could not allocate a graph id".to_string()))
    }
}

impl GraphRepository for GraphStore {
    fn create_graph(&self, mut graph: Graph) -> Result<GraphId> {
        let mut graphs = self.graphs.write();
        let id = Self::generate_id(&graphs)?;
        graph.id = id;
        debug!(graph = id, name = %graph.name, edges = graph.edges.len(), "graph created");
        graphs.insert(id, graph);
        Ok(id)
    }

    fn graph(&self, id: GraphId) -> Result<Graph> {
        self.graphs
            .read()
            .get(&id)
            .cloned()
            .ok_or(Error::GraphNotFound(id))
    }

    fn list(&self) -> Vec<Graph> {
        let mut all: Vec<Graph> = self.graphs.read().values().cloned().collect();
        all.sort_by_key(|g| g.id);
        all
    }

    fn update_graph(&self, graph: Graph) -> Result<()> {
        debug!(graph = graph.id, "graph updated");
        self.graphs.write().insert(graph.id, graph);
        Ok(())
    }

    fn delete_graph(&self, id: GraphId) -> Result<bool> {
        let removed = self.graphs.write().remove(&id).is_some();
        debug!(graph = id, removed, "graph deleted");
        Ok(removed)
    }
}
