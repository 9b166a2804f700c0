use graphx_core::{Graph, GraphId, Result};

/// Whole-graph snapshot storage.
///
/// Implementations hand out owned copies: callers never hold a reference into
/// the store while running an algorithm.
pub trait GraphRepository: Send + Sync {
    /// Stores `graph` under a freshly generated non-zero id, overwriting
    /// whatever id the caller supplied, and returns that id.
    fn create_graph(&self, graph: Graph) -> Result<GraphId>;

    /// Fails with `GraphNotFound` when nothing is stored under `id`.
    fn graph(&self, id: GraphId) -> Result<Graph>;

    /// Every stored graph, ordered by id.
    fn list(&self) -> Vec<Graph>;

    /// Stores `graph` under `graph.id`, replacing any previous snapshot.
    fn update_graph(&self, graph: Graph) -> Result<()>;

    /// Returns whether a graph was removed.
    fn delete_graph(&self, id: GraphId) -> Result<bool>;
}
