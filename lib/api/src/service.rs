// Graph service - resolves graph ids through the repository and runs the engine
use graphx_core::{
    AdjacencyMatrix, Error, Graph, GraphId, IncidenceMatrix, Node, NodeId, Result,
};
use graphx_storage::GraphRepository;
use std::sync::Arc;
use tracing::debug;

/// Graph CRUD plus one method per algorithm, keyed by graph id.
///
/// Every algorithm call works on a snapshot cloned out of the repository, so
/// no store lock is held while the engine runs.
#[derive(Clone)]
pub struct GraphService {
    repo: Arc<dyn GraphRepository>,
}

impl GraphService {
    #[inline]
    #[must_use]
    pub fn new(repo: Arc<dyn GraphRepository>) -> Self {
        Self { repo }
    }

    pub fn create_graph(&self, graph: Graph) -> Result<GraphId> {
        self.repo.create_graph(graph)
    }

    #[inline]
    pub fn graph(&self, id: GraphId) -> Result<Graph> {
        self.repo.graph(id)
    }

    #[inline]
    pub fn list(&self) -> Vec<Graph> {
        self.repo.list()
    }

    /// Stores `graph` under `id`; the id inside the body is ignored. Any
    /// non-zero id is accepted, creating the entry if it is missing. Id 0 is
    /// never allocated and reports `GraphNotFound`.
    pub fn update_graph(&self, id: GraphId, mut graph: Graph) -> Result<()> {
        if id == 0 {
            return Err(Error::GraphNotFound(id));
        }
        graph.id = id;
        self.repo.update_graph(graph)
    }

    pub fn delete_graph(&self, id: GraphId) -> Result<bool> {
        self.repo.delete_graph(id)
    }

    pub fn incidence_matrix(&self, id: GraphId) -> Result<IncidenceMatrix> {
        debug!(graph = id, "incidence matrix");
        Ok(graphx_core::incidence_matrix(&self.graph(id)?))
    }

    pub fn adjacency_matrix(&self, id: GraphId) -> Result<AdjacencyMatrix> {
        debug!(graph = id, "adjacency matrix");
        Ok(graphx_core::adjacency_matrix(&self.graph(id)?))
    }

    pub fn shortest_path(&self, id: GraphId, from: NodeId, to: NodeId) -> Result<Vec<Node>> {
        debug!(graph = id, from, to, "shortest path");
        Ok(graphx_core::shortest_path(&self.graph(id)?, from, to))
    }

    pub fn all_shortest_paths(&self, id: GraphId, from: NodeId, to: NodeId) -> Result<Vec<Vec<Node>>> {
        debug!(graph = id, from, to, "all shortest paths");
        Ok(graphx_core::all_shortest_paths(&self.graph(id)?, from, to))
    }

    pub fn all_paths(&self, id: GraphId, from: NodeId, to: NodeId) -> Result<Vec<Vec<Node>>> {
        debug!(graph = id, from, to, "all paths");
        Ok(graphx_core::all_paths(&self.graph(id)?, from, to))
    }

    /// Fails with `PathNotFound` when no Hamiltonian circuit starts at `start`.
    pub fn hamiltonian_path(&self, id: GraphId, start: NodeId) -> Result<Vec<Node>> {
        let (path, found) = graphx_core::hamiltonian_path(&self.graph(id)?, start);
        debug!(graph = id, start, found, "hamiltonian path");
        if found {
            Ok(path)
        } else {
            Err(Error::PathNotFound(start))
        }
    }

    /// Fails with `PathNotFound` when no Eulerian cycle starts at `start`.
    pub fn eulerian_cycle(&self, id: GraphId, start: NodeId) -> Result<Vec<Node>> {
        let (path, found) = graphx_core::eulerian_cycle(&self.graph(id)?, start);
        debug!(graph = id, start, found, "eulerian cycle");
        if found {
            Ok(path)
        } else {
            Err(Error::PathNotFound(start))
        }
    }

    pub fn planar_check(&self, id: GraphId) -> Result<bool> {
        debug!(graph = id, "planar check");
        Ok(graphx_core::planar_check(&self.graph(id)?))
    }

    pub fn planar_reduction(&self, id: GraphId) -> Result<Graph> {
        debug!(graph = id, "planar reduction");
        Ok(graphx_core::planar_reduction(&self.graph(id)?))
    }

    pub fn tree(&self, id: GraphId) -> Result<Graph> {
        debug!(graph = id, "tree");
        Ok(graphx_core::tree(&self.graph(id)?))
    }

    pub fn is_tree(&self, id: GraphId) -> Result<bool> {
        debug!(graph = id, "is tree");
        Ok(graphx_core::is_tree(&self.graph(id)?))
    }

    pub fn diameter(&self, id: GraphId) -> Result<u64> {
        debug!(graph = id, "diameter");
        Ok(graphx_core::find_diameter(&self.graph(id)?))
    }

    pub fn radius(&self, id: GraphId) -> Result<u64> {
        debug!(graph = id, "radius");
        Ok(graphx_core::find_radius(&self.graph(id)?))
    }

    pub fn center(&self, id: GraphId) -> Result<Vec<Node>> {
        debug!(graph = id, "center");
        Ok(graphx_core::find_center(&self.graph(id)?))
    }

    pub fn cartesian(&self, id: GraphId, other: GraphId) -> Result<Graph> {
        debug!(graph = id, other, "cartesian product");
        let g1 = self.graph(id)?;
        let g2 = self.graph(other)?;
        Ok(graphx_core::cartesian(&g1, &g2))
    }
}
