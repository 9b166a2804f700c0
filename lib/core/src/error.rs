use thiserror::Error;

use crate::graph::{GraphId, NodeId};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Graph not found: {0}")]
    GraphNotFound(GraphId),

    #[error("No path found from node {0}")]
    PathNotFound(NodeId),

    #[error("Storage error: {0}")]
    Storage(String),
}
