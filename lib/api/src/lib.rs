pub mod matrix;
pub mod rest;
pub mod service;

pub use matrix::{AdjacencyTable, IncidenceTable};
pub use rest::RestApi;
pub use service::GraphService;
