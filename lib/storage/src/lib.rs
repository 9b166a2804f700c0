pub mod manager;
pub mod repository;

pub use manager::GraphStore;
pub use repository::GraphRepository;
