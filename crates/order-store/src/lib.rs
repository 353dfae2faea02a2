pub mod memory;

pub use domain::{OrderRepository, RepositoryError};
pub use memory::InMemoryOrderRepository;
