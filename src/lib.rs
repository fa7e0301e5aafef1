pub mod api;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use crate::core::errors::UserCrudError;
pub use crate::core::services::UserService;
pub use infrastructure::storage::in_memory::InMemoryStorage;
pub use infrastructure::storage::sqlite::SqliteStorage;

#[cfg(test)]
mod tests; // Include integration tests
