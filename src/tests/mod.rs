
use crate::api::{AppState, DynUserService};
use crate::core::models::user::UserDraft;
use crate::core::services::UserService;
use crate::infrastructure::storage::{Storage, in_memory::InMemoryStorage};
use std::sync::Arc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn create_test_service() -> UserService<InMemoryStorage> {
    init_tracing();
    UserService::new(InMemoryStorage::new())
}

pub fn create_test_state() -> AppState {
    init_tracing();
    let storage: Arc<dyn Storage> = Arc::new(InMemoryStorage::new());
    Arc::new(DynUserService::new(storage))
}

pub fn john() -> UserDraft {
    UserDraft::new("John Doe", "john@example.com", Some("1234567890"))
}

pub fn jane() -> UserDraft {
    UserDraft::new("Jane Doe", "jane@example.com", Some("0987654321"))
}
