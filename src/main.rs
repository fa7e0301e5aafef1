use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;
use user_crud::{
    api::{self, DynUserService},
    config::CONFIG,
    core::services::UserService,
    infrastructure::storage::{Storage, in_memory::InMemoryStorage, sqlite::SqliteStorage},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&CONFIG.log_level)))
        .init();
    info!("Starting with {:?}", *CONFIG);

    let storage: Arc<dyn Storage> = if CONFIG.uses_memory_store() {
        info!("Using in-memory user store");
        Arc::new(InMemoryStorage::new())
    } else {
        Arc::new(SqliteStorage::connect(&CONFIG.database_url, CONFIG.database_max_connections).await?)
    };
    let service: Arc<DynUserService> = Arc::new(UserService::new(storage));

    let app = api::app(service, Duration::from_secs(CONFIG.request_timeout_secs));

    // Start server
    let addr: SocketAddr = format!("{}:{}", CONFIG.host, CONFIG.port).parse()?;
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
