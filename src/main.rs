mod config;
mod db;
mod routes;
mod services;
mod state;
mod store;

use std::sync::Arc;

use config::{ConfigError, ServerConfig, StoreBackend};
use services::seed;
use store::memory::MemoryActivityStore;
use store::postgres::PgActivityStore;
use store::{ActivityStore, StoreError};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("database init: {0}")]
    Database(#[from] sqlx::Error),
    #[error("seeding: {0}")]
    Seed(#[from] StoreError),
    #[error("server: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "mergington failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;

    let store: Arc<dyn ActivityStore> = match &config.store {
        StoreBackend::Postgres { database_url, max_connections } => {
            let pool = db::init_pool(database_url, *max_connections).await?;
            Arc::new(PgActivityStore::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory activity store; data is lost on restart");
            Arc::new(MemoryActivityStore::new())
        }
    };

    seed::seed_if_empty(store.as_ref(), &seed::initial_activities()).await?;

    let state = state::AppState::new(store);
    let app = routes::app(state, &config.static_dir);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(port = config.port, static_dir = %config.static_dir.display(), "mergington listening");
    axum::serve(listener, app).await?;
    Ok(())
}
