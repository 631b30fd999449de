use std::env;
use std::path::PathBuf;

use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use carebook_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let addr = env::var("CAREBOOK_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let backend = env::var("CAREBOOK_BACKEND").unwrap_or_else(|_| "memory".to_string());
    let data_dir =
        PathBuf::from(env::var("CAREBOOK_DATA_DIR").unwrap_or_else(|_| "./data".to_string()));

    let backend: carebook_store::Backend = backend.parse()?;
    let store = carebook_store::open_backend(backend, &data_dir)?;
    tracing::info!(backend = store.backend_name(), "store opened");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = carebook_server::router(AppState::new(store)).layer(cors);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
