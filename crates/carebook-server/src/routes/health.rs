use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    backend: &'static str,
    /// Connectivity flag for the backing store.
    store: &'static str,
}

/// Liveness probe. Always answers; the `store` flag reports whether the
/// configured backend is reachable.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = match state.store.health().await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!("store health probe failed: {e}");
            "error"
        }
    };

    Json(HealthResponse {
        status: "ok",
        backend: state.store.backend_name(),
        store,
    })
}
