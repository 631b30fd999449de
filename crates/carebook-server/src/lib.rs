//! carebook-server
//!
//! HTTP surface over the storage contract. Route handlers are thin: decode,
//! call the configured [`Store`], encode. All domain rules live in the
//! workspace library crates.
//!
//! [`Store`]: carebook_store::Store

pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{delete, get, patch, post};
use axum::Router;

use state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        // Questionnaires are public schema data, served for the dynamic form.
        .route(
            "/questionnaires",
            get(routes::questionnaires::list_questionnaires),
        )
        .route(
            "/questionnaires/{id}",
            get(routes::questionnaires::get_questionnaire_detail),
        )
        .route(
            "/appointments",
            get(routes::appointments::list_appointments),
        )
        .route(
            "/appointments",
            post(routes::appointments::create_appointment),
        )
        .route(
            "/appointments/{id}/status",
            patch(routes::appointments::update_status),
        )
        .route(
            "/appointments/{id}",
            delete(routes::appointments::delete_appointment),
        )
        .route("/evaluations", get(routes::evaluations::list_evaluations))
        .route(
            "/evaluations/{id}",
            delete(routes::evaluations::delete_evaluation),
        )
        .with_state(state)
}
