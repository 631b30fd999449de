use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use carebook_core::models::{
    Appointment, AppointmentStatus, Evaluation, SubmissionRequest, SubmissionResponse,
};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_appointments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    Ok(Json(state.store.list_appointments().await?))
}

/// Create an appointment (plus its nested evaluation, when present). Ids,
/// `status` and `submittedAt` are assigned here; whatever the caller sent for
/// them is irrelevant because the request shape doesn't carry them.
pub async fn create_appointment(
    State(state): State<AppState>,
    Json(request): Json<SubmissionRequest>,
) -> Result<(StatusCode, Json<SubmissionResponse>), ApiError> {
    let submitted_at = jiff::Timestamp::now();
    let appointment = Appointment {
        id: Uuid::new_v4(),
        evaluator_name: request.evaluator_name,
        evaluator_signature: request.evaluator_signature,
        parent_guardian_name: request.parent_guardian_name,
        client_name: request.client_name,
        service_provider_name: request.service_provider_name,
        email: request.email,
        phone: request.phone,
        address: request.address,
        appointment_date: request.appointment_date,
        appointment_time: request.appointment_time,
        service_type: request.service_type,
        notes: request.notes,
        status: AppointmentStatus::Pending,
        submitted_at,
    };

    let evaluation = request.evaluation.map(|payload| Evaluation {
        id: Uuid::new_v4(),
        appointment_id: appointment.id,
        evaluation_type: payload.evaluation_type,
        evaluator_name: appointment.evaluator_name.clone(),
        evaluator_signature: appointment.evaluator_signature.clone(),
        parent_guardian_name: appointment.parent_guardian_name.clone(),
        client_name: appointment.client_name.clone(),
        service_provider_name: appointment.service_provider_name.clone(),
        service_type: appointment.service_type.clone(),
        email: appointment.email.clone(),
        responses: payload.responses,
        submitted_at,
    });

    let response = SubmissionResponse {
        appointment_id: appointment.id,
        evaluation_id: evaluation.as_ref().map(|e| e.id),
    };

    state.store.create(appointment, evaluation).await?;
    tracing::info!(
        appointment_id = %response.appointment_id,
        with_evaluation = response.evaluation_id.is_some(),
        "appointment created"
    );

    Ok((StatusCode::CREATED, Json(response)))
}

#[derive(Deserialize)]
pub struct StatusUpdate {
    pub status: AppointmentStatus,
}

pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<StatusUpdate>,
) -> Result<Json<()>, ApiError> {
    state.store.update_status(id, update.status).await?;
    tracing::info!(%id, status = %update.status, "appointment status updated");
    Ok(Json(()))
}

pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, ApiError> {
    state.store.delete_appointment(id).await?;
    Ok(Json(()))
}
