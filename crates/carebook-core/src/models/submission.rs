use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::{EvaluationType, QuestionResponse, ServiceType};

/// Body of `POST /appointments`: the appointment fields plus the optional
/// nested questionnaire. Ids, `status` and `submittedAt` are assigned by the
/// server, never by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubmissionRequest {
    pub evaluator_name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub evaluator_signature: Option<String>,
    pub parent_guardian_name: String,
    pub client_name: String,
    pub service_provider_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub appointment_date: jiff::civil::Date,
    pub appointment_time: jiff::civil::Time,
    pub service_type: Vec<ServiceType>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub evaluation: Option<EvaluationPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EvaluationPayload {
    pub evaluation_type: EvaluationType,
    pub responses: Vec<QuestionResponse>,
}

/// The generated ids returned by a successful create.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubmissionResponse {
    pub appointment_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub evaluation_id: Option<Uuid>,
}
