use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use carebook_core::models::EvaluationType;
use carebook_questionnaires::question::Question;
use carebook_questionnaires::{all_questionnaires, get_questionnaire};

use crate::error::ApiError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireSummary {
    id: String,
    name: String,
    evaluation_type: EvaluationType,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireDetail {
    id: String,
    name: String,
    evaluation_type: EvaluationType,
    questions: Vec<Question>,
}

pub async fn list_questionnaires() -> Json<Vec<QuestionnaireSummary>> {
    let questionnaires: Vec<QuestionnaireSummary> = all_questionnaires()
        .iter()
        .map(|q| QuestionnaireSummary {
            id: q.id().to_string(),
            name: q.name().to_string(),
            evaluation_type: q.evaluation_type(),
        })
        .collect();
    Json(questionnaires)
}

pub async fn get_questionnaire_detail(
    Path(id): Path<String>,
) -> Result<Json<QuestionnaireDetail>, ApiError> {
    let questionnaire = get_questionnaire(&id)
        .ok_or_else(|| ApiError::NotFound(format!("questionnaire not found: {id}")))?;

    Ok(Json(QuestionnaireDetail {
        id: questionnaire.id().to_string(),
        name: questionnaire.name().to_string(),
        evaluation_type: questionnaire.evaluation_type(),
        questions: questionnaire.questions().to_vec(),
    }))
}
