use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::ServiceType;

/// Sentinel recorded for an active question the respondent left blank.
pub const NOT_ANSWERED: &str = "Not answered";

/// A completed questionnaire tied to exactly one [`Appointment`].
///
/// Name/email/service fields are denormalized copies for display; the
/// appointment remains authoritative and the copies may drift after edits.
///
/// [`Appointment`]: crate::models::Appointment
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Evaluation {
    pub id: Uuid,
    pub appointment_id: Uuid,
    pub evaluation_type: EvaluationType,
    pub evaluator_name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub evaluator_signature: Option<String>,
    pub parent_guardian_name: String,
    pub client_name: String,
    pub service_provider_name: String,
    pub service_type: Vec<ServiceType>,
    pub email: String,
    /// One entry per active question, in questionnaire order.
    pub responses: Vec<QuestionResponse>,
    pub submitted_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum EvaluationType {
    Staff,
    Parental,
}

impl EvaluationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationType::Staff => "staff",
            EvaluationType::Parental => "parental",
        }
    }

    /// Human-readable form title, as shown in the admin view and CSV export.
    pub fn display_name(&self) -> &'static str {
        match self {
            EvaluationType::Staff => "Staff/Service Evaluation",
            EvaluationType::Parental => "Parental Provider Evaluation",
        }
    }
}

impl fmt::Display for EvaluationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvaluationType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "staff" => Ok(EvaluationType::Staff),
            "parental" => Ok(EvaluationType::Parental),
            other => Err(CoreError::UnknownEvaluationType(other.to_string())),
        }
    }
}

/// One recorded answer, carrying enough context to display the evaluation
/// without consulting the questionnaire definition it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuestionResponse {
    pub question_id: String,
    pub question_text: String,
    pub answer: String,
    pub answer_kind: AnswerKind,
}

/// The closed set of answer input kinds a question can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerKind {
    /// Pick one of a fixed set of named options.
    Choice,
    /// Five-point quality rating.
    Rating,
    /// Free-form text; never required.
    FreeText,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluation_type_parses_wire_values() {
        assert_eq!("staff".parse::<EvaluationType>().unwrap(), EvaluationType::Staff);
        assert_eq!(
            "parental".parse::<EvaluationType>().unwrap(),
            EvaluationType::Parental
        );
        assert!("manager".parse::<EvaluationType>().is_err());
    }

    #[test]
    fn answer_kind_uses_snake_case_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&AnswerKind::FreeText).unwrap(),
            "\"free_text\""
        );
    }
}
