use std::fmt;

use serde::{Deserialize, Serialize};

pub mod appointment;
pub mod evaluation;
pub mod submission;

pub use appointment::{Appointment, AppointmentStatus, ServiceType};
pub use evaluation::{AnswerKind, Evaluation, EvaluationType, QuestionResponse, NOT_ANSWERED};
pub use submission::{EvaluationPayload, SubmissionRequest, SubmissionResponse};

/// Which of the two record tables an operation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Appointment,
    Evaluation,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Appointment => "appointment",
            RecordKind::Evaluation => "evaluation",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
