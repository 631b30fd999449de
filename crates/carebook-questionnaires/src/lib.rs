//! carebook-questionnaires
//!
//! Evaluation questionnaire definitions. Pure data — no storage or HTTP
//! dependency. Defines the question lists, answer kinds, and conditional
//! rules for each evaluation form, plus the response-building logic shared
//! by the intake controller and its tests.

pub mod question;
pub mod questionnaires;

use std::collections::BTreeMap;

use carebook_core::models::{EvaluationType, QuestionResponse, NOT_ANSWERED};
use question::Question;

/// Answers collected so far, keyed by question id.
pub type Answers = BTreeMap<String, String>;

/// Trait implemented by each evaluation questionnaire.
pub trait Questionnaire: Send + Sync {
    /// Unique identifier (e.g., "staff_service").
    fn id(&self) -> &str;

    /// Human-readable form title.
    fn name(&self) -> &str;

    /// The evaluation type this questionnaire records.
    fn evaluation_type(&self) -> EvaluationType;

    /// Every question, in form order, including conditional ones.
    fn questions(&self) -> &[Question];

    /// The questions currently presented: unconditional questions plus
    /// conditionals whose trigger answer is met. Untriggered conditionals
    /// are not rendered and never count toward the required set.
    fn active_questions(&self, answers: &Answers) -> Vec<&Question> {
        self.questions()
            .iter()
            .filter(|q| q.is_active(answers))
            .collect()
    }

    /// Ids of active, non-free-text questions that have no answer yet.
    fn missing_required(&self, answers: &Answers) -> Vec<&'static str> {
        self.active_questions(answers)
            .into_iter()
            .filter(|q| q.is_required() && !has_answer(answers, q.id))
            .map(|q| q.id)
            .collect()
    }

    /// Build the ordered response list for submission: one entry per
    /// question in the form, with the `"Not answered"` sentinel where no
    /// answer exists. Untriggered conditionals were never shown, so they
    /// land as the sentinel too.
    fn build_responses(&self, answers: &Answers) -> Vec<QuestionResponse> {
        self.questions()
            .iter()
            .map(|q| QuestionResponse {
                question_id: q.id.to_string(),
                question_text: q.text.to_string(),
                answer: answers
                    .get(q.id)
                    .filter(|a| !a.trim().is_empty())
                    .cloned()
                    .unwrap_or_else(|| NOT_ANSWERED.to_string()),
                answer_kind: q.kind.answer_kind(),
            })
            .collect()
    }
}

fn has_answer(answers: &Answers, id: &str) -> bool {
    answers.get(id).is_some_and(|a| !a.trim().is_empty())
}

/// Return all registered questionnaires.
pub fn all_questionnaires() -> Vec<Box<dyn Questionnaire>> {
    vec![
        Box::new(questionnaires::staff_service::StaffService),
        Box::new(questionnaires::parental_provider::ParentalProvider),
    ]
}

/// Look up a questionnaire by id.
pub fn get_questionnaire(id: &str) -> Option<Box<dyn Questionnaire>> {
    all_questionnaires().into_iter().find(|q| q.id() == id)
}

/// The questionnaire presented for a given evaluation type.
pub fn for_evaluation_type(kind: EvaluationType) -> Box<dyn Questionnaire> {
    match kind {
        EvaluationType::Staff => Box::new(questionnaires::staff_service::StaffService),
        EvaluationType::Parental => Box::new(questionnaires::parental_provider::ParentalProvider),
    }
}
