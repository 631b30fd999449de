use carebook_core::models::EvaluationType;

use crate::question::{Question, QuestionKind};
use crate::questionnaires::options::*;
use crate::Questionnaire;

/// Staff/Service evaluation: families rating the staff member who provides
/// services in the home. 14 numbered questions; q10–q12 carry a conditional
/// "If yes, please describe" follow-up.
pub struct StaffService;

static QUESTIONS: &[Question] = &[
    Question::new(
        "q1",
        "Was the staff punctual and consistent with scheduled visits?",
        QuestionKind::Choice(YES_NO_SOMETIMES),
    ),
    Question::new(
        "q2",
        "Was the staff respectful, kind, and professional during visits?",
        QuestionKind::Choice(YES_NO_SOMETIMES),
    ),
    Question::new(
        "q3",
        "Did the staff complete all assigned duties (cleaning, laundry, cooking, outings, etc.) as expected?",
        QuestionKind::Choice(YES_NO_PARTIALLY),
    ),
    Question::new(
        "q4",
        "Does the staff communicate well and follow instructions or care plans?",
        QuestionKind::Choice(YES_NO_SOMETIMES),
    ),
    Question::new(
        "q5",
        "Is the staff dressed cleanly and appropriately to provide services?",
        QuestionKind::Choice(YES_NO_SOMETIMES),
    ),
    Question::new(
        "q6",
        "Do you feel comfortable and safe having this staff in your home?",
        QuestionKind::Choice(YES_NO_SOMEWHAT),
    ),
    Question::new(
        "q7",
        "Do you feel your loved one is benefiting from the services being provided?",
        QuestionKind::Choice(YES_NO_NOT_SURE),
    ),
    Question::new(
        "q8",
        "How would you rate the quality of services received?",
        QuestionKind::Rating,
    ),
    Question::new(
        "q9",
        "Is your coordinator responsive and helpful in resolving any concerns?",
        QuestionKind::Choice(YES_NO_SOMETIMES),
    ),
    Question::new(
        "q10",
        "Has there been any previous incident or concern involving this staff that remains unresolved?",
        QuestionKind::Choice(YES_NO_NOT_SURE),
    ),
    Question::if_yes("q10_desc", "If yes, please describe:", "q10"),
    Question::new(
        "q11",
        "Has any inappropriate incident or behavior been reported involving this staff?",
        QuestionKind::Choice(YES_NO_NOT_SURE),
    ),
    Question::if_yes("q11_desc", "If yes, please describe:", "q11"),
    Question::new(
        "q12",
        "Has the staff failed to follow instructions or complete assigned tasks as expected?",
        QuestionKind::Choice(YES_NO_SOMETIMES),
    ),
    Question::if_yes("q12_desc", "If yes, please describe:", "q12"),
    Question::new(
        "q13",
        "Would you like to continue services with this staff?",
        QuestionKind::Choice(YES_NO_NOT_SURE),
    ),
    Question::new(
        "q14",
        "Any concerns, complaints, or suggestions for improvement?",
        QuestionKind::FreeText,
    ),
];

impl Questionnaire for StaffService {
    fn id(&self) -> &str {
        "staff_service"
    }

    fn name(&self) -> &str {
        "Staff/Service Evaluation"
    }

    fn evaluation_type(&self) -> EvaluationType {
        EvaluationType::Staff
    }

    fn questions(&self) -> &[Question] {
        QUESTIONS
    }
}
