use carebook_core::models::EvaluationType;

use crate::question::{Question, QuestionKind};
use crate::questionnaires::options::*;
use crate::Questionnaire;

/// Parental Provider evaluation: parents or guardians who themselves provide
/// services through the agency. 12 numbered questions; q2 carries a
/// conditional follow-up.
pub struct ParentalProvider;

static QUESTIONS: &[Question] = &[
    Question::new(
        "q1",
        "Do you feel the services you provide are helping your child/family reach goals and maintain daily stability?",
        QuestionKind::Choice(YES_NO_SOMEWHAT),
    ),
    Question::new(
        "q2",
        "Since you began providing these services, have you noticed improvement in your child's or family's overall well-being?",
        QuestionKind::Choice(YES_NO_NOT_SURE),
    ),
    Question::if_yes("q2_desc", "If yes, please describe briefly:", "q2"),
    Question::new(
        "q3",
        "Does our agency provide the support, guidance, and resources you need to continue your role as a parental provider?",
        QuestionKind::Choice(ALWAYS_SOMETIMES_RARELY),
    ),
    Question::new(
        "q4",
        "Is your assigned coordinator helpful and available when you have questions or need assistance?",
        QuestionKind::Choice(YES_NO_SOMETIMES),
    ),
    Question::new(
        "q5",
        "Are your questions about timesheets, billing, or EVV check-in/check-out answered promptly?",
        QuestionKind::Choice(YES_NO_SOMETIMES),
    ),
    Question::new(
        "q6",
        "Do you find the EVV app (check-in/check-out process) easy to use?",
        QuestionKind::Choice(EVV_EASE),
    ),
    Question::new(
        "q7",
        "How would you describe your compensation?",
        QuestionKind::Choice(COMPENSATION),
    ),
    Question::new(
        "q8",
        "Do you believe the allotted service hours are enough to meet your client's needs?",
        QuestionKind::Choice(YES_NO_NOT_SURE),
    ),
    Question::new(
        "q9",
        "Would you like to continue providing services as a parental provider?",
        QuestionKind::Choice(YES_NO_UNDECIDED),
    ),
    Question::new(
        "q10",
        "Overall, how would you rate the quality of services and agency support?",
        QuestionKind::Rating,
    ),
    Question::new(
        "q11",
        "Do you have any complaints, challenges, or areas where the agency could improve?",
        QuestionKind::FreeText,
    ),
    Question::new(
        "q12",
        "What suggestions or feedback would you like to share to improve the program?",
        QuestionKind::FreeText,
    ),
];

impl Questionnaire for ParentalProvider {
    fn id(&self) -> &str {
        "parental_provider"
    }

    fn name(&self) -> &str {
        "Parental Provider Evaluation"
    }

    fn evaluation_type(&self) -> EvaluationType {
        EvaluationType::Parental
    }

    fn questions(&self) -> &[Question] {
        QUESTIONS
    }
}
