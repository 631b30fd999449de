use carebook_core::models::AnswerKind;
use serde::Serialize;

use crate::Answers;

/// Five-point rating labels, low to high.
pub const RATING_OPTIONS: &[&str] = &["1 (Poor)", "2", "3", "4", "5 (Excellent)"];

/// A single questionnaire item.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub kind: QuestionKind,
    /// When set, this question is active only while the named prior
    /// question's answer equals the trigger value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_on: Option<Trigger>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trigger {
    pub question_id: &'static str,
    pub answer: &'static str,
}

/// What kind of input a question presents.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "options")]
pub enum QuestionKind {
    /// Pick one of the named options.
    Choice(&'static [&'static str]),
    /// Five-point rating ([`RATING_OPTIONS`]).
    Rating,
    /// Free-form text.
    FreeText,
}

impl QuestionKind {
    pub fn answer_kind(&self) -> AnswerKind {
        match self {
            QuestionKind::Choice(_) => AnswerKind::Choice,
            QuestionKind::Rating => AnswerKind::Rating,
            QuestionKind::FreeText => AnswerKind::FreeText,
        }
    }

    /// The selectable options, empty for free text.
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            QuestionKind::Choice(options) => options,
            QuestionKind::Rating => RATING_OPTIONS,
            QuestionKind::FreeText => &[],
        }
    }
}

impl Question {
    pub const fn new(id: &'static str, text: &'static str, kind: QuestionKind) -> Self {
        Question {
            id,
            text,
            kind,
            conditional_on: None,
        }
    }

    /// A follow-up that activates when `parent` is answered `"Yes"`.
    pub const fn if_yes(id: &'static str, text: &'static str, parent: &'static str) -> Self {
        Question {
            id,
            text,
            kind: QuestionKind::FreeText,
            conditional_on: Some(Trigger {
                question_id: parent,
                answer: "Yes",
            }),
        }
    }

    pub fn is_active(&self, answers: &Answers) -> bool {
        match self.conditional_on {
            None => true,
            Some(trigger) => answers
                .get(trigger.question_id)
                .is_some_and(|a| a == trigger.answer),
        }
    }

    /// Free-text questions are never required; everything else is, while active.
    pub fn is_required(&self) -> bool {
        !matches!(self.kind, QuestionKind::FreeText)
    }
}
