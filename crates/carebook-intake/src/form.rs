//! Intake form controller.
//!
//! Tracks the appointment draft, the optional questionnaire section, and the
//! submission lifecycle. Validation failures never leave `Editing` and never
//! produce a request; a request only exists once every rule passes.

use jiff::civil;

use carebook_core::models::{EvaluationPayload, EvaluationType, ServiceType, SubmissionRequest};
use carebook_core::validate::{AppointmentDraft, FieldErrors};
use carebook_questionnaires::{for_evaluation_type, Answers};

pub const REQUIRED_ANSWER_MESSAGE: &str = "This field is required";

/// Where the form sits in its submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

#[derive(Debug, Default)]
pub struct IntakeForm {
    pub draft: AppointmentDraft,
    /// Which questionnaire the respondent opted into, if any.
    pub evaluation_type: Option<EvaluationType>,
    pub answers: Answers,
    /// Field-keyed validation errors from the last `validate` pass. Keys are
    /// wire field names for appointment fields and question ids for
    /// questionnaire items.
    pub errors: FieldErrors,
    /// Form-level error from a failed submission attempt.
    pub form_error: Option<String>,
    phase: FormPhase,
}

impl IntakeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Toggle a service category. Selections keep the order they were made
    /// in; re-toggling removes without disturbing the rest.
    pub fn toggle_service_type(&mut self, service: ServiceType) {
        match self.draft.service_type.iter().position(|s| *s == service) {
            Some(i) => {
                self.draft.service_type.remove(i);
            }
            None => self.draft.service_type.push(service),
        }
    }

    /// Choose (or clear) the questionnaire section. Switching forms discards
    /// answers, which belong to the previous question set.
    pub fn select_evaluation(&mut self, evaluation_type: Option<EvaluationType>) {
        if self.evaluation_type != evaluation_type {
            self.answers.clear();
        }
        self.evaluation_type = evaluation_type;
    }

    pub fn set_answer(&mut self, question_id: &str, answer: impl Into<String>) {
        self.answers.insert(question_id.to_string(), answer.into());
    }

    /// Run every rule against the current state, replacing `errors`. Returns
    /// true when the form is submittable.
    pub fn validate(&mut self, today: civil::Date) -> bool {
        let mut errors = self.draft.validate(today);

        if let Some(kind) = self.evaluation_type {
            let questionnaire = for_evaluation_type(kind);
            for id in questionnaire.missing_required(&self.answers) {
                errors.insert(id.to_string(), REQUIRED_ANSWER_MESSAGE.to_string());
            }
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    /// Validate and, when clean, move to `Submitting` and produce the wire
    /// request. On failure the form stays in `Editing` with `errors` set and
    /// nothing is produced.
    pub fn begin_submit(&mut self, today: civil::Date) -> Option<SubmissionRequest> {
        if self.phase != FormPhase::Editing {
            return None;
        }
        if !self.validate(today) {
            tracing::debug!(error_count = self.errors.len(), "submission blocked");
            return None;
        }

        let evaluation = self.evaluation_type.map(|kind| EvaluationPayload {
            evaluation_type: kind,
            responses: for_evaluation_type(kind).build_responses(&self.answers),
        });

        let request = self.draft.clone().into_request(evaluation)?;
        self.phase = FormPhase::Submitting;
        self.form_error = None;
        Some(request)
    }

    pub fn submit_succeeded(&mut self) {
        self.phase = FormPhase::Submitted;
    }

    /// Return to editing with a form-level error; the draft is preserved so
    /// the respondent can retry without retyping.
    pub fn submit_failed(&mut self, message: impl Into<String>) {
        self.phase = FormPhase::Editing;
        self.form_error = Some(message.into());
    }

    /// Back to a blank form, ready for the next respondent.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TODAY: civil::Date = civil::date(2026, 8, 27);

    fn filled_form() -> IntakeForm {
        let mut form = IntakeForm::new();
        form.draft = AppointmentDraft {
            evaluator_name: "Dana Reyes".into(),
            evaluator_signature: String::new(),
            parent_guardian_name: "Morgan Reyes".into(),
            client_name: "Alex Reyes".into(),
            service_provider_name: "Sam Okafor".into(),
            email: "dana@example.com".into(),
            phone: "(555) 123-4567".into(),
            address: "123 Main St".into(),
            appointment_date: "2026-09-10".into(),
            appointment_time: "10:30".into(),
            service_type: vec![],
            notes: String::new(),
        };
        form.toggle_service_type(ServiceType::Respite);
        form
    }

    fn answer_staff_required(form: &mut IntakeForm) {
        let questionnaire = for_evaluation_type(EvaluationType::Staff);
        for id in questionnaire.missing_required(&form.answers) {
            form.set_answer(id, "Yes");
        }
    }

    #[test]
    fn service_types_toggle_in_selection_order() {
        let mut form = IntakeForm::new();
        form.toggle_service_type(ServiceType::Mentorship);
        form.toggle_service_type(ServiceType::Homemaker);
        form.toggle_service_type(ServiceType::Respite);
        form.toggle_service_type(ServiceType::Homemaker);
        assert_eq!(
            form.draft.service_type,
            vec![ServiceType::Mentorship, ServiceType::Respite]
        );
    }

    #[test]
    fn invalid_form_stays_editing_and_produces_nothing() {
        let mut form = IntakeForm::new();
        assert!(form.begin_submit(TODAY).is_none());
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.errors.contains_key("evaluatorName"));
    }

    #[test]
    fn valid_form_without_evaluation_submits() {
        let mut form = filled_form();
        let request = form.begin_submit(TODAY).expect("request");
        assert_eq!(form.phase(), FormPhase::Submitting);
        assert!(request.evaluation.is_none());
        assert_eq!(request.service_type, vec![ServiceType::Respite]);
    }

    #[test]
    fn unanswered_questionnaire_blocks_submission() {
        let mut form = filled_form();
        form.select_evaluation(Some(EvaluationType::Staff));
        assert!(form.begin_submit(TODAY).is_none());
        assert_eq!(
            form.errors.get("q1").map(String::as_str),
            Some(REQUIRED_ANSWER_MESSAGE)
        );
    }

    #[test]
    fn answered_questionnaire_rides_along_with_the_request() {
        let mut form = filled_form();
        form.select_evaluation(Some(EvaluationType::Staff));
        answer_staff_required(&mut form);
        let request = form.begin_submit(TODAY).expect("request");
        let evaluation = request.evaluation.expect("evaluation payload");
        assert_eq!(evaluation.evaluation_type, EvaluationType::Staff);
        // One response per question of the form; the free-text follow-ups
        // were left blank, so they carry the unanswered sentinel.
        assert_eq!(evaluation.responses.len(), 17);
        assert!(evaluation
            .responses
            .iter()
            .any(|r| r.question_id == "q10_desc"));
    }

    #[test]
    fn switching_questionnaires_discards_answers() {
        let mut form = filled_form();
        form.select_evaluation(Some(EvaluationType::Staff));
        form.set_answer("q1", "Yes");
        form.select_evaluation(Some(EvaluationType::Parental));
        assert!(form.answers.is_empty());
        // Re-selecting the same form keeps what's there.
        form.set_answer("q1", "Yes");
        form.select_evaluation(Some(EvaluationType::Parental));
        assert_eq!(form.answers.len(), 1);
    }

    #[test]
    fn failed_submission_returns_to_editing_with_the_message() {
        let mut form = filled_form();
        form.begin_submit(TODAY).expect("request");
        form.submit_failed("server error (500): storage unavailable");
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(
            form.form_error.as_deref(),
            Some("server error (500): storage unavailable")
        );
        // Draft survives for retry.
        assert_eq!(form.draft.evaluator_name, "Dana Reyes");
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = filled_form();
        form.begin_submit(TODAY).expect("request");
        form.submit_succeeded();
        assert_eq!(form.phase(), FormPhase::Submitted);
        form.reset();
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.draft.evaluator_name.is_empty());
        assert!(form.errors.is_empty());
    }

    #[test]
    fn no_duplicate_submission_while_submitting() {
        let mut form = filled_form();
        form.begin_submit(TODAY).expect("request");
        assert!(form.begin_submit(TODAY).is_none());
    }
}
