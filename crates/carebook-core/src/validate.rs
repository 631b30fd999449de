//! Field-validation rules for the intake form.
//!
//! These run entirely on the client side of the API: a draft that fails here
//! never produces a network call. The server performs presence checks only.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use jiff::civil;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{EvaluationPayload, ServiceType, SubmissionRequest};

/// Validation errors keyed by wire field name (`appointmentDate`, `email`, ...).
pub type FieldErrors = BTreeMap<String, String>;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap_or_else(|e| panic!("email regex: {e}")));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// The bookable range: today through three months out, inclusive.
pub fn booking_window(today: civil::Date) -> (civil::Date, civil::Date) {
    let max = today
        .checked_add(jiff::Span::new().months(3))
        .unwrap_or(civil::Date::MAX);
    (today, max)
}

pub fn date_in_booking_window(date: civil::Date, today: civil::Date) -> bool {
    let (min, max) = booking_window(today);
    date >= min && date <= max
}

/// Raw appointment-section input, exactly as typed. Date and time stay
/// strings until validation so a half-typed value can be reported as invalid
/// rather than silently dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDraft {
    pub evaluator_name: String,
    pub evaluator_signature: String,
    pub parent_guardian_name: String,
    pub client_name: String,
    pub service_provider_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub service_type: Vec<ServiceType>,
    pub notes: String,
}

impl AppointmentDraft {
    pub fn parsed_date(&self) -> Option<civil::Date> {
        self.appointment_date.parse().ok()
    }

    pub fn parsed_time(&self) -> Option<civil::Time> {
        self.appointment_time.parse().ok()
    }

    /// Apply every field rule. An empty map means the draft is submittable.
    pub fn validate(&self, today: civil::Date) -> FieldErrors {
        let mut errors = FieldErrors::new();

        let required = [
            ("evaluatorName", &self.evaluator_name, "Evaluator name is required"),
            (
                "parentGuardianName",
                &self.parent_guardian_name,
                "Parent/Guardian name is required",
            ),
            ("clientName", &self.client_name, "Client name is required"),
            (
                "serviceProviderName",
                &self.service_provider_name,
                "Service provider name is required",
            ),
            ("phone", &self.phone, "Phone is required"),
            ("address", &self.address, "Address is required"),
        ];
        for (field, value, message) in required {
            if value.trim().is_empty() {
                errors.insert(field.to_string(), message.to_string());
            }
        }

        if self.email.trim().is_empty() {
            errors.insert("email".to_string(), "Email is required".to_string());
        } else if !is_valid_email(self.email.trim()) {
            errors.insert("email".to_string(), "Email is invalid".to_string());
        }

        if self.appointment_date.is_empty() {
            errors.insert("appointmentDate".to_string(), "Date is required".to_string());
        } else {
            match self.parsed_date() {
                None => {
                    errors.insert("appointmentDate".to_string(), "Date is invalid".to_string());
                }
                Some(date) if !date_in_booking_window(date, today) => {
                    errors.insert(
                        "appointmentDate".to_string(),
                        "Date must be within the next 3 months".to_string(),
                    );
                }
                Some(_) => {}
            }
        }

        if self.appointment_time.is_empty() {
            errors.insert("appointmentTime".to_string(), "Time is required".to_string());
        } else if self.parsed_time().is_none() {
            errors.insert("appointmentTime".to_string(), "Time is invalid".to_string());
        }

        if self.service_type.is_empty() {
            errors.insert(
                "serviceType".to_string(),
                "Select at least one service type".to_string(),
            );
        }

        errors
    }

    /// Convert a draft that already passed [`validate`](Self::validate) into
    /// the wire request. Returns `None` if the date or time fail to parse.
    pub fn into_request(self, evaluation: Option<EvaluationPayload>) -> Option<SubmissionRequest> {
        let appointment_date = self.parsed_date()?;
        let appointment_time = self.parsed_time()?;
        let optional = |s: String| if s.trim().is_empty() { None } else { Some(s) };

        Some(SubmissionRequest {
            evaluator_name: self.evaluator_name,
            evaluator_signature: optional(self.evaluator_signature),
            parent_guardian_name: self.parent_guardian_name,
            client_name: self.client_name,
            service_provider_name: self.service_provider_name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            appointment_date,
            appointment_time,
            service_type: self.service_type,
            notes: optional(self.notes),
            evaluation,
        })
    }
}
