//! carebook-export
//!
//! CSV rendering of the admin record lists. Every cell is quoted so the
//! output opens cleanly in spreadsheet tools regardless of embedded commas;
//! multi-value service selections join with `"; "`; evaluations flatten to
//! one row per recorded answer.

pub mod error;

use csv::{QuoteStyle, WriterBuilder};
use jiff::civil;

use carebook_core::models::{Appointment, Evaluation, RecordKind};

pub use error::ExportError;

const APPOINTMENT_HEADERS: [&str; 14] = [
    "ID",
    "Evaluator Name",
    "Parent/Guardian Name",
    "Client Name",
    "Service Provider",
    "Email",
    "Phone",
    "Address",
    "Service Types",
    "Date",
    "Time",
    "Notes",
    "Status",
    "Submitted At",
];

const EVALUATION_HEADERS: [&str; 12] = [
    "Evaluation ID",
    "Appointment ID",
    "Evaluator Name",
    "Parent/Guardian",
    "Client Name",
    "Service Provider",
    "Service Types",
    "Email",
    "Type",
    "Question",
    "Answer",
    "Submitted At",
];

fn writer() -> csv::Writer<Vec<u8>> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new())
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, ExportError> {
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

fn join_services(services: &[carebook_core::models::ServiceType]) -> String {
    services
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Submission timestamps render like `Jan 2, 2026, 3:04 PM`, in UTC.
fn format_submitted_at(ts: jiff::Timestamp) -> String {
    ts.to_zoned(jiff::tz::TimeZone::UTC)
        .strftime("%b %-d, %Y, %-I:%M %p")
        .to_string()
}

/// Render the appointment list, one row per appointment.
pub fn appointments_csv(appointments: &[Appointment]) -> Result<String, ExportError> {
    let mut w = writer();
    w.write_record(APPOINTMENT_HEADERS)?;
    for apt in appointments {
        w.write_record([
            apt.id.to_string(),
            apt.evaluator_name.clone(),
            apt.parent_guardian_name.clone(),
            apt.client_name.clone(),
            apt.service_provider_name.clone(),
            apt.email.clone(),
            apt.phone.clone(),
            apt.address.clone(),
            join_services(&apt.service_type),
            apt.appointment_date.to_string(),
            apt.appointment_time.to_string(),
            apt.notes.clone().unwrap_or_default(),
            apt.status.to_string(),
            format_submitted_at(apt.submitted_at),
        ])?;
    }
    finish(w)
}

/// Render the evaluation list, flattened to one row per recorded answer.
/// Evaluation-level fields repeat on every row.
pub fn evaluations_csv(evaluations: &[Evaluation]) -> Result<String, ExportError> {
    let mut w = writer();
    w.write_record(EVALUATION_HEADERS)?;
    for ev in evaluations {
        for response in &ev.responses {
            w.write_record([
                ev.id.to_string(),
                ev.appointment_id.to_string(),
                ev.evaluator_name.clone(),
                ev.parent_guardian_name.clone(),
                ev.client_name.clone(),
                ev.service_provider_name.clone(),
                join_services(&ev.service_type),
                ev.email.clone(),
                ev.evaluation_type.display_name().to_string(),
                response.question_text.clone(),
                response.answer.clone(),
                format_submitted_at(ev.submitted_at),
            ])?;
        }
    }
    finish(w)
}

/// Download file name for an export taken on `today`.
pub fn export_file_name(kind: RecordKind, today: civil::Date) -> String {
    format!("FOR_ALL_HOME_CARE_{}s_{today}.csv", kind.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use carebook_core::models::{
        AnswerKind, AppointmentStatus, EvaluationType, QuestionResponse, ServiceType,
    };
    use uuid::Uuid;

    fn appointment() -> Appointment {
        Appointment {
            id: Uuid::nil(),
            evaluator_name: "Dana Reyes".into(),
            evaluator_signature: None,
            parent_guardian_name: "Morgan Reyes".into(),
            client_name: "Alex Reyes".into(),
            service_provider_name: "Sam Okafor".into(),
            email: "dana@example.com".into(),
            phone: "(555) 123-4567".into(),
            address: "123 Main St, Denver, CO".into(),
            appointment_date: civil::date(2026, 9, 10),
            appointment_time: civil::time(10, 30, 0, 0),
            service_type: vec![ServiceType::Respite, ServiceType::Homemaker],
            notes: None,
            status: AppointmentStatus::Pending,
            submitted_at: jiff::Timestamp::UNIX_EPOCH,
        }
    }

    fn evaluation() -> Evaluation {
        let apt = appointment();
        Evaluation {
            id: Uuid::nil(),
            appointment_id: apt.id,
            evaluation_type: EvaluationType::Staff,
            evaluator_name: apt.evaluator_name,
            evaluator_signature: None,
            parent_guardian_name: apt.parent_guardian_name,
            client_name: apt.client_name,
            service_provider_name: apt.service_provider_name,
            service_type: apt.service_type,
            email: apt.email,
            responses: vec![
                QuestionResponse {
                    question_id: "q1".into(),
                    question_text: "Was the staff punctual and consistent with scheduled visits?"
                        .into(),
                    answer: "Yes".into(),
                    answer_kind: AnswerKind::Choice,
                },
                QuestionResponse {
                    question_id: "q8".into(),
                    question_text: "How would you rate the quality of services received?".into(),
                    answer: "5 (Excellent)".into(),
                    answer_kind: AnswerKind::Rating,
                },
            ],
            submitted_at: jiff::Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn appointment_rows_quote_every_cell() {
        let csv = appointments_csv(&[appointment()]).unwrap();
        let mut lines = csv.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("\"ID\",\"Evaluator Name\""));
        let row = lines.next().unwrap();
        assert!(row.contains("\"Respite; Homemaker\""));
        assert!(row.contains("\"pending\""));
        // Address commas stay inside one quoted cell.
        assert!(row.contains("\"123 Main St, Denver, CO\""));
        assert!(lines.next().is_none());
    }

    #[test]
    fn missing_notes_render_as_empty_cell() {
        let csv = appointments_csv(&[appointment()]).unwrap();
        assert!(csv.contains("\"\",\"pending\""));
    }

    #[test]
    fn evaluations_flatten_to_one_row_per_answer() {
        let csv = evaluations_csv(&[evaluation()]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1]
            .contains("\"Was the staff punctual and consistent with scheduled visits?\",\"Yes\""));
        assert!(lines[2].contains("\"5 (Excellent)\""));
        for line in &lines[1..] {
            assert!(line.contains("\"Staff/Service Evaluation\""));
            assert!(line.contains("\"Dana Reyes\""));
        }
    }

    #[test]
    fn export_file_name_includes_tab_and_date() {
        assert_eq!(
            export_file_name(RecordKind::Appointment, civil::date(2026, 8, 27)),
            "FOR_ALL_HOME_CARE_appointments_2026-08-27.csv"
        );
    }
}
