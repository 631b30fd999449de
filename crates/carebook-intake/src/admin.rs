//! Admin dashboard view model.
//!
//! Holds the fetched record lists, derives the headline counts, and gates
//! which status changes the UI may offer. Refreshing and mutating go through
//! `carebook-client`; this module only shapes what gets rendered.

use jiff::civil;

use carebook_core::models::{Appointment, AppointmentStatus, Evaluation, RecordKind};
use carebook_export::ExportError;

/// Headline counts shown above the record tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub pending: usize,
    pub approved: usize,
    pub total_appointments: usize,
    pub total_evaluations: usize,
}

/// Status changes the dashboard offers for a record in `from`. Only pending
/// appointments are actionable; approved and declined are terminal in the UI.
pub fn allowed_transitions(from: AppointmentStatus) -> &'static [AppointmentStatus] {
    match from {
        AppointmentStatus::Pending => &[AppointmentStatus::Approved, AppointmentStatus::Declined],
        AppointmentStatus::Approved | AppointmentStatus::Declined => &[],
    }
}

pub fn can_transition(from: AppointmentStatus, to: AppointmentStatus) -> bool {
    allowed_transitions(from).contains(&to)
}

#[derive(Debug)]
pub struct AdminView {
    pub active_tab: RecordKind,
    appointments: Vec<Appointment>,
    evaluations: Vec<Evaluation>,
}

impl Default for AdminView {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminView {
    pub fn new() -> Self {
        AdminView {
            active_tab: RecordKind::Appointment,
            appointments: Vec::new(),
            evaluations: Vec::new(),
        }
    }

    /// Replace both lists with freshly fetched data. Lists render newest
    /// first regardless of backend ordering.
    pub fn load(&mut self, mut appointments: Vec<Appointment>, mut evaluations: Vec<Evaluation>) {
        appointments.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        evaluations.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        self.appointments = appointments;
        self.evaluations = evaluations;
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn evaluations(&self) -> &[Evaluation] {
        &self.evaluations
    }

    pub fn stats(&self) -> DashboardStats {
        let pending = self.count_status(AppointmentStatus::Pending);
        let approved = self.count_status(AppointmentStatus::Approved);
        DashboardStats {
            pending,
            approved,
            total_appointments: self.appointments.len(),
            total_evaluations: self.evaluations.len(),
        }
    }

    fn count_status(&self, status: AppointmentStatus) -> usize {
        self.appointments
            .iter()
            .filter(|a| a.status == status)
            .count()
    }

    /// CSV of whichever list is on screen.
    pub fn export_csv(&self) -> Result<String, ExportError> {
        match self.active_tab {
            RecordKind::Appointment => carebook_export::appointments_csv(&self.appointments),
            RecordKind::Evaluation => carebook_export::evaluations_csv(&self.evaluations),
        }
    }

    pub fn export_file_name(&self, today: civil::Date) -> String {
        carebook_export::export_file_name(self.active_tab, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carebook_core::models::ServiceType;
    use uuid::Uuid;

    fn appointment(status: AppointmentStatus, submitted_at: jiff::Timestamp) -> Appointment {
        Appointment {
            id: Uuid::new_v4(),
            evaluator_name: "Dana Reyes".into(),
            evaluator_signature: None,
            parent_guardian_name: "Morgan Reyes".into(),
            client_name: "Alex Reyes".into(),
            service_provider_name: "Sam Okafor".into(),
            email: "dana@example.com".into(),
            phone: "555-0100".into(),
            address: "123 Main St".into(),
            appointment_date: civil::date(2026, 9, 10),
            appointment_time: civil::time(10, 30, 0, 0),
            service_type: vec![ServiceType::Respite],
            notes: None,
            status,
            submitted_at,
        }
    }

    fn at(seconds: i64) -> jiff::Timestamp {
        jiff::Timestamp::from_second(seconds).unwrap()
    }

    #[test]
    fn stats_count_by_status() {
        let mut view = AdminView::new();
        view.load(
            vec![
                appointment(AppointmentStatus::Pending, at(1)),
                appointment(AppointmentStatus::Pending, at(2)),
                appointment(AppointmentStatus::Approved, at(3)),
                appointment(AppointmentStatus::Declined, at(4)),
            ],
            vec![],
        );
        let stats = view.stats();
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.approved, 1);
        assert_eq!(stats.total_appointments, 4);
        assert_eq!(stats.total_evaluations, 0);
    }

    #[test]
    fn lists_render_newest_first() {
        let mut view = AdminView::new();
        view.load(
            vec![
                appointment(AppointmentStatus::Pending, at(10)),
                appointment(AppointmentStatus::Pending, at(30)),
                appointment(AppointmentStatus::Pending, at(20)),
            ],
            vec![],
        );
        let times: Vec<_> = view
            .appointments()
            .iter()
            .map(|a| a.submitted_at)
            .collect();
        assert_eq!(times, vec![at(30), at(20), at(10)]);
    }

    #[test]
    fn only_pending_appointments_are_actionable() {
        assert!(can_transition(
            AppointmentStatus::Pending,
            AppointmentStatus::Approved
        ));
        assert!(can_transition(
            AppointmentStatus::Pending,
            AppointmentStatus::Declined
        ));
        assert!(!can_transition(
            AppointmentStatus::Approved,
            AppointmentStatus::Declined
        ));
        assert!(!can_transition(
            AppointmentStatus::Declined,
            AppointmentStatus::Pending
        ));
        assert!(allowed_transitions(AppointmentStatus::Approved).is_empty());
    }

    #[test]
    fn export_follows_the_active_tab() {
        let mut view = AdminView::new();
        view.load(vec![appointment(AppointmentStatus::Pending, at(1))], vec![]);
        let csv = view.export_csv().unwrap();
        assert!(csv.starts_with("\"ID\""));

        view.active_tab = RecordKind::Evaluation;
        let csv = view.export_csv().unwrap();
        assert!(csv.starts_with("\"Evaluation ID\""));
        assert_eq!(
            view.export_file_name(civil::date(2026, 8, 27)),
            "FOR_ALL_HOME_CARE_evaluations_2026-08-27.csv"
        );
    }
}
