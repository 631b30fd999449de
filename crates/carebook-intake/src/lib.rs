//! carebook-intake
//!
//! View-layer state for the two frontend surfaces: the public intake form
//! (appointment details plus the optional evaluation questionnaire) and the
//! admin dashboard over submitted records. Pure state machines with no I/O;
//! the frontend drives them and hands the produced requests to
//! `carebook-client`.

pub mod admin;
pub mod form;

pub use admin::{AdminView, DashboardStats};
pub use form::{FormPhase, IntakeForm};
