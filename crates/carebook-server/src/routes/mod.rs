pub mod appointments;
pub mod evaluations;
pub mod health;
pub mod questionnaires;
