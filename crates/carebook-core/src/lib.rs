//! carebook-core
//!
//! Pure domain types and field-validation rules for the Carebook intake
//! system. No storage or HTTP dependency — this is the shared vocabulary of
//! every backend adapter, the server, and the form controller.

pub mod error;
pub mod models;
pub mod validate;
