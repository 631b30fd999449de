//! carebook-store
//!
//! The storage-adapter contract and its interchangeable implementations.
//! Every backend exposes identical external semantics; which one runs is a
//! deployment configuration choice, not a code path.

pub mod error;
pub mod json;
pub mod memory;
pub mod sqlite;

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use carebook_core::models::{Appointment, AppointmentStatus, Evaluation};
use error::StorageError;

/// The CRUD contract every backend satisfies.
///
/// Semantics shared by all implementations:
/// - `create` persists the appointment/evaluation pair both-or-neither: a
///   failed evaluation write must not leave the appointment behind.
/// - mutation/delete targets that do not exist fail with
///   [`StorageError::NotFound`] — never a silent no-op.
/// - no ordering is guaranteed by `list_*`; callers sort for display.
#[async_trait]
pub trait Store: Send + Sync {
    async fn create(
        &self,
        appointment: Appointment,
        evaluation: Option<Evaluation>,
    ) -> Result<(), StorageError>;

    async fn list_appointments(&self) -> Result<Vec<Appointment>, StorageError>;

    async fn list_evaluations(&self) -> Result<Vec<Evaluation>, StorageError>;

    /// Set `status` on the matching appointment, leaving every other field
    /// untouched.
    async fn update_status(
        &self,
        id: Uuid,
        status: AppointmentStatus,
    ) -> Result<(), StorageError>;

    /// Delete an appointment and cascade-delete its evaluations.
    async fn delete_appointment(&self, id: Uuid) -> Result<(), StorageError>;

    async fn delete_evaluation(&self, id: Uuid) -> Result<(), StorageError>;

    /// Side-effect-free liveness probe of the backing store.
    async fn health(&self) -> Result<(), StorageError>;

    /// Short backend label reported by `/health`.
    fn backend_name(&self) -> &'static str;
}

/// Which adapter to run, selected by configuration at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Memory,
    Sqlite,
    Json,
}

impl FromStr for Backend {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "memory" => Ok(Backend::Memory),
            "sqlite" => Ok(Backend::Sqlite),
            "json" => Ok(Backend::Json),
            other => Err(StorageError::UnknownBackend(other.to_string())),
        }
    }
}

/// Construct the configured backend. `data_dir` holds `carebook.db` for
/// SQLite and the document tree for the JSON store; the memory backend
/// ignores it.
pub fn open_backend(backend: Backend, data_dir: &Path) -> Result<Arc<dyn Store>, StorageError> {
    match backend {
        Backend::Memory => Ok(Arc::new(memory::MemoryStore::new())),
        Backend::Sqlite => {
            std::fs::create_dir_all(data_dir)?;
            Ok(Arc::new(sqlite::SqliteStore::open(
                &data_dir.join("carebook.db"),
            )?))
        }
        Backend::Json => Ok(Arc::new(json::JsonStore::new(data_dir)?)),
    }
}
