//! In-memory adapter. Volatile; used for demos and as the reference
//! implementation the contract tests compare the durable backends against.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use carebook_core::models::{Appointment, AppointmentStatus, Evaluation, RecordKind};

use crate::error::StorageError;
use crate::Store;

#[derive(Default)]
struct Tables {
    appointments: Vec<Appointment>,
    evaluations: Vec<Evaluation>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create(
        &self,
        appointment: Appointment,
        evaluation: Option<Evaluation>,
    ) -> Result<(), StorageError> {
        // Single write lock makes the pair atomic.
        let mut tables = self.tables.write().await;
        tables.appointments.push(appointment);
        if let Some(evaluation) = evaluation {
            tables.evaluations.push(evaluation);
        }
        Ok(())
    }

    async fn list_appointments(&self) -> Result<Vec<Appointment>, StorageError> {
        Ok(self.tables.read().await.appointments.clone())
    }

    async fn list_evaluations(&self) -> Result<Vec<Evaluation>, StorageError> {
        Ok(self.tables.read().await.evaluations.clone())
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: AppointmentStatus,
    ) -> Result<(), StorageError> {
        let mut tables = self.tables.write().await;
        let appointment = tables
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StorageError::not_found(RecordKind::Appointment, id))?;
        appointment.status = status;
        Ok(())
    }

    async fn delete_appointment(&self, id: Uuid) -> Result<(), StorageError> {
        let mut tables = self.tables.write().await;
        let before = tables.appointments.len();
        tables.appointments.retain(|a| a.id != id);
        if tables.appointments.len() == before {
            return Err(StorageError::not_found(RecordKind::Appointment, id));
        }
        tables.evaluations.retain(|e| e.appointment_id != id);
        Ok(())
    }

    async fn delete_evaluation(&self, id: Uuid) -> Result<(), StorageError> {
        let mut tables = self.tables.write().await;
        let before = tables.evaluations.len();
        tables.evaluations.retain(|e| e.id != id);
        if tables.evaluations.len() == before {
            return Err(StorageError::not_found(RecordKind::Evaluation, id));
        }
        Ok(())
    }

    async fn health(&self) -> Result<(), StorageError> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
