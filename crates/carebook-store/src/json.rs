//! JSON document-directory adapter. One pretty-printed document per record
//! under `appointments/` and `evaluations/`, named by id. Writes go through
//! a temp file and rename so a crash never leaves a half-written document.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use carebook_core::models::{Appointment, AppointmentStatus, Evaluation, RecordKind};

use crate::error::StorageError;
use crate::Store;

pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: &Path) -> Result<Self, StorageError> {
        for kind in [RecordKind::Appointment, RecordKind::Evaluation] {
            std::fs::create_dir_all(root.join(dir_name(kind)))?;
        }
        Ok(JsonStore {
            root: root.to_path_buf(),
        })
    }

    fn doc_path(&self, kind: RecordKind, id: Uuid) -> PathBuf {
        self.root.join(dir_name(kind)).join(format!("{id}.json"))
    }

    fn write_doc<T: Serialize>(
        &self,
        kind: RecordKind,
        id: Uuid,
        record: &T,
    ) -> Result<(), StorageError> {
        let path = self.doc_path(kind, id);
        let json = serde_json::to_string_pretty(record)?;
        // Write to a temp file then rename for atomicity.
        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json.as_bytes())?;
        std::fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    fn read_doc<T: DeserializeOwned>(&self, kind: RecordKind, id: Uuid) -> Result<T, StorageError> {
        let path = self.doc_path(kind, id);
        if !path.exists() {
            return Err(StorageError::not_found(kind, id));
        }
        let contents = std::fs::read_to_string(&path)?;
        serde_json::from_str(&contents).map_err(|e| StorageError::corrupt(kind, id.to_string(), e))
    }

    fn list_docs<T: DeserializeOwned>(&self, kind: RecordKind) -> Result<Vec<T>, StorageError> {
        let dir = self.root.join(dir_name(kind));
        let mut records = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            let contents = std::fs::read_to_string(&path)?;
            let record = serde_json::from_str(&contents).map_err(|e| {
                StorageError::corrupt(kind, path.display().to_string(), e)
            })?;
            records.push(record);
        }
        Ok(records)
    }

    fn remove_doc(&self, kind: RecordKind, id: Uuid) -> Result<(), StorageError> {
        let path = self.doc_path(kind, id);
        if !path.exists() {
            return Err(StorageError::not_found(kind, id));
        }
        std::fs::remove_file(&path)?;
        Ok(())
    }
}

fn dir_name(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Appointment => "appointments",
        RecordKind::Evaluation => "evaluations",
    }
}

#[async_trait]
impl Store for JsonStore {
    async fn create(
        &self,
        appointment: Appointment,
        evaluation: Option<Evaluation>,
    ) -> Result<(), StorageError> {
        let appointment_id = appointment.id;
        self.write_doc(RecordKind::Appointment, appointment_id, &appointment)?;
        if let Some(evaluation) = &evaluation {
            if let Err(e) = self.write_doc(RecordKind::Evaluation, evaluation.id, evaluation) {
                // Compensate: don't leave an orphaned appointment behind.
                if let Err(cleanup) = self.remove_doc(RecordKind::Appointment, appointment_id) {
                    tracing::warn!(%appointment_id, error = %cleanup, "compensation failed");
                }
                return Err(e);
            }
        }
        Ok(())
    }

    async fn list_appointments(&self) -> Result<Vec<Appointment>, StorageError> {
        self.list_docs(RecordKind::Appointment)
    }

    async fn list_evaluations(&self) -> Result<Vec<Evaluation>, StorageError> {
        self.list_docs(RecordKind::Evaluation)
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: AppointmentStatus,
    ) -> Result<(), StorageError> {
        let mut appointment: Appointment = self.read_doc(RecordKind::Appointment, id)?;
        appointment.status = status;
        self.write_doc(RecordKind::Appointment, id, &appointment)
    }

    async fn delete_appointment(&self, id: Uuid) -> Result<(), StorageError> {
        self.remove_doc(RecordKind::Appointment, id)?;
        let evaluations: Vec<Evaluation> = self.list_docs(RecordKind::Evaluation)?;
        for evaluation in evaluations.iter().filter(|e| e.appointment_id == id) {
            self.remove_doc(RecordKind::Evaluation, evaluation.id)?;
        }
        Ok(())
    }

    async fn delete_evaluation(&self, id: Uuid) -> Result<(), StorageError> {
        self.remove_doc(RecordKind::Evaluation, id)
    }

    async fn health(&self) -> Result<(), StorageError> {
        for kind in [RecordKind::Appointment, RecordKind::Evaluation] {
            std::fs::read_dir(self.root.join(dir_name(kind)))?;
        }
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "json"
    }
}
