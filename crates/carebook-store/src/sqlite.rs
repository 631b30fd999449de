//! SQLite adapter. Two tables mirroring the record schema; the ordered
//! multi-value `service_type` field is stored `", "`-joined, and evaluation
//! responses as a JSON column, both decoded back on read.

use std::path::Path;

use async_trait::async_trait;
use rusqlite::{params, Connection};
use tokio::sync::Mutex;
use uuid::Uuid;

use carebook_core::models::{
    Appointment, AppointmentStatus, Evaluation, RecordKind, ServiceType,
};

use crate::error::StorageError;
use crate::Store;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS appointments (
    id                    TEXT PRIMARY KEY,
    evaluator_name        TEXT NOT NULL,
    evaluator_signature   TEXT,
    parent_guardian_name  TEXT NOT NULL,
    client_name           TEXT NOT NULL,
    service_provider_name TEXT NOT NULL,
    email                 TEXT NOT NULL,
    phone                 TEXT NOT NULL,
    address               TEXT NOT NULL,
    appointment_date      TEXT NOT NULL,
    appointment_time      TEXT NOT NULL,
    service_type          TEXT NOT NULL,
    notes                 TEXT,
    status                TEXT NOT NULL,
    submitted_at          TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS evaluations (
    id                    TEXT PRIMARY KEY,
    appointment_id        TEXT NOT NULL,
    evaluation_type       TEXT NOT NULL,
    evaluator_name        TEXT NOT NULL,
    evaluator_signature   TEXT,
    parent_guardian_name  TEXT NOT NULL,
    client_name           TEXT NOT NULL,
    service_provider_name TEXT NOT NULL,
    service_type          TEXT NOT NULL,
    email                 TEXT NOT NULL,
    responses             TEXT NOT NULL,
    submitted_at          TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_evaluations_appointment
    ON evaluations (appointment_id);
";

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        Self::init(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(SCHEMA)?;
        Ok(SqliteStore {
            conn: Mutex::new(conn),
        })
    }
}

type AppointmentRow = (
    String,         // id
    String,         // evaluator_name
    Option<String>, // evaluator_signature
    String,         // parent_guardian_name
    String,         // client_name
    String,         // service_provider_name
    String,         // email
    String,         // phone
    String,         // address
    String,         // appointment_date
    String,         // appointment_time
    String,         // service_type
    Option<String>, // notes
    String,         // status
    String,         // submitted_at
);

fn decode_appointment(row: AppointmentRow) -> Result<Appointment, StorageError> {
    let kind = RecordKind::Appointment;
    let id_text = row.0;
    let corrupt = |message: &dyn std::fmt::Display| {
        StorageError::corrupt(kind, id_text.clone(), message)
    };

    Ok(Appointment {
        id: id_text.parse().map_err(|e| corrupt(&e))?,
        evaluator_name: row.1,
        evaluator_signature: row.2,
        parent_guardian_name: row.3,
        client_name: row.4,
        service_provider_name: row.5,
        email: row.6,
        phone: row.7,
        address: row.8,
        appointment_date: row.9.parse().map_err(|e| corrupt(&e))?,
        appointment_time: row.10.parse().map_err(|e| corrupt(&e))?,
        service_type: ServiceType::split(&row.11).map_err(|e| corrupt(&e))?,
        notes: row.12,
        status: row.13.parse().map_err(|e| corrupt(&e))?,
        submitted_at: row.14.parse().map_err(|e| corrupt(&e))?,
    })
}

type EvaluationRow = (
    String,         // id
    String,         // appointment_id
    String,         // evaluation_type
    String,         // evaluator_name
    Option<String>, // evaluator_signature
    String,         // parent_guardian_name
    String,         // client_name
    String,         // service_provider_name
    String,         // service_type
    String,         // email
    String,         // responses (JSON)
    String,         // submitted_at
);

fn decode_evaluation(row: EvaluationRow) -> Result<Evaluation, StorageError> {
    let kind = RecordKind::Evaluation;
    let id_text = row.0;
    let corrupt = |message: &dyn std::fmt::Display| {
        StorageError::corrupt(kind, id_text.clone(), message)
    };

    Ok(Evaluation {
        id: id_text.parse().map_err(|e| corrupt(&e))?,
        appointment_id: row.1.parse().map_err(|e| corrupt(&e))?,
        evaluation_type: row.2.parse().map_err(|e| corrupt(&e))?,
        evaluator_name: row.3,
        evaluator_signature: row.4,
        parent_guardian_name: row.5,
        client_name: row.6,
        service_provider_name: row.7,
        service_type: ServiceType::split(&row.8).map_err(|e| corrupt(&e))?,
        email: row.9,
        responses: serde_json::from_str(&row.10).map_err(|e| corrupt(&e))?,
        submitted_at: row.11.parse().map_err(|e| corrupt(&e))?,
    })
}

fn insert_evaluation(conn: &Connection, evaluation: &Evaluation) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO evaluations (id, appointment_id, evaluation_type, evaluator_name,
             evaluator_signature, parent_guardian_name, client_name, service_provider_name,
             service_type, email, responses, submitted_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            evaluation.id.to_string(),
            evaluation.appointment_id.to_string(),
            evaluation.evaluation_type.as_str(),
            evaluation.evaluator_name,
            evaluation.evaluator_signature,
            evaluation.parent_guardian_name,
            evaluation.client_name,
            evaluation.service_provider_name,
            ServiceType::join(&evaluation.service_type),
            evaluation.email,
            serde_json::to_string(&evaluation.responses)?,
            evaluation.submitted_at.to_string(),
        ],
    )?;
    Ok(())
}

#[async_trait]
impl Store for SqliteStore {
    async fn create(
        &self,
        appointment: Appointment,
        evaluation: Option<Evaluation>,
    ) -> Result<(), StorageError> {
        let mut conn = self.conn.lock().await;
        // One transaction: the pair lands both-or-neither.
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO appointments (id, evaluator_name, evaluator_signature,
                 parent_guardian_name, client_name, service_provider_name, email, phone,
                 address, appointment_date, appointment_time, service_type, notes, status,
                 submitted_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
            params![
                appointment.id.to_string(),
                appointment.evaluator_name,
                appointment.evaluator_signature,
                appointment.parent_guardian_name,
                appointment.client_name,
                appointment.service_provider_name,
                appointment.email,
                appointment.phone,
                appointment.address,
                appointment.appointment_date.to_string(),
                appointment.appointment_time.to_string(),
                ServiceType::join(&appointment.service_type),
                appointment.notes,
                appointment.status.as_str(),
                appointment.submitted_at.to_string(),
            ],
        )?;
        if let Some(evaluation) = &evaluation {
            insert_evaluation(&tx, evaluation)?;
        }
        tx.commit()?;
        Ok(())
    }

    async fn list_appointments(&self) -> Result<Vec<Appointment>, StorageError> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(
            "SELECT id, evaluator_name, evaluator_signature, parent_guardian_name,
                    client_name, service_provider_name, email, phone, address,
                    appointment_date, appointment_time, service_type, notes, status,
                    submitted_at
             FROM appointments",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
                row.get(6)?,
                row.get(7)?,
                row.get(8)?,
                row.get(9)?,
                row.get(10)?,
                row.get(11)?,
                row.get(12)?,
                row.get(13)?,
                row.get(14)?,
            ))
        })?;

        rows.map(|row| decode_appointment(row?)).collect()
    }

    async fn list_evaluations(&self) -> Result<Vec<Evaluation>, StorageError> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(
            "SELECT id, appointment_id, evaluation_type, evaluator_name,
                    evaluator_signature, parent_guardian_name, client_name,
                    service_provider_name, service_type, email, responses, submitted_at
             FROM evaluations",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
                row.get(6)?,
                row.get(7)?,
                row.get(8)?,
                row.get(9)?,
                row.get(10)?,
                row.get(11)?,
            ))
        })?;

        rows.map(|row| decode_evaluation(row?)).collect()
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: AppointmentStatus,
    ) -> Result<(), StorageError> {
        let conn = self.conn.lock().await;
        let changed = conn.execute(
            "UPDATE appointments SET status = ?1 WHERE id = ?2",
            params![status.as_str(), id.to_string()],
        )?;
        if changed == 0 {
            return Err(StorageError::not_found(RecordKind::Appointment, id));
        }
        Ok(())
    }

    async fn delete_appointment(&self, id: Uuid) -> Result<(), StorageError> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;
        let deleted = tx.execute(
            "DELETE FROM appointments WHERE id = ?1",
            params![id.to_string()],
        )?;
        if deleted == 0 {
            return Err(StorageError::not_found(RecordKind::Appointment, id));
        }
        let cascaded = tx.execute(
            "DELETE FROM evaluations WHERE appointment_id = ?1",
            params![id.to_string()],
        )?;
        tx.commit()?;
        tracing::debug!(%id, cascaded, "appointment deleted");
        Ok(())
    }

    async fn delete_evaluation(&self, id: Uuid) -> Result<(), StorageError> {
        let conn = self.conn.lock().await;
        let deleted = conn.execute(
            "DELETE FROM evaluations WHERE id = ?1",
            params![id.to_string()],
        )?;
        if deleted == 0 {
            return Err(StorageError::not_found(RecordKind::Evaluation, id));
        }
        Ok(())
    }

    async fn health(&self) -> Result<(), StorageError> {
        let conn = self.conn.lock().await;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}
