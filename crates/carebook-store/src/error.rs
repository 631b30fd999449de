use carebook_core::models::RecordKind;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: RecordKind, id: Uuid },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt {kind} record {id}: {message}")]
    Corrupt {
        kind: RecordKind,
        id: String,
        message: String,
    },

    #[error("unknown storage backend: {0}")]
    UnknownBackend(String),
}

impl StorageError {
    pub fn not_found(kind: RecordKind, id: Uuid) -> Self {
        StorageError::NotFound { kind, id }
    }

    pub fn corrupt(kind: RecordKind, id: impl Into<String>, message: impl ToString) -> Self {
        StorageError::Corrupt {
            kind,
            id: id.into(),
            message: message.to_string(),
        }
    }
}
