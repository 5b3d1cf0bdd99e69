//! Error types for the Sitedesk application
//!
//! All errors use thiserror for structured error handling.
//! These errors can be serialized to the frontend.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Invalid backup document: {0}")]
    InvalidBackupDocument(String),

    #[error("Storage quota exceeded for slot '{slot}': {size} bytes (limit {limit})")]
    StorageQuotaExceeded {
        slot: String,
        size: usize,
        limit: usize,
    },
}

impl AppError {
    pub fn not_found(entity: &'static str, id: &str) -> Self {
        AppError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
