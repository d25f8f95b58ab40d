//! Persistence error types.

use std::path::PathBuf;
use thiserror::Error;

/// Storage operation error.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing the store contents failed.
    #[error("Failed to serialize stored data")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// The temp file was written but could not replace the target.
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PersistenceError {
    /// A short Persian message for the player.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io { path, .. } => {
                format!("نتونستم فایل {} رو باز کنم یا بنویسم.", path.display())
            }
            Self::Serialization { .. } => "آماده کردن امتیازها برای ذخیره نشد.".to_string(),
            Self::AtomicWriteFailed { target_path, .. } => format!(
                "امتیازها در {} ذخیره نشد. جای خالی دیسک یا دسترسی پوشه رو بررسی کن.",
                target_path.display()
            ),
        }
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
