//! Error types for the kanban engine
//!
//! Only the edges of the engine can fail: decoding seed documents, validating
//! them, and loading configuration. Moving tasks and driving a drag session
//! never produce an error; malformed input there degrades to a no-op.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for kanban operations
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors that can occur in kanban operations
#[derive(Debug, Error)]
pub enum KanbanError {
    /// Column identifier is not one of the board's columns
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Duplicate ID
    #[error("duplicate {item_type} ID: {id}")]
    DuplicateId { item_type: String, id: String },

    /// Parse error
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Seed or config file has an extension we cannot decode
    #[error("unsupported file format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// Configuration could not be extracted
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl KanbanError {
    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate ID error
    pub fn duplicate_id(item_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            item_type: item_type.into(),
            id: id.into(),
        }
    }
}

impl From<figment::Error> for KanbanError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}
