// ==========================================
// Quadrant Engine - Importer Errors
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    // ===== File errors =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (only .csv)")]
    UnsupportedFormat(String),

    #[error("file read failed: {0}")]
    FileReadError(String),

    #[error("csv parse failed: {0}")]
    CsvParseError(String),

    // ===== Row mapping errors =====
    #[error("field mapping failed (row {row}): {message}")]
    FieldMappingError { row: usize, message: String },

    // ===== Database errors =====
    #[error("database error: {0}")]
    DatabaseError(String),

    // ===== Generic errors =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<crate::repository::error::RepositoryError> for ImportError {
    fn from(err: crate::repository::error::RepositoryError) -> Self {
        ImportError::DatabaseError(err.to_string())
    }
}

pub type ImportResult<T> = Result<T, ImportError>;
