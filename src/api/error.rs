// ==========================================
// Quadrant Engine - API Layer Errors
// ==========================================
// Responsibility: user-facing error type for the API layer and the
// translation from repository errors
// Red line: every message names an explicit cause
// ==========================================

use thiserror::Error;

use crate::repository::error::RepositoryError;

#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // Input and business rule errors
    // ==========================================
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("business rule violation: {0}")]
    BusinessRuleViolation(String),

    // ==========================================
    // Data access errors
    // ==========================================
    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("database connection failed: {0}")]
    DatabaseConnectionError(String),

    // ==========================================
    // Generic errors
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// From RepositoryError
// Purpose: turn storage-level failures into messages a caller can act on
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{} (id={}) does not exist", entity, id))
            }
            RepositoryError::DatabaseConnectionError(msg) => ApiError::DatabaseConnectionError(msg),
            RepositoryError::LockError(msg) => {
                ApiError::DatabaseConnectionError(format!("database lock acquisition failed: {}", msg))
            }
            RepositoryError::DatabaseQueryError(msg) => ApiError::DatabaseError(msg),
            RepositoryError::UniqueConstraintViolation(msg) => {
                ApiError::BusinessRuleViolation(format!("unique constraint violated: {}", msg))
            }
            RepositoryError::SerializationError(msg) => {
                ApiError::DatabaseError(format!("stored document failed to (de)serialize: {}", msg))
            }
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_conversion_names_entity_and_id() {
        let repo_err = RepositoryError::NotFound {
            entity: "ShiftRecord".to_string(),
            id: "q1".to_string(),
        };
        let api_err: ApiError = repo_err.into();
        match api_err {
            ApiError::NotFound(msg) => {
                assert!(msg.contains("ShiftRecord"));
                assert!(msg.contains("q1"));
            }
            _ => panic!("Expected NotFound"),
        }
    }

    #[test]
    fn test_lock_error_converts_to_connection_error() {
        let repo_err = RepositoryError::LockError("poisoned".to_string());
        let api_err: ApiError = repo_err.into();
        match api_err {
            ApiError::DatabaseConnectionError(msg) => assert!(msg.contains("poisoned")),
            _ => panic!("Expected DatabaseConnectionError"),
        }
    }
}
