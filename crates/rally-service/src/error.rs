use thiserror::Error;

use crate::practice::types::ConflictRecord;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    DatabaseError(#[from] rally_db::error::DbError),

    #[error(transparent)]
    CoreError(#[from] rally_core::error::CoreError),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Validation error: {field}: {message}")]
    ValidationError { field: &'static str, message: String },

    #[error("Recurrence error: {0}")]
    RecurrenceConfigError(String),

    #[error("Schedule conflict: {} existing practice(s) overlap", .0.len())]
    Conflict(Vec<ConflictRecord>),

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Diesel error: {0}")]
    DieselError(#[from] diesel::result::Error),
}

impl ServiceError {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field,
            message: message.into(),
        }
    }

    /// Whether the error came from the persistence collaborator.
    #[must_use]
    pub const fn is_store_error(&self) -> bool {
        matches!(
            self,
            Self::StoreError(_) | Self::DatabaseError(_) | Self::DieselError(_)
        )
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
