use thiserror::Error;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] rally_service::error::ServiceError),

    #[error(transparent)]
    DatabaseError(#[from] rally_db::error::DbError),

    #[error(transparent)]
    CoreError(#[from] rally_core::error::CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
