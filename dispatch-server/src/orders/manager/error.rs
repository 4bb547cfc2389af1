use super::super::storage::StorageError;
use super::super::traits::OrderError;
use shared::order::{CommandError, CommandErrorCode};
use thiserror::Error;

/// Manager errors
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error("Duplicate command: {0}")]
    Duplicate(String),
}

impl From<ManagerError> for CommandError {
    fn from(err: ManagerError) -> Self {
        let (code, message) = match &err {
            ManagerError::Storage(e) => {
                tracing::error!(error = %e, "Storage error while processing command");
                (CommandErrorCode::Storage, err.to_string())
            }
            ManagerError::Order(e) => (e.code(), err.to_string()),
            ManagerError::Duplicate(_) => (CommandErrorCode::DuplicateCommand, err.to_string()),
        };
        CommandError { code, message }
    }
}

pub type ManagerResult<T> = Result<T, ManagerError>;
