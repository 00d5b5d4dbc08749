use thiserror::Error;

use crate::domain::delete::DeleteError;
use crate::repository::errors::RepositoryError;

pub mod customers;
pub mod gate;
pub mod loader;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("type constraint violation: {0}")]
    TypeConstraint(String),

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("delete workflow error: {0}")]
    Workflow(#[from] DeleteError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
