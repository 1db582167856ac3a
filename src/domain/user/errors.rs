use thiserror::Error;

use crate::domain::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum UserError {
  #[error("User not found: {0}")]
  NotFound(String),

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),
}

impl From<sqlx::Error> for UserError {
  fn from(error: sqlx::Error) -> Self {
    UserError::Repository(RepositoryError::from(error))
  }
}
