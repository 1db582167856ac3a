use std::sync::Arc;

use crate::domain::user::{UserError, UserRepository, UserSummary};

/// Response containing every known user, projected to id and username
#[derive(Debug, Clone)]
pub struct ListUsersResponse {
  pub users: Vec<UserSummary>,
}

/// Use case for listing all users
pub struct ListUsersUseCase {
  user_repo: Arc<dyn UserRepository>,
}

impl ListUsersUseCase {
  /// Creates a new instance of ListUsersUseCase
  pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
    Self { user_repo }
  }

  /// Executes the list users use case
  ///
  /// # Errors
  /// Returns `UserError::Repository` if the store cannot be queried
  pub async fn execute(&self) -> Result<ListUsersResponse, UserError> {
    let users = self.user_repo.list_summaries().await?;

    tracing::debug!(count = users.len(), "Listed users");

    Ok(ListUsersResponse { users })
  }
}
