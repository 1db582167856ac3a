use std::sync::Arc;

use crate::domain::user::{UserError, UserRepository, UserSummary};

/// Use case for permanently removing a user
pub struct RemoveUserUseCase {
  user_repo: Arc<dyn UserRepository>,
}

impl RemoveUserUseCase {
  pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
    Self { user_repo }
  }

  /// Removes the user identified by `user_id`
  ///
  /// # Errors
  /// Returns `UserError::NotFound` when no user matched the identifier,
  /// or `UserError::Repository` if the store fails
  pub async fn execute(&self, user_id: &str) -> Result<UserSummary, UserError> {
    let removed = self
      .user_repo
      .delete_by_id(user_id)
      .await?
      .ok_or_else(|| UserError::NotFound(user_id.to_string()))?;

    tracing::info!(user_id = %removed.id, "User removed");

    Ok(removed)
  }
}
