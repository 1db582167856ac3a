use async_trait::async_trait;

use super::entities::UserSummary;
use super::errors::UserError;

/// Repository trait for user persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
  /// Lists every user, projected to identifier and username
  async fn list_summaries(&self) -> Result<Vec<UserSummary>, UserError>;

  /// Deletes the user with the given identifier
  ///
  /// Returns the removed record, or `None` when no user matched.
  async fn delete_by_id(&self, id: &str) -> Result<Option<UserSummary>, UserError>;
}
