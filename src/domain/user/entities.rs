use serde::{Deserialize, Serialize};

/// Public projection of a user: identifier and username only
///
/// The listing and removal endpoints never load more than these two columns,
/// so contact details and timestamps cannot leak into a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
  #[serde(rename = "_id")]
  pub id: String,
  pub username: String,
}

impl UserSummary {
  pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      username: username.into(),
    }
  }
}
