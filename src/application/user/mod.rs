//! User administration use cases

mod list_users;
mod remove_user;

pub use list_users::{ListUsersResponse, ListUsersUseCase};
pub use remove_user::RemoveUserUseCase;
