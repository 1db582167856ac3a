use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::adapters::http::{
  dtos::{ListUsersResponse, SuccessResponse},
  errors::ApiError,
};
use crate::application::user::{ListUsersUseCase, RemoveUserUseCase};

/// Handler for listing users
///
/// GET /api/users
/// Response: ListUsersResponse (JSON) with status 200
pub async fn list_users_handler(
  use_case: web::Data<Arc<ListUsersUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = use_case.execute().await?;

  Ok(HttpResponse::Ok().json(ListUsersResponse {
    users: response.users,
  }))
}

/// Handler for removing a user
///
/// DELETE /api/users/{id}
/// Response: SuccessResponse (JSON) with status 200
pub async fn remove_user_handler(
  path: web::Path<String>,
  use_case: web::Data<Arc<RemoveUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let user_id = path.into_inner();

  use_case.execute(&user_id).await?;

  Ok(HttpResponse::Ok().json(SuccessResponse {
    message: "User has been removed".to_string(),
  }))
}
