use actix_web::web;
use std::sync::Arc;

use crate::application::invoice::RecordInvoiceUseCase;
use crate::application::user::{ListUsersUseCase, RemoveUserUseCase};

use super::errors::ApiError;
use super::handlers::invoices::create_invoice_handler;
use super::handlers::users::{list_users_handler, remove_user_handler};
use super::middleware::InvoicePayloadMiddleware;

/// Configure user administration routes
///
/// Mounts the user endpoints under the provided scope (e.g., /api/users).
///
/// # Routes
///
/// - GET / - List all users as `{ users: [{ _id, username }] }`
/// - DELETE /{id} - Remove a user
///
/// # Example
///
/// ```no_run
/// use actix_web::{App, web};
/// use std::sync::Arc;
/// # use ledger_api::application::user::*;
/// # use ledger_api::adapters::http::routes::configure_user_routes;
///
/// # async fn example(
/// #   list_users_use_case: Arc<ListUsersUseCase>,
/// #   remove_user_use_case: Arc<RemoveUserUseCase>,
/// # ) {
/// let app = App::new().service(web::scope("/api/users").configure(|cfg| {
///   configure_user_routes(cfg, list_users_use_case, remove_user_use_case)
/// }));
/// # }
/// ```
pub fn configure_user_routes(
  cfg: &mut web::ServiceConfig,
  list_users_use_case: Arc<ListUsersUseCase>,
  remove_user_use_case: Arc<RemoveUserUseCase>,
) {
  cfg
    .app_data(web::Data::new(list_users_use_case))
    .app_data(web::Data::new(remove_user_use_case))
    .route("", web::get().to(list_users_handler))
    .route("/{id}", web::delete().to(remove_user_handler));
}

/// Configure invoice intake routes
///
/// The create route is wrapped in `InvoicePayloadMiddleware`, so the handler
/// only ever sees payloads that passed the intake checks.
///
/// # Routes
///
/// - POST / - Record an invoice
///
/// Any other method on the resource is answered with 405 without the body
/// being inspected.
pub fn configure_invoice_routes(
  cfg: &mut web::ServiceConfig,
  record_invoice_use_case: Arc<RecordInvoiceUseCase>,
  max_payload_bytes: usize,
) {
  cfg
    .app_data(web::Data::new(record_invoice_use_case))
    .app_data(
      web::JsonConfig::default()
        .limit(max_payload_bytes)
        .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
    )
    .service(
      web::resource("")
        .wrap(InvoicePayloadMiddleware::new(max_payload_bytes))
        .route(web::post().to(create_invoice_handler)),
    );
}
