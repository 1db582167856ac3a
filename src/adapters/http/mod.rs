pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;

// Re-export commonly used types
pub use dtos::{
  CreateInvoiceRequest, CreateInvoiceResponse, ErrorResponse, ListUsersResponse, SuccessResponse,
};
pub use errors::ApiError;
pub use handlers::health::health_check;
pub use handlers::invoices::create_invoice_handler;
pub use handlers::users::{list_users_handler, remove_user_handler};
pub use middleware::{InvoicePayloadMiddleware, RequestId, RequestIdExt, RequestIdMiddleware};
pub use routes::{configure_invoice_routes, configure_user_routes};
