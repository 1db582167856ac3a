use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::invoice::InvoiceError;
use crate::domain::user::UserError;

use super::dtos::ErrorResponse;

/// API error type that maps domain errors to HTTP responses
#[derive(Debug)]
pub enum ApiError {
  /// Invoice payload is missing data (400 Bad Request)
  IncompleteData,

  /// Typed request validation error (400 Bad Request)
  Validation(String),

  /// Internal server error (500 Internal Server Error)
  Internal(String),
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::IncompleteData => write!(f, "Incomplete data"),
      ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::IncompleteData => StatusCode::BAD_REQUEST,
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    let (error_type, message) = match self {
      ApiError::IncompleteData => ("incomplete_data", "Incomplete data".to_string()),
      ApiError::Validation(msg) => ("validation_error", msg.clone()),
      ApiError::Internal(msg) => {
        // Don't expose internal error details to callers
        tracing::error!("Internal error: {}", msg);
        (
          "internal_error",
          "An internal server error occurred".to_string(),
        )
      }
    };

    let error_response = ErrorResponse {
      error: error_type.to_string(),
      message,
      details: None,
    };

    HttpResponse::build(status)
      .content_type(ContentType::json())
      .json(error_response)
  }
}

/// Convert UserError to ApiError
///
/// A delete that matched nothing is reported as a server error, the same
/// as a failing store.
impl From<UserError> for ApiError {
  fn from(error: UserError) -> Self {
    match error {
      UserError::NotFound(id) => ApiError::Internal(format!("No user matched id {}", id)),
      UserError::Repository(e) => ApiError::Internal(format!("Repository error: {}", e)),
    }
  }
}

impl From<InvoiceError> for ApiError {
  fn from(error: InvoiceError) -> Self {
    match error {
      InvoiceError::Repository(e) => ApiError::Internal(format!("Repository error: {}", e)),
    }
  }
}

/// Convert validation errors from validator crate
impl From<validator::ValidationErrors> for ApiError {
  fn from(errors: validator::ValidationErrors) -> Self {
    let mut messages: Vec<String> = errors
      .errors()
      .iter()
      .map(|(field, kind)| match kind {
        validator::ValidationErrorsKind::Field(field_errors) => field_errors
          .iter()
          .map(|error| {
            error
              .message
              .as_ref()
              .map(|m| m.to_string())
              .unwrap_or_else(|| format!("Invalid field: {}", field))
          })
          .collect::<Vec<_>>()
          .join(", "),
        _ => format!("Invalid field: {}", field),
      })
      .collect();
    messages.sort();

    ApiError::Validation(messages.join(", "))
  }
}
