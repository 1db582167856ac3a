use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::application::invoice::RecordInvoiceCommand;
use crate::domain::invoice::LineItem;
use crate::domain::user::UserSummary;

/// Response listing every user
#[derive(Debug, Clone, Serialize)]
pub struct ListUsersResponse {
  /// Users projected to `_id` and `username`
  pub users: Vec<UserSummary>,
}

/// Standard success response for operations without data
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
  /// Success message
  pub message: String,
}

/// Request for recording an invoice
///
/// Only reached once the raw body has passed the invoice payload middleware.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceRequest {
  #[validate(length(min = 1, message = "Buyer name is required"))]
  pub buyer_name: String,

  #[validate(length(min = 1, message = "Date is required"))]
  pub date: String,

  pub total: Decimal,

  #[validate(nested)]
  pub list: Vec<LineItemRequest>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LineItemRequest {
  pub id: String,

  #[validate(length(min = 1, message = "Line item details are required"))]
  pub details: String,

  pub quantity: Decimal,
  pub rate: Decimal,
  pub total: Decimal,
}

impl From<LineItemRequest> for LineItem {
  fn from(item: LineItemRequest) -> Self {
    LineItem {
      id: item.id,
      details: item.details,
      quantity: item.quantity,
      rate: item.rate,
      total: item.total,
    }
  }
}

impl From<CreateInvoiceRequest> for RecordInvoiceCommand {
  fn from(request: CreateInvoiceRequest) -> Self {
    RecordInvoiceCommand {
      buyer_name: request.buyer_name,
      date: request.date,
      total: request.total,
      items: request.list.into_iter().map(LineItem::from).collect(),
    }
  }
}

/// Response after an invoice was recorded
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceResponse {
  pub id: Uuid,
  pub created_at: DateTime<Utc>,
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  /// Error type/code
  pub error: String,

  /// Human-readable error message
  pub message: String,

  /// Optional detailed error information
  #[serde(skip_serializing_if = "Option::is_none")]
  pub details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  fn request_json(details: &str) -> String {
    format!(
      r#"{{
        "buyerName": "Acme",
        "date": "2024-01-01",
        "total": 100,
        "list": [{{ "id": "1", "details": "{}", "quantity": 2, "rate": 50, "total": 100 }}]
      }}"#,
      details
    )
  }

  #[test]
  fn test_create_invoice_request_reads_camel_case() {
    let request: CreateInvoiceRequest = serde_json::from_str(&request_json("Widget")).unwrap();

    assert_eq!(request.buyer_name, "Acme");
    assert_eq!(request.list.len(), 1);
    assert_eq!(request.list[0].quantity, dec!(2));
    assert!(request.validate().is_ok());
  }

  #[test]
  fn test_create_invoice_request_rejects_empty_details() {
    let request: CreateInvoiceRequest = serde_json::from_str(&request_json("")).unwrap();

    assert!(request.validate().is_err());
  }

  #[test]
  fn test_request_converts_into_command() {
    let request: CreateInvoiceRequest = serde_json::from_str(&request_json("Widget")).unwrap();

    let command = RecordInvoiceCommand::from(request);

    assert_eq!(command.items[0].details, "Widget");
    assert_eq!(command.total, dec!(100));
  }

  #[test]
  fn test_fractional_amounts_are_read_exactly() {
    let request: CreateInvoiceRequest = serde_json::from_str(
      r#"{
        "buyerName": "Acme",
        "date": "2024-01-01",
        "total": 15.375,
        "list": [{ "id": "2", "details": "Gadget", "quantity": 1.5, "rate": 10.25, "total": 15.375 }]
      }"#,
    )
    .unwrap();

    assert_eq!(request.total, dec!(15.375));
    assert_eq!(request.list[0].rate, dec!(10.25));
  }

  #[test]
  fn test_list_users_response_shape() {
    let response = ListUsersResponse {
      users: vec![UserSummary::new("a", "alice")],
    };

    let json = serde_json::to_value(response).unwrap();

    assert_eq!(
      json,
      serde_json::json!({ "users": [{ "_id": "a", "username": "alice" }] })
    );
  }
}
