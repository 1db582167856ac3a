//! Intake checks for invoice payloads.
//!
//! The payload is inspected as raw JSON so that missing fields and wrong
//! types can be told apart from a body that simply fails to deserialize.
//! Nothing here mutates the payload.

use serde_json::{Map, Value};
use std::fmt;

/// Top-level fields every invoice payload must carry, in inspection order
pub const REQUIRED_FIELDS: [&str; 4] = ["buyerName", "date", "list", "total"];

/// Outcome of inspecting an invoice payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceCheck {
  /// Payload is complete, the request may continue
  Pass,

  /// Payload is missing data or carries a malformed line item
  IncompleteData(IncompleteReason),

  /// A line item could not be inspected at all (a `null` entry)
  ServerError,
}

/// Why a payload was rejected as incomplete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncompleteReason {
  /// A required top-level field is absent, null, false, zero or empty
  MissingField(&'static str),

  /// `list` is present but not an array
  ListNotSequence,

  /// The line item at `index` is the first one failing the field rules
  InvalidLineItem { index: usize },
}

impl fmt::Display for IncompleteReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      IncompleteReason::MissingField(field) => write!(f, "missing field `{}`", field),
      IncompleteReason::ListNotSequence => write!(f, "`list` is not an array"),
      IncompleteReason::InvalidLineItem { index } => write!(f, "line item {} is invalid", index),
    }
  }
}

/// Inspects a raw request body
///
/// A body that is not valid JSON is treated like an empty payload and so
/// fails the required-field check.
pub fn check_invoice_body(body: &[u8]) -> InvoiceCheck {
  let payload = serde_json::from_slice::<Value>(body).unwrap_or_else(|e| {
    tracing::debug!("Invoice body is not valid JSON: {}", e);
    Value::Null
  });

  validate_invoice_payload(&payload)
}

/// Inspects an already parsed invoice payload
///
/// Required fields are checked for truthiness before `list` is looked at, so
/// a payload with `total: 0` is rejected. Line items are checked in order and
/// inspection stops at the first offending item.
pub fn validate_invoice_payload(payload: &Value) -> InvoiceCheck {
  if let Some(field) = REQUIRED_FIELDS
    .into_iter()
    .find(|field| !is_truthy(payload.get(*field)))
  {
    return InvoiceCheck::IncompleteData(IncompleteReason::MissingField(field));
  }

  let Some(items) = payload.get("list").and_then(Value::as_array) else {
    return InvoiceCheck::IncompleteData(IncompleteReason::ListNotSequence);
  };

  check_line_items(items)
}

/// Checks line items in order, stopping at the first offending one
///
/// Items after the offending one are never pulled from the iterator. A
/// `null` entry has no fields to read and yields `ServerError`; any other
/// non-object entry is incomplete.
pub fn check_line_items<'a, I>(items: I) -> InvoiceCheck
where
  I: IntoIterator<Item = &'a Value>,
{
  for (index, item) in items.into_iter().enumerate() {
    match item {
      Value::Null => {
        tracing::error!(index, "Invoice line item is null and cannot be inspected");
        return InvoiceCheck::ServerError;
      }
      Value::Object(fields) if is_complete_line_item(fields) => {}
      _ => return InvoiceCheck::IncompleteData(IncompleteReason::InvalidLineItem { index }),
    }
  }

  InvoiceCheck::Pass
}

fn is_complete_line_item(fields: &Map<String, Value>) -> bool {
  let details_ok = matches!(fields.get("details"), Some(Value::String(details)) if !details.is_empty());

  matches!(fields.get("id"), Some(Value::String(_)))
    && details_ok
    && ["quantity", "rate", "total"]
      .iter()
      .all(|key| fields.get(*key).is_some_and(Value::is_number))
}

fn is_truthy(value: Option<&Value>) -> bool {
  match value {
    None | Some(Value::Null) => false,
    Some(Value::Bool(flag)) => *flag,
    Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
    Some(Value::String(s)) => !s.is_empty(),
    Some(Value::Array(_)) | Some(Value::Object(_)) => true,
  }
}
