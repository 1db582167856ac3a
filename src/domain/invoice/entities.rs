use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single billed line on an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
  pub id: String,
  pub details: String,
  pub quantity: Decimal,
  pub rate: Decimal,
  pub total: Decimal,
}

// Invoice - recorded once its payload has passed intake validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
  pub id: Uuid,
  pub buyer_name: String,
  pub date: String,
  pub total: Decimal,
  pub items: Vec<LineItem>,
  pub created_at: DateTime<Utc>,
}

impl Invoice {
  pub fn new(buyer_name: String, date: String, total: Decimal, items: Vec<LineItem>) -> Self {
    Self {
      id: Uuid::new_v4(),
      buyer_name,
      date,
      total,
      items,
      created_at: Utc::now(),
    }
  }

  pub fn from_db(
    id: Uuid,
    buyer_name: String,
    date: String,
    total: Decimal,
    items: Vec<LineItem>,
    created_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      buyer_name,
      date,
      total,
      items,
      created_at,
    }
  }
}
