use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::{Invoice, InvoiceError, InvoiceRepository, LineItem};

/// Command for recording a validated invoice
#[derive(Debug, Clone)]
pub struct RecordInvoiceCommand {
  pub buyer_name: String,
  pub date: String,
  pub total: Decimal,
  pub items: Vec<LineItem>,
}

#[derive(Debug, Clone)]
pub struct RecordInvoiceResponse {
  pub invoice_id: Uuid,
  pub created_at: DateTime<Utc>,
}

/// Use case for persisting an invoice that passed intake validation
pub struct RecordInvoiceUseCase {
  invoice_repo: Arc<dyn InvoiceRepository>,
}

impl RecordInvoiceUseCase {
  pub fn new(invoice_repo: Arc<dyn InvoiceRepository>) -> Self {
    Self { invoice_repo }
  }

  pub async fn execute(
    &self,
    command: RecordInvoiceCommand,
  ) -> Result<RecordInvoiceResponse, InvoiceError> {
    let invoice = Invoice::new(
      command.buyer_name,
      command.date,
      command.total,
      command.items,
    );

    let saved = self.invoice_repo.create(invoice).await?;

    tracing::info!(
      invoice_id = %saved.id,
      line_items = saved.items.len(),
      "Invoice recorded"
    );

    Ok(RecordInvoiceResponse {
      invoice_id: saved.id,
      created_at: saved.created_at,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;
  use crate::test_support::{InMemoryInvoiceRepository, UnavailableInvoiceRepository};

  fn command() -> RecordInvoiceCommand {
    RecordInvoiceCommand {
      buyer_name: "Acme".to_string(),
      date: "2024-01-01".to_string(),
      total: dec!(100),
      items: vec![LineItem {
        id: "1".to_string(),
        details: "Widget".to_string(),
        quantity: dec!(2),
        rate: dec!(50),
        total: dec!(100),
      }],
    }
  }

  #[tokio::test]
  async fn test_records_invoice() {
    let repo = Arc::new(InMemoryInvoiceRepository::default());
    let use_case = RecordInvoiceUseCase::new(repo.clone());

    let response = use_case.execute(command()).await.unwrap();

    let stored = repo.stored();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, response.invoice_id);
    assert_eq!(stored[0].buyer_name, "Acme");
    assert_eq!(stored[0].items.len(), 1);
    assert_eq!(stored[0].total, dec!(100));
  }

  #[tokio::test]
  async fn test_repository_failure_is_propagated() {
    let use_case = RecordInvoiceUseCase::new(Arc::new(UnavailableInvoiceRepository));

    let result = use_case.execute(command()).await;

    assert!(matches!(result, Err(InvoiceError::Repository(_))));
  }
}
