use async_trait::async_trait;

use super::entities::Invoice;
use super::errors::InvoiceError;

#[async_trait]
pub trait InvoiceRepository: Send + Sync {
  async fn create(&self, invoice: Invoice) -> Result<Invoice, InvoiceError>;
}
