pub mod entities;
pub mod errors;
pub mod ports;
pub mod validation;

pub use entities::{Invoice, LineItem};
pub use errors::InvoiceError;
pub use ports::InvoiceRepository;
pub use validation::{
  IncompleteReason, InvoiceCheck, check_invoice_body, check_line_items,
  validate_invoice_payload,
};
