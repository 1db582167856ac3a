//! Invoice intake use cases

mod record_invoice;

pub use record_invoice::{RecordInvoiceCommand, RecordInvoiceResponse, RecordInvoiceUseCase};
