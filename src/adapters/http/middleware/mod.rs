pub mod invoice_payload;
pub mod request_id;

pub use invoice_payload::{DEFAULT_MAX_PAYLOAD_BYTES, InvoicePayloadMiddleware};
pub use request_id::{RequestId, RequestIdExt, RequestIdMiddleware};
