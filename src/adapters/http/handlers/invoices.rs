use actix_web::{HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::adapters::http::{
  dtos::{CreateInvoiceRequest, CreateInvoiceResponse},
  errors::ApiError,
};
use crate::application::invoice::RecordInvoiceUseCase;

/// Handler for recording an invoice
///
/// POST /api/invoices
/// Body: CreateInvoiceRequest (JSON), already checked by InvoicePayloadMiddleware
/// Response: CreateInvoiceResponse (JSON) with status 201
pub async fn create_invoice_handler(
  request: web::Json<CreateInvoiceRequest>,
  use_case: web::Data<Arc<RecordInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let response = use_case.execute(request.into_inner().into()).await?;

  Ok(HttpResponse::Created().json(CreateInvoiceResponse {
    id: response.invoice_id,
    created_at: response.created_at,
  }))
}
