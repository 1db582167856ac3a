use actix_web::{
  Error, HttpMessage, HttpResponse, ResponseError,
  body::EitherBody,
  dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
  error::PayloadError,
  http::Method,
  web::{Bytes, BytesMut},
};
use futures_util::{StreamExt, future::LocalBoxFuture};
use std::{
  future::{Ready, ready},
  rc::Rc,
};
use thiserror::Error;

use crate::{
  adapters::http::errors::ApiError,
  domain::invoice::{InvoiceCheck, check_invoice_body},
};

/// Default upper bound for a buffered invoice body
pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 256 * 1024;

/// Invoice intake middleware that rejects incomplete payloads before the handler runs
///
/// Only `POST` requests are inspected; any other method goes straight to the
/// wrapped service so routing can answer it.
///
/// This middleware:
/// 1. Buffers the request body (up to `max_payload_bytes`)
/// 2. Runs the invoice payload checks over it
/// 3. On pass, puts the untouched bytes back and calls the next service
/// 4. Otherwise answers with "incomplete data" (400) or a generic server error (500)
///
/// # Example
///
/// ```no_run
/// use actix_web::{App, HttpResponse, web};
/// # use ledger_api::adapters::http::middleware::InvoicePayloadMiddleware;
///
/// let app = App::new().service(
///   web::resource("/api/invoices")
///     .wrap(InvoicePayloadMiddleware::default())
///     .route(web::post().to(HttpResponse::Created)),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct InvoicePayloadMiddleware {
  max_payload_bytes: usize,
}

impl InvoicePayloadMiddleware {
  pub fn new(max_payload_bytes: usize) -> Self {
    Self { max_payload_bytes }
  }
}

impl Default for InvoicePayloadMiddleware {
  fn default() -> Self {
    Self::new(DEFAULT_MAX_PAYLOAD_BYTES)
  }
}

impl<S, B> Transform<S, ServiceRequest> for InvoicePayloadMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Transform = InvoicePayloadMiddlewareService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(InvoicePayloadMiddlewareService {
      service: Rc::new(service),
      max_payload_bytes: self.max_payload_bytes,
    }))
  }
}

pub struct InvoicePayloadMiddlewareService<S> {
  service: Rc<S>,
  max_payload_bytes: usize,
}

impl<S, B> Service<ServiceRequest> for InvoicePayloadMiddlewareService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, mut req: ServiceRequest) -> Self::Future {
    let service = Rc::clone(&self.service);
    let max_payload_bytes = self.max_payload_bytes;

    if req.method() != Method::POST {
      return Box::pin(async move {
        let res = service.call(req).await?;
        Ok(res.map_into_left_body())
      });
    }

    Box::pin(async move {
      let body = match read_body(&mut req, max_payload_bytes).await {
        Ok(body) => body,
        Err(e @ BodyError::TooLarge(_)) => {
          tracing::debug!(error = %e, "Invoice payload rejected");
          return Ok(reject(req, ApiError::Validation(format!("Invoice {}", e))));
        }
        Err(e @ BodyError::Read(_)) => {
          tracing::error!(error = %e, "Invoice payload rejected");
          return Ok(reject(req, server_error()));
        }
      };

      match check_invoice_body(&body) {
        InvoiceCheck::Pass => {
          req.set_payload(bytes_to_payload(body));
          let res = service.call(req).await?;
          Ok(res.map_into_left_body())
        }
        InvoiceCheck::IncompleteData(reason) => {
          tracing::debug!(%reason, "Invoice payload rejected");
          Ok(reject(req, ApiError::IncompleteData))
        }
        InvoiceCheck::ServerError => Ok(reject(req, server_error())),
      }
    })
  }
}

#[derive(Debug, Error)]
enum BodyError {
  #[error("payload exceeds {0} bytes")]
  TooLarge(usize),

  #[error("failed to read payload: {0}")]
  Read(#[from] PayloadError),
}

async fn read_body(req: &mut ServiceRequest, limit: usize) -> Result<Bytes, BodyError> {
  let mut payload = req.take_payload();
  let mut body = BytesMut::new();

  while let Some(chunk) = payload.next().await {
    let chunk = chunk?;
    if body.len() + chunk.len() > limit {
      return Err(BodyError::TooLarge(limit));
    }
    body.extend_from_slice(&chunk);
  }

  Ok(body.freeze())
}

fn bytes_to_payload(body: Bytes) -> Payload {
  let (_, mut payload) = actix_http::h1::Payload::create(true);
  payload.unread_data(body);
  Payload::from(payload)
}

fn server_error() -> ApiError {
  ApiError::Internal("Invoice payload could not be inspected".to_string())
}

fn reject<B>(req: ServiceRequest, error: ApiError) -> ServiceResponse<EitherBody<B>> {
  let (request, _) = req.into_parts();
  let response: HttpResponse = error.error_response();
  ServiceResponse::new(request, response.map_into_right_body())
}
