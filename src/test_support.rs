//! In-memory stand-ins for the persistence ports, used by unit tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::errors::RepositoryError;
use crate::domain::invoice::{Invoice, InvoiceError, InvoiceRepository};
use crate::domain::user::{UserError, UserRepository, UserSummary};

/// User store backed by a vector, preserving insertion order
#[derive(Default)]
pub struct InMemoryUserRepository {
  users: Mutex<Vec<UserSummary>>,
}

impl InMemoryUserRepository {
  pub fn with_users(users: Vec<UserSummary>) -> Self {
    Self {
      users: Mutex::new(users),
    }
  }

  pub fn len(&self) -> usize {
    self.users.lock().unwrap().len()
  }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
  async fn list_summaries(&self) -> Result<Vec<UserSummary>, UserError> {
    Ok(self.users.lock().unwrap().clone())
  }

  async fn delete_by_id(&self, id: &str) -> Result<Option<UserSummary>, UserError> {
    let mut users = self.users.lock().unwrap();
    let removed = users
      .iter()
      .position(|user| user.id == id)
      .map(|index| users.remove(index));
    Ok(removed)
  }
}

/// User store whose every call fails as if the database were unreachable
pub struct UnavailableUserRepository;

#[async_trait]
impl UserRepository for UnavailableUserRepository {
  async fn list_summaries(&self) -> Result<Vec<UserSummary>, UserError> {
    Err(RepositoryError::ConnectionFailed("connection refused".to_string()).into())
  }

  async fn delete_by_id(&self, _id: &str) -> Result<Option<UserSummary>, UserError> {
    Err(RepositoryError::QueryFailed("connection reset".to_string()).into())
  }
}

#[derive(Default)]
pub struct InMemoryInvoiceRepository {
  invoices: Mutex<Vec<Invoice>>,
}

impl InMemoryInvoiceRepository {
  pub fn stored(&self) -> Vec<Invoice> {
    self.invoices.lock().unwrap().clone()
  }
}

#[async_trait]
impl InvoiceRepository for InMemoryInvoiceRepository {
  async fn create(&self, invoice: Invoice) -> Result<Invoice, InvoiceError> {
    self.invoices.lock().unwrap().push(invoice.clone());
    Ok(invoice)
  }
}

pub struct UnavailableInvoiceRepository;

#[async_trait]
impl InvoiceRepository for UnavailableInvoiceRepository {
  async fn create(&self, _invoice: Invoice) -> Result<Invoice, InvoiceError> {
    Err(RepositoryError::ConnectionFailed("connection refused".to_string()).into())
  }
}

pub fn user(id: &str, username: &str) -> UserSummary {
  UserSummary::new(id, username)
}
