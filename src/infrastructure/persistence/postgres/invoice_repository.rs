use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, types::Json};
use uuid::Uuid;

use crate::domain::invoice::{Invoice, InvoiceError, InvoiceRepository, LineItem};

pub struct PostgresInvoiceRepository {
  pool: PgPool,
}

impl PostgresInvoiceRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[derive(Debug, sqlx::FromRow)]
struct InvoiceRow {
  id: Uuid,
  buyer_name: String,
  invoice_date: String,
  total: Decimal,
  items: Json<Vec<LineItem>>,
  created_at: DateTime<Utc>,
}

impl From<InvoiceRow> for Invoice {
  fn from(row: InvoiceRow) -> Self {
    Invoice::from_db(
      row.id,
      row.buyer_name,
      row.invoice_date,
      row.total,
      row.items.0,
      row.created_at,
    )
  }
}

#[async_trait]
impl InvoiceRepository for PostgresInvoiceRepository {
  async fn create(&self, invoice: Invoice) -> Result<Invoice, InvoiceError> {
    let row = sqlx::query_as::<_, InvoiceRow>(
      r#"
            INSERT INTO invoices (id, buyer_name, invoice_date, total, items, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, buyer_name, invoice_date, total, items, created_at
            "#,
    )
    .bind(invoice.id)
    .bind(&invoice.buyer_name)
    .bind(&invoice.date)
    .bind(invoice.total)
    .bind(Json(&invoice.items))
    .bind(invoice.created_at)
    .fetch_one(&self.pool)
    .await?;

    Ok(row.into())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;
  use sqlx::postgres::PgPoolOptions;
  use testcontainers::ImageExt;
  use testcontainers_modules::postgres::Postgres;
  use testcontainers_modules::testcontainers::{ContainerAsync, runners::AsyncRunner};

  async fn setup_test_db() -> (PgPool, ContainerAsync<Postgres>) {
    let container = Postgres::default()
      .with_tag("16-alpine")
      .start()
      .await
      .expect("Failed to start postgres container");

    let host = container.get_host().await.expect("Failed to get host");
    let port = container
      .get_host_port_ipv4(5432)
      .await
      .expect("Failed to get port");
    let database_url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

    let pool = PgPoolOptions::new()
      .max_connections(5)
      .connect(&database_url)
      .await
      .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
      .run(&pool)
      .await
      .expect("Failed to run migrations");

    (pool, container)
  }

  #[tokio::test]
  async fn test_create_invoice_round_trips_line_items() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresInvoiceRepository::new(pool);
    let invoice = Invoice::new(
      "Acme".to_string(),
      "2024-01-01".to_string(),
      dec!(15.375),
      vec![LineItem {
        id: "2".to_string(),
        details: "Gadget".to_string(),
        quantity: dec!(1.5),
        rate: dec!(10.25),
        total: dec!(15.375),
      }],
    );

    let saved = repo.create(invoice.clone()).await.unwrap();

    assert_eq!(saved.id, invoice.id);
    assert_eq!(saved.items, invoice.items);
    assert_eq!(saved.buyer_name, "Acme");
    assert_eq!(saved.total, dec!(15.375));
  }

  #[tokio::test]
  async fn test_duplicate_invoice_id_is_rejected() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresInvoiceRepository::new(pool);
    let invoice = Invoice::new("Acme".to_string(), "2024-01-01".to_string(), dec!(1), vec![]);

    repo.create(invoice.clone()).await.unwrap();
    let result = repo.create(invoice).await;

    assert!(matches!(
      result,
      Err(InvoiceError::Repository(
        crate::domain::errors::RepositoryError::DuplicateKey(_)
      ))
    ));
  }
}
