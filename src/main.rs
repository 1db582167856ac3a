use actix_web::{App, HttpServer, middleware::Logger, web};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ledger_api::{
  adapters::http::{
    RequestIdMiddleware, configure_invoice_routes, configure_user_routes, health_check,
  },
  application::invoice::RecordInvoiceUseCase,
  application::user::{ListUsersUseCase, RemoveUserUseCase},
  domain::invoice::InvoiceRepository,
  domain::user::UserRepository,
  infrastructure::{
    config::Config,
    persistence::postgres::{PostgresInvoiceRepository, PostgresUserRepository},
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ledger_api=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting ledger API");

  let config = Config::load().map_err(|e| {
    tracing::error!("Failed to load configuration: {}", e);
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
  })?;
  tracing::info!("Configuration loaded successfully");

  tracing::info!("Connecting to database");

  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.database.max_connections)
      .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
      .connect(&config.database.url),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      config.database.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Database connection timed out after {} seconds",
        config.database.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to connect to database: {}", e);
    match e {
      sqlx::Error::Io(_) => std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "Could not connect to database. Is PostgreSQL running?",
      ),
      _ => std::io::Error::other(format!("Database error: {}", e)),
    }
  })?;

  tracing::info!("Database connection pool created");

  tracing::info!("Running database migrations");
  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .map_err(|e| {
      tracing::error!("Failed to run database migrations: {}", e);
      std::io::Error::other(format!("Migration error: {}", e))
    })?;
  tracing::info!("Database migrations completed");

  // Initialize repositories
  let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(db_pool.clone()));
  let invoice_repo: Arc<dyn InvoiceRepository> =
    Arc::new(PostgresInvoiceRepository::new(db_pool.clone()));

  // Initialize use cases
  let list_users_use_case = Arc::new(ListUsersUseCase::new(user_repo.clone()));
  let remove_user_use_case = Arc::new(RemoveUserUseCase::new(user_repo.clone()));
  let record_invoice_use_case = Arc::new(RecordInvoiceUseCase::new(invoice_repo.clone()));

  let max_payload_bytes = config.invoice.max_payload_bytes;
  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  HttpServer::new(move || {
    App::new()
      .wrap(Logger::default())
      .wrap(RequestIdMiddleware::new())
      .service(web::scope("/api/users").configure(|cfg| {
        configure_user_routes(
          cfg,
          list_users_use_case.clone(),
          remove_user_use_case.clone(),
        )
      }))
      .service(web::scope("/api/invoices").configure(|cfg| {
        configure_invoice_routes(cfg, record_invoice_use_case.clone(), max_payload_bytes)
      }))
      .route("/health", web::get().to(health_check))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await
}
