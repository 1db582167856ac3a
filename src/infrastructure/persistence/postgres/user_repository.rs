use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::user::{UserError, UserRepository, UserSummary};

/// PostgreSQL implementation of the UserRepository trait
pub struct PostgresUserRepository {
  pool: PgPool,
}

impl PostgresUserRepository {
  /// Creates a new instance of PostgresUserRepository
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

/// Projection row: only the columns the listing may expose are selected
#[derive(Debug, sqlx::FromRow)]
struct UserSummaryRow {
  id: String,
  username: String,
}

impl From<UserSummaryRow> for UserSummary {
  fn from(row: UserSummaryRow) -> Self {
    UserSummary {
      id: row.id,
      username: row.username,
    }
  }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
  async fn list_summaries(&self) -> Result<Vec<UserSummary>, UserError> {
    let rows = sqlx::query_as::<_, UserSummaryRow>(
      r#"
            SELECT id, username
            FROM users
            ORDER BY created_at, id
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    Ok(rows.into_iter().map(UserSummary::from).collect())
  }

  async fn delete_by_id(&self, id: &str) -> Result<Option<UserSummary>, UserError> {
    let row = sqlx::query_as::<_, UserSummaryRow>(
      r#"
            DELETE FROM users
            WHERE id = $1
            RETURNING id, username
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(UserSummary::from))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
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

  async fn insert_user(pool: &PgPool, id: &str, username: &str) {
    sqlx::query(
      "INSERT INTO users (id, username, email) VALUES ($1, $2, $3)",
    )
    .bind(id)
    .bind(username)
    .bind(format!("{}@example.com", username))
    .execute(pool)
    .await
    .expect("Failed to insert user");
  }

  #[tokio::test]
  async fn test_list_summaries_projects_id_and_username() {
    let (pool, _container) = setup_test_db().await;
    insert_user(&pool, "a", "alice").await;
    insert_user(&pool, "b", "bob").await;
    let repo = PostgresUserRepository::new(pool);

    let users = repo.list_summaries().await.unwrap();

    assert_eq!(
      users,
      vec![UserSummary::new("a", "alice"), UserSummary::new("b", "bob")]
    );
  }

  #[tokio::test]
  async fn test_list_summaries_empty_table() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool);

    let users = repo.list_summaries().await.unwrap();

    assert!(users.is_empty());
  }

  #[tokio::test]
  async fn test_delete_by_id_returns_removed_user() {
    let (pool, _container) = setup_test_db().await;
    insert_user(&pool, "a", "alice").await;
    let repo = PostgresUserRepository::new(pool.clone());

    let removed = repo.delete_by_id("a").await.unwrap();

    assert_eq!(removed, Some(UserSummary::new("a", "alice")));
    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
      .fetch_one(&pool)
      .await
      .unwrap();
    assert_eq!(remaining, 0);
  }

  #[tokio::test]
  async fn test_delete_by_id_unknown_user() {
    let (pool, _container) = setup_test_db().await;
    insert_user(&pool, "a", "alice").await;
    let repo = PostgresUserRepository::new(pool);

    let removed = repo.delete_by_id("missing").await.unwrap();

    assert!(removed.is_none());
  }
}
