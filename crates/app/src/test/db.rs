//! Isolated test databases inside one shared PostgreSQL container.

use sqlx::{Connection, PgConnection, PgPool};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::OnceCell;
use uuid::Uuid;

const DB_USER: &str = "bazaar_test";
const DB_PASSWORD: &str = "bazaar_test_password";

/// One container per test binary; each test carves its own database out of it.
static POSTGRES: OnceCell<ContainerAsync<PostgresImage>> = OnceCell::const_new();

async fn container() -> &'static ContainerAsync<PostgresImage> {
    POSTGRES
        .get_or_init(|| async {
            PostgresImage::default()
                .with_user(DB_USER)
                .with_password(DB_PASSWORD)
                .with_db_name("postgres")
                .with_env_var("POSTGRES_INITDB_ARGS", "--auth-host=trust")
                .start()
                .await
                .expect("failed to start PostgreSQL container")
        })
        .await
}

/// A freshly created, fully migrated database.
///
/// Databases are not dropped afterwards; they die with the container when
/// the test run ends.
#[derive(Debug, Clone)]
pub(crate) struct TestDb {
    pool: PgPool,
}

impl TestDb {
    pub(crate) async fn new() -> Self {
        // The uuid keeps names unique across parallel tests; quoting in the
        // DDL below makes the generated name safe regardless of its shape.
        let name = format!("bazaar_test_{}", Uuid::now_v7().simple());

        let port = container()
            .await
            .get_host_port_ipv4(5432)
            .await
            .expect("failed to get container port");

        let host = std::env::var("TESTCONTAINERS_HOST_OVERRIDE")
            .unwrap_or_else(|_| "localhost".to_string());

        let admin_url = format!("postgresql://{DB_USER}:{DB_PASSWORD}@{host}:{port}/postgres");

        let mut conn = PgConnection::connect(&admin_url)
            .await
            .expect("failed to connect to admin database");

        sqlx::query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut conn)
            .await
            .expect("failed to create test database");

        conn.close()
            .await
            .expect("failed to close admin connection");

        let database_url = format!("postgresql://{DB_USER}:{DB_PASSWORD}@{host}:{port}/{name}");

        let pool = PgPool::connect(&database_url)
            .await
            .expect("failed to connect to test database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("failed to run migrations on test database");

        Self { pool }
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn migrated_database_answers_queries() {
        let test_db = TestDb::new().await;

        let tenants: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tenants")
            .fetch_one(test_db.pool())
            .await
            .expect("tenants table should exist after migrations");

        assert_eq!(tenants, 0, "fresh databases start empty");
    }

    #[tokio::test]
    async fn each_test_database_is_isolated() {
        let first = TestDb::new().await;
        let second = TestDb::new().await;

        sqlx::query("INSERT INTO tenants (uuid, name, domain) VALUES ($1, 'A', 'a.example')")
            .bind(Uuid::now_v7())
            .execute(first.pool())
            .await
            .expect("insert into first database should succeed");

        let visible: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tenants")
            .fetch_one(second.pool())
            .await
            .expect("count in second database should succeed");

        assert_eq!(visible, 0, "writes must not leak across test databases");
    }
}
