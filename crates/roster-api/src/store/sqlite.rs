//! SQLite-backed user store.
//!
//! # Design
//! - The schema is created on open, so a fresh file is usable immediately.
//! - Uniqueness of usernames is enforced by the table, not by a pre-check.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use roster_api_models::{NewUser, UserRecord};
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};

use super::{SharedUserStore, StoreError, StoreResult, UserStore};

const MAX_CONNECTIONS: u32 = 5;

const CREATE_USERS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT UNIQUE NOT NULL,
        email TEXT NOT NULL
    )
";

/// User store persisted in a SQLite database.
#[derive(Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    /// Open (creating if missing) the database at `url` and ensure the schema.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::QueryFailed`] when the URL is invalid, the file
    /// cannot be opened, or the schema cannot be created.
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(query_failed("parse database url"))?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await
            .map_err(query_failed("open database"))?;
        Self::with_pool(pool).await
    }

    /// Wrap an existing pool and ensure the schema.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::QueryFailed`] when the schema cannot be created.
    pub async fn with_pool(pool: SqlitePool) -> StoreResult<Self> {
        sqlx::query(CREATE_USERS_TABLE)
            .execute(&pool)
            .await
            .map_err(query_failed("create users table"))?;
        Ok(Self { pool })
    }

    /// Wrap the store for sharing across handlers.
    #[must_use]
    pub fn shared(self) -> SharedUserStore {
        Arc::new(self)
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn list(&self) -> StoreResult<Vec<UserRecord>> {
        let rows = sqlx::query("SELECT id, username, email FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed("list users"))?;
        rows.iter()
            .map(user_from_row)
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(query_failed("decode user row"))
    }

    async fn insert(&self, user: NewUser) -> StoreResult<UserRecord> {
        let result = sqlx::query("INSERT INTO users (username, email) VALUES (?, ?)")
            .bind(&user.username)
            .bind(&user.email)
            .execute(&self.pool)
            .await;
        match result {
            Ok(done) => Ok(UserRecord {
                id: u64::try_from(done.last_insert_rowid()).ok(),
                username: user.username,
                email: user.email,
            }),
            Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
                Err(StoreError::DuplicateUsername {
                    username: user.username,
                })
            }
            Err(source) => Err(StoreError::QueryFailed {
                operation: "insert user",
                source,
            }),
        }
    }
}

fn user_from_row(row: &SqliteRow) -> Result<UserRecord, sqlx::Error> {
    let id: i64 = row.try_get("id")?;
    Ok(UserRecord {
        id: u64::try_from(id).ok(),
        username: row.try_get("username")?,
        email: row.try_get("email")?,
    })
}

fn query_failed(operation: &'static str) -> impl FnOnce(sqlx::Error) -> StoreError {
    move |source| StoreError::QueryFailed { operation, source }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::path::Path;

    type TestResult = Result<(), Box<dyn Error>>;

    fn database_url(dir: &Path) -> String {
        format!("sqlite://{}", dir.join("roster.db").display())
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids_and_keeps_order() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = SqliteUserStore::connect(&database_url(dir.path())).await?;
        let carol = store
            .insert(NewUser::new("carol", "carol@example.com"))
            .await?;
        let alice = store
            .insert(NewUser::new("alice", "alice@example.com"))
            .await?;
        assert_eq!(carol.id, Some(1));
        assert_eq!(alice.id, Some(2));

        let users = store.list().await?;
        let names: Vec<&str> = users.iter().map(|user| user.username.as_str()).collect();
        assert_eq!(names, vec!["carol", "alice"]);
        assert_eq!(users[1].email, "alice@example.com");
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_username_maps_to_store_error() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = SqliteUserStore::connect(&database_url(dir.path())).await?;
        store
            .insert(NewUser::new("alice", "alice@example.com"))
            .await?;
        let err = store
            .insert(NewUser::new("alice", "other@example.com"))
            .await
            .expect_err("duplicate must fail");
        assert!(matches!(
            err,
            StoreError::DuplicateUsername { ref username } if username == "alice"
        ));
        assert_eq!(store.list().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn users_survive_reopening_the_database() -> TestResult {
        let dir = tempfile::tempdir()?;
        let url = database_url(dir.path());

        let first = SqliteUserStore::connect(&url).await?;
        first.insert(NewUser::new("alice", "alice@example.com")).await?;
        first.insert(NewUser::new("bob", "bob@example.com")).await?;
        first.close().await;
        drop(first);

        let reopened = SqliteUserStore::connect(&url).await?;
        let users = reopened.list().await?;
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "alice");
        assert_eq!(users[1].id, Some(2));

        let carol = reopened
            .insert(NewUser::new("carol", "carol@example.com"))
            .await?;
        assert_eq!(carol.id, Some(3));
        Ok(())
    }

    #[tokio::test]
    async fn unopenable_path_is_a_query_failure() -> TestResult {
        let dir = tempfile::tempdir()?;
        let url = database_url(&dir.path().join("missing-parent"));
        let err = SqliteUserStore::connect(&url)
            .await
            .err()
            .ok_or("database in a missing directory must not open")?;
        assert!(matches!(
            err,
            StoreError::QueryFailed {
                operation: "open database",
                ..
            }
        ));
        Ok(())
    }
}
