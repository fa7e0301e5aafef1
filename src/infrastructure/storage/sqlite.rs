use crate::core::errors::UserCrudError;
use crate::core::models::user::User;
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    phone: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: Some(row.id),
            name: row.name,
            email: row.email,
            phone: row.phone,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Opens (or creates) the database at `database_url` and applies pending migrations.
    ///
    /// In-memory databases are limited to a single long-lived connection, since
    /// each SQLite connection to `:memory:` owns a separate database.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, UserCrudError> {
        let in_memory = database_url.contains(":memory:");
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(30));
        let options = if in_memory {
            options
        } else {
            options.journal_mode(SqliteJournalMode::Wal)
        };

        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };

        let pool = pool_options.connect_with(options).await?;
        MIGRATOR.run(&pool).await?;
        info!("SQLite user store ready at {}", database_url);
        Ok(SqliteStorage { pool })
    }
}

fn map_write_error(err: sqlx::Error, email: &str) -> UserCrudError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            UserCrudError::EmailAlreadyExists(email.to_string())
        }
        _ => err.into(),
    }
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn list_users(&self) -> Result<Vec<User>, UserCrudError> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, phone, created_at, updated_at FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn get_user(&self, user_id: i64) -> Result<Option<User>, UserCrudError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, phone, created_at, updated_at FROM users WHERE id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(User::from))
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, UserCrudError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, phone, created_at, updated_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(User::from))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, UserCrudError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    async fn save_user(&self, mut user: User) -> Result<User, UserCrudError> {
        match user.id {
            None => {
                let result = sqlx::query(
                    "INSERT INTO users (name, email, phone, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
                )
                .bind(&user.name)
                .bind(&user.email)
                .bind(&user.phone)
                .bind(user.created_at)
                .bind(user.updated_at)
                .execute(&self.pool)
                .await
                .map_err(|e| map_write_error(e, &user.email))?;
                user.id = Some(result.last_insert_rowid());
            }
            Some(id) => {
                sqlx::query(
                    "INSERT INTO users (id, name, email, phone, created_at, updated_at)
                     VALUES (?, ?, ?, ?, ?, ?)
                     ON CONFLICT(id) DO UPDATE SET
                        name = excluded.name,
                        email = excluded.email,
                        phone = excluded.phone,
                        updated_at = excluded.updated_at",
                )
                .bind(id)
                .bind(&user.name)
                .bind(&user.email)
                .bind(&user.phone)
                .bind(user.created_at)
                .bind(user.updated_at)
                .execute(&self.pool)
                .await
                .map_err(|e| map_write_error(e, &user.email))?;
            }
        }
        Ok(user)
    }

    async fn delete_user(&self, user_id: i64) -> Result<bool, UserCrudError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_store() -> SqliteStorage {
        SqliteStorage::connect("sqlite::memory:", 5).await.unwrap()
    }

    fn unsaved(name: &str, email: &str) -> User {
        let now = Utc::now();
        User {
            id: None,
            name: name.to_string(),
            email: email.to_string(),
            phone: Some("1234567890".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let store = memory_store().await;
        let first = store.save_user(unsaved("John Doe", "john@example.com")).await.unwrap();
        let second = store.save_user(unsaved("Jane Doe", "jane@example.com")).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(store.list_users().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn lookups_round_trip_all_columns() {
        let store = memory_store().await;
        let saved = store.save_user(unsaved("John Doe", "john@example.com")).await.unwrap();

        let by_id = store.get_user(1).await.unwrap().unwrap();
        assert_eq!(by_id, saved);

        let by_email = store.get_user_by_email("john@example.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, Some(1));
        assert!(store.exists_by_email("john@example.com").await.unwrap());
        assert!(!store.exists_by_email("nobody@example.com").await.unwrap());
        assert!(store.get_user(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_with_id_overwrites_in_place() {
        let store = memory_store().await;
        let mut saved = store.save_user(unsaved("John Doe", "john@example.com")).await.unwrap();
        saved.name = "John Updated".to_string();
        saved.phone = None;

        store.save_user(saved.clone()).await.unwrap();

        let users = store.list_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "John Updated");
        assert_eq!(users[0].phone, None);
    }

    #[tokio::test]
    async fn unique_index_maps_to_email_conflict() {
        let store = memory_store().await;
        store.save_user(unsaved("John Doe", "john@example.com")).await.unwrap();

        let result = store.save_user(unsaved("Jane", "john@example.com")).await;

        assert!(matches!(result, Err(UserCrudError::EmailAlreadyExists(email)) if email == "john@example.com"));
        assert_eq!(store.list_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed() {
        let store = memory_store().await;
        store.save_user(unsaved("John Doe", "john@example.com")).await.unwrap();

        assert!(!store.delete_user(999).await.unwrap());
        assert!(store.delete_user(1).await.unwrap());
        assert!(store.list_users().await.unwrap().is_empty());
    }
}
