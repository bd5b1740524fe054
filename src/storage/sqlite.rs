use crate::config::validate_collection_name;
use crate::error::{DeviceIdError, Result};
use crate::storage::traits::AsyncStore;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::{Path, PathBuf};
use tokio::sync::OnceCell;

/// Transactional store backed by a single SQLite table.
///
/// The database is opened on first use and stays open for the life of the
/// value. Opening upgrades the schema when the stored version is older than
/// the requested one.
pub struct SqliteStore {
    path: PathBuf,
    collection: String,
    version: u32,
    pool: OnceCell<SqlitePool>,
}

impl SqliteStore {
    pub fn new(
        path: impl Into<PathBuf>,
        collection: impl Into<String>,
        version: u32,
    ) -> Result<Self> {
        let collection = collection.into();
        validate_collection_name(&collection)?;
        if version == 0 {
            return Err(DeviceIdError::invalid_config(
                "Schema version must be at least 1",
            ));
        }

        Ok(Self {
            path: path.into(),
            collection,
            version,
            pool: OnceCell::new(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the database has been opened yet
    pub fn is_open(&self) -> bool {
        self.pool.initialized()
    }

    async fn pool(&self) -> Result<&SqlitePool> {
        self.pool.get_or_try_init(|| self.open()).await
    }

    async fn open(&self) -> Result<SqlitePool> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let options = SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        let current: i64 = sqlx::query_scalar("PRAGMA user_version")
            .fetch_one(&pool)
            .await?;
        let requested = i64::from(self.version);

        if current > requested {
            return Err(DeviceIdError::store_unavailable(format!(
                "{} has schema version {}, newer than requested {}",
                self.path.display(),
                current,
                requested
            )));
        }

        if current < requested {
            tracing::debug!(
                "Upgrading {} from schema version {} to {}",
                self.path.display(),
                current,
                requested
            );
            let mut tx = pool.begin().await?;
            sqlx::query(&format!(
                "CREATE TABLE IF NOT EXISTS \"{}\" (key TEXT PRIMARY KEY NOT NULL, value TEXT NOT NULL)",
                self.collection
            ))
            .execute(&mut *tx)
            .await?;
            // PRAGMA arguments cannot be bound
            sqlx::query(&format!("PRAGMA user_version = {}", requested))
                .execute(&mut *tx)
                .await?;
            tx.commit().await?;
        }

        Ok(pool)
    }
}

#[async_trait]
impl AsyncStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let pool = self.pool().await?;
        let value = sqlx::query_scalar::<_, String>(&format!(
            "SELECT value FROM \"{}\" WHERE key = ?1",
            self.collection
        ))
        .bind(key)
        .fetch_optional(pool)
        .await?;
        Ok(value)
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        let pool = self.pool().await?;
        let mut tx = pool.begin().await?;
        sqlx::query(&format!(
            "INSERT INTO \"{}\" (key, value) VALUES (?1, ?2) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            self.collection
        ))
        .bind(key)
        .bind(value)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let pool = self.pool().await?;
        sqlx::query(&format!("DELETE FROM \"{}\" WHERE key = ?1", self.collection))
            .bind(key)
            .execute(pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &Path) -> SqliteStore {
        SqliteStore::new(dir.join("DeviceDB.sqlite"), "deviceStore", 1).unwrap()
    }

    #[test]
    fn test_rejects_bad_collection() {
        assert!(SqliteStore::new("/tmp/x.sqlite", "bad name", 1).is_err());
        assert!(SqliteStore::new("/tmp/x.sqlite", "deviceStore", 0).is_err());
    }

    #[tokio::test]
    async fn test_opens_lazily() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        assert!(!store.is_open());
        assert!(!store.path().exists());

        assert_eq!(store.get("deviceId").await.unwrap(), None);
        assert!(store.is_open());
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn test_put_get_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        store.put("deviceId", "first").await.unwrap();
        store.put("deviceId", "second").await.unwrap();
        assert_eq!(
            store.get("deviceId").await.unwrap(),
            Some("second".to_string())
        );

        store.delete("deviceId").await.unwrap();
        assert_eq!(store.get("deviceId").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();

        {
            let store = store_in(dir.path());
            store.put("deviceId", "abc").await.unwrap();
        }

        let reopened = store_in(dir.path());
        assert_eq!(
            reopened.get("deviceId").await.unwrap(),
            Some("abc".to_string())
        );
    }

    #[tokio::test]
    async fn test_newer_schema_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("DeviceDB.sqlite");

        let newer = SqliteStore::new(&path, "deviceStore", 2).unwrap();
        newer.put("deviceId", "abc").await.unwrap();
        drop(newer);

        let older = SqliteStore::new(&path, "deviceStore", 1).unwrap();
        assert!(matches!(
            older.get("deviceId").await,
            Err(DeviceIdError::StoreUnavailable { .. })
        ));
    }
}
