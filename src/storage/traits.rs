use crate::error::Result;
use async_trait::async_trait;

/// Synchronous string key-value store.
///
/// Calls block the current thread; implementations may touch the disk.
pub trait SyncStore: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value under `key`; deleting a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}

/// Asynchronous transactional key-value store
#[async_trait]
pub trait AsyncStore: Send + Sync {
    /// Read the value stored under `key`
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Insert or replace the value under `key`
    async fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value under `key`
    async fn delete(&self, key: &str) -> Result<()>;
}
