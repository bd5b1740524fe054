use crate::config::{Settings, validate_settings};
use crate::core::device_id::DeviceId;
use crate::crypto::{CanvasFingerprint, FingerprintGenerator};
use crate::error::{DeviceIdError, Result};
use crate::storage::{AsyncStore, LocalStorage, SqliteStore, SyncStore};

/// Resolver wired to the on-disk stores and the canvas fingerprint
pub type DefaultResolver = DeviceIdResolver<LocalStorage, SqliteStore, CanvasFingerprint>;

/// Looks up the cached device identifier, deriving and caching a new one when
/// neither store has it.
///
/// The synchronous store is authoritative: its errors propagate. Failures of
/// the transactional store are logged and treated as a miss, so they never
/// reach the caller. Concurrent calls are not coordinated; two first runs may
/// both generate and write.
pub struct DeviceIdResolver<S, A, F> {
    key: String,
    sync_store: S,
    async_store: A,
    generator: F,
    backfill_sync_cache: bool,
}

impl<S, A, F> DeviceIdResolver<S, A, F>
where
    S: SyncStore,
    A: AsyncStore,
    F: FingerprintGenerator,
{
    pub fn new(key: impl Into<String>, sync_store: S, async_store: A, generator: F) -> Self {
        Self {
            key: key.into(),
            sync_store,
            async_store,
            generator,
            backfill_sync_cache: false,
        }
    }

    /// Copy an identifier found only in the transactional store back into the
    /// synchronous store
    pub fn backfill_sync_cache(mut self, enabled: bool) -> Self {
        self.backfill_sync_cache = enabled;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn sync_store(&self) -> &S {
        &self.sync_store
    }

    pub fn async_store(&self) -> &A {
        &self.async_store
    }

    /// Return the cached identifier, generating and caching one on a miss
    pub async fn resolve(&self) -> Result<DeviceId> {
        if let Some(id) = self.read_sync()? {
            tracing::debug!("Device ID found in synchronous store");
            return Ok(DeviceId::from(id));
        }

        if let Some(id) = self.read_async().await {
            tracing::debug!("Device ID found in transactional store");
            if self.backfill_sync_cache {
                self.sync_store.set(&self.key, &id)?;
                tracing::debug!("Backfilled synchronous store");
            }
            return Ok(DeviceId::from(id));
        }

        self.get_persistent_device_id().await
    }

    /// Return the identifier from the synchronous store, or generate a new one
    /// and write it to both stores
    pub async fn get_persistent_device_id(&self) -> Result<DeviceId> {
        if let Some(id) = self.read_sync()? {
            return Ok(DeviceId::from(id));
        }

        let id = self.generator.generate().await?;
        if id.is_empty() {
            return Err(DeviceIdError::EmptyFingerprint);
        }
        tracing::info!("Generated new device ID");

        self.sync_store.set(&self.key, &id)?;
        self.write_async(&id).await;

        Ok(DeviceId::from(id))
    }

    /// Read both stores without generating
    pub async fn peek(&self) -> Result<Option<DeviceId>> {
        if let Some(id) = self.read_sync()? {
            return Ok(Some(DeviceId::from(id)));
        }
        Ok(self.read_async().await.map(DeviceId::from))
    }

    /// Remove the identifier from both stores. A transactional store failure
    /// is logged, like every other failure of that store.
    pub async fn clear(&self) -> Result<()> {
        self.sync_store.remove(&self.key)?;
        if let Err(e) = self.async_store.delete(&self.key).await {
            tracing::error!("Transactional store delete failed: {}", e);
        }
        tracing::info!("Cleared cached device ID");
        Ok(())
    }

    // Empty values count as absent in both stores
    fn read_sync(&self) -> Result<Option<String>> {
        Ok(self.sync_store.get(&self.key)?.filter(|id| !id.is_empty()))
    }

    async fn read_async(&self) -> Option<String> {
        match self.async_store.get(&self.key).await {
            Ok(value) => value.filter(|id| !id.is_empty()),
            Err(e) => {
                tracing::warn!("Transactional store read failed: {}", e);
                None
            }
        }
    }

    async fn write_async(&self, value: &str) {
        if let Err(e) = self.async_store.put(&self.key, value).await {
            tracing::error!("Transactional store write failed: {}", e);
        }
    }
}

impl DefaultResolver {
    /// Build a resolver over the stores in the configured data directory.
    ///
    /// Only the synchronous store is touched here; the database is opened on
    /// first use.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        validate_settings(settings)?;

        let sync_store = LocalStorage::open(settings.local_storage_path())?;
        let async_store = SqliteStore::new(
            settings.database_path(),
            settings.collection.clone(),
            settings.schema_version,
        )?;
        let generator = CanvasFingerprint::new(settings.fingerprint.clone());

        Ok(
            Self::new(settings.storage_key.clone(), sync_store, async_store, generator)
                .backfill_sync_cache(settings.backfill_sync_cache),
        )
    }
}
