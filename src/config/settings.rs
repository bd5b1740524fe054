use crate::config::constants::*;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How the serialized surface is turned into an identifier
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FingerprintEncoding {
    /// Leading characters of the PNG data URL
    #[default]
    DataUrlPrefix,
    /// Hex SHA-256 of the whole data URL
    Sha256,
}

/// Parameters of the off-screen drawing used for fingerprinting
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FingerprintSettings {
    pub text: String,
    #[serde(rename = "fontFamily")]
    pub font_family: String,
    #[serde(rename = "fontSize")]
    pub font_size: f32,
    pub x: f32,
    pub y: f32,
    pub width: u32,
    pub height: u32,
    #[serde(rename = "maxLength")]
    pub max_len: usize,
    pub encoding: FingerprintEncoding,
}

impl Default for FingerprintSettings {
    fn default() -> Self {
        Self {
            text: FINGERPRINT_TEXT.to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            x: DEFAULT_TEXT_X,
            y: DEFAULT_TEXT_Y,
            width: DEFAULT_SURFACE_WIDTH,
            height: DEFAULT_SURFACE_HEIGHT,
            max_len: MAX_FINGERPRINT_LEN,
            encoding: FingerprintEncoding::default(),
        }
    }
}

/// Resolver settings. Every field has a default so a partial file is enough.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(rename = "dataDir")]
    pub data_dir: PathBuf,
    #[serde(rename = "storageKey")]
    pub storage_key: String,
    #[serde(rename = "localStorageFile")]
    pub local_storage_file: String,
    #[serde(rename = "databaseName")]
    pub database_name: String,
    pub collection: String,
    #[serde(rename = "schemaVersion")]
    pub schema_version: u32,
    /// Write an identifier found only in the transactional store back into
    /// the synchronous store.
    #[serde(rename = "backfillSyncCache")]
    pub backfill_sync_cache: bool,
    pub fingerprint: FingerprintSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            local_storage_file: DEFAULT_LOCAL_STORAGE_FILE.to_string(),
            database_name: DEFAULT_DATABASE_NAME.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            schema_version: SCHEMA_VERSION,
            backfill_sync_cache: false,
            fingerprint: FingerprintSettings::default(),
        }
    }
}

impl Settings {
    /// Settings rooted at a specific data directory
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Load settings from a JSON file; missing fields keep their defaults
    pub async fn from_file(path: &Path) -> Result<Self> {
        let contents = tokio::fs::read(path).await?;
        let settings: Settings = serde_json::from_slice(&contents)?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn local_storage_path(&self) -> PathBuf {
        self.data_dir.join(&self.local_storage_file)
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.sqlite", self.database_name))
    }
}

/// Platform data directory joined with the application name, falling back to
/// the working directory when the platform reports none.
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}
