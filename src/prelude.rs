//! Prelude module for convenient imports
//!
//! Use `use devicekey::prelude::*;` to import commonly used types

// Configuration
pub use crate::config::{
    DEFAULT_COLLECTION, DEFAULT_DATABASE_NAME, DEFAULT_STORAGE_KEY, FINGERPRINT_TEXT,
    FingerprintEncoding, FingerprintSettings, MAX_FINGERPRINT_LEN, SCHEMA_VERSION, Settings,
};

// Resolution
pub use crate::core::{DefaultResolver, DeviceId, DeviceIdResolver, DeviceIdView};

// Fingerprinting
pub use crate::crypto::{CanvasFingerprint, FingerprintGenerator, generate_fingerprint};

// Storage
pub use crate::storage::{AsyncStore, LocalStorage, SqliteStore, SyncStore};

// Error handling
pub use crate::error::{DeviceIdError, Result};
