pub mod config;
pub mod core;
pub mod crypto;
pub mod error;
pub mod storage;
pub mod prelude;

pub use config::{FingerprintEncoding, FingerprintSettings, Settings};
pub use core::{DefaultResolver, DeviceId, DeviceIdResolver, DeviceIdView};
pub use crypto::{CanvasFingerprint, FingerprintGenerator, generate_fingerprint};
pub use error::{DeviceIdError, Result};
pub use storage::{AsyncStore, LocalStorage, SqliteStore, SyncStore};

#[cfg(feature = "cli")]
pub mod cli;
