use crate::config::{FingerprintEncoding, FingerprintSettings};
use crate::crypto::canvas::{FontDatabase, render_data_url, system_fonts};
use crate::crypto::hash::sha256_from_bytes;
use crate::error::{DeviceIdError, Result};
use async_trait::async_trait;
use std::sync::{Arc, OnceLock};

/// Source of freshly derived device identifiers
#[async_trait]
pub trait FingerprintGenerator: Send + Sync {
    async fn generate(&self) -> Result<String>;
}

/// Fingerprint derived from drawing fixed text on an off-screen surface.
///
/// Deterministic for a given machine: the same settings and installed fonts
/// always give the same string.
#[derive(Clone)]
pub struct CanvasFingerprint {
    settings: Arc<FingerprintSettings>,
    fonts: Arc<OnceLock<FontDatabase>>,
}

impl CanvasFingerprint {
    pub fn new(settings: FingerprintSettings) -> Self {
        Self {
            settings: Arc::new(settings),
            fonts: Arc::new(OnceLock::new()),
        }
    }

    /// Use an explicit font set instead of the system fonts
    pub fn with_fonts(settings: FingerprintSettings, fonts: FontDatabase) -> Self {
        Self {
            settings: Arc::new(settings),
            fonts: Arc::new(OnceLock::from(fonts)),
        }
    }

    pub fn settings(&self) -> &FingerprintSettings {
        &self.settings
    }

    /// Render and encode on the current thread
    pub fn generate_blocking(&self) -> Result<String> {
        let fonts = self.fonts.get_or_init(system_fonts).clone();
        let data_url = render_data_url(&self.settings, fonts)?;

        let encoded = match self.settings.encoding {
            FingerprintEncoding::DataUrlPrefix => data_url,
            FingerprintEncoding::Sha256 => sha256_from_bytes(data_url.as_bytes()),
        };

        let fingerprint = truncate_chars(&encoded, self.settings.max_len);
        if fingerprint.is_empty() {
            return Err(DeviceIdError::EmptyFingerprint);
        }
        Ok(fingerprint)
    }
}

impl Default for CanvasFingerprint {
    fn default() -> Self {
        Self::new(FingerprintSettings::default())
    }
}

#[async_trait]
impl FingerprintGenerator for CanvasFingerprint {
    async fn generate(&self) -> Result<String> {
        let generator = self.clone();
        tokio::task::spawn_blocking(move || generator.generate_blocking())
            .await
            .map_err(|e| DeviceIdError::render(format!("Render task failed: {}", e)))?
    }
}

/// Generate a fingerprint with the default surface settings
pub async fn generate_fingerprint() -> Result<String> {
    CanvasFingerprint::default().generate().await
}

fn truncate_chars(input: &str, max_len: usize) -> String {
    input.chars().take(max_len).collect()
}
