use thiserror::Error;

/// Errors that can occur while resolving a device identifier
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DeviceIdError {
    // ============================================================================
    // I/O and System Errors
    // ============================================================================
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Serde JSON error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },

    // ============================================================================
    // Storage Errors
    // ============================================================================
    #[error("Database error: {source}")]
    Database {
        #[from]
        source: sqlx::Error,
    },

    #[error("Store unavailable: {message}")]
    StoreUnavailable { message: String },

    // ============================================================================
    // Fingerprint Errors
    // ============================================================================
    #[error("Render error: {message}")]
    Render { message: String },

    #[error("Fingerprint generator produced an empty identifier")]
    EmptyFingerprint,

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl DeviceIdError {
    /// Create a store unavailable error with a message
    pub fn store_unavailable(msg: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            message: msg.into(),
        }
    }

    /// Create a render error with a message
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
        }
    }

    /// Create an invalid configuration error with a message
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: msg.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DeviceIdError>;
