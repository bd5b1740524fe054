pub mod constants;
pub mod settings;
pub mod validation;

pub use constants::{
    DEFAULT_COLLECTION, DEFAULT_DATABASE_NAME, DEFAULT_STORAGE_KEY, FINGERPRINT_TEXT,
    MAX_FINGERPRINT_LEN, SCHEMA_VERSION,
};
pub use settings::{FingerprintEncoding, FingerprintSettings, Settings};
pub use validation::{validate_collection_name, validate_settings};
