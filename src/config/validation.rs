use crate::config::settings::Settings;
use crate::error::{DeviceIdError, Result};

/// Validates a collection name before it is spliced into SQL.
///
/// Accepts ASCII letters, digits and underscores, not starting with a digit.
pub fn validate_collection_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if !valid {
        return Err(DeviceIdError::invalid_config(format!(
            "Collection name {:?} is not a valid identifier",
            name
        )));
    }

    Ok(())
}

/// Validates settings before any store is opened
pub fn validate_settings(settings: &Settings) -> Result<()> {
    if settings.storage_key.trim().is_empty() {
        return Err(DeviceIdError::invalid_config("Storage key cannot be empty"));
    }

    if settings.local_storage_file.trim().is_empty() {
        return Err(DeviceIdError::invalid_config(
            "Local storage file name cannot be empty",
        ));
    }

    if settings.database_name.trim().is_empty() {
        return Err(DeviceIdError::invalid_config("Database name cannot be empty"));
    }

    validate_collection_name(&settings.collection)?;

    if settings.schema_version == 0 {
        return Err(DeviceIdError::invalid_config(
            "Schema version must be at least 1",
        ));
    }

    let fp = &settings.fingerprint;
    if fp.width == 0 || fp.height == 0 {
        return Err(DeviceIdError::invalid_config(
            "Fingerprint surface must have non-zero dimensions",
        ));
    }

    if fp.max_len == 0 {
        return Err(DeviceIdError::invalid_config(
            "Fingerprint maximum length must be at least 1",
        ));
    }

    if !(fp.font_size.is_finite() && fp.font_size > 0.0) {
        return Err(DeviceIdError::invalid_config(
            "Fingerprint font size must be positive",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_collection_name() {
        assert!(validate_collection_name("deviceStore").is_ok());
        assert!(validate_collection_name("_ids_2").is_ok());

        assert!(validate_collection_name("").is_err());
        assert!(validate_collection_name("2ids").is_err());
        assert!(validate_collection_name("device store").is_err());
        assert!(validate_collection_name("ids\"; DROP TABLE x; --").is_err());
    }

    #[test]
    fn test_validate_settings() {
        let mut settings = Settings::with_data_dir("/tmp/dk");

        // Valid defaults
        assert!(validate_settings(&settings).is_ok());

        // Empty key
        settings.storage_key = " ".to_string();
        assert!(validate_settings(&settings).is_err());
        settings.storage_key = "deviceId".to_string();

        // Zero schema version
        settings.schema_version = 0;
        assert!(validate_settings(&settings).is_err());
        settings.schema_version = 1;

        // Zero-sized surface
        settings.fingerprint.width = 0;
        assert!(validate_settings(&settings).is_err());
        settings.fingerprint.width = 300;

        // Zero length
        settings.fingerprint.max_len = 0;
        assert!(validate_settings(&settings).is_err());
        settings.fingerprint.max_len = 50;

        // Bad font size
        settings.fingerprint.font_size = f32::NAN;
        assert!(validate_settings(&settings).is_err());
    }
}
