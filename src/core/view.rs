use crate::core::device_id::DeviceId;
use serde::Serialize;
use std::fmt;

pub const HEADING: &str = "Device Identification System";
pub const PLACEHOLDER: &str = "Generating...";

/// Display state of the identifier: pending until resolution completes
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "state", content = "deviceId")]
pub enum DeviceIdView {
    #[default]
    Generating,
    Resolved(DeviceId),
}

impl DeviceIdView {
    pub fn resolve(&mut self, id: DeviceId) {
        *self = Self::Resolved(id);
    }

    /// Text shown after the `Device ID:` label
    pub fn value(&self) -> &str {
        match self {
            Self::Generating => PLACEHOLDER,
            Self::Resolved(id) => id.as_str(),
        }
    }

    pub fn device_id(&self) -> Option<&DeviceId> {
        match self {
            Self::Generating => None,
            Self::Resolved(id) => Some(id),
        }
    }
}

impl fmt::Display for DeviceIdView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", HEADING)?;
        write!(f, "Device ID: {}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_before_resolution() {
        let view = DeviceIdView::default();

        assert_eq!(view.value(), "Generating...");
        assert!(view.device_id().is_none());
        assert_eq!(
            view.to_string(),
            "Device Identification System\nDevice ID: Generating..."
        );
    }

    #[test]
    fn test_resolved() {
        let mut view = DeviceIdView::default();
        view.resolve(DeviceId::new("abc"));

        assert_eq!(view.value(), "abc");
        assert_eq!(view.to_string().lines().last(), Some("Device ID: abc"));
        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            serde_json::json!({ "state": "resolved", "deviceId": "abc" })
        );
    }
}
