/// Key under which both caches hold the identifier
pub const DEFAULT_STORAGE_KEY: &str = "deviceId";

/// File name of the synchronous store inside the data directory
pub const DEFAULT_LOCAL_STORAGE_FILE: &str = "localStorage.json";

/// Name of the transactional database
pub const DEFAULT_DATABASE_NAME: &str = "DeviceDB";

/// Collection (table) holding the identifier in the transactional database
pub const DEFAULT_COLLECTION: &str = "deviceStore";

/// Schema version the transactional database is opened with
pub const SCHEMA_VERSION: u32 = 1;

/// Directory created under the platform data directory
pub const APP_DIR_NAME: &str = "devicekey";

// Drawing surface, matching an unsized HTML canvas
pub const DEFAULT_SURFACE_WIDTH: u32 = 300;
pub const DEFAULT_SURFACE_HEIGHT: u32 = 150;

pub const FINGERPRINT_TEXT: &str = "UniqueDeviceFingerprint";
pub const DEFAULT_FONT_FAMILY: &str = "Arial";
pub const DEFAULT_FONT_SIZE: f32 = 14.0;
pub const DEFAULT_TEXT_X: f32 = 2.0;
pub const DEFAULT_TEXT_Y: f32 = 2.0;

/// Identifiers are truncated to this many characters
pub const MAX_FINGERPRINT_LEN: usize = 50;

pub const DATA_URL_PREFIX: &str = "data:image/png;base64,";
