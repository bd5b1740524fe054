pub mod local;
pub mod sqlite;
pub mod traits;

pub use local::LocalStorage;
pub use sqlite::SqliteStore;
pub use traits::{AsyncStore, SyncStore};
