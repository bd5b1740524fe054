pub mod canvas;
pub mod fingerprint;
pub mod hash;

pub use canvas::{FontDatabase, render_data_url, system_fonts};
pub use fingerprint::{CanvasFingerprint, FingerprintGenerator, generate_fingerprint};
pub use hash::sha256_from_bytes;
