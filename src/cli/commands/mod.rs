pub mod clear;
pub mod fingerprint;
pub mod show;

pub use clear::ClearCommand;
pub use fingerprint::FingerprintCommand;
pub use show::ShowCommand;

pub use clear::execute as run_clear;
pub use fingerprint::execute as run_fingerprint;
pub use show::execute as run_show;
