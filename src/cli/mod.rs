pub mod cli;
pub mod commands;
pub mod ui;

pub use cli::{Cli, Commands, GlobalArgs};
pub use commands::clear::ClearCommand;
pub use commands::clear::execute as run_clear;
pub use commands::fingerprint::FingerprintCommand;
pub use commands::fingerprint::execute as run_fingerprint;
pub use commands::show::ShowCommand;
pub use commands::show::execute as run_show;
