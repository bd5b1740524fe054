use crate::cli::commands::{ClearCommand, FingerprintCommand, ShowCommand};
use crate::config::Settings;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Persistent device identifier for this machine", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Directory holding both caches
    #[arg(long, global = true, env = "DEVICEKEY_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// JSON settings file
    #[arg(long, global = true, env = "DEVICEKEY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Copy an identifier found only in the database back into local storage
    #[arg(long, global = true)]
    pub backfill: bool,
}

impl GlobalArgs {
    /// Settings file (if any) with command-line overrides applied
    pub async fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_file(path).await?,
            None => Settings::default(),
        };

        if let Some(dir) = &self.data_dir {
            settings.data_dir = dir.clone();
        }
        if self.backfill {
            settings.backfill_sync_cache = true;
        }

        Ok(settings)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Show(ShowCommand),
    Fingerprint(FingerprintCommand),
    Clear(ClearCommand),
}
