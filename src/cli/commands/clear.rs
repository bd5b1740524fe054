use crate::cli::ui::{display_info, display_success};
use crate::config::Settings;
use crate::core::DefaultResolver;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "clear", about = "Forget the cached device identifier")]
pub struct ClearCommand {}

pub async fn execute(_command: ClearCommand, settings: Settings) -> anyhow::Result<()> {
    let resolver = DefaultResolver::from_settings(&settings)?;

    match resolver.peek().await? {
        Some(id) => {
            resolver.clear().await?;
            display_success(&format!("Removed device ID {}", id));
        }
        None => display_info("No device ID cached"),
    }

    Ok(())
}
