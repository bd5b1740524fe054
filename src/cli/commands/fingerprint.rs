use crate::config::Settings;
use crate::crypto::{CanvasFingerprint, FingerprintGenerator, render_data_url, system_fonts};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "fingerprint",
    about = "Render the fingerprint surface without touching the caches"
)]
pub struct FingerprintCommand {
    /// Print the whole data URL instead of the truncated identifier
    #[arg(long)]
    pub full: bool,
}

pub async fn execute(command: FingerprintCommand, settings: Settings) -> anyhow::Result<()> {
    if command.full {
        let fp = settings.fingerprint;
        let data_url =
            tokio::task::spawn_blocking(move || render_data_url(&fp, system_fonts())).await??;
        println!("{}", data_url);
        return Ok(());
    }

    let generator = CanvasFingerprint::new(settings.fingerprint);
    println!("{}", generator.generate().await?);
    Ok(())
}
