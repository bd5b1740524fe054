use crate::config::Settings;
use crate::core::{DefaultResolver, DeviceIdView};
use crate::core::view::HEADING;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "show", about = "Resolve and display this device's identifier")]
pub struct ShowCommand {
    #[arg(short, long)]
    pub json: bool,
}

pub async fn execute(command: ShowCommand, settings: Settings) -> anyhow::Result<()> {
    let resolver = DefaultResolver::from_settings(&settings)?;
    let mut view = DeviceIdView::default();

    if command.json {
        view.resolve(resolver.resolve().await?);
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{}", HEADING.bold());

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} Device ID: {msg}")?);
    spinner.set_message(view.value().to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));

    let resolved = resolver.resolve().await;
    spinner.finish_and_clear();

    view.resolve(resolved?);
    println!("{} {}", "Device ID:".bold(), view.value());

    Ok(())
}
