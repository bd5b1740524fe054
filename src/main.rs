use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use devicekey::cli::ui::display_error;
    use devicekey::cli::{Cli, Commands};
    use devicekey::cli::{run_clear, run_fingerprint, run_show};

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = cli.global.settings().await?;

    let result = match cli.command {
        Commands::Show(cmd) => run_show(cmd, settings).await,
        Commands::Fingerprint(cmd) => run_fingerprint(cmd, settings).await,
        Commands::Clear(cmd) => run_clear(cmd, settings).await,
    };

    if let Err(e) = result {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
