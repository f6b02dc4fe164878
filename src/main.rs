use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use celebrity_lookalike::adapters::{ConsoleNotificationSink, FileImageSource, LookalikeClient};
use celebrity_lookalike::core::models::ClientSettings;
use celebrity_lookalike::core::orchestrators::LookupOrchestrator;
use celebrity_lookalike::global_constants;

#[derive(Parser)]
#[command(name = "lookalike", about = "Find celebrity look-alikes for a photo")]
struct Cli {
    /// Image to submit (JPEG is sent as-is, other formats are re-encoded)
    image: PathBuf,

    /// Maximum number of matches to request
    #[arg(short = 'k', long)]
    top_k: Option<u32>,

    /// Service root, e.g. http://localhost:5000/api
    #[arg(long)]
    api_url: Option<String>,

    /// Log raw response bodies
    #[arg(long)]
    log_responses: bool,

    /// Persist the given overrides to the settings file
    #[arg(long)]
    save_settings: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_NAME);

    let cli = Cli::parse();
    let settings = apply_overrides(ClientSettings::load()?, &cli);

    if cli.save_settings {
        settings.save()?;
    }

    let client = Arc::new(LookalikeClient::new(settings.client_config()));
    let orchestrator = LookupOrchestrator::build(
        Arc::new(FileImageSource::new(cli.image.clone())),
        client,
        Arc::new(ConsoleNotificationSink::new()),
        settings.top_k,
    );

    if let Some(error_kind) = orchestrator.run_lookup().await {
        log::debug!("[MAIN] Lookup ended with {:?}", error_kind);
        std::process::exit(1);
    }

    Ok(())
}

fn apply_overrides(mut settings: ClientSettings, cli: &Cli) -> ClientSettings {
    if let Some(top_k) = cli.top_k {
        settings.top_k = top_k;
    }
    if let Some(api_url) = &cli.api_url {
        settings.api_url = api_url.clone();
    }
    if cli.log_responses {
        settings.log_responses = true;
    }
    settings
}
