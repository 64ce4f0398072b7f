use clap::Parser;
use github_cards::core::config::{self, CliOverrides};
use github_cards::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "github-cards", version, about = "Look up Github users and collect their profile cards")]
struct Args {
    /// Title shown at the top of the screen
    #[arg(short, long)]
    title: Option<String>,

    /// Base URL of the Github REST API (e.g. a Github Enterprise `/api/v3` URL)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to github-cards.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("github-cards.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("Warning: {e}, using defaults");
        log::warn!("Failed to load config: {}", e);
        config::CardsConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            title: args.title,
            base_url: args.base_url,
        },
    );

    log::info!(
        "Github cards starting up: title={:?}, base_url={}",
        resolved.title,
        resolved.base_url
    );

    tui::run(resolved)
}
