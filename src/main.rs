use clap::Parser;
use craftshop::DismissPolicy;
use craftshop::core::config::{CliOverrides, CraftshopConfig, load_config, resolve};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "craftshop", about = "Product detail page for a handmade-goods shop")]
struct Args {
    /// Auto-dismiss delay for the popup, in milliseconds
    #[arg(long, value_name = "MS")]
    popup_ms: Option<u64>,

    /// What an earlier popup's timer does once a newer popup is showing
    #[arg(long, value_enum)]
    stale_timers: Option<DismissPolicy>,

    /// Read config from this file instead of ~/.craftshop/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config is resolved before the logger exists; its notes are replayed below
    let mut notes = Vec::new();
    let (file_config, config_error) = match load_config(args.config.as_deref(), &mut notes) {
        Ok(config) => (config, None),
        Err(e) => (CraftshopConfig::default(), Some(e)),
    };
    let config = resolve(
        &file_config,
        &CliOverrides {
            popup_ms: args.popup_ms,
            stale_timers: args.stale_timers,
        },
        &mut notes,
    );

    // Initialize file logger; the terminal belongs to the page
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }

    for note in &notes {
        note.emit();
    }
    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!("Craftshop starting up with config: {:?}", config);

    craftshop::tui::run(config)
}
