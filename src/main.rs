use clap::Parser;
use log::LevelFilter;
use nexia::core::config::{self, CliOverrides, NexiaConfig};
use nexia::core::theme::Theme;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "nexia", about = "Turn your thoughts into reality: terminal idea generator")]
struct Args {
    /// Base URL of the idea service
    #[arg(long)]
    base_url: Option<String>,

    /// Path of the idea endpoint on the service
    #[arg(long)]
    endpoint: Option<String>,

    /// Color theme to start with
    #[arg(short, long, value_enum)]
    theme: Option<Theme>,

    /// Where to write the log file
    #[arg(long, default_value = "nexia.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // File logger: the terminal belongs to the TUI. Everything is recorded
    // until the configured level is known.
    init_file_logger(&args.log_file);

    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (NexiaConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        base_url: args.base_url,
        endpoint: args.endpoint,
        theme: args.theme,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::set_max_level(resolved.log_level);

    if let Some(e) = config_error {
        log::warn!("Ignoring config file, using defaults: {}", e);
    }
    log::info!(
        "Nexia starting up: service={}{}, theme={:?}",
        resolved.base_url,
        resolved.endpoint,
        resolved.theme
    );

    nexia::tui::run(resolved)
}

/// Installs the file logger at full verbosity. Returns false if the file
/// could not be created or a logger is already set.
fn init_file_logger(path: &Path) -> bool {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    match File::create(path) {
        Ok(log_file) => WriteLogger::init(LevelFilter::Trace, log_config, log_file).is_ok(),
        Err(_) => false,
    }
}
