use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use hieroglyph::core::config::{CliOverrides, load_config, resolve};
use hieroglyph::{translate, tui};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "hieroglyph", about = "Translate text into Egyptian hieroglyphs")]
struct Args {
    /// Simulated translation delay in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Catalog cards shown per page
    #[arg(long)]
    cards_per_page: Option<usize>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the translation of TEXT and exit without starting the UI
    #[arg(long, value_name = "TEXT")]
    translate: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    if let Some(text) = args.translate {
        println!("{}", translate(&text));
        return Ok(());
    }

    let file_config = load_config().map_err(std::io::Error::other)?;
    let cli = CliOverrides {
        delay_ms: args.delay_ms,
        cards_per_page: args.cards_per_page,
        log_file: args.log_file,
    };
    let config = resolve(&file_config, &cli);

    // The terminal belongs to the UI, so logs go to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Hieroglyph starting up with {:?}", config);

    tui::run(config)
}
