/// Export the ScaleUp investor deck to a .pptx file.
///
/// This example demonstrates:
/// - Building an export engine from a YAML config (bundled content by default)
/// - Overriding the export date
/// - Inspecting the exported file
///
/// Run with `RUST_LOG=debug` to see per-slide progress.
use chrono::NaiveDate;
use clap::Parser;
use scaleup_deck::{ExportConfig, ExportEngine, logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Export the ScaleUp investor deck as a PowerPoint file")]
struct Args {
    /// Directory to write the deck into (overrides the config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// YAML export configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Date stamped into the file name, as YYYY-MM-DD
    #[arg(short, long)]
    date: Option<NaiveDate>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let args = Args::parse();

    let mut config = match args.config {
        Some(ref path) => ExportConfig::from_file(path)?,
        None => ExportConfig::default(),
    };
    if let Some(output) = args.output {
        config.output_dir = output;
    }

    let mut engine = ExportEngine::from_config(&config)?;
    if let Some(date) = args.date {
        engine = engine.with_date(date);
    }

    println!("Exporting {} ...", engine.file_name());
    let exported = engine.export_deck().await?;

    println!("✓ Deck exported");
    println!("  File:   {}", exported.path.display());
    println!("  Slides: {}", exported.slide_count);
    println!("  Size:   {} bytes", exported.bytes_written);

    Ok(())
}
