//! litematic2json - convert Litematica schematics to flat JSON.
//!
//! ```bash
//! litematic2json house.litematic            # writes house.json
//! litematic2json house.litematic out.json --compact
//! ```
//!
//! An optional `litematic2json.toml` next to the working directory sets
//! the log level, JSON formatting and the material summary skip list.

mod config;
mod decompress;
mod error;
mod export;

use std::path::{Path, PathBuf};

use clap::Parser;
use schem_rs_litematic::convert;
use tracing::{error, info, warn};

use config::ConverterConfig;
use error::CliError;
use export::{material_summary, ExportDocument};

/// Convert a Litematica schematic into a JSON block grid
#[derive(Debug, Parser)]
#[command(name = "litematic2json")]
#[command(version)]
struct Cli {
    /// Schematic file (.litematic, gzip or raw NBT)
    input: PathBuf,

    /// Output file (default: <input stem>.json)
    output: Option<PathBuf>,

    /// Config file
    #[arg(long, default_value = "litematic2json.toml")]
    config: PathBuf,

    /// Write JSON without indentation
    #[arg(long)]
    compact: bool,

    /// Log filter, overrides the config file
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let config = match ConverterConfig::load_or_default(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    if let Err(e) = run(&cli, &config) {
        error!("conversion failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &ConverterConfig) -> Result<PathBuf, CliError> {
    let pretty = config.output.pretty && !cli.compact;
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input));
    convert_file(&cli.input, &output, pretty, &config.stats.skip)?;
    Ok(output)
}

fn default_output_path(input: &Path) -> PathBuf {
    PathBuf::from(format!("{}.json", file_stem(input)))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "schematic".into())
}

fn convert_file(
    input: &Path,
    output: &Path,
    pretty: bool,
    skip: &[String],
) -> Result<(), CliError> {
    info!("Reading {}", input.display());
    let raw = std::fs::read(input).map_err(|source| CliError::Io {
        path: input.display().to_string(),
        source,
    })?;

    let data = decompress::gunzip_or_raw(&raw);
    let schematic = convert(&data)?;
    let grid = &schematic.grid;
    info!(
        "Region '{}': {}x{}x{}, {} palette entries, {} blocks",
        schematic.region_name,
        grid.width(),
        grid.height(),
        grid.length(),
        grid.palette().len(),
        grid.indices().len()
    );
    if schematic.stats.clamped > 0 || schematic.stats.padded > 0 {
        warn!(
            "{} out-of-range and {} missing block entries were written as index 0",
            schematic.stats.clamped, schematic.stats.padded
        );
    }

    let name = file_stem(input);
    let json = ExportDocument::new(&name, &schematic).to_json(pretty)?;
    std::fs::write(output, &json).map_err(|source| CliError::Io {
        path: output.display().to_string(),
        source,
    })?;
    info!(
        "Wrote {} ({:.2} KB)",
        output.display(),
        json.len() as f64 / 1024.0
    );

    let summary = material_summary(&schematic, skip);
    info!("Materials needed: {} kinds", summary.len());
    for (block, count) in &summary {
        info!("  {block}: {count}");
    }
    Ok(())
}
