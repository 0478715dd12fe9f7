//! bundlescan - Inventory and classify the files inside an application bundle.
//!
//! Usage:
//!   bundlescan scan [PATH]            List every file with its classification
//!   bundlescan scan PATH -t macho     Only list Mach-O binaries
//!   bundlescan move <SRC> <DST>       Move a bundle, copying across devices
//!   bundlescan --help                 Show help

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing::Level;

use bundlescan_core::{AppFileType, Inventory};
use bundlescan_ops::fs_move;
use bundlescan_walk::{BundleWalker, InventoryConfig};

#[derive(Parser)]
#[command(
    name = "bundlescan",
    version,
    about = "Inventory and classify the files inside an application bundle",
    long_about = "bundlescan walks an application bundle, skips symlinks, visits each \
                  physical file once, and tags every file as macho, plain, info-plist, \
                  snapshot or app-code."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Walk a bundle and list its files
    Scan {
        /// Bundle root
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Only list files of this type (repeatable)
        #[arg(short = 't', long = "type", value_parser = parse_type)]
        types: Vec<AppFileType>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Move a file or directory, falling back to copy + remove across devices
    Move {
        /// Path to move
        source: PathBuf,

        /// Destination path
        destination: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Command::Scan {
            path,
            types,
            format,
        } => run_scan(&path, types, format)?,
        Command::Move {
            source,
            destination,
        } => run_move(&source, &destination)?,
    }

    Ok(())
}

/// Install a stderr fmt subscriber at the level chosen by `-v`.
fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to install logger")?;

    Ok(())
}

/// Walk a bundle and print its inventory.
fn run_scan(path: &Path, types: Vec<AppFileType>, format: OutputFormat) -> Result<()> {
    let config = InventoryConfig::builder()
        .root(path)
        .include_types(types)
        .build()
        .context("Invalid scan options")?;

    let inventory = BundleWalker::new()
        .walk(&config)
        .with_context(|| format!("Failed to scan {}", path.display()))?;

    match format {
        OutputFormat::Text => print_text(&inventory),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&inventory)?),
    }

    Ok(())
}

fn print_text(inventory: &Inventory) {
    for file in &inventory.files {
        println!("{}\t{}", file.file_type, file.relative_path.display());
    }

    let stats = &inventory.stats;
    eprintln!();
    eprintln!("{}", "─".repeat(60));
    eprintln!(
        " {} - {} files, {} directories, {}",
        inventory.root.display(),
        stats.total_files,
        stats.total_dirs,
        humansize::format_size(stats.total_size, humansize::BINARY)
    );
    for (file_type, count) in &stats.by_type {
        eprintln!("   {:<12} {:>8}", file_type.as_ref(), count);
    }
    if stats.symlinks > 0 || stats.aliases_skipped > 0 {
        eprintln!(
            " {} symlink(s), {} alias(es) skipped",
            stats.symlinks, stats.aliases_skipped
        );
    }
    eprintln!(" Scanned in {:.2}s", inventory.scan_duration.as_secs_f64());
    eprintln!("{}", "─".repeat(60));
}

/// Move a path and report which strategy was used.
fn run_move(source: &Path, destination: &Path) -> Result<()> {
    let outcome = fs_move(source, destination).with_context(|| {
        format!(
            "Failed to move {} to {}",
            source.display(),
            destination.display()
        )
    })?;

    eprintln!(
        "{} -> {} ({})",
        source.display(),
        destination.display(),
        outcome
    );

    Ok(())
}

fn parse_type(s: &str) -> Result<AppFileType, String> {
    s.parse::<AppFileType>()
        .map_err(|_| format!("unknown type '{s}' (expected macho, plain, info-plist, snapshot, app-code)"))
}
