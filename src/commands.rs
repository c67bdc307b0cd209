//! Command implementations for the station processor CLI
//!
//! This module contains the command execution logic: logging setup, stage
//! dispatch, and summary reporting.

use crate::cli::{Commands, ConvertArgs, MergeArgs};
use crate::converter::GeojsonConverter;
use crate::merger::ListMerger;
use anyhow::Result;
use colored::*;
use tracing::{debug, info};

/// Run the parsed subcommand
pub fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Convert(args) => convert(args),
        Commands::Merge(args) => merge(args),
    }
}

/// Execute the convert command
fn convert(args: ConvertArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet);

    let input_dir = args.get_input_dir();
    let output_dir = args.get_output_dir();
    info!(
        "Converting GeoJSON files from {} into {}",
        input_dir.display(),
        output_dir.display()
    );

    let converter = GeojsonConverter::new(input_dir, output_dir);
    let stats = converter.run()?;

    if !args.quiet {
        println!("\n{}", "Conversion Summary".bright_green().bold());
        println!(
            "  {} {}",
            "Files converted:".bright_cyan(),
            stats.files_converted.to_string().bright_white()
        );
        println!(
            "  {} {}",
            "Stations written:".bright_cyan(),
            stats.stations_written.to_string().bright_white().bold()
        );
        println!(
            "  {} {}ms",
            "Time elapsed:".bright_cyan(),
            stats.processing_time_ms.to_string().bright_white()
        );
    }

    Ok(())
}

/// Execute the merge command
fn merge(args: MergeArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet);

    let input_dir = args.get_input_dir();
    let output_file = args.get_output_file();
    info!(
        "Merging station lists from {} into {}",
        input_dir.display(),
        output_file.display()
    );

    let merger = ListMerger::new(input_dir, output_file);
    let Some(stats) = merger.run()? else {
        // Missing input directory was already reported; exit cleanly
        return Ok(());
    };

    if !args.quiet {
        println!("\n{}", "Merge Summary".bright_green().bold());
        println!(
            "  {} {}",
            "Files merged:".bright_cyan(),
            stats.files_merged.to_string().bright_white()
        );
        if stats.files_skipped > 0 {
            println!(
                "  {} {}",
                "Files skipped:".bright_red(),
                stats.files_skipped.to_string().bright_red().bold()
            );
        }
        println!(
            "  {} {}",
            "Stations merged:".bright_cyan(),
            stats.stations_total.to_string().bright_white().bold()
        );
        println!(
            "  {} {}",
            "Output:".bright_cyan(),
            stats.output_path.display()
        );
        println!(
            "  {} {}ms",
            "Time elapsed:".bright_cyan(),
            stats.processing_time_ms.to_string().bright_white()
        );
    }

    Ok(())
}

/// Initialize the tracing subscriber for CLI execution
fn setup_logging(log_level: &str, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("station_processor={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}
