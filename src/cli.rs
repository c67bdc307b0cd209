//! Command-line argument definitions for the station processor
//!
//! This module defines the CLI interface using the clap derive API: a
//! `convert` subcommand for the GeoJSON conversion stage and a `merge`
//! subcommand for the list merge stage.

use crate::constants::{CONVERTED_OUTPUT_DIR, GEOJSON_INPUT_DIR, MERGED_OUTPUT_FILENAME};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the station list processor
#[derive(Debug, Clone, Parser)]
#[command(
    name = "station-processor",
    version,
    about = "Convert station GeoJSON exports into a normalized, merged JSON station list"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the station processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert GeoJSON station exports to normalized station lists
    Convert(ConvertArgs),
    /// Merge converted station lists into a single deduplicated file
    Merge(MergeArgs),
}

/// Arguments for the convert command
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Directory containing .geojson input files
    ///
    /// If not specified, defaults to ./geojson
    #[arg(
        short = 'i',
        long = "input",
        value_name = "DIR",
        help = "Directory containing .geojson input files"
    )]
    pub input_dir: Option<PathBuf>,

    /// Directory for converted .json station lists
    ///
    /// Will be created if it doesn't exist. If not specified, defaults to
    /// ./converted_json
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Directory for converted .json station lists"
    )]
    pub output_dir: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress summary output (quiet mode)
    ///
    /// Only show the per-file progress lines and errors.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress summary output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the merge command
#[derive(Debug, Clone, Parser)]
pub struct MergeArgs {
    /// Directory containing converted .json station lists
    ///
    /// If not specified, defaults to ./converted_json
    #[arg(
        short = 'i',
        long = "input",
        value_name = "DIR",
        help = "Directory containing converted .json station lists"
    )]
    pub input_dir: Option<PathBuf>,

    /// Output file for the merged station list
    ///
    /// If not specified, defaults to ./merged_list.json
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file for the merged station list"
    )]
    pub output_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress summary output (quiet mode)
    ///
    /// Only show the per-file progress lines and errors.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress summary output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl ConvertArgs {
    /// Get the input directory, defaulting to ./geojson
    pub fn get_input_dir(&self) -> PathBuf {
        self.input_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(GEOJSON_INPUT_DIR))
    }

    /// Get the output directory, defaulting to ./converted_json
    pub fn get_output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(CONVERTED_OUTPUT_DIR))
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.quiet, self.verbose)
    }
}

impl MergeArgs {
    /// Get the input directory, defaulting to ./converted_json
    pub fn get_input_dir(&self) -> PathBuf {
        self.input_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(CONVERTED_OUTPUT_DIR))
    }

    /// Get the output file, defaulting to ./merged_list.json
    pub fn get_output_file(&self) -> PathBuf {
        self.output_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(MERGED_OUTPUT_FILENAME))
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.quiet, self.verbose)
    }
}

/// Map verbosity flags to a log level name
fn log_level(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
