use clap::Parser;
use station_processor::cli::Args;
use station_processor::commands;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    if let Err(error) = commands::run(command) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Station Processor - GeoJSON Station List Converter");
    println!("===================================================");
    println!();
    println!("Convert transit station GeoJSON exports into normalized JSON station");
    println!("lists, then merge them into a single deduplicated, sorted file.");
    println!();
    println!("USAGE:");
    println!("    station-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    convert     Convert .geojson files into normalized station lists");
    println!("    merge       Merge converted lists into a single sorted file");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Convert ./geojson into ./converted_json:");
    println!("    station-processor convert");
    println!();
    println!("    # Merge ./converted_json into ./merged_list.json:");
    println!("    station-processor merge");
    println!();
    println!("    # Use custom directories:");
    println!("    station-processor convert --input ./exports --output ./lists");
    println!();
    println!("For detailed help on any command, use:");
    println!("    station-processor <COMMAND> --help");
}
