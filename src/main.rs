//! SF Housing Dashboard CLI
//!
//! Builds the San Francisco real-estate dashboard from the census and
//! coordinate CSVs and writes it as HTML (and optionally JSON).

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use sf_housing_dashboard::commands::{
    display_schema, display_version, execute_render, list_neighborhoods, validate_args,
    validate_dashboard_file, RenderArgs,
};
use sf_housing_dashboard::utils::config::{
    DEFAULT_CENSUS_PATH, DEFAULT_COORDINATES_PATH, DEFAULT_NEIGHBORHOOD, DEFAULT_OUTPUT_PATH,
};

/// SF Housing Dashboard - San Francisco real-estate charts
#[derive(Parser, Debug)]
#[command(name = "sf-dashboard")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the dashboard and write it to disk
    Render {
        /// Census CSV with yearly per-neighborhood records
        #[arg(short, long, default_value = DEFAULT_CENSUS_PATH)]
        data: PathBuf,

        /// Neighborhood coordinates CSV
        #[arg(short, long, default_value = DEFAULT_COORDINATES_PATH)]
        coordinates: PathBuf,

        /// Neighborhood for the "Neighborhoods" panel
        #[arg(short, long, default_value = DEFAULT_NEIGHBORHOOD)]
        neighborhood: String,

        /// Output path for the HTML page
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// Output path for a JSON copy of the dashboard (optional)
        #[arg(short, long)]
        json: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Rows per chart in the text summary
        #[arg(long, default_value = "10")]
        summary_rows: usize,
    },

    /// List the selectable neighborhoods
    Neighborhoods,

    /// Validate a dashboard JSON file
    Validate {
        /// Path to dashboard JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Render {
            data,
            coordinates,
            neighborhood,
            output,
            json,
            summary,
            summary_rows,
        } => {
            let args = RenderArgs {
                census_path: data,
                coordinates_path: coordinates,
                neighborhood,
                output_html: output,
                output_json: json,
                print_summary: summary,
                summary_rows,
            };

            // Validate args first
            validate_args(&args)?;

            execute_render(args)?;
        }

        Commands::Neighborhoods => {
            list_neighborhoods();
        }

        Commands::Validate { file } => {
            validate_dashboard_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
