//! Render command implementation.
//!
//! The render command:
//! 1. Loads the census table
//! 2. Loads the coordinate table
//! 3. Builds the dashboard for the selected neighborhood
//! 4. Writes output files

use super::models::RenderArgs;
use crate::charts::generate_text_summary;
use crate::dashboard::{build_dashboard, Dashboard};
use crate::output::{render_html, write_dashboard, write_html};
use crate::parser::{load_census, load_coordinates};
use crate::utils::config::is_known_neighborhood;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the render command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Missing or malformed input CSVs
/// * File write errors
///
/// # Example
/// ```ignore
/// let args = RenderArgs {
///     neighborhood: "Nob Hill".to_string(),
///     print_summary: true,
///     ..Default::default()
/// };
///
/// execute_render(args)?;
/// ```
pub fn execute_render(args: RenderArgs) -> Result<Dashboard> {
    let start_time = Instant::now();

    info!("Rendering dashboard for neighborhood: {}", args.neighborhood);

    info!("Step 1/4: Loading census data...");
    let census = load_census(&args.census_path).with_context(|| {
        format!("Failed to load census data from {}", args.census_path.display())
    })?;

    debug!(
        "Census: {} rows, {} neighborhoods, {} years",
        census.len(),
        census.neighborhoods().len(),
        census.years().len()
    );

    info!("Step 2/4: Loading neighborhood coordinates...");
    let coordinates = load_coordinates(&args.coordinates_path).with_context(|| {
        format!(
            "Failed to load coordinates from {}",
            args.coordinates_path.display()
        )
    })?;

    info!("Step 3/4: Building charts...");
    let dashboard = build_dashboard(&census, &coordinates, &args.neighborhood);

    info!("Step 4/4: Writing output files...");
    let html = render_html(&dashboard).context("Failed to render dashboard HTML")?;
    write_html(&html, &args.output_html).context("Failed to write dashboard HTML")?;

    info!("✓ Dashboard written to: {}", args.output_html.display());

    if let Some(json_path) = &args.output_json {
        write_dashboard(&dashboard, json_path).context("Failed to write dashboard JSON")?;
        info!("✓ Dashboard JSON written to: {}", json_path.display());
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("DASHBOARD SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Neighborhood: {}", dashboard.neighborhood);
        println!("Census rows:  {}", census.len());
        println!("Coordinates:  {}", coordinates.len());
        for panel in &dashboard.panels {
            println!("\n[{}]\n", panel.name);
            let sections = panel
                .sections
                .iter()
                .map(|s| (s.heading.as_str(), &s.chart));
            println!("{}", generate_text_summary(sections, args.summary_rows));
        }
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Render completed in {:.2}s", elapsed.as_secs_f64());

    Ok(dashboard)
}

/// Validate render arguments
///
/// **Public** - can be called before execute_render for early validation
pub fn validate_args(args: &RenderArgs) -> Result<()> {
    if args.census_path.as_os_str().is_empty() {
        anyhow::bail!("Census data path cannot be empty");
    }

    if args.coordinates_path.as_os_str().is_empty() {
        anyhow::bail!("Coordinates path cannot be empty");
    }

    if args.output_html.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if args.neighborhood.trim().is_empty() {
        anyhow::bail!("Neighborhood cannot be empty");
    }

    if !is_known_neighborhood(&args.neighborhood) {
        anyhow::bail!(
            "Unknown neighborhood '{}' (run `sf-dashboard neighborhoods` for the list)",
            args.neighborhood
        );
    }

    if args.summary_rows == 0 {
        anyhow::bail!("summary_rows must be greater than 0");
    }

    Ok(())
}
