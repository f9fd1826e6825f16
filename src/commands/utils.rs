use crate::output::read_dashboard;
use crate::utils::config::{DEFAULT_NEIGHBORHOOD, NEIGHBORHOODS, SCHEMA_VERSION};
use anyhow::Result;
use std::path::PathBuf;

/// Validate a dashboard JSON file
pub fn validate_dashboard_file(file_path: PathBuf) -> Result<()> {
    println!("Validating dashboard: {}", file_path.display());

    let dashboard = read_dashboard(&file_path)?;

    println!("✓ Valid dashboard JSON");
    println!("  Version: {}", dashboard.version);
    println!("  Neighborhood: {}", dashboard.neighborhood);
    println!("  Generated: {}", dashboard.generated_at);
    println!("  Panels: {}", dashboard.panels.len());
    for panel in &dashboard.panels {
        let empty = panel.sections.iter().filter(|s| s.chart.is_empty()).count();
        println!(
            "    {:<18} {} charts ({} empty)",
            panel.name,
            panel.sections.len(),
            empty
        );
    }

    Ok(())
}

/// Print the neighborhoods the selector offers
pub fn list_neighborhoods() {
    for name in NEIGHBORHOODS {
        let marker = if *name == DEFAULT_NEIGHBORHOOD { " (default)" } else { "" };
        println!("{}{}", name, marker);
    }
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("SF Housing Dashboard Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  title: string            - Page header");
        println!("  neighborhood: string     - Selected neighborhood");
        println!("  panels: array            - Tabs in display order");
        println!("    name: string           - Tab name");
        println!("    sections: array        - Headed charts");
        println!("      heading: string      - Section heading");
        println!("      expanded: bool       - Whether the section starts open");
        println!("      chart: object        - Chart description");
        println!("        kind: string       - bar | grouped_bar | line | scatter_map");
        println!("        series: array      - {{name, x, y}} per series");
        println!("        map: object?       - Map layer (scatter_map only)");
        println!("  generated_at: string     - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("SF Housing Dashboard v{}", env!("CARGO_PKG_VERSION"));
    println!("Dashboard Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Yearly and per-neighborhood real-estate charts for San Francisco.");
}
