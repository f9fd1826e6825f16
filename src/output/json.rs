//! JSON dashboard writer and reader.

use super::{ensure_parent_dir, validate_path};
use crate::dashboard::Dashboard;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Write a dashboard to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `dashboard` - Dashboard to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let dashboard = build_dashboard(&census, &coordinates, "Marina");
/// write_dashboard(&dashboard, "dashboard.json")?;
/// ```
pub fn write_dashboard(
    dashboard: &Dashboard,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing dashboard JSON to: {}", output_path.display());

    validate_path(output_path)?;
    ensure_parent_dir(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, dashboard).map_err(OutputError::SerializationFailed)?;

    info!(
        "Dashboard JSON written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Serialize a dashboard to a pretty JSON string
///
/// **Public** - useful for tests and piping
pub fn dashboard_to_string(dashboard: &Dashboard) -> Result<String, OutputError> {
    serde_json::to_string_pretty(dashboard).map_err(OutputError::SerializationFailed)
}

/// Read a dashboard from a JSON file
///
/// **Public** - used by the validate command
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_dashboard(input_path: impl AsRef<Path>) -> Result<Dashboard, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading dashboard from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;

    let dashboard: Dashboard = serde_json::from_reader(BufReader::new(file))
        .map_err(OutputError::SerializationFailed)?;

    debug!(
        "Dashboard loaded: version {}, neighborhood {}",
        dashboard.version, dashboard.neighborhood
    );

    Ok(dashboard)
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
