use crate::utils::config::{
    DEFAULT_CENSUS_PATH, DEFAULT_COORDINATES_PATH, DEFAULT_NEIGHBORHOOD, DEFAULT_OUTPUT_PATH,
};
use std::path::PathBuf;

/// Arguments for the render command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RenderArgs {
    /// Census CSV (yearly per-neighborhood records)
    pub census_path: PathBuf,

    /// Neighborhood coordinate CSV
    pub coordinates_path: PathBuf,

    /// Neighborhood shown in the "Neighborhoods" panel
    pub neighborhood: String,

    /// Output path for the HTML page
    pub output_html: PathBuf,

    /// Output path for the JSON dashboard (optional)
    pub output_json: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Rows per chart in the text summary
    pub summary_rows: usize,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            census_path: PathBuf::from(DEFAULT_CENSUS_PATH),
            coordinates_path: PathBuf::from(DEFAULT_COORDINATES_PATH),
            neighborhood: DEFAULT_NEIGHBORHOOD.to_string(),
            output_html: PathBuf::from(DEFAULT_OUTPUT_PATH),
            output_json: None,
            print_summary: false,
            summary_rows: 10,
        }
    }
}
