use std::path::Path;
use sf_housing_dashboard::dashboard::{build_dashboard, Dashboard, PANEL_MAPPED};
use sf_housing_dashboard::output::{
    read_dashboard, render_html, validate_path, write_dashboard, write_html,
};
use sf_housing_dashboard::parser::{load_census, load_coordinates};
use tempfile::NamedTempFile;

fn create_test_dashboard() -> Dashboard {
    let census = load_census("tests/fixtures/census.csv").unwrap();
    let coordinates = load_coordinates("tests/fixtures/coordinates.csv").unwrap();
    build_dashboard(&census, &coordinates, "Alamo Square")
}

#[test]
fn test_write_and_read_dashboard() {
    let dashboard = create_test_dashboard();
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    // Write
    write_dashboard(&dashboard, path).unwrap();

    // Read back
    let loaded = read_dashboard(path).unwrap();

    assert_eq!(loaded.version, dashboard.version);
    assert_eq!(loaded.neighborhood, dashboard.neighborhood);
    assert_eq!(loaded.chart_count(), 8);

    let map = loaded.panel(PANEL_MAPPED).unwrap().sections[0].chart.map.as_ref().unwrap();
    assert_eq!(map.points.len(), 3);
}

#[test]
fn test_validate_output_path_empty() {
    let result = validate_path(Path::new(""));
    assert!(result.is_err());
}

#[test]
fn test_validate_output_path_directory() {
    // Try to write to a directory path
    let temp_dir = tempfile::tempdir().unwrap();
    let result = validate_path(temp_dir.path());
    assert!(result.is_err());
}

#[test]
fn test_write_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/dirs/dashboard.json");

    write_dashboard(&create_test_dashboard(), &nested_path).unwrap();

    assert!(nested_path.exists());
}

#[test]
fn test_render_and_write_html() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("site/dashboard.html");

    let html = render_html(&create_test_dashboard()).unwrap();
    write_html(&html, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("San Francisco Real Estate Analysis"));
    assert!(written.contains("Average Yearly Sales Price for Alamo Square"));
    assert!(written.contains("scattermapbox"));
    assert_eq!(written.matches("Plotly.newPlot(").count(), 8);
}

#[test]
fn test_read_dashboard_rejects_garbage() {
    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "{\"not\": \"a dashboard\"}").unwrap();

    assert!(read_dashboard(temp_file.path()).is_err());
}
