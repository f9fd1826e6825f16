//! CSV loaders for the census and coordinate tables.
//!
//! Columns are matched by header name, so column order does not matter
//! and extra columns are ignored. Required columns are checked up front
//! so a missing one is reported by name instead of as a serde error on
//! the first row.

use super::schema::{CensusData, CensusRecord, CoordinateTable, NeighborhoodCoordinate};
use crate::utils::error::LoadError;
use csv::{ReaderBuilder, Trim};
use log::{debug, info};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Header names the census table must carry
pub const CENSUS_COLUMNS: &[&str] = &[
    "year",
    "neighborhood",
    "sale_price_sqr_foot",
    "housing_units",
    "gross_rent",
];

/// Header names the coordinate table must carry
pub const COORDINATE_COLUMNS: &[&str] = &["Neighborhood", "Lat", "Lon"];

/// Load the census table from a CSV file
///
/// **Public** - main entry point for census loading
///
/// # Errors
/// * `LoadError::Io` - file cannot be opened
/// * `LoadError::MissingColumn` - a required header is absent
/// * `LoadError::Csv` - malformed row (e.g. non-integer year)
pub fn load_census(path: impl AsRef<Path>) -> Result<CensusData, LoadError> {
    let path = path.as_ref();
    info!("Loading census data from: {}", path.display());

    let file = open(path)?;
    let records: Vec<CensusRecord> = read_records(file, path, CENSUS_COLUMNS)?;

    info!("Loaded {} census rows", records.len());
    Ok(CensusData::new(records))
}

/// Load the neighborhood coordinate table from a CSV file
///
/// **Public** - only the map view needs this table
pub fn load_coordinates(path: impl AsRef<Path>) -> Result<CoordinateTable, LoadError> {
    let path = path.as_ref();
    info!("Loading neighborhood coordinates from: {}", path.display());

    let file = open(path)?;
    let entries: Vec<NeighborhoodCoordinate> = read_records(file, path, COORDINATE_COLUMNS)?;

    info!("Loaded {} neighborhood coordinates", entries.len());
    Ok(CoordinateTable::new(entries))
}

/// Parse census rows from any reader
///
/// **Public** - lets callers load from memory; `source` only labels errors
pub fn census_from_reader<R: Read>(reader: R, source: &Path) -> Result<CensusData, LoadError> {
    read_records(reader, source, CENSUS_COLUMNS).map(CensusData::new)
}

/// Parse coordinate rows from any reader
pub fn coordinates_from_reader<R: Read>(
    reader: R,
    source: &Path,
) -> Result<CoordinateTable, LoadError> {
    read_records(reader, source, COORDINATE_COLUMNS).map(CoordinateTable::new)
}

/// **Private** - open with the path attached to the error
fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and deserialize every row after checking the header
///
/// **Private** - shared by both loaders
fn read_records<T, R>(reader: R, source: &Path, required: &[&str]) -> Result<Vec<T>, LoadError>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = rdr.headers().map_err(|e| csv_error(source, e))?.clone();
    debug!("{} headers: {:?}", source.display(), headers);

    if let Some(column) = required.iter().find(|c| !headers.iter().any(|h| h == **c)) {
        return Err(LoadError::MissingColumn {
            path: source.to_path_buf(),
            column: column.to_string(),
        });
    }

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: T = result.map_err(|e| csv_error(source, e))?;
        rows.push(row);
    }

    Ok(rows)
}

fn csv_error(source: &Path, err: csv::Error) -> LoadError {
    LoadError::Csv {
        path: source.to_path_buf(),
        source: err,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENSUS: &str = "\
year,neighborhood,sale_price_sqr_foot,housing_units,gross_rent
2010,Alamo Square,291.18,372560,1239
2010,Anza Vista,,372560,1239
2011,Alamo Square,n/a,374507,1530
";

    #[test]
    fn test_census_from_reader_coerces_numbers() {
        let data = census_from_reader(CENSUS.as_bytes(), Path::new("census.csv")).unwrap();

        assert_eq!(data.len(), 3);
        assert_eq!(data.records[0].sale_price_sqr_foot, Some(291.18));
        assert_eq!(data.records[1].sale_price_sqr_foot, None);
        assert_eq!(data.records[2].sale_price_sqr_foot, None);
        assert_eq!(data.records[2].housing_units, Some(374507.0));
    }

    #[test]
    fn test_column_order_is_irrelevant() {
        let csv = "gross_rent,neighborhood,year,housing_units,sale_price_sqr_foot,extra\n\
                   1239,Marina,2010,372560,400.5,x\n";
        let data = census_from_reader(csv.as_bytes(), Path::new("c.csv")).unwrap();

        assert_eq!(data.records[0].neighborhood, "Marina");
        assert_eq!(data.records[0].gross_rent, Some(1239.0));
        assert_eq!(data.records[0].sale_price_sqr_foot, Some(400.5));
    }

    #[test]
    fn test_missing_column_is_named() {
        let csv = "year,neighborhood,housing_units,gross_rent\n2010,A,1,1\n";
        let err = census_from_reader(csv.as_bytes(), Path::new("c.csv")).unwrap_err();

        match err {
            LoadError::MissingColumn { column, .. } => assert_eq!(column, "sale_price_sqr_foot"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_year_is_csv_error() {
        let csv = "year,neighborhood,sale_price_sqr_foot,housing_units,gross_rent\n\
                   twenty,A,1,1,1\n";
        let err = census_from_reader(csv.as_bytes(), Path::new("c.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Csv { .. }));
    }

    #[test]
    fn test_coordinates_from_reader() {
        let csv = "Neighborhood,Lat,Lon\nAlamo Square,37.791012,-122.4021\nAnza Vista,37.779598,-122.443451\n";
        let table = coordinates_from_reader(csv.as_bytes(), Path::new("coords.csv")).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.entries[1].neighborhood, "Anza Vista");
        assert_eq!(table.entries[0].lat, 37.791012);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_census("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
