//! Input table loading and row schemas.
//!
//! This module handles:
//! - Reading the census and coordinate CSVs
//! - Coercing messy numeric cells to missing values
//! - Checking required columns

pub mod loader;
pub mod schema;

// Re-export main types
pub use loader::{census_from_reader, coordinates_from_reader, load_census, load_coordinates};
pub use schema::{CensusData, CensusRecord, CoordinateTable, NeighborhoodCoordinate, parse_numeric};
