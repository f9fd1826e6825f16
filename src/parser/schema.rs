//! Row schemas for the two input tables.
//!
//! Both tables are loaded once and then only read. Numeric census
//! columns go through a lenient coercion so a stray "N/A" or blank cell
//! becomes a missing value instead of failing the whole load.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

/// One row of the yearly per-neighborhood census table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CensusRecord {
    /// Survey year (repeats once per neighborhood)
    pub year: i32,

    pub neighborhood: String,

    /// Sale price per square foot in USD
    #[serde(deserialize_with = "coerce_numeric")]
    pub sale_price_sqr_foot: Option<f64>,

    #[serde(deserialize_with = "coerce_numeric")]
    pub housing_units: Option<f64>,

    /// Gross monthly rent in USD
    #[serde(deserialize_with = "coerce_numeric")]
    pub gross_rent: Option<f64>,
}

impl CensusRecord {
    /// Create a record with every numeric column present
    ///
    /// **Public** - convenience constructor, mostly for tests
    pub fn new(
        year: i32,
        neighborhood: impl Into<String>,
        sale_price_sqr_foot: f64,
        housing_units: f64,
        gross_rent: f64,
    ) -> Self {
        Self {
            year,
            neighborhood: neighborhood.into(),
            sale_price_sqr_foot: Some(sale_price_sqr_foot),
            housing_units: Some(housing_units),
            gross_rent: Some(gross_rent),
        }
    }
}

/// One row of the neighborhood coordinate table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighborhoodCoordinate {
    #[serde(rename = "Neighborhood")]
    pub neighborhood: String,

    #[serde(rename = "Lat")]
    pub lat: f64,

    #[serde(rename = "Lon")]
    pub lon: f64,
}

/// The census base table
#[derive(Debug, Clone, Default)]
pub struct CensusData {
    pub records: Vec<CensusRecord>,
}

impl CensusData {
    pub fn new(records: Vec<CensusRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows belonging to one neighborhood, in file order
    ///
    /// **Public** - the filter step of every per-neighborhood view
    pub fn for_neighborhood<'a>(
        &'a self,
        neighborhood: &'a str,
    ) -> impl Iterator<Item = &'a CensusRecord> + 'a {
        self.records
            .iter()
            .filter(move |r| r.neighborhood == neighborhood)
    }

    /// Distinct neighborhood names, sorted
    pub fn neighborhoods(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.neighborhood.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct years, ascending
    pub fn years(&self) -> Vec<i32> {
        self.records
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// The coordinate base table, in file order
#[derive(Debug, Clone, Default)]
pub struct CoordinateTable {
    pub entries: Vec<NeighborhoodCoordinate>,
}

impl CoordinateTable {
    pub fn new(entries: Vec<NeighborhoodCoordinate>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse a numeric cell, treating anything unparseable as missing
///
/// **Public** - shared by the serde hook and by tests
///
/// Blank cells, free text and non-finite values ("NaN", "inf") all
/// become `None`.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Serde hook for [`parse_numeric`]
///
/// **Private** - used through `deserialize_with`
fn coerce_numeric<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_numeric))
}
