//! Aggregate queries behind the dashboard views.
//!
//! Each query recomputes its result from the base tables on every call.
//! Nothing here mutates or caches anything.

use super::mean::{group_mean, round2};
use crate::parser::schema::{CensusData, CensusRecord, CoordinateTable};
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Numeric census columns that can be averaged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CensusColumn {
    SalePricePerSqft,
    HousingUnits,
    GrossRent,
}

impl CensusColumn {
    /// Pull this column's value out of a record
    pub fn value(self, record: &CensusRecord) -> Option<f64> {
        match self {
            CensusColumn::SalePricePerSqft => record.sale_price_sqr_foot,
            CensusColumn::HousingUnits => record.housing_units,
            CensusColumn::GrossRent => record.gross_rent,
        }
    }

    /// Header name in the census CSV
    pub fn name(self) -> &'static str {
        match self {
            CensusColumn::SalePricePerSqft => "sale_price_sqr_foot",
            CensusColumn::HousingUnits => "housing_units",
            CensusColumn::GrossRent => "gross_rent",
        }
    }
}

/// Mean of a column for one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyMean {
    pub year: i32,
    pub value: f64,
}

/// Mean of a column for one neighborhood
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighborhoodMean {
    pub neighborhood: String,
    pub value: f64,
}

/// Latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// A neighborhood placed on the map with its average rent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub neighborhood: String,
    pub lat: f64,
    pub lon: f64,
    pub average_rent: f64,
}

/// Average a column per year over every row
///
/// **Public** - backs the three "Yearly averages" charts
pub fn yearly_mean(data: &CensusData, column: CensusColumn) -> Vec<YearlyMean> {
    let means = group_mean(&data.records, |r| r.year, |r| column.value(r));
    debug!("{} yearly means for {}", means.len(), column.name());
    to_yearly(means)
}

/// Average a column per year over one neighborhood's rows
///
/// **Public** - backs the per-neighborhood line charts
///
/// Rows whose value is missing or was not numeric are excluded from
/// both the sum and the count. An unknown neighborhood yields an empty
/// vector.
///
/// Only the averaged column is checked. A row with a missing rent still
/// counts toward the price average and the other way around; rows are
/// never dropped because some other column is empty.
pub fn yearly_mean_for_neighborhood(
    data: &CensusData,
    neighborhood: &str,
    column: CensusColumn,
) -> Vec<YearlyMean> {
    let means = group_mean(
        data.for_neighborhood(neighborhood),
        |r| r.year,
        |r| column.value(r),
    );
    debug!(
        "{} yearly means for {} in {}",
        means.len(),
        column.name(),
        neighborhood
    );
    to_yearly(means)
}

/// Average a column per neighborhood, rounded to cents
///
/// **Public** - alphabetical by neighborhood
pub fn neighborhood_mean(data: &CensusData, column: CensusColumn) -> Vec<NeighborhoodMean> {
    group_mean(
        &data.records,
        |r| r.neighborhood.clone(),
        |r| column.value(r),
    )
    .into_iter()
    .map(|(neighborhood, mean)| NeighborhoodMean {
        neighborhood,
        value: round2(mean),
    })
    .collect()
}

/// Rank neighborhoods by average price per square foot
///
/// **Public** - backs the "Most Expensive" chart
///
/// # Arguments
/// * `data` - census table
/// * `top_n` - how many neighborhoods to keep
///
/// # Returns
/// At most `top_n` neighborhoods, highest rounded average first. The
/// sort is stable over the alphabetical grouping order, so equal
/// averages stay in alphabetical order. Neighborhoods with no numeric
/// price at all are left out rather than ranked last.
pub fn top_neighborhoods_by_price(data: &CensusData, top_n: usize) -> Vec<NeighborhoodMean> {
    let mut ranked = neighborhood_mean(data, CensusColumn::SalePricePerSqft);
    ranked.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
    ranked.truncate(top_n);
    ranked
}

/// Join average rent per neighborhood with the coordinate table
///
/// **Public** - backs the map view
///
/// Inner join on neighborhood name: neighborhoods without coordinates and
/// coordinates without rent data are both dropped. Output follows the
/// coordinate table's order.
pub fn rent_map_points(data: &CensusData, coordinates: &CoordinateTable) -> Vec<MapPoint> {
    let rents: HashMap<String, f64> = neighborhood_mean(data, CensusColumn::GrossRent)
        .into_iter()
        .map(|m| (m.neighborhood, m.value))
        .collect();

    let points: Vec<MapPoint> = coordinates
        .entries
        .iter()
        .filter_map(|c| {
            rents.get(&c.neighborhood).map(|rent| MapPoint {
                neighborhood: c.neighborhood.clone(),
                lat: c.lat,
                lon: c.lon,
                average_rent: *rent,
            })
        })
        .collect();

    debug!(
        "Joined {} of {} coordinates with rent data ({} neighborhoods with rent)",
        points.len(),
        coordinates.len(),
        rents.len()
    );
    points
}

/// Mean position of the plotted points, `None` when there are none
pub fn map_center(points: &[MapPoint]) -> Option<GeoPoint> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    Some(GeoPoint {
        lat: points.iter().map(|p| p.lat).sum::<f64>() / n,
        lon: points.iter().map(|p| p.lon).sum::<f64>() / n,
    })
}

fn to_yearly(means: Vec<(i32, f64)>) -> Vec<YearlyMean> {
    means
        .into_iter()
        .map(|(year, value)| YearlyMean { year, value })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::NeighborhoodCoordinate;

    fn sample() -> CensusData {
        CensusData::new(vec![
            CensusRecord::new(2010, "A", 100.0, 372_000.0, 1000.0),
            CensusRecord::new(2010, "A", 200.0, 374_000.0, 1200.0),
            CensusRecord::new(2010, "B", 50.0, 376_000.0, 900.0),
            CensusRecord::new(2011, "B", 70.0, 378_000.0, 1100.0),
        ])
    }

    #[test]
    fn test_yearly_mean() {
        let units = yearly_mean(&sample(), CensusColumn::HousingUnits);
        assert_eq!(
            units,
            vec![
                YearlyMean { year: 2010, value: 374_000.0 },
                YearlyMean { year: 2011, value: 378_000.0 },
            ]
        );
    }

    #[test]
    fn test_yearly_mean_for_neighborhood_example() {
        let prices = yearly_mean_for_neighborhood(&sample(), "A", CensusColumn::SalePricePerSqft);
        assert_eq!(prices, vec![YearlyMean { year: 2010, value: 150.0 }]);
    }

    #[test]
    fn test_unknown_neighborhood_is_empty() {
        let rents = yearly_mean_for_neighborhood(&sample(), "Z", CensusColumn::GrossRent);
        assert!(rents.is_empty());
    }

    #[test]
    fn test_top_neighborhoods_truncates() {
        let top = top_neighborhoods_by_price(&sample(), 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].neighborhood, "A");
        assert_eq!(top[0].value, 150.0);
    }

    #[test]
    fn test_rent_map_points_inner_join() {
        let coords = CoordinateTable::new(vec![
            NeighborhoodCoordinate { neighborhood: "B".into(), lat: 37.0, lon: -122.0 },
            NeighborhoodCoordinate { neighborhood: "Q".into(), lat: 38.0, lon: -121.0 },
        ]);

        let points = rent_map_points(&sample(), &coords);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].neighborhood, "B");
        assert_eq!(points[0].average_rent, 1000.0);

        let center = map_center(&points).unwrap();
        assert_eq!(center, GeoPoint { lat: 37.0, lon: -122.0 });
    }

    #[test]
    fn test_neighborhood_mean_half_cent_goes_to_even() {
        let data = CensusData::new(vec![
            CensusRecord::new(2010, "A", 1009.0, 1.0, 1009.0),
            CensusRecord::new(2011, "A", 1009.25, 1.0, 1009.25),
        ]);

        let rents = neighborhood_mean(&data, CensusColumn::GrossRent);
        assert_eq!(rents[0].value, 1009.12);
    }

    #[test]
    fn test_map_center_empty() {
        assert!(map_center(&[]).is_none());
    }
}
