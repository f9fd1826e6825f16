//! Aggregation of census rows into chartable series.
//!
//! This module turns the base tables into:
//! - Yearly means (whole city or one neighborhood)
//! - Per-neighborhood means and the most-expensive ranking
//! - Map points joining rent with coordinates

pub mod mean;
pub mod queries;

// Re-export main types and functions
pub use mean::{group_mean, round2, MeanAccumulator};
pub use queries::{
    map_center, neighborhood_mean, rent_map_points, top_neighborhoods_by_price, yearly_mean,
    yearly_mean_for_neighborhood, CensusColumn, GeoPoint, MapPoint, NeighborhoodMean, YearlyMean,
};
