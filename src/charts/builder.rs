//! Chart builders for the eight dashboard views.
//!
//! Each builder runs one aggregate query and wraps the result in a
//! [`ChartSpec`]. Builders never fail: an empty slice of data simply
//! produces a chart with empty series.

use super::schema::{ChartKind, ChartSpec, MapLayer, Series};
use crate::aggregator::{
    map_center, rent_map_points, top_neighborhoods_by_price, yearly_mean,
    yearly_mean_for_neighborhood, CensusColumn, YearlyMean,
};
use crate::parser::schema::{CensusData, CoordinateTable};
use crate::utils::config::{
    HOUSING_UNITS_Y_RANGE, MAP_COLOR_SCALE, MAP_SIZE_MAX, MAP_STYLE, MAP_ZOOM, TOP_NEIGHBORHOODS,
};
use log::{debug, warn};

const YEAR_LABEL: &str = "Year";
const PRICE_LABEL: &str = "Average Price (USD) per Square Foot";

/// Average housing units per year, as bars on a fixed y window
///
/// **Public** - "Housing Units Per Year"
pub fn housing_units_per_year(data: &CensusData) -> ChartSpec {
    let means = yearly_mean(data, CensusColumn::HousingUnits);

    ChartSpec::new(ChartKind::Bar, YEAR_LABEL, "Housing Units")
        .with_y_range(HOUSING_UNITS_Y_RANGE)
        .with_series(yearly_series(CensusColumn::HousingUnits, &means))
}

/// Average gross rent per year, as a line
///
/// **Public** - "Average Gross Rent per Year"
pub fn average_gross_rent(data: &CensusData) -> ChartSpec {
    let means = yearly_mean(data, CensusColumn::GrossRent);

    ChartSpec::new(ChartKind::Line, YEAR_LABEL, "Average Rent")
        .with_legend(false)
        .with_series(yearly_series(CensusColumn::GrossRent, &means))
}

/// Average sale price per square foot per year, as a line
///
/// **Public** - "Average Sales Price per Year"
pub fn average_sales_price(data: &CensusData) -> ChartSpec {
    let means = yearly_mean(data, CensusColumn::SalePricePerSqft);

    ChartSpec::new(ChartKind::Line, YEAR_LABEL, PRICE_LABEL)
        .with_legend(false)
        .with_series(yearly_series(CensusColumn::SalePricePerSqft, &means))
}

/// Yearly average price per square foot for one neighborhood
///
/// **Public** - empty chart if the neighborhood has no numeric prices
pub fn average_price_by_neighborhood(data: &CensusData, neighborhood: &str) -> ChartSpec {
    warn_if_unknown(data, neighborhood);
    let means = yearly_mean_for_neighborhood(data, neighborhood, CensusColumn::SalePricePerSqft);

    ChartSpec::new(ChartKind::Line, YEAR_LABEL, PRICE_LABEL)
        .with_legend(false)
        .with_series(yearly_series(CensusColumn::SalePricePerSqft, &means))
}

/// Yearly average gross rent for one neighborhood
///
/// **Public** - empty chart if the neighborhood has no numeric rents
pub fn average_rent_by_neighborhood(data: &CensusData, neighborhood: &str) -> ChartSpec {
    warn_if_unknown(data, neighborhood);
    let means = yearly_mean_for_neighborhood(data, neighborhood, CensusColumn::GrossRent);

    ChartSpec::new(ChartKind::Line, YEAR_LABEL, "Average Rent (USD)")
        .with_legend(false)
        .with_series(yearly_series(CensusColumn::GrossRent, &means))
}

/// Top ten neighborhoods by average price per square foot
///
/// **Public** - "Top Ten Neighborhoods(Price per Square Foot)"
pub fn top_most_expensive_neighborhoods(data: &CensusData) -> ChartSpec {
    let ranked = top_neighborhoods_by_price(data, TOP_NEIGHBORHOODS);
    debug!("Top neighborhood: {:?}", ranked.first());

    let mut series = Series::new(CensusColumn::SalePricePerSqft.name());
    for entry in ranked {
        series.push(entry.neighborhood, entry.value);
    }

    ChartSpec::new(
        ChartKind::Bar,
        "Most Expensive Neighborhoods",
        "Average Price per Square Foot (USD)",
    )
    .with_legend(false)
    .with_series(series)
}

/// Price per square foot next to rent, per year, for one neighborhood
///
/// **Public** - grouped bars; one bar pair per row of the neighborhood
pub fn most_expensive_neighborhoods_rent_sales(data: &CensusData, neighborhood: &str) -> ChartSpec {
    warn_if_unknown(data, neighborhood);

    let mut price = Series::new("Sale price square foot");
    let mut rent = Series::new("Rent");
    for record in data.for_neighborhood(neighborhood) {
        if let Some(v) = record.sale_price_sqr_foot {
            price.push(record.year, v);
        }
        if let Some(v) = record.gross_rent {
            rent.push(record.year, v);
        }
    }

    ChartSpec::new(ChartKind::GroupedBar, YEAR_LABEL, "Price in USD")
        .with_title(format!("{} Neighborhood Comparison", neighborhood))
        .with_series(price)
        .with_series(rent)
}

/// Average rent per neighborhood on a map
///
/// **Public** - "Mapped"; markers sized and colored by average rent
pub fn neighborhood_map(data: &CensusData, coordinates: &CoordinateTable) -> ChartSpec {
    let points = rent_map_points(data, coordinates);
    let center = map_center(&points);

    ChartSpec::new(ChartKind::ScatterMap, "Lon", "Lat")
        .with_title("Average Rent per Neighborhood")
        .with_map(MapLayer {
            center,
            zoom: MAP_ZOOM,
            style: MAP_STYLE.to_string(),
            color_scale: MAP_COLOR_SCALE.to_string(),
            size_max: MAP_SIZE_MAX,
            points,
        })
}

/// **Private** - one series named after the averaged column
fn yearly_series(column: CensusColumn, means: &[YearlyMean]) -> Series {
    let mut series = Series::new(column.name());
    for m in means {
        series.push(m.year, m.value);
    }
    series
}

fn warn_if_unknown(data: &CensusData, neighborhood: &str) {
    if data.for_neighborhood(neighborhood).next().is_none() {
        warn!("No census rows for neighborhood '{}'", neighborhood);
    }
}
