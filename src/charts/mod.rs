//! Chart descriptions and their renderers.
//!
//! The builders turn aggregate queries into [`ChartSpec`] values. The
//! plotly and summary modules render those descriptions; neither
//! touches the base tables.

pub mod builder;
pub mod plotly;
pub mod schema;
pub mod summary;

// Re-export main types
pub use builder::{
    average_gross_rent, average_price_by_neighborhood, average_rent_by_neighborhood,
    average_sales_price, housing_units_per_year, most_expensive_neighborhoods_rent_sales,
    neighborhood_map, top_most_expensive_neighborhoods,
};
pub use plotly::{to_plotly_figure, to_plotly_json};
pub use schema::{AxisValue, ChartKind, ChartSpec, MapLayer, Series};
pub use summary::generate_text_summary;
