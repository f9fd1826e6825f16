//! Four-panel dashboard layout.
//!
//! Panels and section headings match the page users already know:
//! "Yearly averages", "Neighborhoods", "Most Expensive" and "Mapped".

use crate::charts::{
    average_gross_rent, average_price_by_neighborhood, average_rent_by_neighborhood,
    average_sales_price, housing_units_per_year, most_expensive_neighborhoods_rent_sales,
    neighborhood_map, top_most_expensive_neighborhoods, ChartSpec,
};
use crate::parser::schema::{CensusData, CoordinateTable};
use crate::utils::config::{DASHBOARD_BLURB, DASHBOARD_TITLE, SCHEMA_VERSION};
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};

pub const PANEL_YEARLY: &str = "Yearly averages";
pub const PANEL_NEIGHBORHOODS: &str = "Neighborhoods";
pub const PANEL_MOST_EXPENSIVE: &str = "Most Expensive";
pub const PANEL_MAPPED: &str = "Mapped";

/// A heading plus the chart under it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,

    /// Whether the section starts open
    pub expanded: bool,

    pub chart: ChartSpec,
}

impl Section {
    fn open(heading: impl Into<String>, chart: ChartSpec) -> Self {
        Self {
            heading: heading.into(),
            expanded: true,
            chart,
        }
    }

    fn collapsed(heading: impl Into<String>, chart: ChartSpec) -> Self {
        Self {
            expanded: false,
            ..Self::open(heading, chart)
        }
    }
}

/// One tab of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub name: String,
    pub sections: Vec<Section>,
}

/// The whole page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Schema version for compatibility checking
    pub version: String,

    pub title: String,
    pub blurb: String,

    /// Neighborhood driving the "Neighborhoods" panel
    pub neighborhood: String,

    pub panels: Vec<Panel>,

    /// Timestamp when the dashboard was generated
    pub generated_at: String,
}

impl Dashboard {
    pub fn panel(&self, name: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.name == name)
    }

    /// Every section in display order
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.panels.iter().flat_map(|p| p.sections.iter())
    }

    pub fn chart_count(&self) -> usize {
        self.sections().count()
    }
}

/// Build every chart and arrange them into panels
///
/// **Public** - main entry point for the layout
///
/// # Arguments
/// * `data` - census table
/// * `coordinates` - coordinate table for the map
/// * `neighborhood` - selection for the per-neighborhood charts
pub fn build_dashboard(
    data: &CensusData,
    coordinates: &CoordinateTable,
    neighborhood: &str,
) -> Dashboard {
    info!("Building dashboard for neighborhood: {}", neighborhood);

    let panels = vec![
        Panel {
            name: PANEL_YEARLY.to_string(),
            sections: vec![
                Section::open("Housing Units Per Year", housing_units_per_year(data)),
                Section::collapsed("Average Gross Rent per Year", average_gross_rent(data)),
                Section::collapsed("Average Sales Price per Year", average_sales_price(data)),
            ],
        },
        Panel {
            name: PANEL_NEIGHBORHOODS.to_string(),
            sections: vec![
                Section::open(
                    format!("Average Yearly Sales Price for {}", neighborhood),
                    average_price_by_neighborhood(data, neighborhood),
                ),
                Section::open(
                    format!("Average Yearly Rent for {}", neighborhood),
                    average_rent_by_neighborhood(data, neighborhood),
                ),
                Section::open(
                    format!("Price per Square Foot vs Rent for {}", neighborhood),
                    most_expensive_neighborhoods_rent_sales(data, neighborhood),
                ),
            ],
        },
        Panel {
            name: PANEL_MOST_EXPENSIVE.to_string(),
            sections: vec![Section::open(
                "Top Ten Neighborhoods(Price per Square Foot)",
                top_most_expensive_neighborhoods(data),
            )],
        },
        Panel {
            name: PANEL_MAPPED.to_string(),
            sections: vec![Section::open(
                "Average Rent per Neighborhood",
                neighborhood_map(data, coordinates),
            )],
        },
    ];

    for section in panels.iter().flat_map(|p| &p.sections) {
        debug!(
            "{}: {} points",
            section.heading,
            section.chart.point_count()
        );
    }

    Dashboard {
        version: SCHEMA_VERSION.to_string(),
        title: DASHBOARD_TITLE.to_string(),
        blurb: DASHBOARD_BLURB.to_string(),
        neighborhood: neighborhood.to_string(),
        panels,
        generated_at: Utc::now().to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::CensusRecord;

    #[test]
    fn test_panel_layout() {
        let data = CensusData::new(vec![CensusRecord::new(2010, "Marina", 500.0, 372_560.0, 1239.0)]);
        let dashboard = build_dashboard(&data, &CoordinateTable::default(), "Marina");

        let names: Vec<&str> = dashboard.panels.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec![PANEL_YEARLY, PANEL_NEIGHBORHOODS, PANEL_MOST_EXPENSIVE, PANEL_MAPPED]);
        assert_eq!(dashboard.chart_count(), 8);

        let yearly = dashboard.panel(PANEL_YEARLY).unwrap();
        let expanded: Vec<bool> = yearly.sections.iter().map(|s| s.expanded).collect();
        assert_eq!(expanded, vec![true, false, false]);

        let hood = dashboard.panel(PANEL_NEIGHBORHOODS).unwrap();
        assert_eq!(hood.sections[1].heading, "Average Yearly Rent for Marina");
    }
}
