//! Configuration and constants for the dashboard.

/// Current dashboard JSON schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default location of the yearly per-neighborhood census table
pub const DEFAULT_CENSUS_PATH: &str = "Data/sfo_neighborhoods_census_data.csv";

/// Default location of the neighborhood coordinate table
pub const DEFAULT_COORDINATES_PATH: &str = "Data/neighborhoods_coordinates.csv";

/// Default HTML output path
pub const DEFAULT_OUTPUT_PATH: &str = "dashboard.html";

pub const DASHBOARD_TITLE: &str = "San Francisco Real Estate Analysis";
pub const DASHBOARD_BLURB: &str = "Check out these charts to help you select the perfect home for your family.";

// Fixed y-axis window for the housing units bar chart
pub const HOUSING_UNITS_Y_RANGE: [f64; 2] = [370_000.0, 385_000.0];

/// Number of neighborhoods shown in the most-expensive ranking
pub const TOP_NEIGHBORHOODS: usize = 10;

// Map styling
pub const MAP_ZOOM: u8 = 10;
pub const MAP_STYLE: &str = "carto-positron";
pub const MAP_COLOR_SCALE: &str = "thermal";
pub const MAP_SIZE_MAX: u32 = 15;

/// plotly.js bundle referenced by the HTML page
pub const PLOTLY_CDN_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub const DEFAULT_NEIGHBORHOOD: &str = "Alamo Square";

/// Neighborhoods offered by the selector, in display order
pub const NEIGHBORHOODS: &[&str] = &[
    "Alamo Square",
    "Anza Vista",
    "Bayview",
    "Bayview Heights",
    "Buena Vista Park",
    "Central Richmond",
    "Central Sunset",
    "Clarendon Heights",
    "Corona Heights",
    "Cow Hollow",
    "Croker Amazon",
    "Diamond Heights",
    "Duboce Triangle",
    "Eureka Valley/Dolores Heights",
    "Excelsior",
    "Financial District North",
    "Financial District South",
    "Forest Knolls",
    "Glen Park",
    "Golden Gate Heights",
    "Haight Ashbury",
    "Hayes Valley",
    "Hunters Point",
    "Ingleside Heights",
    "Inner Mission",
    "Inner Parkside",
    "Inner Richmond",
    "Inner Sunset",
    "Jordan Park/Laurel Heights",
    "Lake --The Presidio",
    "Lone Mountain",
    "Lower Pacific Heights",
    "Marina",
    "Merced Heights",
    "Midtown Terrace",
    "Miraloma Park",
    "Mission Bay",
    "Mission Dolores",
    "Mission Terrace",
    "Nob Hill",
    "Noe Valley",
    "North Beach",
    "North Waterfront",
    "Oceanview",
    "Outer Mission",
    "Outer Parkside",
    "Outer Sunset",
    "Pacific Heights",
    "Park North",
    "Parkside",
    "Parnassus/Ashbury Heights",
    "Portola",
    "Potrero Hill",
    "Presidio Heights",
    "Russian Hill",
    "Silver Terrace",
    "South Beach",
    "South of Market",
    "Sunnyside",
    "Telegraph Hill",
    "Twin Peaks",
    "Union Square District",
    "Van Ness/ Civic Center",
    "Visitacion Valley",
    "West Portal",
    "Western Addition",
    "Westwood Highlands",
    "Westwood Park",
    "Yerba Buena",
];

/// Check whether a neighborhood is one the selector offers
pub fn is_known_neighborhood(name: &str) -> bool {
    NEIGHBORHOODS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighborhood_list_shape() {
        assert_eq!(NEIGHBORHOODS.len(), 69);
        assert!(NEIGHBORHOODS.contains(&DEFAULT_NEIGHBORHOOD));
        assert!(NEIGHBORHOODS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_is_known_neighborhood() {
        assert!(is_known_neighborhood("Nob Hill"));
        assert!(!is_known_neighborhood("nob hill"));
        assert!(!is_known_neighborhood("Atlantis"));
    }
}
