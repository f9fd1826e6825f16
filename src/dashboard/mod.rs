//! Dashboard assembly: panels, sections and their charts.

pub mod layout;

pub use layout::{
    build_dashboard, Dashboard, Panel, Section, PANEL_MAPPED, PANEL_MOST_EXPENSIVE,
    PANEL_NEIGHBORHOODS, PANEL_YEARLY,
};
