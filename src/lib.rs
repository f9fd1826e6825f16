//! SF Housing Dashboard
//!
//! Loads the San Francisco neighborhood census table, averages housing
//! units, rent and price per square foot by year and by neighborhood,
//! and renders the results as a four-panel dashboard.
//!
//! This crate provides the core implementation for the
//! `sf-dashboard` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! sf-dashboard render --neighborhood "Nob Hill" --output dashboard.html
//! sf-dashboard --help
//! ```

pub mod aggregator;
pub mod charts;
pub mod commands;
pub mod dashboard;
pub mod output;
pub mod parser;
pub mod utils;
