//! # Fidash Report
//!
//! Dashboard presentation for fixed income holdings views.
//!
//! This crate maps each view produced by `fidash-holdings` onto a chart
//! primitive and places it on a fixed grid:
//!
//! | Row | Panel | Chart |
//! |-----|-------|-------|
//! | 1 | Country Exposure, Rating Exposure | Pie, pie |
//! | 2 | Top 10 Issuers | Horizontal bar (full width) |
//! | 3 | Top 10 Holdings by Weight | Vertical bar (full width) |
//!
//! The presenter never computes sums; it only reads the ordered views.
//!
//! ## Example
//!
//! ```rust
//! use fidash_holdings::{process_holdings, AggregationConfig};
//! use fidash_report::{build_dashboard, Chart, DashboardLayout};
//!
//! let export = "Fund\nDate\nClass\nCurrency\nNotes\nSource\n\
//!               Security,Weight,Rating,Country,Issuer,Type\n\
//!               A,5,AAA,US,X,Corporate Bonds\n";
//!
//! let views = process_holdings(export.as_bytes(), &AggregationConfig::default()).unwrap();
//! let dashboard = build_dashboard(&views, &DashboardLayout::default());
//!
//! assert_eq!(dashboard.panels.len(), 4);
//! assert!(matches!(dashboard.panels[0].chart, Chart::Pie(_)));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chart;
pub mod dashboard;
pub mod layout;

pub use chart::{
    format_percent, AxisTitles, BarChart, Chart, Orientation, PieChart, BAR_COLORS, PIE_COLORS,
};
pub use dashboard::{
    build_dashboard, Dashboard, Panel, COUNTRY_EXPOSURE_TITLE, RATING_EXPOSURE_TITLE,
    TOP_HOLDINGS_TITLE, TOP_ISSUERS_TITLE,
};
pub use layout::{DashboardLayout, Font, GridPosition, Margins};
