//! # Fidash Holdings
//!
//! Holdings export parsing and weight aggregation for fixed income funds.
//!
//! This crate turns the raw bytes of a fund holdings export into the four
//! views that drive the fund dashboard.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: Every stage is stateless with explicit inputs
//! - **Positional schema**: The first six columns are renamed by position, not by header text
//! - **Absent, not zero**: Malformed weights are excluded from every sum and ranking
//! - **Empty is valid**: An export with no matching securities yields empty views
//!
//! ## Pipeline
//!
//! bytes → [`parse_table`] → [`filter_by_security_type`] → [`coerce_weights`] → views
//!
//! ## Quick Start
//!
//! ```rust
//! use fidash_holdings::prelude::*;
//!
//! let export = "Fund\nDate\nClass\nCurrency\nNotes\nSource\n\
//!               Security,Weight,Rating,Country,Issuer,Type\n\
//!               A,5,AAA,US,X,Corporate Bonds\n\
//!               B,bad,BBB,DE,Y,Corporate Bonds\n\
//!               C,10,AAA,US,Z,Government Bonds\n";
//!
//! let views = process_holdings(export.as_bytes(), &AggregationConfig::default())?;
//!
//! assert_eq!(views.top_holdings, vec![HoldingWeight::new("A", dec!(5))]);
//! assert_eq!(views.country_exposure, vec![Exposure::new("US", dec!(5))]);
//! # Ok::<(), HoldingsError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`parse`] - CSV bytes to a typed table
//! - [`filter`] - Security type filter
//! - [`coerce`] - Weight coercion
//! - [`views`] - Top holdings, exposures, top issuers
//! - [`pipeline`] - End-to-end processing
//! - [`source`] - Byte source trait for loaders
//! - [`types`] - Records, tables and configuration
//!
//! ## Feature Flags
//!
//! - `parallel`: Compute the four views concurrently with rayon for large exports

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod coerce;
pub mod error;
pub mod filter;
pub mod parse;
pub mod pipeline;
pub mod source;
pub mod types;
pub mod views;

pub use error::{HoldingsError, HoldingsResult};

pub use types::{
    AggregationConfig, Record, Table, Weight, COLUMN_COUNT, COLUMN_NAMES, CORPORATE_BONDS,
    DEFAULT_SKIP_ROWS, DEFAULT_TOP_N,
};

pub use coerce::{coerce_weight, coerce_weights};
pub use filter::{filter_by_security_type, FilterOutcome};
pub use parse::parse_table;
pub use pipeline::{process_holdings, run, HoldingsSummary, HoldingsViews};
pub use source::HoldingsSource;
pub use views::{
    country_exposure, group_sum, rating_exposure, top_holdings, top_issuers, Exposure,
    GroupField, HoldingWeight,
};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use fidash_holdings::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{HoldingsError, HoldingsResult};
    pub use crate::pipeline::{process_holdings, run, HoldingsSummary, HoldingsViews};
    pub use crate::source::HoldingsSource;
    pub use crate::types::{AggregationConfig, Record, Table, Weight};
    pub use crate::views::{Exposure, GroupField, HoldingWeight};

    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
}
