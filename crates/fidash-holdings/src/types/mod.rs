//! Domain types for holdings aggregation.
//!
//! - [`Record`]: One row of a holdings export
//! - [`Weight`]: Raw, present or absent weight of a record
//! - [`Table`]: Ordered records sharing the six fixed fields
//! - [`AggregationConfig`]: Row skipping, filter and ranking settings

mod config;
mod record;

pub use config::{AggregationConfig, CORPORATE_BONDS, DEFAULT_SKIP_ROWS, DEFAULT_TOP_N};
pub use record::{Record, Table, Weight, COLUMN_COUNT, COLUMN_NAMES};
