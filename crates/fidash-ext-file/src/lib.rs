//! # Fidash Ext File
//!
//! File-based and in-memory sources for holdings exports.
//!
//! This crate provides the loaders used in front of the aggregation core:
//! - [`FileHoldingsSource`]: reads an export from disk
//! - [`MemoryHoldingsSource`]: wraps bytes already in memory, such as an upload buffer
//!
//! Both implement [`HoldingsSource`](fidash_holdings::HoldingsSource) and are passed to [`fidash_holdings::run`].

#![warn(missing_docs)]
#![warn(clippy::all)]

mod file;
mod memory;

pub use file::*;
pub use memory::*;

use fidash_holdings::{AggregationConfig, HoldingsResult, HoldingsViews};
use std::path::Path;

/// Create a file-based holdings source.
pub fn create_file_source(path: impl AsRef<Path>) -> FileHoldingsSource {
    FileHoldingsSource::new(path)
}

/// Load and aggregate the export at `path` with the default configuration.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or a parse error if its
/// contents are not a valid export.
pub fn process_file(path: impl AsRef<Path>) -> HoldingsResult<HoldingsViews> {
    let source = FileHoldingsSource::new(path);
    fidash_holdings::run(&source, &AggregationConfig::default())
}
