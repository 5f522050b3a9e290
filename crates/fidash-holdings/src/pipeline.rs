//! End-to-end holdings aggregation.
//!
//! Runs parse, filter, coerce and aggregate in one linear pass and returns
//! the four named views for the presentation layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::coerce::coerce_weights;
use crate::error::HoldingsResult;
use crate::filter::filter_by_security_type;
use crate::parse::parse_table;
use crate::source::HoldingsSource;
use crate::types::{AggregationConfig, Table};
use crate::views::{
    country_exposure, rating_exposure, top_holdings, top_issuers, Exposure, HoldingWeight,
};

/// Counts describing a pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldingsSummary {
    /// Data rows in the export.
    pub total_records: usize,
    /// Rows matching the security type filter.
    pub retained_records: usize,
    /// Retained rows whose weight was absent.
    pub absent_weights: usize,
}

/// The four views computed from one export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldingsViews {
    /// Largest holdings, largest first.
    pub top_holdings: Vec<HoldingWeight>,
    /// Weight per country, largest first.
    pub country_exposure: Vec<Exposure>,
    /// Weight per rating, largest first.
    pub rating_exposure: Vec<Exposure>,
    /// Largest issuers, smallest first.
    pub top_issuers: Vec<Exposure>,
    /// Run counts.
    pub summary: HoldingsSummary,
}

impl HoldingsViews {
    /// Computes all four views from a filtered, coerced table.
    ///
    /// `total_records` is the row count of the export before filtering.
    #[must_use]
    pub fn from_table(table: &Table, total_records: usize, config: &AggregationConfig) -> Self {
        let (top_holdings, country_exposure, rating_exposure, top_issuers) =
            compute_views(table, config);

        Self {
            top_holdings,
            country_exposure,
            rating_exposure,
            top_issuers,
            summary: HoldingsSummary {
                total_records,
                retained_records: table.len(),
                absent_weights: table.absent_weight_count(),
            },
        }
    }

    /// Returns true if every view is empty.
    ///
    /// This is the normal outcome for an export without matching securities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top_holdings.is_empty()
            && self.country_exposure.is_empty()
            && self.rating_exposure.is_empty()
            && self.top_issuers.is_empty()
    }

    /// Total present weight of the retained records.
    #[must_use]
    pub fn total_weight(&self) -> Decimal {
        self.country_exposure
            .iter()
            .map(|e| e.weight)
            .sum()
    }
}

/// Parses, filters and aggregates a holdings export.
///
/// # Errors
///
/// Returns an error if the config is invalid or the bytes cannot be parsed.
/// Malformed weights and an empty filter result are not errors.
pub fn process_holdings(bytes: &[u8], config: &AggregationConfig) -> HoldingsResult<HoldingsViews> {
    config.validate()?;

    let table = parse_table(bytes, config.skip_rows)?;
    let outcome = filter_by_security_type(table, &config.security_type);
    let table = coerce_weights(outcome.table);

    let views = HoldingsViews::from_table(&table, outcome.total, config);

    debug!(
        holdings = views.top_holdings.len(),
        countries = views.country_exposure.len(),
        ratings = views.rating_exposure.len(),
        issuers = views.top_issuers.len(),
        "Computed holdings views"
    );

    Ok(views)
}

/// Reads an export from `source` and aggregates it.
///
/// # Errors
///
/// Returns the source's read error, or any error from [`process_holdings`].
pub fn run<S: HoldingsSource + ?Sized>(
    source: &S,
    config: &AggregationConfig,
) -> HoldingsResult<HoldingsViews> {
    info!(source = %source.describe(), "Processing holdings export");
    let bytes = source.read_bytes()?;
    process_holdings(&bytes, config)
}

type Views = (Vec<HoldingWeight>, Vec<Exposure>, Vec<Exposure>, Vec<Exposure>);

fn compute_views(table: &Table, config: &AggregationConfig) -> Views {
    let n = config.top_n;

    #[cfg(feature = "parallel")]
    {
        if config.should_parallelize(table.len()) {
            let ((holdings, countries), (ratings, issuers)) = rayon::join(
                || rayon::join(|| top_holdings(table, n), || country_exposure(table)),
                || rayon::join(|| rating_exposure(table), || top_issuers(table, n)),
            );
            return (holdings, countries, ratings, issuers);
        }
    }

    (
        top_holdings(table, n),
        country_exposure(table),
        rating_exposure(table),
        top_issuers(table, n),
    )
}
