//! Security type filtering.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::types::Table;

/// Result of filtering a table by security type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOutcome {
    /// Records that matched, in input order.
    pub table: Table,
    /// Number of records before filtering.
    pub total: usize,
    /// Number of records that matched.
    pub retained: usize,
}

impl FilterOutcome {
    /// Returns true if no record matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.retained == 0
    }
}

/// Keeps the records whose security type equals `security_type` exactly.
///
/// Matching is case-sensitive with no trimming. An empty result is valid
/// and flows through to empty views.
#[must_use]
pub fn filter_by_security_type(table: Table, security_type: &str) -> FilterOutcome {
    let total = table.len();
    let retained: Table = table
        .into_records()
        .into_iter()
        .filter(|r| r.security_type == security_type)
        .collect();

    info!(
        security_type,
        total,
        retained = retained.len(),
        "Number of matching securities: {}",
        retained.len()
    );

    FilterOutcome {
        retained: retained.len(),
        table: retained,
        total,
    }
}
