//! Largest issuers by summed weight.

use crate::types::Table;

use super::exposure::{group_sum, sort_ascending, Exposure, GroupField};

/// Returns the `n` issuers with the largest summed weight, smallest first.
///
/// The cut to `n` is taken on the descending order; only the kept issuers
/// are then re-sorted ascending, which puts the largest bar at the top of a
/// horizontal bar chart.
#[must_use]
pub fn top_issuers(table: &Table, n: usize) -> Vec<Exposure> {
    let mut issuers = group_sum(table, GroupField::Issuer);
    issuers.truncate(n);
    sort_ascending(&mut issuers);
    issuers
}
