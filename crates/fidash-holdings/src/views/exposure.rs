//! Category exposure views.
//!
//! An exposure is the summed weight of every record sharing a category.
//! Records with an absent weight are skipped entirely, so they never create
//! a group of their own.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Record, Table};

/// Categorical field used to group records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupField {
    /// Group by country.
    Country,
    /// Group by credit rating.
    Rating,
    /// Group by issuer.
    Issuer,
}

impl GroupField {
    /// Returns the category value of a record for this field.
    #[must_use]
    pub fn key<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            Self::Country => &record.country,
            Self::Rating => &record.rating,
            Self::Issuer => &record.issuer,
        }
    }

    /// Returns the column name of the field.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Country => "Country",
            Self::Rating => "Rating",
            Self::Issuer => "Issuer",
        }
    }
}

impl std::fmt::Display for GroupField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Summed weight of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exposure {
    /// Category label.
    pub label: String,
    /// Summed weight in percentage units.
    pub weight: Decimal,
}

impl Exposure {
    /// Creates an exposure entry.
    #[must_use]
    pub fn new(label: impl Into<String>, weight: Decimal) -> Self {
        Self {
            label: label.into(),
            weight,
        }
    }
}

/// Sums present weights per category, largest first.
///
/// Groups are collected in label order before the stable descending sort,
/// so equal sums keep label order.
#[must_use]
pub fn group_sum(table: &Table, field: GroupField) -> Vec<Exposure> {
    let mut sums: BTreeMap<&str, Decimal> = BTreeMap::new();
    for record in table {
        if let Some(weight) = record.weight.value() {
            let sum = sums.entry(field.key(record)).or_insert(Decimal::ZERO);
            *sum += weight;
        }
    }

    let mut result: Vec<Exposure> = sums
        .into_iter()
        .map(|(label, weight)| Exposure::new(label, weight))
        .collect();
    sort_descending(&mut result);
    result
}

/// Country exposure, largest first.
#[must_use]
pub fn country_exposure(table: &Table) -> Vec<Exposure> {
    group_sum(table, GroupField::Country)
}

/// Rating exposure, largest first.
#[must_use]
pub fn rating_exposure(table: &Table) -> Vec<Exposure> {
    group_sum(table, GroupField::Rating)
}

/// Stable sort by weight, largest first.
pub(crate) fn sort_descending(exposures: &mut [Exposure]) {
    exposures.sort_by(|a, b| b.weight.cmp(&a.weight));
}

/// Stable sort by weight, smallest first.
pub(crate) fn sort_ascending(exposures: &mut [Exposure]) {
    exposures.sort_by(|a, b| a.weight.cmp(&b.weight));
}
