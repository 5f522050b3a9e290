//! Holdings records and tables.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::coerce::coerce_weight;

/// Number of columns read from each row of an export.
pub const COLUMN_COUNT: usize = 6;

/// Field names assigned to the first six columns, in order.
///
/// Columns are renamed by position; the header text in the export is ignored.
pub const COLUMN_NAMES: [&str; COLUMN_COUNT] = [
    "Security",
    "Weight",
    "Rating",
    "Country",
    "Issuer",
    "SecurityType",
];

/// Weight of a holding, as a percentage of total fund holdings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weight {
    /// Cell text as read from the export, not yet coerced.
    Raw(String),
    /// A numeric weight.
    Present(Decimal),
    /// The cell could not be read as a number.
    Absent,
}

impl Weight {
    /// Coerces a raw cell into `Present` or `Absent`.
    ///
    /// Already-coerced weights are returned unchanged.
    #[must_use]
    pub fn coerce(self) -> Self {
        match self {
            Self::Raw(text) => match coerce_weight(&text) {
                Some(value) => Self::Present(value),
                None => Self::Absent,
            },
            other => other,
        }
    }

    /// Returns the numeric weight if present.
    ///
    /// Raw cells are coerced on read, so aggregations behave the same on
    /// coerced and uncoerced tables.
    #[must_use]
    pub fn value(&self) -> Option<Decimal> {
        match self {
            Self::Present(value) => Some(*value),
            Self::Absent => None,
            Self::Raw(text) => coerce_weight(text),
        }
    }

    /// Returns true if the weight is missing or malformed.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        self.value().is_none()
    }
}

/// One row of a holdings export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Security identifier or description.
    pub security: String,
    /// Weight in percentage units.
    pub weight: Weight,
    /// Credit rating category.
    pub rating: String,
    /// Country category.
    pub country: String,
    /// Issuer name.
    pub issuer: String,
    /// Security type, used as the filter key.
    pub security_type: String,
}

impl Record {
    /// Creates a record from the six cell values, in column order.
    #[must_use]
    pub fn new(
        security: impl Into<String>,
        weight: impl Into<String>,
        rating: impl Into<String>,
        country: impl Into<String>,
        issuer: impl Into<String>,
        security_type: impl Into<String>,
    ) -> Self {
        Self {
            security: security.into(),
            weight: Weight::Raw(weight.into()),
            rating: rating.into(),
            country: country.into(),
            issuer: issuer.into(),
            security_type: security_type.into(),
        }
    }

    /// Builds a record from a CSV row, taking the first six cells by position.
    ///
    /// Missing trailing cells are read as empty.
    pub(crate) fn from_row(row: &csv::StringRecord) -> Self {
        let cell = |i: usize| row.get(i).unwrap_or_default().to_string();
        Self {
            security: cell(0),
            weight: Weight::Raw(cell(1)),
            rating: cell(2),
            country: cell(3),
            issuer: cell(4),
            security_type: cell(5),
        }
    }
}

/// An ordered sequence of holdings records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    /// Creates a table from records, keeping their order.
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Returns the records in input order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consumes the table and returns its records.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Iterates over the records in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the table has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records whose weight is absent.
    #[must_use]
    pub fn absent_weight_count(&self) -> usize {
        self.records.iter().filter(|r| r.weight.is_absent()).count()
    }

    /// Sum of all present weights.
    #[must_use]
    pub fn total_weight(&self) -> Decimal {
        self.records
            .iter()
            .filter_map(|r| r.weight.value())
            .sum()
    }
}

impl FromIterator<Record> for Table {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_weight_coerce() {
        assert_eq!(
            Weight::Raw("2.5".into()).coerce(),
            Weight::Present(dec!(2.5))
        );
        assert_eq!(Weight::Raw("n/a".into()).coerce(), Weight::Absent);
        assert_eq!(Weight::Absent.coerce(), Weight::Absent);
        assert_eq!(
            Weight::Present(dec!(1)).coerce(),
            Weight::Present(dec!(1))
        );
    }

    #[test]
    fn test_weight_value_reads_raw() {
        assert_eq!(Weight::Raw("3".into()).value(), Some(dec!(3)));
        assert!(Weight::Raw(String::new()).is_absent());
        assert!(!Weight::Present(dec!(0)).is_absent());
    }

    #[test]
    fn test_from_row_pads_short_rows() {
        let row = csv::StringRecord::from(vec!["A", "1.5", "AA"]);
        let record = Record::from_row(&row);

        assert_eq!(record.security, "A");
        assert_eq!(record.weight, Weight::Raw("1.5".into()));
        assert_eq!(record.rating, "AA");
        assert_eq!(record.country, "");
        assert_eq!(record.security_type, "");
    }

    #[test]
    fn test_from_row_ignores_extra_columns() {
        let row = csv::StringRecord::from(vec![
            "A",
            "1",
            "AAA",
            "US",
            "X",
            "Corporate Bonds",
            "extra",
        ]);
        let record = Record::from_row(&row);
        assert_eq!(record.security_type, "Corporate Bonds");
    }

    #[test]
    fn test_table_totals() {
        let table: Table = vec![
            Record::new("A", "5", "AAA", "US", "X", "Corporate Bonds"),
            Record::new("B", "bad", "BBB", "DE", "Y", "Corporate Bonds"),
            Record::new("C", "2.25", "AAA", "US", "Z", "Corporate Bonds"),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.len(), 3);
        assert_eq!(table.absent_weight_count(), 1);
        assert_eq!(table.total_weight(), dec!(7.25));
    }

    #[test]
    fn test_empty_table() {
        let table = Table::default();
        assert!(table.is_empty());
        assert_eq!(table.total_weight(), Decimal::ZERO);
    }
}
