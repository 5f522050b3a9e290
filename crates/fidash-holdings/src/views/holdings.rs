//! Largest individual holdings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Table;

/// A security and its weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldingWeight {
    /// Security identifier.
    pub security: String,
    /// Weight in percentage units.
    pub weight: Decimal,
}

impl HoldingWeight {
    /// Creates a holding weight entry.
    #[must_use]
    pub fn new(security: impl Into<String>, weight: Decimal) -> Self {
        Self {
            security: security.into(),
            weight,
        }
    }
}

/// Returns the `n` records with the largest present weight, largest first.
///
/// Records with an absent weight are dropped before ranking. Equal weights
/// keep input order, including at the cutoff. Fewer than `n` qualifying
/// records are all returned.
#[must_use]
pub fn top_holdings(table: &Table, n: usize) -> Vec<HoldingWeight> {
    let mut ranked: Vec<HoldingWeight> = table
        .iter()
        .filter_map(|r| {
            r.weight
                .value()
                .map(|weight| HoldingWeight::new(r.security.clone(), weight))
        })
        .collect();

    ranked.sort_by(|a, b| b.weight.cmp(&a.weight));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Record;
    use rust_decimal_macros::dec;

    fn table(weights: &[&str]) -> Table {
        weights
            .iter()
            .enumerate()
            .map(|(i, w)| Record::new(format!("S{i}"), *w, "AA", "US", "X", "Corporate Bonds"))
            .collect()
    }

    fn securities(result: &[HoldingWeight]) -> Vec<&str> {
        result.iter().map(|h| h.security.as_str()).collect()
    }

    #[test]
    fn test_top_holdings_descending() {
        let t = table(&["1", "4", "2.5", "3"]);
        let result = top_holdings(&t, 10);

        assert_eq!(securities(&result), vec!["S1", "S3", "S2", "S0"]);
        assert_eq!(result[0].weight, dec!(4));
    }

    #[test]
    fn test_top_holdings_cut() {
        let weights: Vec<String> = (1..=15).map(|w| w.to_string()).collect();
        let refs: Vec<&str> = weights.iter().map(String::as_str).collect();
        let result = top_holdings(&table(&refs), 10);

        assert_eq!(result.len(), 10);
        assert_eq!(result[0].weight, dec!(15));
        assert_eq!(result[9].weight, dec!(6));
    }

    #[test]
    fn test_absent_weights_are_excluded() {
        let t = table(&["bad", "2", "", "1"]);
        let result = top_holdings(&t, 10);
        assert_eq!(securities(&result), vec!["S1", "S3"]);
    }

    #[test]
    fn test_ties_keep_input_order_at_cutoff() {
        let t = table(&["5", "1", "1", "1"]);
        let result = top_holdings(&t, 3);
        assert_eq!(securities(&result), vec!["S0", "S1", "S2"]);
    }

    #[test]
    fn test_negative_weights_rank_last() {
        let t = table(&["-0.5", "0", "0.1"]);
        let result = top_holdings(&t, 10);
        assert_eq!(securities(&result), vec!["S2", "S1", "S0"]);
    }

    #[test]
    fn test_empty() {
        assert!(top_holdings(&Table::default(), 10).is_empty());
    }
}
