//! Numeric coercion of weight cells.
//!
//! A cell that does not hold a plain number becomes an absent weight. This
//! is never an error and is never logged per record.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::debug;

use crate::types::{Record, Table};

/// Interprets a weight cell as a percentage value.
///
/// Surrounding whitespace is ignored. Plain decimal (`"5"`, `"-1.25"`,
/// `"+3"`) and scientific (`"1.5e2"`) notation are accepted. Empty cells,
/// text, thousands separators, percent signs and non-finite values such as
/// `"NaN"` or `"inf"` return `None`.
///
/// Values are held to 28 decimal places: digits beyond that are rounded
/// away, so `"1e-30"` reads as zero. Magnitudes above [`Decimal::MAX`]
/// return `None`.
#[must_use]
pub fn coerce_weight(raw: &str) -> Option<Decimal> {
    let text = raw.trim();
    if !is_numeric_literal(text) {
        return None;
    }

    if text.contains(|c| c == 'e' || c == 'E') {
        Decimal::from_scientific(text)
            .ok()
            .or_else(|| shift_exponent(text))
    } else {
        Decimal::from_str(text).ok()
    }
}

/// Coerces every weight in the table, keeping record order.
#[must_use]
pub fn coerce_weights(table: Table) -> Table {
    let coerced: Table = table
        .into_records()
        .into_iter()
        .map(|record| Record {
            weight: record.weight.coerce(),
            ..record
        })
        .collect();

    debug!(
        records = coerced.len(),
        absent = coerced.absent_weight_count(),
        "Coerced holding weights"
    );

    coerced
}

/// Applies a scientific exponent one digit at a time, rounding at the
/// 28th decimal place instead of failing.
fn shift_exponent(text: &str) -> Option<Decimal> {
    let (mantissa, exponent) = text.split_once(|c| c == 'e' || c == 'E')?;
    let mut value = Decimal::from_str(mantissa).ok()?;
    let exponent: i32 = exponent.parse().ok()?;

    for _ in 0..exponent.unsigned_abs() {
        if value.is_zero() {
            break;
        }
        value = if exponent < 0 {
            value.checked_div(Decimal::TEN)?
        } else {
            value.checked_mul(Decimal::TEN)?
        };
    }
    Some(value)
}

fn is_numeric_literal(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_digit())
        && text
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
}
