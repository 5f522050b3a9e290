//! Derived views over a filtered holdings table.
//!
//! - **Top holdings**: Largest individual weights, largest first
//! - **Country exposure**: Summed weight per country, largest first
//! - **Rating exposure**: Summed weight per rating, largest first
//! - **Top issuers**: Largest issuer sums, re-ordered smallest first
//!
//! Every view is a pure function of the table and none depends on another.
//!
//! # Example
//!
//! ```rust
//! use fidash_holdings::types::{Record, Table};
//! use fidash_holdings::views::{country_exposure, top_holdings, top_issuers};
//!
//! let table: Table = vec![
//!     Record::new("A", "5", "AAA", "US", "X", "Corporate Bonds"),
//!     Record::new("B", "bad", "BBB", "DE", "Y", "Corporate Bonds"),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(top_holdings(&table, 10).len(), 1);
//! assert_eq!(country_exposure(&table)[0].label, "US");
//! assert_eq!(top_issuers(&table, 10)[0].label, "X");
//! ```

mod exposure;
mod holdings;
mod issuers;

pub use exposure::*;
pub use holdings::*;
pub use issuers::*;
