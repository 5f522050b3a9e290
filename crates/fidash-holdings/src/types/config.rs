//! Configuration for holdings aggregation.

use serde::{Deserialize, Serialize};

use crate::error::{HoldingsError, HoldingsResult};

/// Non-data rows at the top of a standard holdings export.
pub const DEFAULT_SKIP_ROWS: usize = 6;

/// Security type retained by the report.
pub const CORPORATE_BONDS: &str = "Corporate Bonds";

/// Number of entries in the top holdings and top issuers views.
pub const DEFAULT_TOP_N: usize = 10;

/// Configuration for holdings aggregation.
///
/// The defaults match the standard fund export and should not normally be
/// changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationConfig {
    /// Leading non-data rows discarded before the header row.
    pub skip_rows: usize,

    /// Exact security type to keep (case-sensitive).
    pub security_type: String,

    /// Size of the ranked views.
    pub top_n: usize,

    /// Compute the four views concurrently (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum retained records to trigger parallel aggregation.
    pub parallel_threshold: usize,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            skip_rows: DEFAULT_SKIP_ROWS,
            security_type: CORPORATE_BONDS.to_string(),
            top_n: DEFAULT_TOP_N,
            parallel: false,
            parallel_threshold: 1000,
        }
    }
}

impl AggregationConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of leading rows to skip.
    #[must_use]
    pub fn with_skip_rows(mut self, skip_rows: usize) -> Self {
        self.skip_rows = skip_rows;
        self
    }

    /// Sets the security type filter.
    #[must_use]
    pub fn with_security_type(mut self, security_type: impl Into<String>) -> Self {
        self.security_type = security_type.into();
        self
    }

    /// Sets the size of the ranked views.
    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Sets whether to use parallel aggregation.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel aggregation.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if parallel aggregation should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }

    /// Checks the config before a run.
    ///
    /// # Errors
    ///
    /// Returns [`HoldingsError::InvalidConfig`] for a zero `top_n` or an empty
    /// security type.
    pub fn validate(&self) -> HoldingsResult<()> {
        if self.top_n == 0 {
            return Err(HoldingsError::invalid_config(
                "top_n",
                "must be at least 1",
            ));
        }
        if self.security_type.is_empty() {
            return Err(HoldingsError::invalid_config(
                "security_type",
                "must not be empty",
            ));
        }
        Ok(())
    }
}
