//! File-based holdings source.

use std::path::{Path, PathBuf};

use tracing::debug;

use fidash_holdings::{HoldingsError, HoldingsResult, HoldingsSource};

// =============================================================================
// FILE HOLDINGS SOURCE
// =============================================================================

/// Reads a holdings export from a file on each call.
#[derive(Debug, Clone)]
pub struct FileHoldingsSource {
    file_path: PathBuf,
}

impl FileHoldingsSource {
    /// Create a new file source. The file is not opened until read.
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Path of the export file.
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl HoldingsSource for FileHoldingsSource {
    fn read_bytes(&self) -> HoldingsResult<Vec<u8>> {
        let bytes = std::fs::read(&self.file_path)
            .map_err(|e| HoldingsError::io(self.describe(), e.to_string()))?;

        debug!(
            path = %self.file_path.display(),
            bytes = bytes.len(),
            "Read holdings export"
        );

        Ok(bytes)
    }

    fn describe(&self) -> String {
        self.file_path.display().to_string()
    }
}
