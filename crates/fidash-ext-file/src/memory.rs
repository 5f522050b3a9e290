//! In-memory holdings source.

use fidash_holdings::{HoldingsResult, HoldingsSource};

/// Holdings export already held in memory, such as an uploaded file.
#[derive(Debug, Clone, Default)]
pub struct MemoryHoldingsSource {
    name: String,
    bytes: Vec<u8>,
}

impl MemoryHoldingsSource {
    /// Create a source over `bytes`.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: "memory".to_string(),
            bytes: bytes.into(),
        }
    }

    /// Name reported by [`HoldingsSource::describe`], usually the upload file name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Number of bytes held.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if no bytes are held.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl HoldingsSource for MemoryHoldingsSource {
    fn read_bytes(&self) -> HoldingsResult<Vec<u8>> {
        Ok(self.bytes.clone())
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}
