//! Source of raw export bytes.
//!
//! The aggregation core never performs I/O itself. Loaders implement
//! [`HoldingsSource`] and hand the bytes to [`run`](crate::pipeline::run).

use crate::error::HoldingsResult;

/// Supplies the raw bytes of a holdings export.
pub trait HoldingsSource {
    /// Reads the full export.
    fn read_bytes(&self) -> HoldingsResult<Vec<u8>>;

    /// Human-readable description of the source, used in logs and errors.
    fn describe(&self) -> String;
}

impl<S: HoldingsSource + ?Sized> HoldingsSource for &S {
    fn read_bytes(&self) -> HoldingsResult<Vec<u8>> {
        (**self).read_bytes()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<S: HoldingsSource + ?Sized> HoldingsSource for Box<S> {
    fn read_bytes(&self) -> HoldingsResult<Vec<u8>> {
        (**self).read_bytes()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
