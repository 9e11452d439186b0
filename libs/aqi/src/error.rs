//! Error type shared by the conversion pipeline.

use thiserror::Error;

/// Reasons a reading cannot be turned into an index or a trend.
///
/// None of these are fatal. Callers usually render them as the `-` /
/// `Unknown` placeholder instead of propagating further.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AqiError {
    /// The reading is not a finite number.
    #[error("reading is not a finite number")]
    Parse,

    /// The concentration is negative or above the top breakpoint.
    #[error("concentration {0} µg/m³ is outside the breakpoint table")]
    OutOfRange(f64),

    /// A trend was requested for an undefined index.
    #[error("trend needs two defined index values")]
    UndefinedInput,
}
