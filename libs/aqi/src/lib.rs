//! AQI library
//!
//! This library converts PM2.5 sensor readings into an Air Quality Index
//! value, classifies the index into a severity level with its display color,
//! and compares an averaged index against a live one to report a trend. It
//! supports both std and no_std environments, but is best used on systems
//! with hardware floating point support.
//!
//! The pipeline is pure and stateless:
//!
//! ```
//! use aqi::{classify, concentration_to_index, trend, AqiResult, Severity, Trend};
//!
//! let live = concentration_to_index("35.5");
//! assert_eq!(live, AqiResult::Valid(101));
//!
//! let (severity, _color) = classify(live);
//! assert_eq!(severity, Severity::UnhealthySensitive);
//!
//! assert_eq!(trend(AqiResult::Valid(88), live), Ok(Trend::Rising));
//! ```
//!
//! With the `std` feature, [`sensor`] parses sensor-pair JSON documents and
//! builds display summaries from them.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod breakpoints;
pub mod concentration;
pub mod error;
pub mod index;
pub mod severity;
pub mod trend;

#[cfg(feature = "std")]
pub mod sensor;

pub use breakpoints::{Breakpoint, MAX_CONCENTRATION, PM25_BREAKPOINTS};
pub use concentration::{parse_concentration, Concentration};
pub use error::AqiError;
pub use index::{concentration_to_index, index_for_concentration, mean_index, pair_index, AqiResult};
pub use severity::{classify, Rgb, Severity};
pub use trend::{trend, Trend, TREND_THRESHOLD};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_literal_cases() {
        assert_eq!(concentration_to_index("12.0"), AqiResult::Valid(50));
        assert_eq!(concentration_to_index("35.5"), AqiResult::Valid(101));
        assert_eq!(concentration_to_index("1000"), AqiResult::Undefined);
        assert_eq!(concentration_to_index("abc"), AqiResult::Undefined);
    }

    #[test]
    fn test_classification_is_stable() {
        for text in ["0", "12.1", "55.4", "250.5", "499.9", "-3", "x"] {
            let first = classify(concentration_to_index(text));
            let second = classify(concentration_to_index(text));
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_undefined_reading_classifies_as_unknown() {
        let (severity, color) = classify(concentration_to_index("-3"));
        assert_eq!(severity, Severity::Unknown);
        assert_eq!(color, Rgb::new(0, 0, 0));
    }
}
