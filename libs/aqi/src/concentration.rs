//! PM2.5 concentration readings.
//!
//! Sensors report PM2.5 as text (JSON string fields) or as raw numbers.
//! Both paths end up in [`Concentration`], which only ever holds a finite,
//! non-negative value in µg/m³.

use crate::error::AqiError;

/// A validated PM2.5 concentration in µg/m³.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Concentration(f64);

impl Concentration {
    /// Wraps a numeric reading.
    ///
    /// # Errors
    ///
    /// * [`AqiError::Parse`] for NaN
    /// * [`AqiError::OutOfRange`] for negative values
    pub fn new(value: f64) -> Result<Self, AqiError> {
        if value.is_nan() {
            return Err(AqiError::Parse);
        }
        if value < 0.0 {
            return Err(AqiError::OutOfRange(value));
        }
        // `-0.0 < 0.0` is false, so normalize it here
        Ok(Self(value + 0.0))
    }

    /// The concentration in µg/m³.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Concentration {
    type Error = AqiError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<u16> for Concentration {
    /// Integer sensor registers are always a valid concentration.
    fn from(value: u16) -> Self {
        Self(f64::from(value))
    }
}

/// Parses a textual sensor reading.
///
/// Surrounding whitespace is ignored. Text such as `"nan"` or `"inf"` parses
/// as a float but is rejected, since neither is a real measurement.
///
/// # Errors
///
/// * [`AqiError::Parse`] when the text is not a finite number
/// * [`AqiError::OutOfRange`] when the number is negative
///
/// # Examples
///
/// ```
/// use aqi::{parse_concentration, AqiError};
///
/// assert_eq!(parse_concentration(" 12.5 ").unwrap().value(), 12.5);
/// assert_eq!(parse_concentration("abc"), Err(AqiError::Parse));
/// assert_eq!(parse_concentration("-3"), Err(AqiError::OutOfRange(-3.0)));
/// ```
pub fn parse_concentration(text: &str) -> Result<Concentration, AqiError> {
    let value: f64 = text.trim().parse().map_err(|_| AqiError::Parse)?;
    if !value.is_finite() {
        return Err(AqiError::Parse);
    }
    Concentration::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_concentration() {
        assert_eq!(parse_concentration("0").unwrap().value(), 0.0);
        assert_eq!(parse_concentration("12.0").unwrap().value(), 12.0);
        assert_eq!(parse_concentration("\t35.5\n").unwrap().value(), 35.5);
        assert_eq!(parse_concentration("1000").unwrap().value(), 1000.0);
        assert!(parse_concentration("500.00001").unwrap().value() > 500.0);
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        assert_eq!(parse_concentration(""), Err(AqiError::Parse));
        assert_eq!(parse_concentration("abc"), Err(AqiError::Parse));
        assert_eq!(parse_concentration("12,5"), Err(AqiError::Parse));
        assert_eq!(parse_concentration("NaN"), Err(AqiError::Parse));
        assert_eq!(parse_concentration("inf"), Err(AqiError::Parse));
        assert_eq!(parse_concentration("-inf"), Err(AqiError::Parse));
    }

    #[test]
    fn test_negative_is_out_of_range() {
        assert_eq!(parse_concentration("-0.1"), Err(AqiError::OutOfRange(-0.1)));
        assert_eq!(Concentration::new(-5.0), Err(AqiError::OutOfRange(-5.0)));
        assert_eq!(parse_concentration("-1e-50"), Err(AqiError::OutOfRange(-1e-50)));
    }

    #[test]
    fn test_negative_zero_is_normalized() {
        let zero = parse_concentration("-0").unwrap();
        assert!(zero.value().is_sign_positive());
    }

    #[test]
    fn test_numeric_readings() {
        assert_eq!(Concentration::new(f64::NAN), Err(AqiError::Parse));
        assert_eq!(Concentration::try_from(7.5).unwrap().value(), 7.5);
        assert_eq!(Concentration::from(41u16).value(), 41.0);
    }
}
