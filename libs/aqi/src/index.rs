//! Concentration to AQI conversion.

use core::fmt;

use crate::breakpoints::PM25_BREAKPOINTS;
use crate::concentration::{parse_concentration, Concentration};
use crate::error::AqiError;

/// A computed AQI value, or `Undefined` when the reading was invalid or
/// outside the breakpoint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AqiResult {
    Valid(u16),
    Undefined,
}

impl AqiResult {
    /// The index, if defined.
    pub fn value(self) -> Option<u16> {
        match self {
            AqiResult::Valid(index) => Some(index),
            AqiResult::Undefined => None,
        }
    }
}

impl From<Option<u16>> for AqiResult {
    fn from(value: Option<u16>) -> Self {
        value.map_or(AqiResult::Undefined, AqiResult::Valid)
    }
}

impl<E> From<Result<u16, E>> for AqiResult {
    fn from(value: Result<u16, E>) -> Self {
        value.ok().into()
    }
}

impl fmt::Display for AqiResult {
    /// Renders the index, or the `-` placeholder when undefined.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AqiResult::Valid(index) => write!(f, "{}", index),
            AqiResult::Undefined => f.write_str("-"),
        }
    }
}

/// Calculate the AQI for a validated PM2.5 concentration.
///
/// Walks the breakpoint table in ascending order and interpolates within the
/// first band that contains the concentration. Concentrations above the top
/// band are not extrapolated.
///
/// # Arguments
///
/// * `concentration` - The validated PM2.5 reading
///
/// # Returns
///
/// The calculated AQI value using the PM2.5 breakpoints and the linear
/// interpolation formula.
///
/// # Errors
///
/// [`AqiError::OutOfRange`] when the concentration is above 500 µg/m³.
///
/// # Examples
///
/// ```
/// use aqi::{index_for_concentration, Concentration};
///
/// let aqi = index_for_concentration(Concentration::from(41)).unwrap();
/// assert_eq!(aqi, 114);
///
/// let aqi = index_for_concentration(Concentration::from(7)).unwrap();
/// assert_eq!(aqi, 29);
/// ```
pub fn index_for_concentration(concentration: Concentration) -> Result<u16, AqiError> {
    let pm25 = concentration.value();
    let top = PM25_BREAKPOINTS.len() - 1;

    for (i, band) in PM25_BREAKPOINTS.iter().enumerate() {
        if band.contains(pm25, i == top) {
            return Ok(band.interpolate(pm25));
        }
    }

    Err(AqiError::OutOfRange(pm25))
}

/// Converts a textual PM2.5 reading straight to an [`AqiResult`].
///
/// Every failure (malformed text, negative, above the table) collapses to
/// [`AqiResult::Undefined`].
///
/// # Arguments
///
/// * `text` - The PM2.5 reading as reported by the sensor
///
/// # Returns
///
/// `AqiResult::Valid` with the index, or `AqiResult::Undefined`.
///
/// # Examples
///
/// ```
/// use aqi::{concentration_to_index, AqiResult};
///
/// assert_eq!(concentration_to_index("12.0"), AqiResult::Valid(50));
/// assert_eq!(concentration_to_index("1000"), AqiResult::Undefined);
/// ```
pub fn concentration_to_index(text: &str) -> AqiResult {
    parse_concentration(text)
        .and_then(index_for_concentration)
        .into()
}

/// Mean of several index values, rounded half away from zero.
///
/// Averaging happens in index space: convert each reading first, then call
/// this. Returns `Undefined` when `indices` is empty or any entry is
/// undefined.
pub fn mean_index<I>(indices: I) -> AqiResult
where
    I: IntoIterator<Item = AqiResult>,
{
    let mut sum: u64 = 0;
    let mut count: u64 = 0;
    for index in indices {
        match index {
            AqiResult::Valid(value) => {
                sum += u64::from(value);
                count += 1;
            }
            AqiResult::Undefined => return AqiResult::Undefined,
        }
    }
    if count == 0 {
        return AqiResult::Undefined;
    }

    AqiResult::Valid(libm::round(sum as f64 / count as f64) as u16)
}

/// Index for a location reported by two sensors.
pub fn pair_index(first: AqiResult, second: AqiResult) -> AqiResult {
    mean_index([first, second])
}
