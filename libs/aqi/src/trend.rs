//! Direction of change between an averaged and a live index.

use core::fmt;

use crate::error::AqiError;
use crate::index::AqiResult;

/// Smallest difference between the averaged and live index that counts as
/// a change of direction.
pub const TREND_THRESHOLD: i32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Trend {
    /// Live index is above the average.
    Rising,
    /// Live index is below the average.
    Falling,
    Steady,
}

impl Trend {
    /// Arrow shown next to the index; `Steady` shows nothing.
    pub const fn arrow(self) -> &'static str {
        match self {
            Trend::Rising => "↑",
            Trend::Falling => "↓",
            Trend::Steady => "",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.arrow())
    }
}

/// Compares an averaged index with the live one.
///
/// # Arguments
///
/// * `average` - The index averaged over recent readings
/// * `live` - The current index
///
/// # Returns
///
/// `Falling` when the average exceeds the live index by more than
/// [`TREND_THRESHOLD`], `Rising` when it trails by more, `Steady` otherwise.
///
/// # Errors
///
/// [`AqiError::UndefinedInput`] when either index is undefined. Callers are
/// expected to check first; an undefined index never reads as `Steady`.
///
/// # Examples
///
/// ```
/// use aqi::{trend, AqiResult, Trend};
///
/// let average = AqiResult::Valid(100);
/// assert_eq!(trend(average, AqiResult::Valid(88)), Ok(Trend::Falling));
/// assert_eq!(trend(average, AqiResult::Valid(112)), Ok(Trend::Rising));
/// assert_eq!(trend(average, AqiResult::Valid(105)), Ok(Trend::Steady));
/// ```
pub fn trend(average: AqiResult, live: AqiResult) -> Result<Trend, AqiError> {
    let (Some(average), Some(live)) = (average.value(), live.value()) else {
        return Err(AqiError::UndefinedInput);
    };

    let delta = i32::from(average) - i32::from(live);
    Ok(if delta > TREND_THRESHOLD {
        Trend::Falling
    } else if delta < -TREND_THRESHOLD {
        Trend::Rising
    } else {
        Trend::Steady
    })
}
