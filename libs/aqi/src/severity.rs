//! Severity levels and their display colors.

use core::fmt;

use crate::index::AqiResult;

/// An 8-bit RGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl fmt::Display for Rgb {
    /// Formats as a `#rrggbb` hex code.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// Severity category for an AQI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Severity {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
    Extreme,
    Unknown,
}

impl Severity {
    /// Maps an index onto its category. Bands are half-open and cover every
    /// non-negative value; negative input is `Unknown`.
    ///
    /// # Examples
    ///
    /// ```
    /// use aqi::Severity;
    ///
    /// assert_eq!(Severity::for_index(50), Severity::Good);
    /// assert_eq!(Severity::for_index(51), Severity::Moderate);
    /// assert_eq!(Severity::for_index(-1), Severity::Unknown);
    /// ```
    pub fn for_index(index: i32) -> Self {
        match index {
            0..=50 => Severity::Good,
            51..=100 => Severity::Moderate,
            101..=150 => Severity::UnhealthySensitive,
            151..=200 => Severity::Unhealthy,
            201..=300 => Severity::VeryUnhealthy,
            301..=400 => Severity::Hazardous,
            401.. => Severity::Extreme,
            _ => Severity::Unknown,
        }
    }

    pub const fn color(self) -> Rgb {
        match self {
            Severity::Good => Rgb::new(0, 228, 0),
            Severity::Moderate => Rgb::new(255, 255, 0),
            Severity::UnhealthySensitive => Rgb::new(207, 115, 50),
            Severity::Unhealthy => Rgb::new(255, 0, 0),
            Severity::VeryUnhealthy => Rgb::new(143, 63, 151),
            Severity::Hazardous => Rgb::new(126, 0, 35),
            Severity::Extreme => Rgb::new(255, 0, 255),
            Severity::Unknown => Rgb::new(0, 0, 0),
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Severity::Good => "Good",
            Severity::Moderate => "Moderate",
            Severity::UnhealthySensitive => "Unhealthy for Sensitive Groups",
            Severity::Unhealthy => "Unhealthy",
            Severity::VeryUnhealthy => "Very Unhealthy",
            Severity::Hazardous => "Hazardous",
            Severity::Extreme => "Extreme",
            Severity::Unknown => "Unknown",
        }
    }

    /// Description that fits a small widget.
    pub const fn short_label(self) -> &'static str {
        match self {
            Severity::UnhealthySensitive => "Unhealthy SG",
            other => other.description(),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Classifies an AQI result into a severity and its display color.
///
/// # Arguments
///
/// * `index` - The calculated AQI, possibly undefined
///
/// # Returns
///
/// The severity whose band contains the index, with its color.
/// Undefined input is `Severity::Unknown`.
///
/// # Examples
///
/// ```
/// use aqi::{classify, AqiResult, Severity};
///
/// let (severity, color) = classify(AqiResult::Valid(500));
/// assert_eq!(severity, Severity::Extreme);
/// assert_eq!(color.to_string(), "#ff00ff");
///
/// assert_eq!(classify(AqiResult::Undefined).0, Severity::Unknown);
/// ```
pub fn classify(index: AqiResult) -> (Severity, Rgb) {
    let severity = match index {
        AqiResult::Valid(value) => Severity::for_index(i32::from(value)),
        AqiResult::Undefined => Severity::Unknown,
    };
    (severity, severity.color())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::string::ToString;

    #[rstest]
    #[case(0, Severity::Good)]
    #[case(50, Severity::Good)]
    #[case(51, Severity::Moderate)]
    #[case(100, Severity::Moderate)]
    #[case(101, Severity::UnhealthySensitive)]
    #[case(150, Severity::UnhealthySensitive)]
    #[case(151, Severity::Unhealthy)]
    #[case(200, Severity::Unhealthy)]
    #[case(201, Severity::VeryUnhealthy)]
    #[case(300, Severity::VeryUnhealthy)]
    #[case(301, Severity::Hazardous)]
    #[case(400, Severity::Hazardous)]
    #[case(401, Severity::Extreme)]
    #[case(500, Severity::Extreme)]
    #[case(999, Severity::Extreme)]
    #[case(-1, Severity::Unknown)]
    #[case(i32::MIN, Severity::Unknown)]
    fn test_for_index(#[case] index: i32, #[case] expected: Severity) {
        assert_eq!(Severity::for_index(index), expected);
    }

    #[test]
    fn test_bands_have_no_gaps() {
        let mut previous = Severity::for_index(0);
        let mut changes = 0;
        for index in 1..=1000 {
            let current = Severity::for_index(index);
            assert_ne!(current, Severity::Unknown);
            if current != previous {
                changes += 1;
            }
            previous = current;
        }
        assert_eq!(changes, 6);
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            classify(AqiResult::Valid(50)),
            (Severity::Good, Rgb::new(0, 228, 0))
        );
        assert_eq!(classify(AqiResult::Valid(51)).0, Severity::Moderate);
        assert_eq!(classify(AqiResult::Valid(500)).0, Severity::Extreme);
        assert_eq!(
            classify(AqiResult::Undefined),
            (Severity::Unknown, Rgb::new(0, 0, 0))
        );
    }

    #[test]
    fn test_colors_render_as_hex() {
        assert_eq!(Severity::Good.color().to_string(), "#00e400");
        assert_eq!(Severity::UnhealthySensitive.color().to_string(), "#cf7332");
        assert_eq!(Severity::VeryUnhealthy.color().to_string(), "#8f3f97");
        assert_eq!(Severity::Hazardous.color().to_string(), "#7e0023");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Severity::UnhealthySensitive.short_label(), "Unhealthy SG");
        assert_eq!(Severity::VeryUnhealthy.short_label(), "Very Unhealthy");
        assert_eq!(Severity::Extreme.to_string(), "Extreme");
    }
}
