//! PM2.5 breakpoint table.

/// One band of the breakpoint table: a concentration range mapped linearly
/// onto an index range. Bands only exist in [`PM25_BREAKPOINTS`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Breakpoint {
    concentration_low: f64,
    concentration_high: f64,
    index_low: u16,
    index_high: u16,
}

impl Breakpoint {
    const fn new(
        concentration_low: f64,
        concentration_high: f64,
        index_low: u16,
        index_high: u16,
    ) -> Self {
        Self {
            concentration_low,
            concentration_high,
            index_low,
            index_high,
        }
    }

    /// Whether `concentration` falls in this band. Bands are half-open
    /// `[low, high)`; the top band of the table also includes `high`.
    pub fn contains(&self, concentration: f64, is_top: bool) -> bool {
        concentration >= self.concentration_low
            && (concentration < self.concentration_high
                || (is_top && concentration <= self.concentration_high))
    }

    /// Linear interpolation of `concentration` into this band's index range,
    /// rounded half away from zero.
    pub fn interpolate(&self, concentration: f64) -> u16 {
        // AQI = ((AQIhigh - AQIlow) / (PMhigh - PMlow)) * (PMactual - PMlow) + AQIlow
        let index_span = i32::from(self.index_high) - i32::from(self.index_low);
        let aqi = (f64::from(index_span)
            / (self.concentration_high - self.concentration_low))
            * (concentration - self.concentration_low)
            + f64::from(self.index_low);
        libm::round(aqi) as u16
    }
}

/// PM2.5 breakpoints, ascending and contiguous. Each band's upper edge is the
/// next band's lower edge, so the index is continuous across band changes.
pub const PM25_BREAKPOINTS: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 12.1, 0, 50),       // Good
    Breakpoint::new(12.1, 35.5, 51, 100),    // Moderate
    Breakpoint::new(35.5, 55.5, 101, 150),   // Unhealthy for Sensitive Groups
    Breakpoint::new(55.5, 150.5, 151, 200),  // Unhealthy
    Breakpoint::new(150.5, 250.5, 201, 300), // Very Unhealthy
    Breakpoint::new(250.5, 350.5, 301, 400), // Hazardous
    Breakpoint::new(350.5, 500.0, 401, 500), // Extreme
];

/// Highest concentration the table covers.
pub const MAX_CONCENTRATION: f64 =
    PM25_BREAKPOINTS[PM25_BREAKPOINTS.len() - 1].concentration_high;
