//! Sensor-pair JSON documents.
//!
//! A monitoring location reports two laser counters side by side, as a
//! `results` array in one JSON document. Each entry carries the current
//! PM2.5 reading as a string and a nested, JSON-encoded `Stats` string with
//! the live (`v`) and short-average (`v1`) concentrations.
//!
//! Indices are computed per sensor and averaged afterwards, never the other
//! way around.

use std::string::{String, ToString};
use std::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::concentration::Concentration;
use crate::index::{concentration_to_index, index_for_concentration, pair_index, AqiResult};
use crate::severity::{classify, Rgb, Severity};
use crate::trend::{trend, Trend};

const NO_SENSOR_NAME: &str = "No Sensor Found";
const PLACEHOLDER: &str = "-";

/// Top-level document for one location.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SensorResults {
    pub results: Vec<Sensor>,
}

/// One laser counter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sensor {
    /// PM2.5 in µg/m³, as reported (a string).
    #[serde(rename = "PM2_5Value")]
    pub pm: String,
    #[serde(rename = "Label")]
    pub label: String,
    #[serde(rename = "ID")]
    pub id: u64,
    /// JSON document encoded as a string.
    #[serde(rename = "Stats", default)]
    pub stats: Option<String>,
}

/// Decoded `Stats` payload.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Stats {
    /// Live PM2.5.
    pub v: f64,
    /// Short-average PM2.5.
    pub v1: f64,
}

/// Display-ready view of a location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub name: String,
    pub id: String,
    /// The index, or `-` when undefined.
    pub aqi: String,
    pub severity: Severity,
    pub color: Rgb,
    /// Present only when both the averaged and live indices are defined.
    pub trend: Option<Trend>,
}

fn index_for_value(value: f64) -> AqiResult {
    Concentration::new(value)
        .and_then(index_for_concentration)
        .into()
}

impl Sensor {
    /// Index for the reported `PM2_5Value`.
    pub fn index(&self) -> AqiResult {
        concentration_to_index(&self.pm)
    }

    /// Decodes the nested stats. Missing or malformed stats are `None`.
    pub fn stats(&self) -> Option<Stats> {
        self.stats
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
    }

    pub fn live_index(&self) -> AqiResult {
        self.stats()
            .map_or(AqiResult::Undefined, |stats| index_for_value(stats.v))
    }

    pub fn average_index(&self) -> AqiResult {
        self.stats()
            .map_or(AqiResult::Undefined, |stats| index_for_value(stats.v1))
    }
}

impl SensorResults {
    /// Parses a location document.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the text is not a valid document.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Label of the first sensor.
    pub fn name(&self) -> &str {
        self.results
            .first()
            .map_or(NO_SENSOR_NAME, |sensor| sensor.label.as_str())
    }

    /// Id of the first sensor, or `-`.
    pub fn id(&self) -> String {
        self.results
            .first()
            .map_or_else(|| PLACEHOLDER.to_string(), |sensor| sensor.id.to_string())
    }

    fn pair<F>(&self, index: F) -> AqiResult
    where
        F: Fn(&Sensor) -> AqiResult,
    {
        match self.results.as_slice() {
            [first, second, ..] => pair_index(index(first), index(second)),
            _ => AqiResult::Undefined,
        }
    }

    /// Pair-averaged index of the reported `PM2_5Value`s. Undefined when fewer
    /// than two sensors reported.
    pub fn index(&self) -> AqiResult {
        self.pair(Sensor::index)
    }

    /// Pair-averaged index of the live stats.
    pub fn live_index(&self) -> AqiResult {
        self.pair(Sensor::live_index)
    }

    /// Pair-averaged index of the short-average stats.
    pub fn average_index(&self) -> AqiResult {
        self.pair(Sensor::average_index)
    }

    pub fn summary(&self) -> Summary {
        let index = self.index();
        let (severity, color) = classify(index);

        Summary {
            name: self.name().to_string(),
            id: self.id(),
            aqi: index.to_string(),
            severity,
            color,
            trend: trend(self.average_index(), self.live_index()).ok(),
        }
    }
}
