//! Unit-system selection and the measured-value types shared by every
//! weather payload the API returns.

use serde::Deserialize;

/// Selects which measurement system values are expressed in.
///
/// The forecast endpoints take this as a request parameter; current
/// conditions always carry both systems, selected through
/// [`DualMeasurement::get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnitSystem {
    /// Metric units (°C, km/h, mm, ...).
    #[default]
    Metric,
    /// Imperial units (°F, mi/h, in, ...).
    Imperial,
}

impl UnitSystem {
    /// Value of the `metric` query parameter for this system.
    pub(crate) fn as_query_value(self) -> &'static str {
        match self {
            UnitSystem::Metric => "true",
            UnitSystem::Imperial => "false",
        }
    }
}

/// A single measured value together with its unit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Measurement {
    pub value: f64,
    /// Unit abbreviation as reported by the provider, e.g. `"C"` or `"km/h"`.
    pub unit: String,
    /// Provider-internal numeric unit identifier.
    pub unit_type: i32,
}

/// A measurement reported in both unit systems at once.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DualMeasurement {
    pub metric: Measurement,
    pub imperial: Measurement,
}

impl DualMeasurement {
    /// Returns the embedded value for the requested unit system.
    pub fn get(&self, unit_system: UnitSystem) -> &Measurement {
        match unit_system {
            UnitSystem::Metric => &self.metric,
            UnitSystem::Imperial => &self.imperial,
        }
    }
}

/// Minimum/maximum pair for a daily value range.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MinMax {
    pub minimum: Measurement,
    pub maximum: Measurement,
}

/// Compass direction of the wind.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WindDirection {
    pub degrees: Option<i32>,
    /// Localized compass point, e.g. `"SSW"`.
    pub localized: Option<String>,
    pub english: Option<String>,
}

/// Wind speed (single unit system) with optional direction.
///
/// Used by the forecast endpoints, where the unit system is chosen per
/// request; gust entries come without a direction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ForecastWind {
    pub speed: Measurement,
    pub direction: Option<WindDirection>,
}
