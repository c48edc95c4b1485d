//! Typed view of the `currentconditions/v1/{location_key}` payload.
//!
//! The endpoint reports every dual-unit attribute in both systems at once,
//! so those fields are [`DualMeasurement`]s and the caller picks a system
//! with [`DualMeasurement::get`]. Attributes the provider may omit are
//! `Option`s; an absent value is never substituted with a default.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::types::units::{DualMeasurement, WindDirection};

/// Current observed weather at a resolved location.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CurrentConditions {
    /// Observation timestamp, taken from the provider's epoch field.
    #[serde(rename = "EpochTime", with = "chrono::serde::ts_seconds")]
    pub observation_time: DateTime<Utc>,
    /// Localized phrase describing the weather, e.g. `"Mostly cloudy"`.
    pub weather_text: String,
    pub weather_icon: Option<i32>,
    pub has_precipitation: bool,
    pub precipitation_type: Option<String>,
    pub is_day_time: bool,
    pub temperature: DualMeasurement,
    pub real_feel_temperature: Option<DualMeasurement>,
    pub real_feel_temperature_shade: Option<DualMeasurement>,
    /// Relative humidity in percent.
    pub relative_humidity: Option<i32>,
    pub dew_point: Option<DualMeasurement>,
    pub wind: Option<Wind>,
    pub wind_gust: Option<WindGust>,
    #[serde(rename = "UVIndex")]
    pub uv_index: Option<i32>,
    #[serde(rename = "UVIndexText")]
    pub uv_index_text: Option<String>,
    pub visibility: Option<DualMeasurement>,
    /// Cloud cover in percent.
    pub cloud_cover: Option<i32>,
    pub ceiling: Option<DualMeasurement>,
    pub pressure: Option<DualMeasurement>,
    pub apparent_temperature: Option<DualMeasurement>,
    pub wind_chill_temperature: Option<DualMeasurement>,
    pub wet_bulb_temperature: Option<DualMeasurement>,
    /// Precipitation over the past hour.
    #[serde(rename = "Precip1hr")]
    pub precip_1hr: Option<DualMeasurement>,
}

/// Observed wind, reported in both unit systems.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Wind {
    pub direction: Option<WindDirection>,
    pub speed: DualMeasurement,
}

/// Observed wind gust speed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WindGust {
    pub speed: DualMeasurement,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::units::UnitSystem;

    fn fixture() -> serde_json::Value {
        serde_json::json!({
            "LocalObservationDateTime": "2024-06-01T14:10:00+02:00",
            "EpochTime": 1_717_243_800,
            "WeatherText": "Mostly cloudy",
            "WeatherIcon": 6,
            "HasPrecipitation": false,
            "PrecipitationType": null,
            "IsDayTime": true,
            "Temperature": {
                "Metric": {"Value": 23.1, "Unit": "C", "UnitType": 17},
                "Imperial": {"Value": 74.0, "Unit": "F", "UnitType": 18}
            },
            "RelativeHumidity": 54,
            "Wind": {
                "Direction": {"Degrees": 225, "Localized": "SW", "English": "SW"},
                "Speed": {
                    "Metric": {"Value": 14.8, "Unit": "km/h", "UnitType": 7},
                    "Imperial": {"Value": 9.2, "Unit": "mi/h", "UnitType": 9}
                }
            },
            "UVIndex": 5,
            "UVIndexText": "Moderate",
            "CloudCover": 70,
            "Pressure": {
                "Metric": {"Value": 1013.0, "Unit": "mb", "UnitType": 14},
                "Imperial": {"Value": 29.92, "Unit": "inHg", "UnitType": 12}
            }
        })
    }

    #[test]
    fn deserializes_dual_unit_fields() {
        let conditions: CurrentConditions =
            serde_json::from_value(fixture()).expect("valid current conditions body");

        assert_eq!(conditions.weather_text, "Mostly cloudy");
        assert_eq!(conditions.temperature.get(UnitSystem::Metric).value, 23.1);
        assert_eq!(conditions.temperature.get(UnitSystem::Imperial).value, 74.0);
        assert_eq!(conditions.relative_humidity, Some(54));
        assert_eq!(conditions.uv_index, Some(5));

        let wind = conditions.wind.expect("wind present in fixture");
        assert_eq!(wind.speed.get(UnitSystem::Metric).unit, "km/h");
        assert_eq!(
            wind.direction.and_then(|direction| direction.degrees),
            Some(225)
        );
    }

    #[test]
    fn missing_optional_fields_are_absent_not_defaulted() {
        let conditions: CurrentConditions = serde_json::from_value(serde_json::json!({
            "EpochTime": 1_717_243_800,
            "WeatherText": "Clear",
            "HasPrecipitation": false,
            "IsDayTime": false,
            "Temperature": {
                "Metric": {"Value": 8.0, "Unit": "C", "UnitType": 17},
                "Imperial": {"Value": 46.0, "Unit": "F", "UnitType": 18}
            }
        }))
        .expect("minimal body is still valid");

        assert_eq!(conditions.weather_icon, None);
        assert_eq!(conditions.relative_humidity, None);
        assert!(conditions.wind.is_none());
        assert!(conditions.pressure.is_none());
    }
}
