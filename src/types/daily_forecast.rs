//! Typed view of the `forecasts/v1/daily/{n}day/{location_key}` payload.
//!
//! The wire shape nests per-day values awkwardly for consumers: the
//! temperature ranges sit behind `Minimum`/`Maximum` objects and the
//! air-quality and pollen indices arrive as a name-tagged list. Mapping
//! flattens the ranges into `*_min`/`*_max` fields and promotes the list
//! entries to named fields, so absent indices are plain `None`s.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::types::units::{ForecastWind, Measurement, MinMax};

/// Forecast for a single day, split into day and night halves.
#[derive(Debug, Clone)]
pub struct DailyForecast {
    pub date: DateTime<Utc>,
    pub temperature_min: Measurement,
    pub temperature_max: Measurement,
    pub real_feel_temperature_min: Option<Measurement>,
    pub real_feel_temperature_max: Option<Measurement>,
    pub real_feel_temperature_shade_min: Option<Measurement>,
    pub real_feel_temperature_shade_max: Option<Measurement>,
    pub hours_of_sun: Option<f64>,
    /// Air quality index; `kind` names the driving pollutant (e.g. ozone).
    pub air_quality: Option<AirAndPollenIndex>,
    pub grass: Option<AirAndPollenIndex>,
    pub mold: Option<AirAndPollenIndex>,
    pub ragweed: Option<AirAndPollenIndex>,
    pub tree: Option<AirAndPollenIndex>,
    pub uv_index: Option<AirAndPollenIndex>,
    pub day: DayPart,
    pub night: DayPart,
}

/// One categorized index from the forecast's air-and-pollen list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirAndPollenIndex {
    pub value: Option<i32>,
    /// Category phrase, e.g. `"Good"` or `"High"`.
    pub category: Option<String>,
    pub category_value: Option<i32>,
    /// Pollutant type; only set for the air quality entry.
    pub kind: Option<String>,
}

/// Half-day (day or night) block of a daily forecast.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DayPart {
    pub icon: Option<i32>,
    pub icon_phrase: String,
    pub short_phrase: Option<String>,
    pub long_phrase: Option<String>,
    pub has_precipitation: bool,
    pub precipitation_type: Option<String>,
    pub precipitation_intensity: Option<String>,
    /// Probabilities in percent.
    pub precipitation_probability: Option<i32>,
    pub thunderstorm_probability: Option<i32>,
    pub rain_probability: Option<i32>,
    pub snow_probability: Option<i32>,
    pub ice_probability: Option<i32>,
    pub wind: Option<ForecastWind>,
    pub wind_gust: Option<ForecastWind>,
    /// Expected accumulations for the half day.
    pub total_liquid: Option<Measurement>,
    pub rain: Option<Measurement>,
    pub snow: Option<Measurement>,
    pub ice: Option<Measurement>,
    pub hours_of_precipitation: Option<f64>,
    pub hours_of_rain: Option<f64>,
    pub cloud_cover: Option<i32>,
}

/// Wire shape of the daily forecast body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DailyForecastResponse {
    pub(crate) daily_forecasts: Vec<RawDailyForecast>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RawDailyForecast {
    #[serde(rename = "EpochDate", with = "chrono::serde::ts_seconds")]
    date: DateTime<Utc>,
    temperature: MinMax,
    real_feel_temperature: Option<MinMax>,
    real_feel_temperature_shade: Option<MinMax>,
    hours_of_sun: Option<f64>,
    #[serde(default)]
    air_and_pollen: Vec<RawAirAndPollen>,
    day: DayPart,
    night: DayPart,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawAirAndPollen {
    name: String,
    value: Option<i32>,
    category: Option<String>,
    category_value: Option<i32>,
    #[serde(rename = "Type")]
    kind: Option<String>,
}

impl From<RawAirAndPollen> for AirAndPollenIndex {
    fn from(raw: RawAirAndPollen) -> Self {
        AirAndPollenIndex {
            value: raw.value,
            category: raw.category,
            category_value: raw.category_value,
            kind: raw.kind,
        }
    }
}

impl From<RawDailyForecast> for DailyForecast {
    fn from(raw: RawDailyForecast) -> Self {
        let (real_feel_min, real_feel_max) = split_min_max(raw.real_feel_temperature);
        let (shade_min, shade_max) = split_min_max(raw.real_feel_temperature_shade);

        let mut forecast = DailyForecast {
            date: raw.date,
            temperature_min: raw.temperature.minimum,
            temperature_max: raw.temperature.maximum,
            real_feel_temperature_min: real_feel_min,
            real_feel_temperature_max: real_feel_max,
            real_feel_temperature_shade_min: shade_min,
            real_feel_temperature_shade_max: shade_max,
            hours_of_sun: raw.hours_of_sun,
            air_quality: None,
            grass: None,
            mold: None,
            ragweed: None,
            tree: None,
            uv_index: None,
            day: raw.day,
            night: raw.night,
        };

        for entry in raw.air_and_pollen {
            match entry.name.as_str() {
                "AirQuality" => forecast.air_quality = Some(entry.into()),
                "Grass" => forecast.grass = Some(entry.into()),
                "Mold" => forecast.mold = Some(entry.into()),
                "Ragweed" => forecast.ragweed = Some(entry.into()),
                "Tree" => forecast.tree = Some(entry.into()),
                "UVIndex" => forecast.uv_index = Some(entry.into()),
                _ => {}
            }
        }

        forecast
    }
}

fn split_min_max(range: Option<MinMax>) -> (Option<Measurement>, Option<Measurement>) {
    match range {
        Some(range) => (Some(range.minimum), Some(range.maximum)),
        None => (None, None),
    }
}

impl DailyForecastResponse {
    /// Maps the wire body into chronological per-day records.
    pub(crate) fn into_forecasts(self) -> Vec<DailyForecast> {
        self.daily_forecasts
            .into_iter()
            .map(DailyForecast::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_day(epoch: i64, min: f64, max: f64) -> serde_json::Value {
        serde_json::json!({
            "Date": "2024-06-01T07:00:00+02:00",
            "EpochDate": epoch,
            "Temperature": {
                "Minimum": {"Value": min, "Unit": "C", "UnitType": 17},
                "Maximum": {"Value": max, "Unit": "C", "UnitType": 17}
            },
            "HoursOfSun": 9.5,
            "AirAndPollen": [
                {"Name": "AirQuality", "Value": 23, "Category": "Good", "CategoryValue": 1, "Type": "Ozone"},
                {"Name": "Grass", "Value": 0, "Category": "Low", "CategoryValue": 1},
                {"Name": "UVIndex", "Value": 6, "Category": "High", "CategoryValue": 3}
            ],
            "Day": {
                "Icon": 4,
                "IconPhrase": "Intermittent clouds",
                "HasPrecipitation": true,
                "PrecipitationType": "Rain",
                "PrecipitationIntensity": "Light",
                "PrecipitationProbability": 57,
                "Wind": {
                    "Speed": {"Value": 13.0, "Unit": "km/h", "UnitType": 7},
                    "Direction": {"Degrees": 270, "Localized": "W", "English": "W"}
                },
                "TotalLiquid": {"Value": 1.2, "Unit": "mm", "UnitType": 3},
                "CloudCover": 65
            },
            "Night": {
                "Icon": 35,
                "IconPhrase": "Partly cloudy",
                "HasPrecipitation": false
            }
        })
    }

    #[test]
    fn maps_temperature_range_and_indices() {
        let response: DailyForecastResponse = serde_json::from_value(serde_json::json!({
            "Headline": {"EffectiveEpochDate": 1_717_218_000, "Severity": 4},
            "DailyForecasts": [raw_day(1_717_218_000, 12.4, 24.8)]
        }))
        .expect("valid daily forecast body");

        let forecasts = response.into_forecasts();
        assert_eq!(forecasts.len(), 1);

        let forecast = &forecasts[0];
        assert_eq!(forecast.temperature_min.value, 12.4);
        assert_eq!(forecast.temperature_max.value, 24.8);
        assert_eq!(forecast.hours_of_sun, Some(9.5));

        let air_quality = forecast.air_quality.as_ref().expect("air quality entry");
        assert_eq!(air_quality.value, Some(23));
        assert_eq!(air_quality.kind.as_deref(), Some("Ozone"));

        let uv_index = forecast.uv_index.as_ref().expect("uv index entry");
        assert_eq!(uv_index.category.as_deref(), Some("High"));
        assert!(forecast.mold.is_none());

        assert_eq!(forecast.day.precipitation_probability, Some(57));
        assert_eq!(
            forecast.day.wind.as_ref().map(|wind| wind.speed.value),
            Some(13.0)
        );
        assert_eq!(forecast.night.icon, Some(35));
        assert!(!forecast.night.has_precipitation);
    }

    #[test]
    fn preserves_fixture_order() {
        let response: DailyForecastResponse = serde_json::from_value(serde_json::json!({
            "DailyForecasts": [
                raw_day(1_717_218_000, 10.0, 20.0),
                raw_day(1_717_304_400, 11.0, 21.0),
                raw_day(1_717_390_800, 12.0, 22.0)
            ]
        }))
        .expect("valid daily forecast body");

        let forecasts = response.into_forecasts();
        let dates: Vec<_> = forecasts.iter().map(|forecast| forecast.date).collect();

        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        assert_eq!(forecasts.len(), 3);
    }
}
