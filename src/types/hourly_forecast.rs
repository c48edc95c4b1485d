//! Typed view of the `forecasts/v1/hourly/{n}hour/{location_key}` payload.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::types::units::{ForecastWind, Measurement};

/// Forecast for a single hour.
///
/// The body is an array of these, chronological from the request time; the
/// unit system of every [`Measurement`] is the one requested. Attributes
/// the provider omits stay `None`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HourlyForecast {
    #[serde(rename = "EpochDateTime", with = "chrono::serde::ts_seconds")]
    pub forecast_time: DateTime<Utc>,
    pub weather_icon: Option<i32>,
    pub icon_phrase: String,
    pub has_precipitation: bool,
    pub precipitation_type: Option<String>,
    pub precipitation_intensity: Option<String>,
    pub is_daylight: bool,
    pub temperature: Measurement,
    pub real_feel_temperature: Option<Measurement>,
    pub wet_bulb_temperature: Option<Measurement>,
    pub dew_point: Option<Measurement>,
    pub wind: Option<ForecastWind>,
    pub wind_gust: Option<ForecastWind>,
    /// Relative humidity in percent.
    pub relative_humidity: Option<i32>,
    pub visibility: Option<Measurement>,
    pub ceiling: Option<Measurement>,
    #[serde(rename = "UVIndex")]
    pub uv_index: Option<i32>,
    #[serde(rename = "UVIndexText")]
    pub uv_index_text: Option<String>,
    /// Probabilities in percent.
    pub precipitation_probability: Option<i32>,
    pub rain_probability: Option<i32>,
    pub snow_probability: Option<i32>,
    pub ice_probability: Option<i32>,
    /// Expected accumulations for the hour.
    pub total_liquid: Option<Measurement>,
    pub rain: Option<Measurement>,
    pub snow: Option<Measurement>,
    pub ice: Option<Measurement>,
    pub cloud_cover: Option<i32>,
}
