//! This module provides the main entry point for interacting with the
//! AccuWeather API. It allows fetching current conditions and daily/hourly
//! forecasts either by specifying a provider location key directly or by
//! providing geographical coordinates (latitude/longitude), which are
//! resolved to a location key once and reused for the client's lifetime.

use bon::bon;
use log::{debug, warn};
use parking_lot::RwLock;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::endpoint::{self, Endpoint, DEFAULT_BASE_URL};
use crate::error::AccuWeatherError;
use crate::response;
use crate::types::current_conditions::CurrentConditions;
use crate::types::daily_forecast::{DailyForecast, DailyForecastResponse};
use crate::types::hourly_forecast::HourlyForecast;
use crate::types::location::{Location, LocationResponse};
use crate::types::units::UnitSystem;

const DEFAULT_LANGUAGE: &str = "en-us";
const DEFAULT_FORECAST_DAYS: u8 = 5;
const DEFAULT_FORECAST_HOURS: u8 = 12;
const API_KEY_LENGTH: usize = 32;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second
/// (index 1). Both values are represented as `f64`.
///
/// # Examples
///
/// ```
/// use accuweather::LatLon;
///
/// let berlin_center = LatLon(52.5200, 13.4050);
/// assert_eq!(berlin_center.0, 52.5200); // Latitude
/// assert_eq!(berlin_center.1, 13.4050); // Longitude
/// assert!(berlin_center.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    /// Returns `true` if the latitude lies within `[-90, 90]` and the
    /// longitude within `[-180, 180]`.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.0) && (-180.0..=180.0).contains(&self.1)
    }
}

/// The main client for the AccuWeather API.
///
/// The client owns the session state for one API key and one place on
/// earth: the location key resolved from the configured coordinates (cached
/// after the first successful lookup) and the remaining request quota as
/// reported by the provider on every response.
///
/// The HTTP transport is injected: the client never configures pooling,
/// TLS, timeouts, or retries itself. Construct one with
/// [`AccuWeather::builder()`].
///
/// # Examples
///
/// ```no_run
/// # use accuweather::{AccuWeather, AccuWeatherError, LatLon};
/// # #[tokio::main]
/// # async fn main() -> Result<(), AccuWeatherError> {
/// let client = AccuWeather::builder()
///     .api_key("32-character-string-1234567890qw")
///     .client(reqwest::Client::new())
///     .coordinates(LatLon(52.0677904, 19.4795644))
///     .build()?;
///
/// let conditions = client.current_conditions().await?;
/// println!(
///     "{}: {} °C",
///     conditions.weather_text,
///     conditions.temperature.metric.value
/// );
/// println!("requests remaining: {:?}", client.requests_remaining());
/// # Ok(())
/// # }
/// ```
pub struct AccuWeather {
    api_key: String,
    client: Client,
    coordinates: Option<LatLon>,
    language: String,
    base_url: String,
    location: RwLock<Option<Location>>,
    requests_remaining: RwLock<Option<u32>>,
}

#[bon]
impl AccuWeather {
    /// Creates a new `AccuWeather` client.
    ///
    /// This method uses a builder pattern, finished with `.build()`.
    ///
    /// # Arguments
    ///
    /// * `.api_key(...)`: **Required.** The 32-character AccuWeather API key.
    /// * `.client(...)`: **Required.** The [`reqwest::Client`] used for all
    ///   requests. Connection pooling and timeout policy belong to it.
    /// * `.coordinates(LatLon)`: Optional. The place to report weather for;
    ///   required unless a location key is given.
    /// * `.location_key(...)`: Optional. A provider location key, bypassing
    ///   coordinate resolution entirely.
    /// * `.language(...)`: Optional. Locale for localized text fields,
    ///   defaults to `"en-us"`. Numeric values are unaffected.
    /// * `.base_url(...)`: Optional. Overrides the production endpoint;
    ///   useful for tests against a local mock server.
    ///
    /// # Errors
    ///
    /// Returns [`AccuWeatherError::InvalidApiKey`] if the key is not a
    /// 32-character string, and [`AccuWeatherError::InvalidCoordinates`] if
    /// no location key was given and the coordinates are missing or out of
    /// range. Coordinates are validated here, once; later calls trust them.
    #[builder(on(String, into))]
    pub fn new(
        api_key: String,
        client: Client,
        coordinates: Option<LatLon>,
        location_key: Option<String>,
        language: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self, AccuWeatherError> {
        if api_key.len() != API_KEY_LENGTH {
            return Err(AccuWeatherError::InvalidApiKey);
        }
        if location_key.is_none() && !coordinates.is_some_and(|pair| pair.is_valid()) {
            return Err(AccuWeatherError::InvalidCoordinates);
        }

        Ok(Self {
            api_key,
            client,
            coordinates,
            language: language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            location: RwLock::new(location_key.map(|key| Location { key, name: None })),
            requests_remaining: RwLock::new(None),
        })
    }

    /// Resolves the configured coordinates to a provider location.
    ///
    /// The first successful resolution is cached for the lifetime of the
    /// client; subsequent calls return the cached [`Location`] without any
    /// network traffic. Two concurrent first-time calls may both issue a
    /// lookup; both resolve the same coordinates, and the first completed
    /// write is kept.
    ///
    /// # Errors
    ///
    /// Returns [`AccuWeatherError::InvalidApiKey`] if the provider rejects
    /// the credential, [`AccuWeatherError::RequestsExceeded`] when the quota
    /// is spent, and [`AccuWeatherError::Api`] for any other non-success
    /// response or for a lookup that yields no usable location. On failure
    /// nothing is cached, so a later call retries.
    pub async fn resolve_location(&self) -> Result<Location, AccuWeatherError> {
        if let Some(location) = self.location.read().clone() {
            debug!("using cached location key {}", location.key);
            return Ok(location);
        }

        // Validated at construction; absent only when a location key was
        // seeded, in which case the cache above already returned.
        let coordinates = self
            .coordinates
            .ok_or(AccuWeatherError::InvalidCoordinates)?;

        let response: Option<LocationResponse> = self
            .api_request(Endpoint::Geoposition { coordinates })
            .await?;
        let response = response.ok_or_else(|| AccuWeatherError::Api {
            status: StatusCode::OK,
            message: "no location found for the given coordinates".to_string(),
        })?;
        if response.key.is_empty() {
            return Err(AccuWeatherError::Api {
                status: StatusCode::OK,
                message: "location response contained an empty key".to_string(),
            });
        }

        let location = Location {
            key: response.key,
            name: Some(response.localized_name),
        };

        let mut cached = self.location.write();
        if let Some(existing) = cached.as_ref() {
            // A concurrent call resolved first; keep its entry.
            return Ok(existing.clone());
        }
        *cached = Some(location.clone());
        Ok(location)
    }

    /// Fetches the current observed conditions for the client's location.
    ///
    /// Resolves the location first if necessary. Dual-unit attributes carry
    /// both systems; select one with
    /// [`DualMeasurement::get`](crate::DualMeasurement::get).
    ///
    /// # Errors
    ///
    /// The same classification as [`AccuWeather::resolve_location`]; an
    /// empty result set is an [`AccuWeatherError::Api`].
    pub async fn current_conditions(&self) -> Result<CurrentConditions, AccuWeatherError> {
        let location = self.resolve_location().await?;
        let conditions: Vec<CurrentConditions> = self
            .api_request(Endpoint::CurrentConditions {
                location_key: &location.key,
            })
            .await?;
        conditions
            .into_iter()
            .next()
            .ok_or_else(|| AccuWeatherError::Api {
                status: StatusCode::OK,
                message: "empty current conditions response".to_string(),
            })
    }

    /// Fetches the daily forecast for the client's location.
    ///
    /// This method uses a builder pattern, finished with `.call().await`.
    ///
    /// # Arguments
    ///
    /// * `.days(u8)`: Optional. Forecast horizon in days; one of 1, 5, 10
    ///   or 15. Defaults to 5.
    /// * `.unit_system(UnitSystem)`: Optional. Defaults to
    ///   [`UnitSystem::Metric`].
    ///
    /// # Errors
    ///
    /// Returns [`AccuWeatherError::InvalidForecastHorizon`] for an
    /// unsupported horizon, before any network call is made; otherwise the
    /// same classification as [`AccuWeather::resolve_location`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use accuweather::{AccuWeather, AccuWeatherError, LatLon};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), AccuWeatherError> {
    /// # let client = AccuWeather::builder()
    /// #     .api_key("32-character-string-1234567890qw")
    /// #     .client(reqwest::Client::new())
    /// #     .coordinates(LatLon(52.0677904, 19.4795644))
    /// #     .build()?;
    /// let forecast = client.daily_forecast().days(5).call().await?;
    /// for day in &forecast {
    ///     println!("{}: up to {} °C", day.date, day.temperature_max.value);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn daily_forecast(
        &self,
        days: Option<u8>,
        unit_system: Option<UnitSystem>,
    ) -> Result<Vec<DailyForecast>, AccuWeatherError> {
        let days = days.unwrap_or(DEFAULT_FORECAST_DAYS);
        let unit_system = unit_system.unwrap_or_default();
        endpoint::validate_forecast_days(days)?;

        let location = self.resolve_location().await?;
        let response: DailyForecastResponse = self
            .api_request(Endpoint::DailyForecast {
                location_key: &location.key,
                days,
                unit_system,
            })
            .await?;
        Ok(response.into_forecasts())
    }

    /// Fetches the hourly forecast for the client's location.
    ///
    /// This method uses a builder pattern, finished with `.call().await`.
    ///
    /// # Arguments
    ///
    /// * `.hours(u8)`: Optional. Forecast horizon in hours; one of 1, 12
    ///   or 24. Defaults to 12.
    /// * `.unit_system(UnitSystem)`: Optional. Defaults to
    ///   [`UnitSystem::Metric`].
    ///
    /// # Errors
    ///
    /// Returns [`AccuWeatherError::InvalidForecastHorizon`] for an
    /// unsupported horizon, before any network call is made; otherwise the
    /// same classification as [`AccuWeather::resolve_location`].
    #[builder]
    pub async fn hourly_forecast(
        &self,
        hours: Option<u8>,
        unit_system: Option<UnitSystem>,
    ) -> Result<Vec<HourlyForecast>, AccuWeatherError> {
        let hours = hours.unwrap_or(DEFAULT_FORECAST_HOURS);
        let unit_system = unit_system.unwrap_or_default();
        endpoint::validate_forecast_hours(hours)?;

        let location = self.resolve_location().await?;
        self.api_request(Endpoint::HourlyForecast {
            location_key: &location.key,
            hours,
            unit_system,
        })
        .await
    }

    /// Returns the resolved location key, if one is cached.
    pub fn location_key(&self) -> Option<String> {
        self.location
            .read()
            .as_ref()
            .map(|location| location.key.clone())
    }

    /// Returns the localized name of the resolved location, if known.
    pub fn location_name(&self) -> Option<String> {
        self.location
            .read()
            .as_ref()
            .and_then(|location| location.name.clone())
    }

    /// Returns the remaining request quota as last reported by the provider.
    ///
    /// `None` until the first response carrying the quota header has been
    /// received; not persisted across client instances.
    pub fn requests_remaining(&self) -> Option<u32> {
        *self.requests_remaining.read()
    }

    /// Executes one GET against the API: builds the URL and query, sends it
    /// through the injected client, records the quota header, classifies
    /// the response, and deserializes the body.
    ///
    /// The quota counter is updated for every response that carries the
    /// header, classified failures included; transport failures surface
    /// before any response exists and leave it untouched.
    async fn api_request<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint<'_>,
    ) -> Result<T, AccuWeatherError> {
        let url = endpoint.url(&self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&endpoint.query(&self.api_key, &self.language))
            .send()
            .await?;

        let status = response.status();
        if let Some(remaining) = response::requests_remaining(response.headers()) {
            *self.requests_remaining.write() = Some(remaining);
        }

        let body = response.text().await?;
        if !status.is_success() {
            warn!("request to {url} failed with status {status}");
        }
        response::classify_response(status, &body)?;
        debug!("data retrieved from {url}, status: {status}");

        serde_json::from_str(&body).map_err(|error| AccuWeatherError::Api {
            status,
            message: format!("malformed response body: {error}"),
        })
    }
}
