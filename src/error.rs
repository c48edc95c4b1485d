use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccuWeatherError {
    /// Coordinates were missing or outside the valid geographic ranges.
    #[error("invalid coordinates: latitude must be within [-90, 90] and longitude within [-180, 180]")]
    InvalidCoordinates,

    /// The API key has an invalid format or was rejected by the provider.
    #[error("invalid API key")]
    InvalidApiKey,

    /// The allowed number of requests for this API key has been exceeded.
    #[error("the allowed number of requests has been exceeded")]
    RequestsExceeded,

    /// The requested forecast horizon is not one the provider supports.
    #[error("unsupported forecast horizon {requested}, supported values are {supported:?}")]
    InvalidForecastHorizon {
        requested: u8,
        supported: &'static [u8],
    },

    /// Any other provider-side failure, carrying the HTTP status and body detail.
    #[error("invalid response from AccuWeather API: {status}")]
    Api { status: StatusCode, message: String },

    /// Transport-level failure from the injected HTTP client, passed through unchanged.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
