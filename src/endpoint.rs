//! Request targets on the AccuWeather API and the query parameters each of
//! them takes.

use crate::accuweather::LatLon;
use crate::error::AccuWeatherError;
use crate::types::units::UnitSystem;

/// Production API endpoint; overridable per client for tests.
pub(crate) const DEFAULT_BASE_URL: &str = "https://dataservice.accuweather.com";

/// Forecast horizons the daily endpoint supports, in days.
pub(crate) const SUPPORTED_FORECAST_DAYS: &[u8] = &[1, 5, 10, 15];
/// Forecast horizons the hourly endpoint supports, in hours.
pub(crate) const SUPPORTED_FORECAST_HOURS: &[u8] = &[1, 12, 24];

/// One addressable operation on the remote API.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Endpoint<'a> {
    Geoposition {
        coordinates: LatLon,
    },
    CurrentConditions {
        location_key: &'a str,
    },
    DailyForecast {
        location_key: &'a str,
        days: u8,
        unit_system: UnitSystem,
    },
    HourlyForecast {
        location_key: &'a str,
        hours: u8,
        unit_system: UnitSystem,
    },
}

impl Endpoint<'_> {
    /// Full request URL for this endpoint under the given base URL.
    pub(crate) fn url(&self, base_url: &str) -> String {
        let path = match self {
            Endpoint::Geoposition { .. } => {
                "locations/v1/cities/geoposition/search".to_string()
            }
            Endpoint::CurrentConditions { location_key } => {
                format!("currentconditions/v1/{location_key}")
            }
            Endpoint::DailyForecast {
                location_key, days, ..
            } => format!("forecasts/v1/daily/{days}day/{location_key}"),
            Endpoint::HourlyForecast {
                location_key,
                hours,
                ..
            } => format!("forecasts/v1/hourly/{hours}hour/{location_key}"),
        };
        format!("{}/{}", base_url.trim_end_matches('/'), path)
    }

    /// Query parameters for this endpoint, credential and language included.
    pub(crate) fn query(&self, api_key: &str, language: &str) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("apikey", api_key.to_string()),
            ("language", language.to_string()),
        ];
        match self {
            Endpoint::Geoposition { coordinates } => {
                query.push(("q", format!("{},{}", coordinates.0, coordinates.1)));
            }
            Endpoint::CurrentConditions { .. } => {
                query.push(("details", "true".to_string()));
            }
            Endpoint::DailyForecast { unit_system, .. }
            | Endpoint::HourlyForecast { unit_system, .. } => {
                query.push(("details", "true".to_string()));
                query.push(("metric", unit_system.as_query_value().to_string()));
            }
        }
        query
    }
}

/// Rejects daily horizons the provider has no endpoint for.
pub(crate) fn validate_forecast_days(days: u8) -> Result<(), AccuWeatherError> {
    if SUPPORTED_FORECAST_DAYS.contains(&days) {
        Ok(())
    } else {
        Err(AccuWeatherError::InvalidForecastHorizon {
            requested: days,
            supported: SUPPORTED_FORECAST_DAYS,
        })
    }
}

/// Rejects hourly horizons the provider has no endpoint for.
pub(crate) fn validate_forecast_hours(hours: u8) -> Result<(), AccuWeatherError> {
    if SUPPORTED_FORECAST_HOURS.contains(&hours) {
        Ok(())
    } else {
        Err(AccuWeatherError::InvalidForecastHorizon {
            requested: hours,
            supported: SUPPORTED_FORECAST_HOURS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://dataservice.accuweather.com";

    #[test]
    fn geoposition_url_and_query() {
        let endpoint = Endpoint::Geoposition {
            coordinates: LatLon(52.0677904, 19.4795644),
        };

        assert_eq!(
            endpoint.url(BASE),
            "https://dataservice.accuweather.com/locations/v1/cities/geoposition/search"
        );
        assert_eq!(
            endpoint.query("test-key", "en-us"),
            vec![
                ("apikey", "test-key".to_string()),
                ("language", "en-us".to_string()),
                ("q", "52.0677904,19.4795644".to_string()),
            ]
        );
    }

    #[test]
    fn current_conditions_url_and_query() {
        let endpoint = Endpoint::CurrentConditions {
            location_key: "268068",
        };

        assert_eq!(
            endpoint.url(BASE),
            "https://dataservice.accuweather.com/currentconditions/v1/268068"
        );
        assert_eq!(
            endpoint.query("test-key", "pl-pl"),
            vec![
                ("apikey", "test-key".to_string()),
                ("language", "pl-pl".to_string()),
                ("details", "true".to_string()),
            ]
        );
    }

    #[test]
    fn forecast_urls_embed_horizon() {
        let daily = Endpoint::DailyForecast {
            location_key: "268068",
            days: 5,
            unit_system: UnitSystem::Metric,
        };
        assert_eq!(
            daily.url(BASE),
            "https://dataservice.accuweather.com/forecasts/v1/daily/5day/268068"
        );

        let hourly = Endpoint::HourlyForecast {
            location_key: "268068",
            hours: 12,
            unit_system: UnitSystem::Imperial,
        };
        assert_eq!(
            hourly.url(BASE),
            "https://dataservice.accuweather.com/forecasts/v1/hourly/12hour/268068"
        );
        assert!(hourly
            .query("k", "en-us")
            .contains(&("metric", "false".to_string())));
    }

    #[test]
    fn trailing_slash_in_base_url_is_tolerated() {
        let endpoint = Endpoint::CurrentConditions {
            location_key: "268068",
        };
        assert_eq!(
            endpoint.url("http://127.0.0.1:9000/"),
            "http://127.0.0.1:9000/currentconditions/v1/268068"
        );
    }

    #[test]
    fn supported_horizons_pass_validation() {
        for days in [1, 5, 10, 15] {
            assert!(validate_forecast_days(days).is_ok());
        }
        for hours in [1, 12, 24] {
            assert!(validate_forecast_hours(hours).is_ok());
        }
    }

    #[test]
    fn unsupported_horizons_are_rejected() {
        let error = validate_forecast_days(7).expect_err("7 days is unsupported");
        assert!(matches!(
            error,
            AccuWeatherError::InvalidForecastHorizon { requested: 7, .. }
        ));

        let error = validate_forecast_hours(6).expect_err("6 hours is unsupported");
        assert!(matches!(
            error,
            AccuWeatherError::InvalidForecastHorizon { requested: 6, .. }
        ));
    }
}
