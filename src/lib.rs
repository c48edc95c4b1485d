mod accuweather;
mod endpoint;
mod error;
mod response;
mod types;

pub use accuweather::*;
pub use error::AccuWeatherError;

pub use types::current_conditions::{CurrentConditions, Wind, WindGust};
pub use types::daily_forecast::{AirAndPollenIndex, DailyForecast, DayPart};
pub use types::hourly_forecast::HourlyForecast;
pub use types::location::Location;
pub use types::units::{DualMeasurement, ForecastWind, Measurement, MinMax, UnitSystem, WindDirection};
