pub mod current_conditions;
pub mod daily_forecast;
pub mod hourly_forecast;
pub mod location;
pub mod units;
