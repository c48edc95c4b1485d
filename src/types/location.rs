//! The provider-assigned location identity a client resolves coordinates to.

use serde::Deserialize;

/// A resolved AccuWeather location.
///
/// Every data endpoint is keyed by the provider-assigned `key`. The
/// localized display `name` is only known when the location was resolved
/// through a geoposition lookup; constructing a client with an explicit
/// location key leaves it `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub key: String,
    pub name: Option<String>,
}

/// Wire shape of a geoposition search result.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct LocationResponse {
    pub(crate) key: String,
    pub(crate) localized_name: String,
}
