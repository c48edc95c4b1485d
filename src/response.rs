//! Classification of API responses into success or a typed failure, plus
//! extraction of the request-quota metadata every response carries.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::AccuWeatherError;

/// Header the provider reports the remaining request quota in.
pub(crate) const RATE_LIMIT_REMAINING: &str = "RateLimit-Remaining";

/// Exact sentence the provider puts in error bodies once the quota is spent.
pub(crate) const REQUESTS_EXCEEDED_MESSAGE: &str =
    "The allowed number of requests has been exceeded.";

const MAX_SNIPPET_CHARS: usize = 200;

/// Error body shape used by the provider for non-success responses.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ApiErrorBody {
    message: Option<String>,
}

/// Decides, from status and body, whether a response is a success or which
/// typed error it maps to. Pure; transport failures never reach this point.
pub(crate) fn classify_response(status: StatusCode, body: &str) -> Result<(), AccuWeatherError> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(AccuWeatherError::InvalidApiKey);
    }
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(AccuWeatherError::RequestsExceeded);
    }
    if status.is_success() {
        return Ok(());
    }

    // The provider reports quota exhaustion under varying status codes; the
    // body message is the reliable signal.
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(ApiErrorBody {
            message: Some(message),
        }) => {
            if message == REQUESTS_EXCEEDED_MESSAGE {
                Err(AccuWeatherError::RequestsExceeded)
            } else {
                Err(AccuWeatherError::Api { status, message })
            }
        }
        _ => Err(AccuWeatherError::Api {
            status,
            message: snippet(body),
        }),
    }
}

/// Remaining request quota from the response headers, if reported.
pub(crate) fn requests_remaining(headers: &HeaderMap) -> Option<u32> {
    headers
        .get(RATE_LIMIT_REMAINING)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

fn snippet(body: &str) -> String {
    if body.chars().count() > MAX_SNIPPET_CHARS {
        let truncated: String = body.chars().take(MAX_SNIPPET_CHARS).collect();
        format!("{truncated}...")
    } else {
        body.to_string()
    }
}
