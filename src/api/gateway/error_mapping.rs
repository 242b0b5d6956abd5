//! Error mapping helpers for the HTTP dashboard gateway.

use http::StatusCode;

use crate::api::error::DashboardError;

use super::Endpoint;

/// Checks if a response status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

pub(super) fn map_transport_error(endpoint: Endpoint, error: &reqwest::Error) -> DashboardError {
    if error.is_decode() {
        return DashboardError::Decode {
            message: format!("{endpoint} response could not be decoded: {error}"),
        };
    }

    if error.is_timeout() {
        return DashboardError::Network {
            message: format!("{endpoint} request timed out: {error}"),
        };
    }

    DashboardError::Network {
        message: format!("{endpoint} request failed: {error}"),
    }
}

pub(super) fn map_http_error(
    endpoint: Endpoint,
    status: StatusCode,
    maybe_message: Option<String>,
) -> DashboardError {
    let message = maybe_message.unwrap_or_else(|| "unknown error".to_owned());
    if is_auth_failure(status) {
        DashboardError::Authentication {
            message: format!("{endpoint} request failed: backend returned {status} {message}"),
        }
    } else {
        DashboardError::Api {
            message: format!("{endpoint} request failed with status {status}: {message}"),
        }
    }
}

/// Pulls a human-readable message out of a JSON error body.
///
/// Backends commonly use either `message` or `error` for the detail.
pub(super) fn extract_error_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        let trimmed = body.trim();
        return (!trimmed.is_empty()).then(|| truncate_for_message(trimmed, 160));
    };
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .map(ToOwned::to_owned)
}

fn truncate_for_message(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
