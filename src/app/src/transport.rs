//! Transport adapter for the device API
//!
//! Turns whatever comes back from the shell for an HTTP effect into either
//! the expected payload or a [`TransportError`]. Nothing past this module
//! sees a raw status code or an unparsed body.

use crux_http::Response;
use serde::de::DeserializeOwned;

use crate::types::TransportError;

/// Base URL for device API endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` requires
/// absolute URLs and rejects relative paths (`RelativeUrlWithoutBase` error).
/// The shell strips this prefix before sending requests via `fetch()`, so the
/// request goes to the device that served the page.
pub const BASE_URL: &str = "https://relative";

/// Constructs the full address from a base and an endpoint.
///
/// # Example
/// ```
/// use wifi_provisioning_core::transport::{build_url, BASE_URL};
/// let url = build_url(BASE_URL, "/scan");
/// assert_eq!(url, "https://relative/scan");
/// ```
pub fn build_url(base: &str, endpoint: &str) -> String {
    format!("{}{endpoint}", base.trim_end_matches('/'))
}

/// Map an error from the HTTP round-trip.
///
/// `crux_http` reports 4xx/5xx as `HttpError::Http`, so that is where the
/// device's status code arrives. Fetch rejections, timeouts and bad URLs
/// mean the device could not be reached.
pub fn map_http_error(action: &str, error: crux_http::HttpError) -> TransportError {
    match error {
        crux_http::HttpError::Http { code, .. } => {
            let status = u16::from(code);
            log::warn!("{action}: device responded with HTTP {status}");
            TransportError::HttpStatus(status)
        }
        crux_http::HttpError::Json(detail) => {
            log::warn!("{action}: JSON error: {detail}");
            TransportError::MalformedResponse(detail)
        }
        e @ (crux_http::HttpError::Url(_)
        | crux_http::HttpError::Io(_)
        | crux_http::HttpError::Timeout) => {
            log::warn!("{action}: request failed: {e}");
            TransportError::Unreachable(e.to_string())
        }
    }
}

/// Classify status and body of a completed round-trip.
///
/// Non-2xx is `HttpStatus`; an empty body or one that does not deserialize
/// into `T` is `MalformedResponse`.
pub fn parse_json_body<T: DeserializeOwned>(
    action: &str,
    status: u16,
    body: Option<Vec<u8>>,
) -> Result<T, TransportError> {
    if !(200..300).contains(&status) {
        log::warn!("{action}: device responded with HTTP {status}");
        return Err(TransportError::HttpStatus(status));
    }

    match body {
        Some(body) if !body.is_empty() => decode_json(action, &body),
        _ => {
            log::warn!("{action}: empty response body");
            Err(TransportError::MalformedResponse(
                "empty response body".to_string(),
            ))
        }
    }
}

/// Deserialize a non-empty body.
///
/// The scan may report raw SSID bytes that are not valid UTF-8. Those are
/// decoded lossily instead of rejecting the whole body.
fn decode_json<T: DeserializeOwned>(action: &str, body: &[u8]) -> Result<T, TransportError> {
    let parsed = match std::str::from_utf8(body) {
        Ok(text) => serde_json::from_str(text),
        Err(e) => {
            log::warn!("{action}: body is not valid UTF-8 ({e}), decoding lossily");
            serde_json::from_str(&String::from_utf8_lossy(body))
        }
    };

    parsed.map_err(|e| {
        log::warn!(
            "{action}: JSON parse error: {e}. Body: {}",
            String::from_utf8_lossy(body)
        );
        TransportError::MalformedResponse(format!("JSON parse error: {e}"))
    })
}

/// Parse JSON from a response.
pub fn parse_json_response<T: DeserializeOwned>(
    action: &str,
    response: &mut Response<Vec<u8>>,
) -> Result<T, TransportError> {
    let status = u16::from(response.status());
    parse_json_body(action, status, response.take_body())
}

/// Process HTTP response result and parse JSON
pub fn process_json_response<T: DeserializeOwned>(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, TransportError> {
    match result {
        Ok(mut response) => parse_json_response(action, &mut response),
        Err(e) => Err(map_http_error(action, e)),
    }
}
