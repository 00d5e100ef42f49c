//! Fetch layer for the share endpoint.

use contracts::{ShareRequest, ShareResponse};
use gloo_net::http::Request;

/// POST the share payload to the configured endpoint.
///
/// Any transport, status or decode problem comes back as a `String` for the
/// console log; the caller maps all of them onto the single user-facing
/// failure state. No timeout: the future settles when the network does.
pub async fn create_share(endpoint: &str, request: &ShareRequest) -> Result<ShareResponse, String> {
    let response = Request::post(endpoint)
        .header("Accept", "application/json")
        .json(request)
        .map_err(|e| format!("Failed to encode share request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
