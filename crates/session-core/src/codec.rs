//! Response classification and decoding
//!
//! Status codes 200-299 classify as success; everything else is an operation
//! rejection whose status is preserved for diagnostics. An empty body on a
//! successful response is "no content", never a decode error. A body on a
//! successful response that fails to decode is a transport-class fault and
//! surfaces as `Err`.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::SessionResult;

/// Outcome of a decoded API response
pub(crate) enum ApiOutcome<T> {
    /// 2xx with a decoded body
    Success(T),
    /// 2xx with an empty body
    NoContent,
    /// Non-2xx; the request was well-formed but rejected
    Rejected(StatusCode),
}

/// Read a JSON-bodied response into `T`.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: Response,
) -> SessionResult<ApiOutcome<T>> {
    let status = response.status();
    if !status.is_success() {
        log_rejection(status, response).await;
        return Ok(ApiOutcome::Rejected(status));
    }
    let body = response.text().await?;
    if body.trim().is_empty() {
        return Ok(ApiOutcome::NoContent);
    }
    Ok(ApiOutcome::Success(serde_json::from_str(&body)?))
}

/// Read a response where only the success classification matters.
pub(crate) async fn read_ack(response: Response) -> SessionResult<bool> {
    let status = response.status();
    if status.is_success() {
        Ok(true)
    } else {
        log_rejection(status, response).await;
        Ok(false)
    }
}

async fn log_rejection(status: StatusCode, response: Response) {
    tracing::warn!(
        "HTTP request failed: {} ({})",
        status.canonical_reason().unwrap_or("unknown"),
        status.as_u16()
    );
    let body = response.text().await.unwrap_or_default();
    if !body.is_empty() {
        tracing::debug!("Error response body: {}", body);
    }
}
