//! Response interpreter: maps a raw `HttpResponse` onto `Result<T, ApiError>`.
//!
//! Any 2xx is success. 404 is `ItemNotFound`, every other status is
//! `UnknownApiError(status)`. Decoding only happens after the status check,
//! so an error body is never parsed as a payload.

use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};
use crate::http::HttpResponse;

/// Map non-success status codes to the appropriate `ApiError` variant.
pub fn check_status(response: &HttpResponse) -> Result<()> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::ItemNotFound);
    }
    Err(ApiError::UnknownApiError(response.status))
}

/// Check the status, then decode the JSON body into `T`.
pub fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T> {
    check_status(&response)?;
    let body = response
        .body
        .ok_or_else(|| ApiError::Deserialization("empty response body".to_string()))?;
    serde_json::from_str(&body).map_err(|e| {
        tracing::warn!(status = response.status, error = %e, "response body did not match expected shape");
        ApiError::Deserialization(e.to_string())
    })
}

/// Check the status of a response that carries no payload of interest.
pub fn expect_no_content(response: HttpResponse) -> Result<()> {
    check_status(&response)
}
