//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from API providers and
//! blob downloads. These are shared utilities, not ports.

use birdsearch_domain::error::{Error, Result};
use reqwest::{Response, StatusCode};

/// Describe a non-success status the same way for every caller
fn describe_status(status: StatusCode) -> String {
    let code = status.as_u16();
    match code {
        401 | 403 => "authentication failed".to_string(),
        404 => "resource not found".to_string(),
        429 => "rate limit exceeded".to_string(),
        500..=599 => format!("server error ({code})"),
        _ => format!("request failed ({code})"),
    }
}

async fn error_body(response: Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string())
}

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON from an embedding endpoint
    ///
    /// Failures are reported as embedding errors naming `provider_name`.
    pub async fn check_and_parse(
        response: Response,
        provider_name: &str,
    ) -> Result<serde_json::Value> {
        let status = response.status();

        if !status.is_success() {
            let context = describe_status(status);
            let details = error_body(response).await;
            return Err(Error::embedding(format!(
                "{provider_name} {context}: {details}"
            )));
        }

        response.json().await.map_err(|e| {
            Error::embedding(format!("{provider_name} response parse failed: {e}"))
        })
    }

    /// Check response status and read the body as bytes
    ///
    /// Failures are reported as network errors naming `source_name`.
    pub async fn check_and_read(response: Response, source_name: &str) -> Result<Vec<u8>> {
        let status = response.status();

        if !status.is_success() {
            let context = describe_status(status);
            let details = error_body(response).await;
            return Err(Error::network(format!(
                "{source_name} {context}: {details}"
            )));
        }

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| Error::network_with_source(format!("{source_name} body read failed"), e))
    }
}
