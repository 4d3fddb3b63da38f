//! Common helpers for embedding providers
//!
//! Shared functionality used by the HTTP embedding providers.

use std::time::Duration;

use birdsearch_domain::error::{Error, Result};
use birdsearch_domain::value_objects::Embedding;

use crate::constants::ERROR_MSG_REQUEST_TIMEOUT;

/// Common constructor patterns used by embedding providers
pub mod constructor {
    /// Normalize an API key, treating blank keys as absent
    pub fn validate_api_key(api_key: Option<String>) -> Option<String> {
        api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
    }

    /// Normalize a base URL: trimmed, without trailing slashes
    pub fn validate_url(url: &str) -> String {
        url.trim().trim_end_matches('/').to_string()
    }

    /// Get effective URL with fallback to default
    pub fn get_effective_url(provided_url: Option<&str>, default_url: &str) -> String {
        provided_url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map_or_else(|| validate_url(default_url), validate_url)
    }
}

/// Map a transport failure into an embedding error
pub fn request_error(provider_name: &str, timeout: Duration, e: &reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::embedding(format!(
            "{provider_name} {ERROR_MSG_REQUEST_TIMEOUT} {timeout:?}"
        ))
    } else {
        Error::embedding(format!("{provider_name} HTTP request failed: {e}"))
    }
}

/// Parse the `data[]` array of an OpenAI-compatible embeddings response
///
/// Items are placed by their `index` field when present, otherwise by
/// position. The number of items must match `expected`.
pub fn parse_embedding_data(
    response: &serde_json::Value,
    expected: usize,
    model: &str,
) -> Result<Vec<Embedding>> {
    let data = response["data"]
        .as_array()
        .ok_or_else(|| Error::embedding("Invalid response format: missing data array"))?;

    if data.len() != expected {
        return Err(Error::embedding(format!(
            "Response data count mismatch: expected {expected}, got {}",
            data.len()
        )));
    }

    let mut slots: Vec<Option<Embedding>> = vec![None; expected];
    for (position, item) in data.iter().enumerate() {
        let index = item["index"]
            .as_u64()
            .and_then(|i| usize::try_from(i).ok())
            .unwrap_or(position);
        let slot = slots.get_mut(index).ok_or_else(|| {
            Error::embedding(format!("Embedding index {index} out of range"))
        })?;
        *slot = Some(parse_vector(index, item, model)?);
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(i, slot)| {
            slot.ok_or_else(|| Error::embedding(format!("Missing embedding for text {i}")))
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation)]
fn parse_vector(index: usize, item: &serde_json::Value, model: &str) -> Result<Embedding> {
    let values = item["embedding"]
        .as_array()
        .ok_or_else(|| Error::embedding(format!("Invalid embedding format for text {index}")))?;

    let vector = values
        .iter()
        .map(|v| {
            let value = v.as_f64().map(|f| f as f32).ok_or_else(|| {
                Error::embedding(format!("Non-numeric embedding value for text {index}"))
            })?;
            // Values beyond the f32 range overflow to infinity
            if !value.is_finite() {
                return Err(Error::embedding(format!(
                    "Non-finite embedding value for text {index}"
                )));
            }
            Ok(value)
        })
        .collect::<Result<Vec<f32>>>()?;

    Ok(Embedding::new(vector, model))
}
