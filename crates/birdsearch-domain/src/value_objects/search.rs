//! Search-Related Value Objects

use serde::{Deserialize, Serialize};

use crate::entities::BirdRecord;

/// Value Object: Ranked Search Result
///
/// A record from the corpus together with its similarity to the query.
/// Serialized in camelCase because it is returned verbatim by the HTTP API.
///
/// ## Business Rules
///
/// - Score is the cosine similarity between query and record (higher is better)
/// - Content is the record's human-readable summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Common name
    pub name: String,
    /// Binomial name
    pub scientific_name: String,
    /// Raw presence code
    pub presence: String,
    /// Taxonomic order
    pub order: String,
    /// Taxonomic family
    pub family: String,
    /// Cosine similarity in `[-1, 1]`
    pub score: f64,
    /// Human-readable summary of the record
    pub content: String,
}

impl SearchResult {
    /// Build a result from a ranked record
    pub fn from_record(record: &BirdRecord, score: f64) -> Self {
        Self {
            name: record.name.clone(),
            scientific_name: record.scientific_name.clone(),
            presence: record.presence.clone(),
            order: record.order.clone(),
            family: record.family.clone(),
            score,
            content: record.full_text(),
        }
    }
}
