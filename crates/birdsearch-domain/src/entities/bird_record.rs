//! Bird Species Record
//!
//! The unit of the searchable corpus. Each record renders two text
//! projections: a human-readable summary returned with search results, and
//! a prose description used only as embedding input.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::PRESENCE_RESIDENT_CODE;

/// Seasonal presence of a species, decoded from its short code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    /// Breeds locally all year round (code `R`)
    Resident,
    /// Any other code; the species only visits during winter
    WinterVisitor,
}

impl Presence {
    /// Decode a presence code
    pub fn from_code(code: &str) -> Self {
        if code == PRESENCE_RESIDENT_CODE {
            Self::Resident
        } else {
            Self::WinterVisitor
        }
    }

    /// Prose description used in the searchable text
    pub fn description(self) -> &'static str {
        match self {
            Self::Resident => "resident species that breeds in India",
            Self::WinterVisitor => "winter visitor migratory species",
        }
    }
}

/// Entity: Bird Species Record
///
/// Immutable flat record loaded from the record source. The `presence`
/// field keeps the raw code as it appeared in the source; use
/// [`BirdRecord::presence_kind`] for the decoded value.
///
/// ## Example
///
/// ```rust
/// use birdsearch_domain::BirdRecord;
///
/// let record = BirdRecord::new("Indian Peafowl", "Pavo cristatus", "R", "Galliformes", "Phasianidae");
/// assert_eq!(
///     record.full_text(),
///     "Indian Peafowl (Pavo cristatus) - R - Order: Galliformes, Family: Phasianidae"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirdRecord {
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
}

impl BirdRecord {
    /// Create a new record
    pub fn new(
        name: impl Into<String>,
        scientific_name: impl Into<String>,
        presence: impl Into<String>,
        order: impl Into<String>,
        family: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            scientific_name: scientific_name.into(),
            presence: presence.into(),
            order: order.into(),
            family: family.into(),
        }
    }

    /// Whether the record carries a usable name; blank names are dropped at ingestion
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Decoded presence
    pub fn presence_kind(&self) -> Presence {
        Presence::from_code(&self.presence)
    }

    /// Human-readable summary returned with search results
    pub fn full_text(&self) -> String {
        format!(
            "{} ({}) - {} - Order: {}, Family: {}",
            self.name, self.scientific_name, self.presence, self.order, self.family
        )
    }

    /// Prose description fed to the embedding provider
    pub fn searchable_text(&self) -> String {
        format!(
            "{}, scientific name {}, {}, belongs to order {} and family {}",
            self.name,
            self.scientific_name,
            self.presence_kind().description(),
            self.order,
            self.family
        )
    }
}

impl fmt::Display for BirdRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.scientific_name)
    }
}
