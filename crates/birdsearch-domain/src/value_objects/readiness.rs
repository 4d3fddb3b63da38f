//! Service readiness lifecycle
//!
//! ```text
//! Uninitialized ──initialize──▶ Initializing ──ok──▶ Ready
//!                                     │
//!                                     └──error──▶ Failed ──initialize──▶ Initializing
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Readiness of the search service
///
/// The discriminants are stable so the state can live in an atomic cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum ReadinessState {
    /// No initialization has been attempted
    Uninitialized = 0,
    /// Records are being loaded and embedded
    Initializing = 1,
    /// The index is published and searches are accepted
    Ready = 2,
    /// The last initialization attempt failed
    Failed = 3,
}

impl ReadinessState {
    /// Numeric representation for atomic storage
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Decode the numeric representation; unknown values map to `Failed`
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Uninitialized,
            1 => Self::Initializing,
            2 => Self::Ready,
            _ => Self::Failed,
        }
    }

    /// Whether searches are accepted in this state
    pub fn is_ready(self) -> bool {
        self == Self::Ready
    }

    /// Whether a new initialization attempt may start from this state
    pub fn can_start_initialization(self) -> bool {
        matches!(self, Self::Uninitialized | Self::Failed)
    }

    /// Lowercase name for logs and diagnostics
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Initializing => "initializing",
            Self::Ready => "ready",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for ReadinessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
