//! Record source configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DOWNLOAD_TIMEOUT_SECS, DEFAULT_RECORD_SOURCE_PROVIDER};

/// Record source configuration
///
/// Which fields are required depends on `provider`:
///
/// | Provider | Required |
/// |----------|----------|
/// | `blob` | `url`, `container_name`, `file_name` (`sas_token` optional) |
/// | `file` | `path` |
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RecordSourceConfig {
    /// Source kind (`blob` or `file`)
    pub provider: String,

    /// Blob service base URL, e.g. `https://account.blob.core.windows.net`
    pub url: Option<String>,

    /// Blob container holding the corpus
    pub container_name: Option<String>,

    /// Blob name of the corpus CSV
    pub file_name: Option<String>,

    /// Shared access signature appended to the blob URL
    pub sas_token: Option<String>,

    /// Local CSV path for the `file` provider
    pub path: Option<PathBuf>,

    /// Download timeout in seconds
    pub timeout_secs: u64,
}

impl Default for RecordSourceConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_RECORD_SOURCE_PROVIDER.to_string(),
            url: None,
            container_name: None,
            file_name: None,
            sas_token: None,
            path: None,
            timeout_secs: DEFAULT_DOWNLOAD_TIMEOUT_SECS,
        }
    }
}
