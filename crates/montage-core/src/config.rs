//! Editor tuning carried as plain data.

use crate::align::SnapConfig;
use crate::item::DEFAULT_ITEM_SIDE;
use serde::{Deserialize, Serialize};

/// Network policy for the fetch collaborators (overlay feed, remote images).
///
/// The core performs no I/O itself; collaborator implementations read these
/// values when issuing requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Retries after a failed download.
    pub max_retries: u32,
    /// Delay between retries in seconds.
    pub retry_interval_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            max_retries: 2,
            retry_interval_secs: 3,
        }
    }
}

/// Top-level editor configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Alignment engine tuning.
    pub snap: SnapConfig,
    /// Side of the square newly added images are fitted into, canvas units.
    pub default_item_side: f64,
    /// Network policy handed to fetch collaborators.
    pub fetch: FetchConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            snap: SnapConfig::default(),
            default_item_side: DEFAULT_ITEM_SIDE,
            fetch: FetchConfig::default(),
        }
    }
}
