//! Recycle-bin retention configuration.

use serde::{Deserialize, Serialize};

/// Recycle-bin configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecycleBinConfig {
    /// How long a soft-deleted loan stays restorable, in hours.
    #[serde(default = "default_restore_window_hours")]
    pub restore_window_hours: i64,
}

impl Default for RecycleBinConfig {
    fn default() -> Self {
        Self {
            restore_window_hours: default_restore_window_hours(),
        }
    }
}

fn default_restore_window_hours() -> i64 {
    24
}
