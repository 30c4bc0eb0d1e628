use serde::{Deserialize, Serialize};

/// Default number of entries kept in the in-app clipboard history
pub const DEFAULT_CLIPBOARD_HISTORY_MAX_ITEMS: usize = 20;

fn default_max_items() -> usize {
    DEFAULT_CLIPBOARD_HISTORY_MAX_ITEMS
}

/// Configuration for the in-app clipboard history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipboardHistoryConfig {
    /// Oldest entries are dropped once this many are stored
    #[serde(default = "default_max_items")]
    pub max_items: usize,
}

impl Default for ClipboardHistoryConfig {
    fn default() -> Self {
        Self {
            max_items: default_max_items(),
        }
    }
}
