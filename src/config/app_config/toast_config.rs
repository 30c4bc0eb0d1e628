use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default time a toast stays visible
pub const DEFAULT_TOAST_DURATION_MS: u64 = 2000;

fn default_duration_ms() -> u64 {
    DEFAULT_TOAST_DURATION_MS
}

/// Configuration for transient notifications
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastConfig {
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

impl ToastConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
        }
    }
}
