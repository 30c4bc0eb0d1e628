use serde::{Deserialize, Serialize};

/// Identifier this keyboard registers under with the desktop input method framework
pub const DEFAULT_INPUT_METHOD_ID: &str = "florisboard";

/// Configuration for input method detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputMethodConfig {
    /// Compared case-insensitively against the active input method
    pub id: String,
}

impl Default for InputMethodConfig {
    fn default() -> Self {
        Self {
            id: DEFAULT_INPUT_METHOD_ID.to_string(),
        }
    }
}
