use serde::{Deserialize, Serialize};

/// Default settings window width in logical pixels
pub const DEFAULT_WINDOW_WIDTH: f64 = 480.0;

/// Default settings window height in logical pixels
pub const DEFAULT_WINDOW_HEIGHT: f64 = 720.0;

const MIN_WINDOW_DIMENSION: f64 = 320.0;

/// Initial size of the settings window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
}

impl WindowConfig {
    /// Size clamped to a usable minimum; non-finite values fall back to defaults
    pub fn logical_size(&self) -> (f64, f64) {
        fn sanitize(value: f64, default: f64) -> f64 {
            if value.is_finite() {
                value.max(MIN_WINDOW_DIMENSION)
            } else {
                default
            }
        }
        (
            sanitize(self.width, DEFAULT_WINDOW_WIDTH),
            sanitize(self.height, DEFAULT_WINDOW_HEIGHT),
        )
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_size_clamps_small_values() {
        let config = WindowConfig {
            width: 100.0,
            height: 1000.0,
        };
        assert_eq!(config.logical_size(), (MIN_WINDOW_DIMENSION, 1000.0));
    }

    #[test]
    fn test_logical_size_non_finite_falls_back() {
        let config = WindowConfig {
            width: f64::NAN,
            height: f64::INFINITY,
        };
        assert_eq!(
            config.logical_size(),
            (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT)
        );
    }
}
