use serde::{Deserialize, Serialize};

mod clipboard_history_config;
mod input_method_config;
mod links_config;
mod toast_config;
mod window_config;

pub use clipboard_history_config::ClipboardHistoryConfig;
pub use input_method_config::InputMethodConfig;
pub use links_config::LinksConfig;
pub use toast_config::ToastConfig;
pub use window_config::WindowConfig;

use crate::theme::Theme;

/// Global application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub theme: Theme,
    pub links: LinksConfig,
    pub input_method: InputMethodConfig,
    pub clipboard_history: ClipboardHistoryConfig,
    pub toast: ToastConfig,
    pub window: WindowConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.theme, Theme::Auto);

        // Links defaults
        assert_eq!(
            config.links.repository_url,
            "https://github.com/florisboard/florisboard"
        );
        assert!(config.links.changelog_url.contains("{}"));

        // Input method defaults
        assert_eq!(config.input_method.id, "florisboard");

        // Clipboard history defaults
        assert_eq!(config.clipboard_history.max_items, 20);

        // Toast defaults
        assert_eq!(config.toast.duration_ms, 2000);

        // Window defaults
        assert_eq!(config.window.width, 480.0);
        assert_eq!(config.window.height, 720.0);
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let json = r#"{ "theme": "dark", "toast": { "durationMs": 500 } }"#;
        let parsed: Config = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.theme, Theme::Dark);
        assert_eq!(parsed.toast.duration_ms, 500);
        assert_eq!(parsed.input_method, InputMethodConfig::default());
        assert_eq!(parsed.links, LinksConfig::default());
    }

    #[test]
    fn test_config_partial_window_section_keeps_other_sections() {
        let json = r#"{ "theme": "dark", "window": { "width": 600 } }"#;
        let parsed: Config = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.theme, Theme::Dark);
        assert_eq!(parsed.window.width, 600.0);
        assert_eq!(parsed.window.height, WindowConfig::default().height);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = Config {
            theme: Theme::Light,
            links: LinksConfig {
                changelog_url: "https://example.com/changes/{}".to_string(),
                ..LinksConfig::default()
            },
            input_method: InputMethodConfig {
                id: "custom-ime".to_string(),
            },
            clipboard_history: ClipboardHistoryConfig { max_items: 5 },
            toast: ToastConfig { duration_ms: 3500 },
            window: WindowConfig {
                width: 600.0,
                height: 900.0,
            },
        };

        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains("\"clipboardHistory\""));
        assert!(json.contains("\"maxItems\""));

        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
