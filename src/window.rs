use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::{Config, WindowBuilder};

use crate::assets::SETTINGS_STYLE;
use crate::build_info::APP_NAME;
use crate::config::WindowConfig;
use crate::theme::{resolve_theme, ResolvedTheme, Theme};

/// Create the settings window config
pub fn create_settings_window_config(window: &WindowConfig, theme: Theme) -> Config {
    let (width, height) = window.logical_size();
    Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title(format!("{APP_NAME} Settings"))
                .with_inner_size(LogicalSize::new(width, height)),
        )
        // Add style in config. Otherwise the style takes time to load and
        // the window appears unstyled for a brief moment.
        .with_custom_head(indoc::formatdoc! {r#"<link rel="stylesheet" href="{SETTINGS_STYLE}">"#})
        // Use a custom index to set the initial theme correctly
        .with_custom_index(build_custom_index(resolve_theme(theme)))
        .with_menu(None)
}

fn build_custom_index(theme: ResolvedTheme) -> String {
    indoc::formatdoc! {r#"
    <!DOCTYPE html>
    <html>
        <head>
            <title>{APP_NAME} Settings</title>
            <meta name="viewport" content="width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no">
            <!-- CUSTOM HEAD -->
        </head>
        <body data-theme="{theme}">
            <div id="main"></div>
            <!-- MODULE LOADER -->
        </body>
    </html>
    "#}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_custom_index_sets_theme() {
        let index = build_custom_index(ResolvedTheme::Dark);
        assert!(index.contains(r#"<body data-theme="dark">"#));
        assert!(index.contains("<!-- CUSTOM HEAD -->"));
        assert!(index.contains("<!-- MODULE LOADER -->"));
        assert!(index.contains(r#"<div id="main"></div>"#));
    }
}
