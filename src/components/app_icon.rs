use dioxus::prelude::*;

use crate::app_icon::{app_icon_data_url, APP_ICON_DISPLAY_SIZE, APP_ICON_LABEL};
use crate::state::SettingsState;

/// App icon for the current theme; renders nothing if the icon cannot be resolved
#[component]
pub fn AppIcon() -> Element {
    let state = use_context::<SettingsState>();
    let theme = *state.theme.read();

    let Some(src) = app_icon_data_url(theme) else {
        return rsx! {};
    };

    rsx! {
        img {
            class: "about-icon",
            src: "{src}",
            alt: APP_ICON_LABEL,
            width: "{APP_ICON_DISPLAY_SIZE}",
            height: "{APP_ICON_DISPLAY_SIZE}",
        }
    }
}
