use dioxus::prelude::*;

/// Stylesheet of the settings window
pub const SETTINGS_STYLE: Asset = asset!("/assets/settings.css");

/// Tabler icon sprite referenced by `Icon`
pub const TABLER_SPRITE: Asset = asset!("/assets/icons/tabler-sprite.svg");
