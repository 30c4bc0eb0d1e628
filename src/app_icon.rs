//! Themed app icon bitmaps.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::theme::ResolvedTheme;
use crate::utils::image::{rasterize_square_png, to_data_url};

/// Display size of the app icon in the About header (CSS pixels)
pub const APP_ICON_DISPLAY_SIZE: u32 = 64;

/// Rasterize at 2x so the icon stays crisp on high-density displays
const APP_ICON_RASTER_SCALE: u32 = 2;

/// Accessibility label of the app icon
pub const APP_ICON_LABEL: &str = "FlorisBoard App Icon";

const APP_ICON_LIGHT: &[u8] = include_bytes!("../assets/icons/app-icon-light.png");
const APP_ICON_DARK: &[u8] = include_bytes!("../assets/icons/app-icon-dark.png");

/// Rasterized icons keyed by theme and pixel size; `None` caches a failed resolution
static ICON_CACHE: LazyLock<Mutex<HashMap<(ResolvedTheme, u32), Option<String>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Encoded icon resource for `theme`
fn icon_resource(theme: ResolvedTheme) -> &'static [u8] {
    match theme {
        ResolvedTheme::Light => APP_ICON_LIGHT,
        ResolvedTheme::Dark => APP_ICON_DARK,
    }
}

/// Resolve `resource` into a square PNG data URL of `size` pixels
fn resolve_icon(resource: &[u8], size: u32) -> Option<String> {
    match rasterize_square_png(resource, size) {
        Ok(png) => Some(to_data_url("image/png", &png)),
        Err(e) => {
            tracing::debug!(?e, size, "Failed to resolve app icon");
            None
        }
    }
}

/// App icon for `theme` as a data URL, or `None` if it cannot be resolved
pub fn app_icon_data_url(theme: ResolvedTheme) -> Option<String> {
    let size = APP_ICON_DISPLAY_SIZE * APP_ICON_RASTER_SCALE;
    ICON_CACHE
        .lock()
        .entry((theme, size))
        .or_insert_with(|| resolve_icon(icon_resource(theme), size))
        .clone()
}
