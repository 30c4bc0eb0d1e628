use serde::{Deserialize, Serialize};
use std::fmt;

pub use dioxus_sdk_window::theme::Theme as DioxusTheme;

/// Theme preference as stored in the config
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Auto,
    Light,
    Dark,
}

/// Concrete theme after `Auto` has been resolved against the system
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl fmt::Display for ResolvedTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedTheme::Light => write!(f, "light"),
            ResolvedTheme::Dark => write!(f, "dark"),
        }
    }
}

impl From<DioxusTheme> for ResolvedTheme {
    fn from(theme: DioxusTheme) -> Self {
        match theme {
            DioxusTheme::Light => ResolvedTheme::Light,
            DioxusTheme::Dark => ResolvedTheme::Dark,
        }
    }
}

impl Theme {
    /// Resolve against an already known system theme (`None` when unknown)
    pub fn resolve_with(self, system: Option<ResolvedTheme>) -> ResolvedTheme {
        match self {
            Theme::Auto => system.unwrap_or_default(),
            Theme::Light => ResolvedTheme::Light,
            Theme::Dark => ResolvedTheme::Dark,
        }
    }
}

/// Resolve a theme preference by querying the OS for `Auto`
pub fn resolve_theme(theme: Theme) -> ResolvedTheme {
    theme.resolve_with(detect_system_theme())
}

fn detect_system_theme() -> Option<ResolvedTheme> {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => Some(ResolvedTheme::Dark),
        Ok(dark_light::Mode::Light) => Some(ResolvedTheme::Light),
        Ok(dark_light::Mode::Unspecified) => None,
        Err(e) => {
            tracing::debug!(%e, "Failed to detect system theme");
            None
        }
    }
}
