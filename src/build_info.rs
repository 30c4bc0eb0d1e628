//! Build metadata embedded at compile time by `build.rs`.

use std::fmt;
use std::sync::LazyLock;

/// Human readable product name shown in the About header
pub const APP_NAME: &str = "FlorisBoard";

/// Build date of this binary (yyyy-MM-ddThh:mm:ssZ)
pub const BUILD_DATE: &str = compile_time::datetime_str!();

/// Version of the running build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub name: String,
    pub code: u32,
}

static CURRENT: LazyLock<VersionInfo> = LazyLock::new(|| {
    VersionInfo::from_build_env(env!("FLORIS_VERSION_NAME"), env!("FLORIS_VERSION_CODE"))
});

impl VersionInfo {
    pub fn new(name: impl Into<String>, code: u32) -> Self {
        Self {
            name: name.into(),
            code,
        }
    }

    /// Version of the running build
    pub fn current() -> &'static VersionInfo {
        &CURRENT
    }

    fn from_build_env(name: &str, code: &str) -> Self {
        // build.rs only emits integer codes; a malformed value maps to 0
        let code = code.trim().parse().unwrap_or_else(|e| {
            tracing::warn!(code, %e, "Invalid FLORIS_VERSION_CODE, using 0");
            0
        });
        Self::new(name, code)
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
