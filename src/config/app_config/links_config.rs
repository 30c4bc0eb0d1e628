use serde::{Deserialize, Serialize};

/// External links opened from the About screen
///
/// `{}` placeholders are substituted positionally when the URL is launched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinksConfig {
    /// Release notes, `{}` is replaced with the version name
    pub changelog_url: String,
    pub repository_url: String,
    pub privacy_policy_url: String,
    /// Full text of the project license
    pub license_text_url: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            changelog_url: "https://github.com/florisboard/florisboard/releases/tag/v{}"
                .to_string(),
            repository_url: "https://github.com/florisboard/florisboard".to_string(),
            privacy_policy_url:
                "https://github.com/florisboard/florisboard/blob/master/PRIVACY-POLICY.md"
                    .to_string(),
            license_text_url: "https://www.apache.org/licenses/LICENSE-2.0".to_string(),
        }
    }
}
