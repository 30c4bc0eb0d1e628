//! External links and the URL launcher used to open them.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::LinksConfig;

/// Characters escaped when an argument is substituted into a URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

const PLACEHOLDER: &str = "{}";

/// A named external link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlResource {
    /// Release notes of a version, takes the version name as argument
    Changelog,
    Repository,
    PrivacyPolicy,
    ProjectLicenseText,
}

impl UrlResource {
    /// URL template for this resource
    pub fn template(self, links: &LinksConfig) -> &str {
        match self {
            UrlResource::Changelog => &links.changelog_url,
            UrlResource::Repository => &links.repository_url,
            UrlResource::PrivacyPolicy => &links.privacy_policy_url,
            UrlResource::ProjectLicenseText => &links.license_text_url,
        }
    }
}

/// Substitute `{}` placeholders in `template` with `args` in order
///
/// Arguments are percent-encoded. Placeholders without an argument become
/// empty, surplus arguments are ignored.
pub fn format_url(template: &str, args: &[&str]) -> String {
    let mut args = args.iter();
    let mut parts = template.split(PLACEHOLDER);
    let mut url = parts.next().unwrap_or_default().to_string();
    for part in parts {
        if let Some(arg) = args.next() {
            url.extend(utf8_percent_encode(arg, PATH_SEGMENT));
        }
        url.push_str(part);
    }
    url
}

/// Opens external URLs
pub trait UrlLauncher {
    /// Open a configured resource, substituting `args` into its template
    fn launch_url(&self, resource: UrlResource, args: &[&str]);

    /// Open a literal URL
    fn open_url(&self, url: &str);
}

/// Opens URLs in the system browser
#[derive(Debug, Clone)]
pub struct OpenUrlLauncher {
    links: LinksConfig,
}

impl OpenUrlLauncher {
    pub fn new(links: LinksConfig) -> Self {
        Self { links }
    }
}

impl UrlLauncher for OpenUrlLauncher {
    fn launch_url(&self, resource: UrlResource, args: &[&str]) {
        let url = format_url(resource.template(&self.links), args);
        self.open_url(&url);
    }

    fn open_url(&self, url: &str) {
        tracing::info!(%url, "Opening external URL");
        if let Err(e) = open::that(url) {
            tracing::error!(%e, %url, "Failed to open URL");
        }
    }
}
