use crate::build_info::{VersionInfo, APP_NAME};
use crate::components::icon::IconName;
use crate::licenses::PROJECT_LICENSE_NAME;

/// What activating an About row does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AboutAction {
    CopyVersion,
    OpenChangelog,
    OpenRepository,
    OpenPrivacyPolicy,
    ShowProjectLicense,
    ShowThirdPartyLicenses,
}

/// A single row of the About screen
#[derive(Debug, Clone, PartialEq)]
pub struct AboutRow {
    pub icon: IconName,
    pub title: &'static str,
    pub summary: String,
    pub action: AboutAction,
}

impl AboutRow {
    fn new(
        icon: IconName,
        title: &'static str,
        summary: impl Into<String>,
        action: AboutAction,
    ) -> Self {
        Self {
            icon,
            title,
            summary: summary.into(),
            action,
        }
    }
}

/// Rows of the About screen, in display order
pub fn about_rows(version: &VersionInfo) -> [AboutRow; 6] {
    [
        AboutRow::new(
            IconName::InfoCircle,
            "Version",
            version.to_string(),
            AboutAction::CopyVersion,
        ),
        AboutRow::new(
            IconName::History,
            "Changelog",
            "What's new",
            AboutAction::OpenChangelog,
        ),
        AboutRow::new(
            IconName::Code,
            "Repository (GitHub)",
            "Source code, discussion, issues and info",
            AboutAction::OpenRepository,
        ),
        AboutRow::new(
            IconName::Shield,
            "Privacy policy",
            "The privacy policy for this project",
            AboutAction::OpenPrivacyPolicy,
        ),
        AboutRow::new(
            IconName::FileDescription,
            "Project license",
            format!("{APP_NAME} is licensed under {PROJECT_LICENSE_NAME}"),
            AboutAction::ShowProjectLicense,
        ),
        AboutRow::new(
            IconName::FileDescription,
            "Third-party licenses",
            "Licenses of the third-party libraries included in this app",
            AboutAction::ShowThirdPartyLicenses,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_in_fixed_order() {
        let rows = about_rows(&VersionInfo::new("0.4.0", 1));
        let actions: Vec<_> = rows.iter().map(|row| row.action).collect();
        assert_eq!(
            actions,
            vec![
                AboutAction::CopyVersion,
                AboutAction::OpenChangelog,
                AboutAction::OpenRepository,
                AboutAction::OpenPrivacyPolicy,
                AboutAction::ShowProjectLicense,
                AboutAction::ShowThirdPartyLicenses,
            ]
        );
    }

    #[test]
    fn test_version_row_summary_is_version_string() {
        let rows = about_rows(&VersionInfo::new("0.4.0-beta02", 83));
        assert_eq!(rows[0].title, "Version");
        assert_eq!(rows[0].summary, "0.4.0-beta02 (83)");
    }

    #[test]
    fn test_project_license_summary_names_license() {
        let rows = about_rows(&VersionInfo::new("0.4.0", 1));
        assert_eq!(rows[4].summary, "FlorisBoard is licensed under Apache 2.0");
    }

    #[test]
    fn test_rows_do_not_depend_on_version_except_version_row() {
        let a = about_rows(&VersionInfo::new("1.0", 1));
        let b = about_rows(&VersionInfo::new("2.0", 2));
        assert_ne!(a[0], b[0]);
        assert_eq!(a[1..], b[1..]);
    }
}
