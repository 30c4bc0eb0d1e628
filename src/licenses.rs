//! License information shown by the license screens.

use crate::build_info::APP_NAME;
use crate::links::UrlLauncher;

/// Short name of the license the project is distributed under
pub const PROJECT_LICENSE_NAME: &str = "Apache 2.0";

/// SPDX identifier of the project license
pub const PROJECT_LICENSE_SPDX: &str = "Apache-2.0";

/// Standard Apache 2.0 notice
pub const PROJECT_LICENSE_NOTICE: &str = indoc::indoc! {"
    Licensed under the Apache License, Version 2.0 (the \"License\");
    you may not use this file except in compliance with the License.
    You may obtain a copy of the License at

        http://www.apache.org/licenses/LICENSE-2.0

    Unless required by applicable law or agreed to in writing, software
    distributed under the License is distributed on an \"AS IS\" BASIS,
    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
    See the License for the specific language governing permissions and
    limitations under the License.
"};

/// A third-party library bundled with the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThirdPartyLibrary {
    pub name: &'static str,
    /// SPDX license expression
    pub license: &'static str,
    pub homepage: &'static str,
}

impl ThirdPartyLibrary {
    /// Open the library's homepage through `launcher`
    pub fn open_homepage(&self, launcher: &dyn UrlLauncher) {
        tracing::debug!(library = self.name, "Opening third-party homepage");
        launcher.open_url(self.homepage);
    }
}

const fn library(
    name: &'static str,
    license: &'static str,
    homepage: &'static str,
) -> ThirdPartyLibrary {
    ThirdPartyLibrary {
        name,
        license,
        homepage,
    }
}

/// Libraries and assets bundled with the settings app, sorted by name
///
/// `tracing-oslog` is only linked on macOS.
pub const THIRD_PARTY_LIBRARIES: &[ThirdPartyLibrary] = &[
    library("anyhow", "MIT OR Apache-2.0", "https://github.com/dtolnay/anyhow"),
    library("arboard", "MIT OR Apache-2.0", "https://github.com/1Password/arboard"),
    library("base64", "MIT OR Apache-2.0", "https://github.com/marshallpierce/rust-base64"),
    library("chrono", "MIT OR Apache-2.0", "https://github.com/chronotope/chrono"),
    library("clap", "MIT OR Apache-2.0", "https://github.com/clap-rs/clap"),
    library("compile-time", "MIT OR Apache-2.0", "https://github.com/reitermarkus/compile-time"),
    library("dark-light", "MIT OR Apache-2.0", "https://github.com/rust-dark-light/dark-light"),
    library("dioxus", "MIT OR Apache-2.0", "https://github.com/DioxusLabs/dioxus"),
    library("dioxus-sdk-window", "MIT OR Apache-2.0", "https://github.com/DioxusLabs/sdk"),
    library("dirs", "MIT OR Apache-2.0", "https://github.com/dirs-dev/dirs-rs"),
    library("dotenvy", "MIT", "https://github.com/allan2/dotenvy"),
    library("image", "MIT OR Apache-2.0", "https://github.com/image-rs/image"),
    library("indoc", "MIT OR Apache-2.0", "https://github.com/dtolnay/indoc"),
    library("open", "MIT", "https://github.com/Byron/open-rs"),
    library("parking_lot", "MIT OR Apache-2.0", "https://github.com/Amanieu/parking_lot"),
    library("percent-encoding", "MIT OR Apache-2.0", "https://github.com/servo/rust-url"),
    library("serde", "MIT OR Apache-2.0", "https://github.com/serde-rs/serde"),
    library("serde_json", "MIT OR Apache-2.0", "https://github.com/serde-rs/json"),
    library("tabler-icons", "MIT", "https://github.com/tabler/tabler-icons"),
    library("thiserror", "MIT OR Apache-2.0", "https://github.com/dtolnay/thiserror"),
    library("tokio", "MIT", "https://github.com/tokio-rs/tokio"),
    library("tracing", "MIT", "https://github.com/tokio-rs/tracing"),
    library("tracing-oslog", "Zlib", "https://github.com/Absolucy/tracing-oslog"),
    library("tracing-subscriber", "MIT", "https://github.com/tokio-rs/tracing"),
    library("uuid", "MIT OR Apache-2.0", "https://github.com/uuid-rs/uuid"),
];

/// Heading shown above the project license notice
pub fn project_license_heading() -> String {
    format!("{APP_NAME} is licensed under the {PROJECT_LICENSE_NAME} license ({PROJECT_LICENSE_SPDX})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::UrlResource;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingLauncher {
        urls: RefCell<Vec<String>>,
    }

    impl UrlLauncher for RecordingLauncher {
        fn launch_url(&self, resource: UrlResource, _args: &[&str]) {
            self.urls.borrow_mut().push(format!("{resource:?}"));
        }

        fn open_url(&self, url: &str) {
            self.urls.borrow_mut().push(url.to_string());
        }
    }

    /// Names declared in the manifest's runtime dependency tables
    fn manifest_dependencies() -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut in_runtime_deps = false;
        for line in include_str!("../Cargo.toml").lines() {
            let line = line.trim();
            if line.starts_with('[') {
                in_runtime_deps =
                    line.ends_with("dependencies]") && !line.contains("dev-dependencies");
                continue;
            }
            if in_runtime_deps {
                if let Some((name, _)) = line.split_once(" = ") {
                    names.push(name);
                }
            }
        }
        names
    }

    #[test]
    fn test_third_party_libraries_sorted_and_unique() {
        let names: Vec<_> = THIRD_PARTY_LIBRARIES.iter().map(|lib| lib.name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_third_party_homepages_are_https() {
        for lib in THIRD_PARTY_LIBRARIES {
            assert!(lib.homepage.starts_with("https://"), "{}", lib.name);
            assert!(!lib.license.is_empty(), "{}", lib.name);
        }
    }

    #[test]
    fn test_every_runtime_dependency_is_listed() {
        let deps = manifest_dependencies();
        assert!(deps.contains(&"dioxus"));
        for dep in deps {
            assert!(
                THIRD_PARTY_LIBRARIES.iter().any(|lib| lib.name == dep),
                "{dep} missing from third-party licenses"
            );
        }
    }

    #[test]
    fn test_open_homepage_goes_through_launcher() {
        let launcher = RecordingLauncher::default();
        let dioxus = THIRD_PARTY_LIBRARIES
            .iter()
            .find(|lib| lib.name == "dioxus")
            .unwrap();

        dioxus.open_homepage(&launcher);

        assert_eq!(
            *launcher.urls.borrow(),
            vec!["https://github.com/DioxusLabs/dioxus".to_string()]
        );
    }

    #[test]
    fn test_project_license_heading() {
        assert_eq!(
            project_license_heading(),
            "FlorisBoard is licensed under the Apache 2.0 license (Apache-2.0)"
        );
        assert!(PROJECT_LICENSE_NOTICE.starts_with("Licensed under the Apache License"));
    }
}
