use dioxus::prelude::*;

use crate::components::icon::{Icon, IconName};
use crate::components::preference::Preference;
use crate::licenses::{project_license_heading, PROJECT_LICENSE_NOTICE, THIRD_PARTY_LIBRARIES};
use crate::links::UrlResource;
use crate::services::Services;

#[component]
pub fn ProjectLicenseScreen() -> Element {
    let services = use_context::<Services>();
    let heading = project_license_heading();

    rsx! {
        div {
            class: "license-screen",
            p { class: "license-heading", "{heading}" }
            pre { class: "license-notice", "{PROJECT_LICENSE_NOTICE}" }
            button {
                class: "license-link",
                onclick: move |_| {
                    services
                        .url_launcher
                        .launch_url(UrlResource::ProjectLicenseText, &[]);
                },
                Icon { name: IconName::ExternalLink, size: 18 }
                span { "Read the full license text" }
            }
        }
    }
}

#[component]
pub fn ThirdPartyLicensesScreen() -> Element {
    let services = use_context::<Services>();

    rsx! {
        div {
            class: "preference-list",
            for library in THIRD_PARTY_LIBRARIES {
                Preference {
                    key: "{library.name}",
                    icon: IconName::ExternalLink,
                    title: library.name,
                    summary: library.license,
                    onclick: {
                        let services = services.clone();
                        move |_| library.open_homepage(&*services.url_launcher)
                    },
                }
            }
        }
    }
}
