use dioxus::document;
use dioxus::prelude::*;
use dioxus_sdk_window::theme::use_system_theme;

use crate::components::about_screen::AboutScreen;
use crate::components::header::Header;
use crate::components::license_screen::{ProjectLicenseScreen, ThirdPartyLicensesScreen};
use crate::components::toast::ToastView;
use crate::config::CONFIG;
use crate::navigation::{initial_route, Route};
use crate::services::Services;
use crate::state::SettingsState;
use crate::theme::ResolvedTheme;

/// Root component of the settings window
#[component]
pub fn SettingsApp() -> Element {
    let preference = CONFIG.read().theme;
    let system_theme = use_system_theme();
    let resolved_theme = use_memo(move || {
        preference.resolve_with(system_theme().ok().map(ResolvedTheme::from))
    });

    use_context_provider(|| Services::from_config(&CONFIG.read()));
    let state = use_context_provider(|| SettingsState::new(initial_route(), resolved_theme));

    // Keep the page theme in sync with the system while the window is open
    use_effect(move || {
        let theme = resolved_theme();
        tracing::debug!(%theme, "Applying theme");
        spawn(async move {
            let _ = document::eval(&format!("document.body.dataset.theme = '{theme}'")).await;
        });
    });

    let route = state.stack.read().current();

    rsx! {
        div {
            class: "settings-window",
            Header {}
            div {
                class: "settings-content",
                match route {
                    Route::About => rsx! { AboutScreen {} },
                    Route::ProjectLicense => rsx! { ProjectLicenseScreen {} },
                    Route::ThirdPartyLicenses => rsx! { ThirdPartyLicensesScreen {} },
                }
            }
            ToastView {}
        }
    }
}
