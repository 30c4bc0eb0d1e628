use dioxus::prelude::*;

use crate::about::{about_rows, dispatch, AboutAction, AboutEffects};
use crate::build_info::{VersionInfo, APP_NAME};
use crate::components::app_icon::AppIcon;
use crate::components::preference::Preference;
use crate::services::Services;
use crate::state::{SettingsState, SignalNavigator, ToastNotifier};

/// Resolve an activated row against the window's collaborators
fn activate(action: AboutAction, services: &Services, state: SettingsState) {
    let navigator = SignalNavigator::new(state.stack);
    let notifier = ToastNotifier::new(state.toast, services.toast_duration);
    let effects = AboutEffects {
        navigator: &navigator,
        url_launcher: &*services.url_launcher,
        clipboard_history: &*services.clipboard_history,
        system_clipboard: &*services.system_clipboard,
        input_method: &*services.input_method,
        notifier: &notifier,
    };
    dispatch(action, VersionInfo::current(), &effects);
}

#[component]
pub fn AboutScreen() -> Element {
    let state = use_context::<SettingsState>();
    let services = use_context::<Services>();
    let rows = about_rows(VersionInfo::current());

    rsx! {
        div {
            class: "about-screen",

            // Icon and app name
            div {
                class: "about-header",
                AppIcon {}
                h2 { class: "about-app-name", "{APP_NAME}" }
            }

            div {
                class: "preference-list",
                for row in rows {
                    Preference {
                        key: "{row.title}",
                        icon: row.icon,
                        title: row.title,
                        summary: row.summary,
                        onclick: {
                            let services = services.clone();
                            let action = row.action;
                            move |_| activate(action, &services, state)
                        },
                    }
                }
            }
        }
    }
}
