use dioxus::prelude::*;

use crate::components::icon::{Icon, IconName};
use crate::state::SettingsState;

#[component]
pub fn Header() -> Element {
    let state = use_context::<SettingsState>();
    let mut stack = state.stack;

    let (route, can_go_back, can_go_forward) = {
        let stack = stack.read();
        (stack.current(), stack.can_go_back(), stack.can_go_forward())
    };
    let title = route.title();

    let on_back = move |_| {
        if let Some(route) = stack.write().go_back() {
            tracing::debug!(?route, "Navigated back");
        }
    };

    let on_forward = move |_| {
        if let Some(route) = stack.write().go_forward() {
            tracing::debug!(?route, "Navigated forward");
        }
    };

    rsx! {
        div {
            class: "header",

            // Back button
            button {
                class: "nav-button",
                disabled: !can_go_back,
                title: "Back",
                onclick: on_back,
                Icon { name: IconName::ChevronLeft }
            }

            // Forward button
            button {
                class: "nav-button",
                disabled: !can_go_forward,
                title: "Forward",
                onclick: on_forward,
                Icon { name: IconName::ChevronRight }
            }

            h1 {
                class: "header-title",
                "{title}"
            }
        }
    }
}
