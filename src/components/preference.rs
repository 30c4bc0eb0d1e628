use dioxus::prelude::*;

use crate::components::icon::{Icon, IconName};

/// A clickable settings row with an icon, title and summary
#[component]
pub fn Preference(
    icon: IconName,
    #[props(into)] title: String,
    #[props(into)] summary: String,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        button {
            class: "preference",
            onclick: move |evt| onclick.call(evt),
            span {
                class: "preference-icon",
                Icon { name: icon, size: 24 }
            }
            span {
                class: "preference-text",
                span { class: "preference-title", "{title}" }
                span { class: "preference-summary", "{summary}" }
            }
        }
    }
}
