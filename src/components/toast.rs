use dioxus::prelude::*;

use crate::components::icon::{Icon, IconName};
use crate::notify::ToastKind;
use crate::state::SettingsState;

#[component]
pub fn ToastView() -> Element {
    let state = use_context::<SettingsState>();
    let Some(toast) = state.toast.read().clone() else {
        return rsx! {};
    };

    let (class, icon) = match toast.kind {
        ToastKind::Success => ("toast toast--success", IconName::Check),
        ToastKind::Error => ("toast toast--error", IconName::AlertCircle),
    };

    rsx! {
        div {
            class: class,
            role: "status",
            "aria-live": "polite",
            Icon { name: icon, size: 18 }
            span { "{toast.message}" }
        }
    }
}
