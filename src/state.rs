//! Per-window state and the desktop adapters the About screen dispatches through.

use dioxus::prelude::*;
use std::time::Duration;

use crate::navigation::{NavigationStack, Navigator, Route};
use crate::notify::{should_clear, Notifier, Toast};
use crate::theme::ResolvedTheme;

/// Per-window settings state.
///
/// All fields are signals, so the struct is `Copy` and can be moved into
/// event handlers freely.
#[derive(Clone, Copy)]
pub struct SettingsState {
    pub stack: Signal<NavigationStack>,
    pub toast: Signal<Option<Toast>>,
    pub theme: Memo<ResolvedTheme>,
}

impl SettingsState {
    pub fn new(route: Route, theme: Memo<ResolvedTheme>) -> Self {
        Self {
            stack: Signal::new(NavigationStack::new(route)),
            toast: Signal::new(None),
            theme,
        }
    }
}

/// Navigator pushing onto the window's navigation stack
pub struct SignalNavigator {
    stack: Signal<NavigationStack>,
}

impl SignalNavigator {
    pub fn new(stack: Signal<NavigationStack>) -> Self {
        Self { stack }
    }
}

impl Navigator for SignalNavigator {
    fn navigate(&self, route: Route) {
        let mut stack = self.stack;
        tracing::debug!(?route, "Navigating");
        stack.write().push(route);
    }
}

/// Notifier showing toasts in the window for a fixed duration
pub struct ToastNotifier {
    toast: Signal<Option<Toast>>,
    duration: Duration,
}

impl ToastNotifier {
    pub fn new(toast: Signal<Option<Toast>>, duration: Duration) -> Self {
        Self { toast, duration }
    }
}

impl Notifier for ToastNotifier {
    fn show(&self, toast: Toast) {
        let mut slot = self.toast;
        let id = toast.id;
        let duration = self.duration;
        slot.set(Some(toast));

        spawn(async move {
            tokio::time::sleep(duration).await;
            let expired = should_clear(Option::as_ref(&*slot.peek()), id);
            if expired {
                slot.set(None);
            }
        });
    }
}
