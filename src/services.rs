use std::rc::Rc;
use std::time::Duration;

use crate::clip_history::ClipboardHistoryManager;
use crate::config::Config;
use crate::input_method::{EnvInputMethodStatus, InputMethodStatus};
use crate::links::{OpenUrlLauncher, UrlLauncher};
use crate::utils::clipboard::{ArboardClipboard, SystemClipboard};

/// Platform collaborators shared by the settings screens
///
/// Created once per window and provided through the Dioxus context, so the
/// clipboard handle and clipboard history live as long as the window.
#[derive(Clone)]
pub struct Services {
    pub system_clipboard: Rc<dyn SystemClipboard>,
    pub clipboard_history: Rc<ClipboardHistoryManager>,
    pub input_method: Rc<dyn InputMethodStatus>,
    pub url_launcher: Rc<dyn UrlLauncher>,
    pub toast_duration: Duration,
}

impl Services {
    pub fn from_config(config: &Config) -> Self {
        let system_clipboard: Rc<dyn SystemClipboard> = Rc::new(ArboardClipboard::new());
        let clipboard_history = Rc::new(ClipboardHistoryManager::new(
            system_clipboard.clone(),
            config.clipboard_history.max_items,
        ));
        Self {
            system_clipboard,
            clipboard_history,
            input_method: Rc::new(EnvInputMethodStatus::new(config.input_method.id.clone())),
            url_launcher: Rc::new(OpenUrlLauncher::new(config.links.clone())),
            toast_duration: config.toast.duration(),
        }
    }
}
