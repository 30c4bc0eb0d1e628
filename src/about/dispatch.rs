use crate::build_info::VersionInfo;
use crate::clip_history::ClipboardHistory;
use crate::input_method::InputMethodStatus;
use crate::links::{UrlLauncher, UrlResource};
use crate::navigation::{Navigator, Route};
use crate::notify::{Notifier, Toast};
use crate::utils::clipboard::{ClipboardResult, SystemClipboard};

use super::rows::AboutAction;

const VERSION_COPIED_MESSAGE: &str = "Copied version to clipboard";

/// Collaborators the About screen acts on
pub struct AboutEffects<'a> {
    pub navigator: &'a dyn Navigator,
    pub url_launcher: &'a dyn UrlLauncher,
    pub clipboard_history: &'a dyn ClipboardHistory,
    pub system_clipboard: &'a dyn SystemClipboard,
    pub input_method: &'a dyn InputMethodStatus,
    pub notifier: &'a dyn Notifier,
}

/// Where a copied version string ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CopyTarget {
    ClipboardHistory,
    SystemClipboard,
}

/// Copy `text` through the clipboard history while this keyboard is the active
/// input method, otherwise straight to the system clipboard.
fn copy_version(text: &str, effects: &AboutEffects<'_>) -> ClipboardResult<CopyTarget> {
    if effects.input_method.is_this_keyboard_active() {
        effects.clipboard_history.add_new_plaintext(text)?;
        Ok(CopyTarget::ClipboardHistory)
    } else {
        effects.system_clipboard.set_text(text)?;
        Ok(CopyTarget::SystemClipboard)
    }
}

/// Perform the side effect of an activated About row
pub fn dispatch(action: AboutAction, version: &VersionInfo, effects: &AboutEffects<'_>) {
    tracing::debug!(?action, "About row activated");
    match action {
        AboutAction::CopyVersion => {
            let text = version.to_string();
            let toast = match copy_version(&text, effects) {
                Ok(target) => {
                    tracing::info!(?target, version = %text, "Copied version");
                    Toast::success(VERSION_COPIED_MESSAGE)
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to copy version");
                    Toast::error(format!("Failed to copy version: {e}"))
                }
            };
            effects.notifier.show(toast);
        }
        AboutAction::OpenChangelog => effects
            .url_launcher
            .launch_url(UrlResource::Changelog, &[version.name.as_str()]),
        AboutAction::OpenRepository => effects.url_launcher.launch_url(UrlResource::Repository, &[]),
        AboutAction::OpenPrivacyPolicy => effects
            .url_launcher
            .launch_url(UrlResource::PrivacyPolicy, &[]),
        AboutAction::ShowProjectLicense => effects.navigator.navigate(Route::ProjectLicense),
        AboutAction::ShowThirdPartyLicenses => {
            effects.navigator.navigate(Route::ThirdPartyLicenses)
        }
    }
}
