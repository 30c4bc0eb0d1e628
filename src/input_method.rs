//! Detection of whether this keyboard is the active input method.

/// Environment variables consulted, in order
const IME_ENV_VARS: [&str; 4] = [
    // Explicit override, set by the keyboard service when it is activated
    "FLORIS_ACTIVE_IME",
    // X11 input method, e.g. "@im=florisboard"
    "XMODIFIERS",
    "GTK_IM_MODULE",
    "QT_IM_MODULE",
];

pub trait InputMethodStatus {
    fn is_this_keyboard_active(&self) -> bool;
}

/// Reads the desktop input method selection from the process environment
#[derive(Debug, Clone)]
pub struct EnvInputMethodStatus {
    id: String,
}

impl EnvInputMethodStatus {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    fn is_active_with(&self, lookup: impl Fn(&str) -> Option<String>) -> bool {
        IME_ENV_VARS.into_iter().any(|var| {
            lookup(var)
                .map(|value| self.matches(&value))
                .unwrap_or(false)
        })
    }

    fn matches(&self, value: &str) -> bool {
        let value = value.trim();
        let value = value.strip_prefix("@im=").unwrap_or(value);
        !value.is_empty() && value.eq_ignore_ascii_case(&self.id)
    }
}

impl InputMethodStatus for EnvInputMethodStatus {
    fn is_this_keyboard_active(&self) -> bool {
        let active = self.is_active_with(|var| std::env::var(var).ok());
        tracing::debug!(id = %self.id, active, "Checked active input method");
        active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_xmodifiers_match() {
        let status = EnvInputMethodStatus::new("florisboard");
        assert!(status.is_active_with(env(&[("XMODIFIERS", "@im=florisboard")])));
    }

    #[test]
    fn test_module_vars_match_case_insensitively() {
        let status = EnvInputMethodStatus::new("florisboard");
        assert!(status.is_active_with(env(&[("GTK_IM_MODULE", "FlorisBoard")])));
        assert!(status.is_active_with(env(&[("QT_IM_MODULE", " florisboard ")])));
    }

    #[test]
    fn test_override_var_match() {
        let status = EnvInputMethodStatus::new("custom");
        assert!(status.is_active_with(env(&[
            ("FLORIS_ACTIVE_IME", "custom"),
            ("XMODIFIERS", "@im=ibus"),
        ])));
    }

    #[test]
    fn test_other_input_method_is_inactive() {
        let status = EnvInputMethodStatus::new("florisboard");
        assert!(!status.is_active_with(env(&[
            ("XMODIFIERS", "@im=fcitx"),
            ("GTK_IM_MODULE", "ibus"),
        ])));
    }

    #[test]
    fn test_empty_environment_is_inactive() {
        let status = EnvInputMethodStatus::new("florisboard");
        assert!(!status.is_active_with(env(&[])));
        assert!(!status.is_active_with(env(&[("XMODIFIERS", "@im=")])));
    }
}
