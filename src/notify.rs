use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Short-lived, non-blocking message shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
        }
    }
}

/// Shows transient messages
pub trait Notifier {
    fn show(&self, toast: Toast);
}

/// Whether the expiry timer of toast `id` may clear `current`
///
/// A newer toast replaces the slot and runs its own timer, so only the toast
/// the timer was started for is cleared.
pub fn should_clear(current: Option<&Toast>, id: Uuid) -> bool {
    current.is_some_and(|toast| toast.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_get_distinct_ids() {
        let a = Toast::success("Copied");
        let b = Toast::success("Copied");
        assert_ne!(a.id, b.id);
        assert_eq!(a.kind, ToastKind::Success);
        assert_eq!(Toast::error("boom").kind, ToastKind::Error);
    }

    #[test]
    fn test_expiry_clears_its_own_toast() {
        let toast = Toast::success("Copied version to clipboard");
        assert!(should_clear(Some(&toast), toast.id));
    }

    #[test]
    fn test_expiry_keeps_newer_toast() {
        let older = Toast::success("Copied version to clipboard");
        let newer = Toast::error("Failed to copy version: clipboard unavailable");
        assert!(!should_clear(Some(&newer), older.id));
    }

    #[test]
    fn test_expiry_of_empty_slot_is_noop() {
        assert!(!should_clear(None, Uuid::new_v4()));
    }
}
