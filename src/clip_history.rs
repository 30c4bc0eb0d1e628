//! In-app clipboard history.
//!
//! This module provides:
//! - `ClipItem`: A single text entry copied through the keyboard
//! - `ClipboardHistory`: The seam the settings screens write through
//! - `ClipboardHistoryManager`: Bounded history that also updates the system clipboard

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::rc::Rc;
use uuid::Uuid;

use crate::utils::clipboard::{ClipboardResult, SystemClipboard};

/// A single clipboard history entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipItem {
    pub id: Uuid,
    pub text: String,
    pub copied_at: DateTime<Utc>,
}

impl ClipItem {
    fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            copied_at: Utc::now(),
        }
    }
}

/// Clipboard history tracked by the keyboard while it is the active input method
pub trait ClipboardHistory {
    /// Put `text` on the clipboard and record it as the newest history entry
    fn add_new_plaintext(&self, text: &str) -> ClipboardResult<()>;
}

/// Bounded clipboard history
///
/// Entries are kept newest first. The system clipboard is written before an
/// entry is recorded, so a failed write leaves the history untouched.
pub struct ClipboardHistoryManager {
    clipboard: Rc<dyn SystemClipboard>,
    items: Mutex<VecDeque<ClipItem>>,
    max_items: usize,
}

impl ClipboardHistoryManager {
    pub fn new(clipboard: Rc<dyn SystemClipboard>, max_items: usize) -> Self {
        Self {
            clipboard,
            items: Mutex::new(VecDeque::new()),
            max_items: max_items.max(1),
        }
    }

    /// Snapshot of the history, newest first
    #[cfg(test)]
    pub fn items(&self) -> Vec<ClipItem> {
        self.items.lock().iter().cloned().collect()
    }

    fn record(&self, text: &str) {
        let mut items = self.items.lock();

        // Copying the newest entry again only refreshes it
        if let Some(newest) = items.front_mut() {
            if newest.text == text {
                newest.copied_at = Utc::now();
                tracing::debug!(id = %newest.id, "Refreshed newest clipboard history entry");
                return;
            }
        }

        let item = ClipItem::new(text);
        tracing::debug!(
            id = %item.id,
            copied_at = %item.copied_at,
            "Recording clipboard history entry"
        );
        items.push_front(item);
        items.truncate(self.max_items);
    }
}

impl ClipboardHistory for ClipboardHistoryManager {
    fn add_new_plaintext(&self, text: &str) -> ClipboardResult<()> {
        self.clipboard.set_text(text)?;
        self.record(text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::clipboard::ClipboardError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeClipboard {
        writes: RefCell<Vec<String>>,
        fail: bool,
    }

    impl SystemClipboard for FakeClipboard {
        fn set_text(&self, text: &str) -> ClipboardResult<()> {
            if self.fail {
                return Err(ClipboardError::Write("occupied".to_string()));
            }
            self.writes.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    fn texts(manager: &ClipboardHistoryManager) -> Vec<String> {
        manager.items().into_iter().map(|item| item.text).collect()
    }

    #[test]
    fn test_add_new_plaintext_writes_clipboard_and_records() {
        let clipboard = Rc::new(FakeClipboard::default());
        let manager = ClipboardHistoryManager::new(clipboard.clone(), 10);

        manager.add_new_plaintext("first").unwrap();
        manager.add_new_plaintext("second").unwrap();

        assert_eq!(*clipboard.writes.borrow(), vec!["first", "second"]);
        assert_eq!(texts(&manager), vec!["second", "first"]);
    }

    #[test]
    fn test_repeated_newest_entry_is_not_duplicated() {
        let clipboard = Rc::new(FakeClipboard::default());
        let manager = ClipboardHistoryManager::new(clipboard.clone(), 10);

        manager.add_new_plaintext("same").unwrap();
        let first_id = manager.items()[0].id;
        manager.add_new_plaintext("same").unwrap();

        let items = manager.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, first_id);
        // The system clipboard is still written both times
        assert_eq!(clipboard.writes.borrow().len(), 2);
    }

    #[test]
    fn test_history_is_bounded() {
        let manager = ClipboardHistoryManager::new(Rc::new(FakeClipboard::default()), 2);

        manager.add_new_plaintext("a").unwrap();
        manager.add_new_plaintext("b").unwrap();
        manager.add_new_plaintext("c").unwrap();

        assert_eq!(texts(&manager), vec!["c", "b"]);
    }

    #[test]
    fn test_zero_capacity_keeps_one_entry() {
        let manager = ClipboardHistoryManager::new(Rc::new(FakeClipboard::default()), 0);

        manager.add_new_plaintext("a").unwrap();
        manager.add_new_plaintext("b").unwrap();

        assert_eq!(texts(&manager), vec!["b"]);
    }

    #[test]
    fn test_failed_write_is_not_recorded() {
        let clipboard = Rc::new(FakeClipboard {
            fail: true,
            ..FakeClipboard::default()
        });
        let manager = ClipboardHistoryManager::new(clipboard, 10);

        let err = manager.add_new_plaintext("lost").unwrap_err();
        assert_eq!(err, ClipboardError::Write("occupied".to_string()));
        assert!(manager.items().is_empty());
    }
}
