use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::io::message_io::{load_messages_from, save_messages_to};
use crate::io::paths;
use crate::io::recovery::{self, RecoveryEntry};
use crate::model::Message;

type ChangeCallback = Box<dyn Fn(&[Message])>;

/// Single source of truth for the message history.
///
/// Owns the live collection (newest first) and is the only writer to the
/// persisted file. Every mutation updates memory first, then writes a full
/// snapshot synchronously. A failed write is a diagnostic, not an error:
/// the in-memory state stays authoritative for the session and the
/// snapshot is captured in the recovery log.
pub struct MessageStore {
    messages: Vec<Message>,
    path: PathBuf,
    callbacks: Vec<ChangeCallback>,
}

impl MessageStore {
    /// Open the store at the default well-known location
    pub fn open() -> Self {
        Self::open_at(paths::messages_path())
    }

    /// Open the store backed by a specific file. Loads the history exactly
    /// once; a missing or corrupt file yields an empty history.
    pub fn open_at(path: PathBuf) -> Self {
        let messages = load_messages_from(&path);
        MessageStore {
            messages,
            path,
            callbacks: Vec::new(),
        }
    }

    /// The live history, newest first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Find a message by id
    pub fn get(&self, id: Uuid) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// Register a callback invoked after every successful mutation
    pub fn subscribe(&mut self, callback: impl Fn(&[Message]) + 'static) {
        self.callbacks.push(Box::new(callback));
    }

    /// Prepend a message; the newest entry is always index 0
    pub fn insert(&mut self, message: Message) {
        self.messages.insert(0, message);
        self.persist("insert");
        self.notify();
    }

    /// Flip `was_sent` on the first message matching `id`.
    /// Returns false (no-op) when the id is unknown. Idempotent.
    pub fn mark_sent(&mut self, id: Uuid) -> bool {
        match self.messages.iter_mut().find(|m| m.id == id) {
            Some(message) => {
                message.was_sent = true;
                self.persist("mark_sent");
                self.notify();
                true
            }
            None => false,
        }
    }

    /// Remove every message matching `id`, preserving the relative order
    /// of the rest. Returns false (no-op) when the id is unknown.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.messages.len();
        self.messages.retain(|m| m.id != id);
        if self.messages.len() == before {
            return false;
        }
        self.persist("delete");
        self.notify();
        true
    }

    fn persist(&self, operation: &str) {
        if let Err(e) = save_messages_to(&self.path, &self.messages) {
            tracing::warn!("could not save message history after {operation}: {e}");
            let data_dir = self.path.parent().unwrap_or(Path::new("."));
            recovery::log_recovery(
                data_dir,
                &RecoveryEntry::new(
                    format!("save failed after {operation}: {e}"),
                    serde_json::to_string(&self.messages).unwrap_or_default(),
                ),
            );
        }
    }

    fn notify(&self) {
        for callback in &self.callbacks {
            callback(&self.messages);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CardStyle;
    use std::cell::Cell;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn store(tmp: &TempDir) -> MessageStore {
        MessageStore::open_at(tmp.path().join("messages.json"))
    }

    fn sample(recipient: &str) -> Message {
        Message::new(
            recipient.to_string(),
            "You make my heart smile.".to_string(),
            None,
            CardStyle::Playful,
        )
    }

    #[test]
    fn open_with_no_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(store(&tmp).is_empty());
    }

    #[test]
    fn insert_prepends() {
        let tmp = TempDir::new().unwrap();
        let mut store = store(&tmp);

        let m1 = sample("First");
        let m2 = sample("Second");
        store.insert(m1.clone());
        store.insert(m2.clone());

        assert_eq!(store.len(), 2);
        assert_eq!(store.messages()[0].id, m2.id);
        assert_eq!(store.messages()[1].id, m1.id);
    }

    #[test]
    fn mutations_survive_reopen() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("messages.json");

        let m = sample("Sam");
        {
            let mut store = MessageStore::open_at(path.clone());
            store.insert(m.clone());
            store.mark_sent(m.id);
        }

        let reopened = MessageStore::open_at(path);
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.messages()[0], {
            let mut expected = m;
            expected.was_sent = true;
            expected
        });
    }

    #[test]
    fn mark_sent_unknown_id_is_noop() {
        let tmp = TempDir::new().unwrap();
        let mut store = store(&tmp);
        store.insert(sample("Sam"));

        assert!(!store.mark_sent(Uuid::new_v4()));
        assert!(!store.messages()[0].was_sent);
    }

    #[test]
    fn mark_sent_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let mut store = store(&tmp);
        let m = sample("Sam");
        store.insert(m.clone());

        assert!(store.mark_sent(m.id));
        let after_once = store.messages().to_vec();
        assert!(store.mark_sent(m.id));
        assert_eq!(store.messages(), after_once.as_slice());
    }

    #[test]
    fn delete_removes_and_preserves_order() {
        let tmp = TempDir::new().unwrap();
        let mut store = store(&tmp);

        let m1 = sample("A");
        let m2 = sample("B");
        let m3 = sample("C");
        store.insert(m1.clone());
        store.insert(m2.clone());
        store.insert(m3.clone());

        assert!(store.delete(m2.id));
        assert!(store.get(m2.id).is_none());
        assert_eq!(store.messages()[0].id, m3.id);
        assert_eq!(store.messages()[1].id, m1.id);
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let tmp = TempDir::new().unwrap();
        let mut store = store(&tmp);
        store.insert(sample("Sam"));

        assert!(!store.delete(Uuid::new_v4()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn subscribers_are_notified_on_each_mutation() {
        let tmp = TempDir::new().unwrap();
        let mut store = store(&tmp);

        let count = Rc::new(Cell::new(0usize));
        let seen = Rc::clone(&count);
        store.subscribe(move |_| seen.set(seen.get() + 1));

        let m = sample("Sam");
        store.insert(m.clone());
        store.mark_sent(m.id);
        store.delete(m.id);
        // No-op mutations do not notify
        store.delete(m.id);

        assert_eq!(count.get(), 3);
    }

    #[test]
    fn failed_save_keeps_memory_and_captures_snapshot() {
        let tmp = TempDir::new().unwrap();
        // A regular file where the data dir should be, so every save fails
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let mut store = MessageStore::open_at(blocker.join("messages.json"));

        let marker = format!("Recipient-{}", Uuid::new_v4());
        store.insert(sample(&marker));

        // The session continues with the in-memory state as the truth
        assert_eq!(store.len(), 1);
        assert_eq!(store.messages()[0].recipient_name, marker);

        // The snapshot landed in the fallback recovery log
        let fallback = std::env::temp_dir().join("lovenote");
        assert!(
            recovery::read_recovery_entries(&fallback)
                .iter()
                .any(|e| e.snapshot.contains(&marker))
        );
    }

    #[test]
    fn reads_see_new_state_immediately_after_mutation() {
        let tmp = TempDir::new().unwrap();
        let mut store = store(&tmp);
        let m = sample("Sam");

        store.insert(m.clone());
        assert_eq!(store.get(m.id).unwrap().id, m.id);
        store.mark_sent(m.id);
        assert!(store.get(m.id).unwrap().was_sent);
    }
}
