use std::fs;
use std::path::{Path, PathBuf};

use crate::io::paths;
use crate::io::recovery::atomic_write;
use crate::model::Message;

/// Error type for message persistence
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not serialize message history: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Load the message history from `path`.
///
/// A missing file is an empty history, not an error. An unreadable or
/// unparseable file is backed up as `.json.bak`, reported as a diagnostic,
/// and treated as empty.
pub fn load_messages_from(path: &Path) -> Vec<Message> {
    if !path.exists() {
        return Vec::new();
    }

    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<Vec<Message>>(&content) {
            Ok(messages) => messages,
            Err(e) => {
                // Corrupted — back up and start fresh
                let bak = path.with_extension("json.bak");
                let _ = fs::copy(path, &bak);
                tracing::warn!(
                    "could not parse {} (backed up as {}): {}",
                    path.display(),
                    bak.display(),
                    e
                );
                Vec::new()
            }
        },
        Err(e) => {
            tracing::warn!("could not read {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Save the full message history to `path` as a single atomic snapshot.
/// Creates the parent directory on demand.
pub fn save_messages_to(path: &Path, messages: &[Message]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StoreError::Write {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    let content = serde_json::to_string_pretty(messages)?;
    atomic_write(path, content.as_bytes()).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load from the default well-known location
pub fn load_messages() -> Vec<Message> {
    load_messages_from(&paths::messages_path())
}

/// Save to the default well-known location
pub fn save_messages(messages: &[Message]) -> Result<(), StoreError> {
    save_messages_to(&paths::messages_path(), messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CardStyle;
    use tempfile::TempDir;

    fn sample(recipient: &str) -> Message {
        Message::new(
            recipient.to_string(),
            "Life is better with you in it.".to_string(),
            None,
            CardStyle::ClassicRed,
        )
    }

    #[test]
    fn load_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("messages.json");
        assert!(load_messages_from(&path).is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("messages.json");

        let messages = vec![sample("Sam"), sample("Alex")];
        save_messages_to(&path, &messages).unwrap();

        let loaded = load_messages_from(&path);
        assert_eq!(loaded, messages);
    }

    #[test]
    fn save_creates_parent_dirs() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("lovenote").join("messages.json");

        save_messages_to(&path, &[sample("Sam")]).unwrap();
        assert_eq!(load_messages_from(&path).len(), 1);
    }

    #[test]
    fn corrupt_file_is_backed_up_and_treated_as_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("messages.json");
        fs::write(&path, "not json {{{").unwrap();

        let loaded = load_messages_from(&path);
        assert!(loaded.is_empty());

        let bak = path.with_extension("json.bak");
        assert!(bak.exists());
        assert_eq!(fs::read_to_string(&bak).unwrap(), "not json {{{");
    }

    #[test]
    fn save_is_a_full_snapshot() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("messages.json");

        save_messages_to(&path, &[sample("Sam"), sample("Alex")]).unwrap();
        save_messages_to(&path, &[sample("Riley")]).unwrap();

        let loaded = load_messages_from(&path);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].recipient_name, "Riley");
    }

    #[test]
    fn persisted_json_is_an_array_of_camel_case_objects() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("messages.json");

        save_messages_to(&path, &[sample("Sam")]).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["recipientName"], "Sam");
        assert_eq!(array[0]["cardStyle"], "classicRed");
        assert_eq!(array[0]["wasSent"], false);
        assert!(array[0]["id"].is_string());
    }
}
