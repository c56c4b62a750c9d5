use std::path::PathBuf;

/// File name of the persisted message history
pub const MESSAGES_FILE: &str = "messages.json";

/// Get the application data directory, respecting XDG_DATA_HOME
pub fn data_dir() -> PathBuf {
    let base = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".local").join("share"));
    base.join("lovenote")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Well-known location of the message history file
pub fn messages_path() -> PathBuf {
    data_dir().join(MESSAGES_FILE)
}
