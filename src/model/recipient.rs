use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Address-book entry for a person a card can be addressed to.
/// Present in the data model but not yet wired into any persisted flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<DateTime<Utc>>,
}

impl Recipient {
    pub fn new(name: String) -> Self {
        Recipient {
            id: Uuid::new_v4(),
            name,
            last_used: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_recipient_has_no_last_used() {
        let r = Recipient::new("Alex".to_string());
        assert_eq!(r.name, "Alex");
        assert!(r.last_used.is_none());
    }

    #[test]
    fn serde_round_trip() {
        let mut r = Recipient::new("Alex".to_string());
        r.last_used = Some(Utc::now());
        let json = serde_json::to_string(&r).unwrap();
        let loaded: Recipient = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.id, r.id);
        assert_eq!(loaded.name, r.name);
        assert!(loaded.last_used.is_some());
    }
}
