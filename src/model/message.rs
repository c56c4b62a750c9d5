use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Visual variant a message is rendered under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardStyle {
    #[default]
    ClassicRed,
    PinkGradient,
    RoseGold,
    DarkRomance,
    Playful,
}

impl CardStyle {
    pub const ALL: [CardStyle; 5] = [
        CardStyle::ClassicRed,
        CardStyle::PinkGradient,
        CardStyle::RoseGold,
        CardStyle::DarkRomance,
        CardStyle::Playful,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            CardStyle::ClassicRed => "Classic Red",
            CardStyle::PinkGradient => "Pink Gradient",
            CardStyle::RoseGold => "Rose Gold",
            CardStyle::DarkRomance => "Dark Romance",
            CardStyle::Playful => "Playful",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            CardStyle::ClassicRed => "❤️",
            CardStyle::PinkGradient => "💕",
            CardStyle::RoseGold => "🌹",
            CardStyle::DarkRomance => "🖤",
            CardStyle::Playful => "💝",
        }
    }
}

/// A single composed note in the message history.
///
/// JSON field names are camelCase to match the persisted file format
/// (`recipientName`, `createdAt`, ...). `created_at` is persisted as an
/// ISO-8601 string at seconds precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique, immutable, assigned at creation
    pub id: Uuid,
    pub recipient_name: String,
    pub message_body: String,
    /// Denormalized copy of the template text this message started from,
    /// if any — not a live link into the catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_used: Option<String>,
    pub card_style: CardStyle,
    #[serde(with = "iso8601")]
    pub created_at: DateTime<Utc>,
    /// Flips to true exactly once; there is no un-send
    pub was_sent: bool,
}

impl Message {
    /// Create a fresh unsent message. The timestamp is truncated to whole
    /// seconds so the in-memory value matches what a load returns.
    pub fn new(
        recipient_name: String,
        message_body: String,
        template_used: Option<String>,
        card_style: CardStyle,
    ) -> Self {
        Message {
            id: Uuid::new_v4(),
            recipient_name,
            message_body,
            template_used,
            card_style,
            created_at: Utc::now().trunc_subsecs(0),
            was_sent: false,
        }
    }
}

/// ISO-8601 timestamps at seconds precision, e.g. `2026-02-14T12:30:05Z`
pub(crate) mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
