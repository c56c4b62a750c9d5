use rand::Rng;

/// Ordinal severity tag on a pickup line, 1 (smooth) through 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RizzLevel {
    Smooth = 1,
    Charming = 2,
    Bold = 3,
    DownBad = 4,
    RestrainingOrder = 5,
}

impl RizzLevel {
    pub const ALL: [RizzLevel; 5] = [
        RizzLevel::Smooth,
        RizzLevel::Charming,
        RizzLevel::Bold,
        RizzLevel::DownBad,
        RizzLevel::RestrainingOrder,
    ];

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_ordinal(n: u8) -> Option<RizzLevel> {
        match n {
            1 => Some(RizzLevel::Smooth),
            2 => Some(RizzLevel::Charming),
            3 => Some(RizzLevel::Bold),
            4 => Some(RizzLevel::DownBad),
            5 => Some(RizzLevel::RestrainingOrder),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RizzLevel::Smooth => "Smooth",
            RizzLevel::Charming => "Charming",
            RizzLevel::Bold => "Bold",
            RizzLevel::DownBad => "Down Bad",
            RizzLevel::RestrainingOrder => "Restraining Order",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            RizzLevel::Smooth => "😎",
            RizzLevel::Charming => "😉",
            RizzLevel::Bold => "🔥",
            RizzLevel::DownBad => "😭",
            RizzLevel::RestrainingOrder => "🚨",
        }
    }
}

/// A pickup line from the static catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickupLine {
    pub text: &'static str,
    pub rizz_level: RizzLevel,
    pub emoji: &'static str,
}

const fn line(text: &'static str, rizz_level: RizzLevel, emoji: &'static str) -> PickupLine {
    PickupLine {
        text,
        rizz_level,
        emoji,
    }
}

/// Full pickup-line catalog, five lines per level. Non-empty by construction.
pub const ALL_PICKUP_LINES: &[PickupLine] = &[
    // Smooth (1)
    line(
        "Do you have a map? I just got lost in your eyes.",
        RizzLevel::Smooth,
        "🗺",
    ),
    line(
        "I must be a snowflake, because I've fallen for you.",
        RizzLevel::Smooth,
        "❄️",
    ),
    line(
        "Are you a time traveler? Because I can see you in my future.",
        RizzLevel::Smooth,
        "⌚",
    ),
    line(
        "Is your name Google? Because you have everything I've been searching for.",
        RizzLevel::Smooth,
        "🔍",
    ),
    line(
        "If beauty were time, you'd be an eternity.",
        RizzLevel::Smooth,
        "✨",
    ),
    // Charming (2)
    line(
        "Are you a parking ticket? Because you've got 'fine' written all over you.",
        RizzLevel::Charming,
        "🚗",
    ),
    line(
        "Do you believe in love at first sight, or should I walk by again?",
        RizzLevel::Charming,
        "🚶",
    ),
    line(
        "I'm not a photographer, but I can picture us together.",
        RizzLevel::Charming,
        "📸",
    ),
    line(
        "If you were a fruit, you'd be a fineapple.",
        RizzLevel::Charming,
        "🍍",
    ),
    line(
        "Are you Wi-Fi? Because I'm feeling a connection.",
        RizzLevel::Charming,
        "📶",
    ),
    // Bold (3)
    line(
        "Are you a bank loan? Because you've got my interest.",
        RizzLevel::Bold,
        "💰",
    ),
    line(
        "Do you have a Band-Aid? I just scraped my knee falling for you.",
        RizzLevel::Bold,
        "🩹",
    ),
    line(
        "Is your dad a boxer? Because you're a knockout.",
        RizzLevel::Bold,
        "🥊",
    ),
    line(
        "I'd say God bless you, but it looks like he already did.",
        RizzLevel::Bold,
        "😇",
    ),
    line(
        "You must be tired because you've been running through my mind all day.",
        RizzLevel::Bold,
        "🏃",
    ),
    // Down Bad (4)
    line(
        "I wrote your name in the sky, but the clouds blew it away. I wrote your name in the sand, but the waves washed it away. So I wrote your name in my heart, and nothing can take it away.",
        RizzLevel::DownBad,
        "😭",
    ),
    line(
        "I'd rearrange the alphabet to put U and I together.",
        RizzLevel::DownBad,
        "🔤",
    ),
    line(
        "If I had a star for every time you brightened my day, I'd have the entire galaxy.",
        RizzLevel::DownBad,
        "🌌",
    ),
    line(
        "I'm not drunk, I'm just intoxicated by you.",
        RizzLevel::DownBad,
        "🥃",
    ),
    line(
        "Can you touch my hand? I want to tell my friends I was touched by an angel.",
        RizzLevel::DownBad,
        "👼",
    ),
    // Restraining Order (5)
    line(
        "I seem to have lost my phone number. Can I have yours? Also my keys, my wallet, and all sense of dignity.",
        RizzLevel::RestrainingOrder,
        "📱",
    ),
    line(
        "Are you a campfire? Because you're hot and I want s'more. I'll bring the tent. I already know where you live.",
        RizzLevel::RestrainingOrder,
        "🏕",
    ),
    line(
        "I'm learning about important dates in history. Wanna be one? I've already cleared my calendar. For the next 50 years.",
        RizzLevel::RestrainingOrder,
        "📅",
    ),
    line(
        "Do you have a sunburn, or are you always this hot? Don't answer. I've been watching long enough to know.",
        RizzLevel::RestrainingOrder,
        "☀️",
    ),
    line(
        "I must be a squirrel because I want to hoard you for winter. And spring. And summer. And fall. Forever.",
        RizzLevel::RestrainingOrder,
        "🐿️",
    ),
];

/// Uniform random pick over the full catalog
pub fn random_pickup_line() -> &'static PickupLine {
    let idx = rand::thread_rng().gen_range(0..ALL_PICKUP_LINES.len());
    &ALL_PICKUP_LINES[idx]
}

/// Lines at a given level, preserving catalog order
pub fn pickup_lines(level: RizzLevel) -> Vec<&'static PickupLine> {
    ALL_PICKUP_LINES
        .iter()
        .filter(|l| l.rizz_level == level)
        .collect()
}
