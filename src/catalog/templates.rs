/// Category a message template is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Romantic,
    Sweet,
    Funny,
    Poetic,
    Friendship,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Romantic,
        Category::Sweet,
        Category::Funny,
        Category::Poetic,
        Category::Friendship,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Romantic => "Romantic",
            Category::Sweet => "Sweet",
            Category::Funny => "Funny",
            Category::Poetic => "Poetic",
            Category::Friendship => "Friendship",
        }
    }
}

/// A predefined message body offered as a starting point for composition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageTemplate {
    pub category: Category,
    pub text: &'static str,
    pub emoji: &'static str,
}

const fn template(category: Category, text: &'static str, emoji: &'static str) -> MessageTemplate {
    MessageTemplate {
        category,
        text,
        emoji,
    }
}

/// Full template catalog in declared order. Every category has at least
/// one entry.
pub const ALL_TEMPLATES: &[MessageTemplate] = &[
    // Romantic
    template(
        Category::Romantic,
        "Every love story is beautiful, but ours is my favorite.",
        "💕",
    ),
    template(
        Category::Romantic,
        "You are my today and all of my tomorrows.",
        "🌹",
    ),
    template(
        Category::Romantic,
        "In a sea of people, my eyes will always search for you.",
        "👀",
    ),
    template(
        Category::Romantic,
        "I fell in love with you because of a million tiny things you never knew you were doing.",
        "✨",
    ),
    // Sweet
    template(Category::Sweet, "You make my heart smile.", "😊"),
    template(Category::Sweet, "Life is better with you in it.", "🌸"),
    template(
        Category::Sweet,
        "You are the reason I believe in love.",
        "💗",
    ),
    template(
        Category::Sweet,
        "Thinking of you always makes my day brighter.",
        "☀️",
    ),
    // Funny
    template(
        Category::Funny,
        "Are you a magician? Because whenever I look at you, everyone else disappears.",
        "🎩",
    ),
    template(
        Category::Funny,
        "I love you more than pizza. And that's saying a lot.",
        "🍕",
    ),
    template(Category::Funny, "You're the cheese to my macaroni.", "🧀"),
    template(
        Category::Funny,
        "If you were a vegetable, you'd be a cute-cumber.",
        "🥒",
    ),
    // Poetic
    template(
        Category::Poetic,
        "If I had a flower for every time you made me smile, I'd walk in an endless garden.",
        "🌺",
    ),
    template(
        Category::Poetic,
        "You are the poem I never knew how to write and the story I always wanted to read.",
        "📖",
    ),
    template(
        Category::Poetic,
        "My heart is, and always will be, yours.",
        "💞",
    ),
    // Friendship
    template(
        Category::Friendship,
        "A friend like you is a treasure beyond measure. Happy Valentine's Day!",
        "💝",
    ),
    template(
        Category::Friendship,
        "You make the world a better place just by being you.",
        "🌍",
    ),
    template(
        Category::Friendship,
        "Here's to the one who always has my back. Love you, friend!",
        "🤗",
    ),
];

/// Templates filed under `category`, preserving catalog order
pub fn templates(category: Category) -> Vec<MessageTemplate> {
    ALL_TEMPLATES
        .iter()
        .copied()
        .filter(|t| t.category == category)
        .collect()
}
