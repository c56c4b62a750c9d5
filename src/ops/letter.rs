//! Deterministic love-letter generation.
//!
//! Three fixed multi-paragraph templates with the recipient name and five
//! free-text answers interpolated at fixed positions. The only text
//! normalization is lowercasing the first letter of each answer so it
//! reads naturally mid-sentence.

/// Tone of the generated letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterStyle {
    #[default]
    Heartfelt,
    Poetic,
    Playful,
}

impl LetterStyle {
    pub const ALL: [LetterStyle; 3] = [
        LetterStyle::Heartfelt,
        LetterStyle::Poetic,
        LetterStyle::Playful,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LetterStyle::Heartfelt => "Heartfelt",
            LetterStyle::Poetic => "Poetic",
            LetterStyle::Playful => "Playful",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            LetterStyle::Heartfelt => "💗",
            LetterStyle::Poetic => "🌹",
            LetterStyle::Playful => "😊",
        }
    }
}

/// The five free-text answers collected by the letter builder, as a named
/// record rather than a positionally indexed array
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterAnswers {
    /// Favorite memory together
    pub memory: String,
    /// What they do that makes you smile
    pub smile: String,
    /// What you love most about them
    pub love_most: String,
    /// What you want them to know
    pub want_to_know: String,
    /// What you wish for the future together
    pub future: String,
}

/// Generate the letter body for a style, name, and set of answers.
/// Pure and deterministic: identical inputs yield byte-identical output.
pub fn generate_letter(style: LetterStyle, recipient_name: &str, answers: &LetterAnswers) -> String {
    let memory = lowercase_first(&answers.memory);
    let smile = lowercase_first(&answers.smile);
    let love_most = lowercase_first(&answers.love_most);
    let want_to_know = lowercase_first(&answers.want_to_know);
    let future = lowercase_first(&answers.future);
    let name = recipient_name;

    match style {
        LetterStyle::Heartfelt => format!(
            concat!(
                "I've been thinking about you, and I couldn't let this Valentine's Day pass without telling you how I feel.\n\n",
                "One of my favorite memories with you is {memory}. Every time I think about it, it reminds me of how special what we have is.\n\n",
                "You probably don't even realize it, but {smile}. It's one of those little things that makes my whole day better.\n\n",
                "{name}, what I love most about you is that {love_most}. It's something I never want to take for granted.\n\n",
                "I want you to know that {want_to_know}. You deserve to hear that more often.\n\n",
                "When I think about the future, {future}. And honestly, I can't imagine it without you in it.",
            ),
            memory = memory,
            smile = smile,
            name = name,
            love_most = love_most,
            want_to_know = want_to_know,
            future = future,
        ),

        LetterStyle::Poetic => format!(
            concat!(
                "In the garden of my days, you are the bloom I never expected — the one that changed the entire landscape.\n\n",
                "I carry with me the memory of {memory}, like a pressed flower between the pages of my favorite book.\n\n",
                "There is a quiet magic in the way {smile} — a spell I never want to break.\n\n",
                "If I were to name the stars, {name}, I would name the brightest one after what I love most about you: {love_most}.\n\n",
                "Let these words find you softly: {want_to_know}. Let them settle into the spaces between your heartbeats.\n\n",
                "And for tomorrow, and all the tomorrows after — {future}. That is my wish, written in ink that will not fade.",
            ),
            memory = memory,
            smile = smile,
            name = name,
            love_most = love_most,
            want_to_know = want_to_know,
            future = future,
        ),

        LetterStyle::Playful => format!(
            concat!(
                "Okay so here's the thing — I tried to write you a normal Valentine's message but everything I wrote sounded boring compared to how I actually feel about you. So I'm just going to say it.\n\n",
                "Remember {memory}? Yeah, I think about that literally all the time. No big deal. (It's a very big deal.)\n\n",
                "Also, can we talk about how {smile}? Because honestly it's unfair how easily you make me happy.\n\n",
                "{name}, I love that {love_most}. Like, a lot. An embarrassing amount. Don't let it go to your head. (Let it go to your head a little.)\n\n",
                "Anyway, {want_to_know}. I mean it. For real for real.\n\n",
                "And if I'm being completely honest about the future? {future}. No pressure though. 😏",
            ),
            memory = memory,
            smile = smile,
            name = name,
            love_most = love_most,
            want_to_know = want_to_know,
            future = future,
        ),
    }
}

/// Full share text: salutation, generated body, and the fixed closing
pub fn format_letter(style: LetterStyle, recipient_name: &str, answers: &LetterAnswers) -> String {
    format!(
        "Dear {recipient_name},\n\n{}\n\nWith all my love,\nYour Secret Admirer ❤️",
        generate_letter(style, recipient_name, answers)
    )
}

/// Lowercase the first character of an answer so it reads mid-sentence.
/// Answers starting with the pronoun "I " or "I'" keep their capital.
fn lowercase_first(s: &str) -> String {
    if s.starts_with("I ") || s.starts_with("I'") {
        return s.to_string();
    }
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
