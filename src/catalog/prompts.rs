/// One step of the guided letter-builder flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterPrompt {
    pub question: &'static str,
    pub placeholder: &'static str,
    pub emoji: &'static str,
}

/// Prompts in presentation order. The first prompt collects the recipient
/// name; the remaining five map onto the fields of
/// [`LetterAnswers`](crate::ops::letter::LetterAnswers) in order.
pub const LETTER_PROMPTS: &[LetterPrompt] = &[
    LetterPrompt {
        question: "What's their name?",
        placeholder: "Their name...",
        emoji: "💕",
    },
    LetterPrompt {
        question: "What's your favorite memory together?",
        placeholder: "That time we...",
        emoji: "📸",
    },
    LetterPrompt {
        question: "What do they do that makes you smile?",
        placeholder: "The way they...",
        emoji: "😊",
    },
    LetterPrompt {
        question: "What do you love most about them?",
        placeholder: "I love that you...",
        emoji: "❤️",
    },
    LetterPrompt {
        question: "What do you want them to know?",
        placeholder: "I want you to know that...",
        emoji: "💬",
    },
    LetterPrompt {
        question: "What do you wish for your future together?",
        placeholder: "I hope we...",
        emoji: "🌠",
    },
];
