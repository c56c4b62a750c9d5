use lovenote::catalog::{Category, templates};
use lovenote::ops::letter::{LetterAnswers, LetterStyle, generate_letter};
use pretty_assertions::assert_eq;

fn sample_answers() -> LetterAnswers {
    LetterAnswers {
        memory: "we watched the sunset together".to_string(),
        smile: "you always laugh at my bad jokes".to_string(),
        love_most: "I trust you completely".to_string(),
        want_to_know: "I want you to feel loved every day".to_string(),
        future: "grow old together".to_string(),
    }
}

#[test]
fn heartfelt_second_paragraph_keeps_lowercase_answer() {
    let letter = generate_letter(LetterStyle::Heartfelt, "Sam", &sample_answers());
    let second = letter.split("\n\n").nth(1).unwrap();
    assert_eq!(
        second,
        "One of my favorite memories with you is we watched the sunset together. \
         Every time I think about it, it reminds me of how special what we have is."
    );
}

#[test]
fn heartfelt_preserves_capital_i_answers() {
    let letter = generate_letter(LetterStyle::Heartfelt, "Sam", &sample_answers());
    assert!(letter.contains("what I love most about you is that I trust you completely."));
    assert!(letter.contains("I want you to know that I want you to feel loved every day."));
}

#[test]
fn capitalized_answers_are_lowered_at_substitution() {
    let answers = LetterAnswers {
        memory: "That rainy afternoon in the bookshop".to_string(),
        ..sample_answers()
    };
    let letter = generate_letter(LetterStyle::Poetic, "Sam", &answers);
    assert!(letter.contains("the memory of that rainy afternoon in the bookshop,"));
}

#[test]
fn repeated_calls_are_byte_identical() {
    for style in LetterStyle::ALL {
        let first = generate_letter(style, "Sam", &sample_answers());
        let second = generate_letter(style, "Sam", &sample_answers());
        assert_eq!(first, second);
    }
}

#[test]
fn name_appears_in_every_style() {
    for style in LetterStyle::ALL {
        let letter = generate_letter(style, "Esmeralda", &sample_answers());
        assert!(letter.contains("Esmeralda"), "{:?}", style);
    }
}

#[test]
fn funny_catalog_scenario() {
    let funny = templates(Category::Funny);
    assert_eq!(funny.len(), 4);
    assert!(funny.iter().all(|t| t.category == Category::Funny));

    let texts: Vec<&str> = funny.iter().map(|t| t.text).collect();
    assert_eq!(
        texts,
        vec![
            "Are you a magician? Because whenever I look at you, everyone else disappears.",
            "I love you more than pizza. And that's saying a lot.",
            "You're the cheese to my macaroni.",
            "If you were a vegetable, you'd be a cute-cumber.",
        ]
    );
}
