//! Answer matching for check mode.

use crate::types::{CharMatch, QuizResult};

/// Normalize a typed guess: trim surrounding whitespace and lower-case.
fn normalize_guess(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Compare a typed guess to the card's word.
///
/// Matching is case-insensitive and exact after trimming the guess. A wrong
/// guess is reported as a character diff against the correct word.
pub fn compare_guess(raw: &str, word: &str) -> QuizResult {
    let guess = normalize_guess(raw);
    let correct = word.to_lowercase();

    if guess == correct {
        QuizResult::Correct {
            display_word: word.to_string(),
        }
    } else {
        QuizResult::Incorrect {
            per_character: char_diff(&guess, &correct),
        }
    }
}

/// Position-by-position diff of `guess` against `correct`.
///
/// The output has one entry per character of `correct`. Positions past the
/// end of `guess` are unmatched; extra characters in `guess` are not shown.
pub fn char_diff(guess: &str, correct: &str) -> Vec<CharMatch> {
    let mut guess_chars = guess.chars();
    correct
        .chars()
        .map(|ch| CharMatch {
            ch,
            matched: guess_chars.next() == Some(ch),
        })
        .collect()
}
