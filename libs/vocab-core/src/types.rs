//! Core types for the vocabulary flashcard session.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text shown on the card face when the deck has no cards.
pub const NO_CARDS_MESSAGE: &str = "No cards available";

/// Separator placed between sub-definitions of one card.
pub const DEFINITION_SEPARATOR: &str = " | ";

/// Stable identity of a card within a session.
///
/// Assigned on insertion and never reused, so two cards with the same word
/// can still be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u64);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A word/definition pair with optional annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub word: String,
    pub definition: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub word_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl Card {
    /// Compose the definition face: type, phonetic, definition, example.
    ///
    /// Absent or empty annotations are left out entirely rather than
    /// rendered blank.
    pub fn definition_face(&self) -> String {
        [
            self.word_type.as_deref(),
            self.phonetic.as_deref(),
            Some(self.definition.as_str()),
            self.example.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|field| !field.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Card content before the session assigns it an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCard {
    pub word: String,
    pub definition: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub word_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl NewCard {
    /// Create a card with only word and definition set.
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
            word_type: None,
            phonetic: None,
            example: None,
        }
    }

    pub fn with_type(mut self, word_type: impl Into<String>) -> Self {
        self.word_type = Some(word_type.into());
        self
    }

    pub fn with_phonetic(mut self, phonetic: impl Into<String>) -> Self {
        self.phonetic = Some(phonetic.into());
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }
}

/// Which side of the card is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    Word,
    Definition,
}

/// Everything the renderer needs to draw the card area and its controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub display_text: String,
    pub face: Option<Face>,
    /// "3 / 10", empty when the deck is empty.
    pub position_label: String,
    pub progress_percent: f64,
    pub can_go_prev: bool,
    pub can_go_next: bool,
    pub can_shuffle: bool,
    pub can_reverse: bool,
    pub can_check: bool,
    pub flip_enabled: bool,
    pub is_shuffled: bool,
    pub is_reversed: bool,
}

/// One character of the correct word in an incorrect-guess diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharMatch {
    pub ch: char,
    pub matched: bool,
}

/// Outcome of a single guess in check mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum QuizResult {
    Correct { display_word: String },
    Incorrect { per_character: Vec<CharMatch> },
}

impl QuizResult {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct { .. })
    }
}

/// What the caller should do after Enter is pressed on a shown result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvanceAction {
    /// Moved on to the next card.
    Advanced,
    /// Already at the last card; the caller should exit check mode.
    Exit,
}

/// Check-mode state for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizView {
    pub active: bool,
    pub showing_result: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<QuizResult>,
}

/// Session configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Seed for the shuffle RNG. `None` seeds from OS entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shuffle_seed: Option<u64>,
}
