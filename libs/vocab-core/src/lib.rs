//! Core library for the vocabulary flashcard study tool.
//!
//! Provides:
//! - Tab-separated vocabulary parser
//! - Session state (deck order, flip/reverse/shuffle/check flags)
//! - Deck Manager for navigation and deck mutation
//! - Quiz Engine for check mode and per-character answer diffs
//! - Vocabulary list visibility for self-testing
//! - View models for the rendering layer

pub mod deck;
pub mod error;
pub mod list;
pub mod matching;
pub mod parser;
pub mod quiz;
pub mod rng;
pub mod session;
pub mod types;

pub use deck::{current_view, DeckManager};
pub use error::{Result, SessionError};
pub use list::{ListEntry, ListMode, ListVisibility};
pub use matching::{char_diff, compare_guess};
pub use quiz::{quiz_view, QuizEngine};
pub use session::{Session, SessionFlags};
pub use types::{
    AdvanceAction, Card, CardId, CardView, CharMatch, Face, NewCard, QuizResult, QuizView,
    SessionSettings,
};
