//! Study session state.
//!
//! A `Session` owns the deck and every mode flag. It is created by the caller
//! and lent to [`DeckManager`](crate::deck::DeckManager) and
//! [`QuizEngine`](crate::quiz::QuizEngine) for each operation.

use serde::Serialize;

use crate::rng::ShuffleRng;
use crate::types::{Card, CardId, NewCard, QuizResult, SessionSettings};

/// Mode flags of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionFlags {
    /// Showing the back of the current card.
    pub is_flipped: bool,
    /// Definition is the front face.
    pub is_reversed: bool,
    pub is_shuffled: bool,
    pub is_check_mode: bool,
    /// The last guess was correct and is on screen; Enter advances.
    pub is_showing_result: bool,
}

/// A single study session.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) cards: Vec<Card>,
    /// Insertion order, kept only while shuffled.
    pub(crate) original_order: Option<Vec<Card>>,
    pub(crate) current_index: Option<usize>,
    pub(crate) flags: SessionFlags,
    /// Check mode turned reverse on and must turn it off on exit.
    pub(crate) reverse_forced: bool,
    pub(crate) last_result: Option<QuizResult>,
    pub(crate) rng: ShuffleRng,
    next_id: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&SessionSettings::default())
    }
}

impl Session {
    pub fn new(settings: &SessionSettings) -> Self {
        let rng = match settings.shuffle_seed {
            Some(seed) => ShuffleRng::seeded(seed),
            None => ShuffleRng::from_entropy(),
        };
        Self {
            cards: Vec::new(),
            original_order: None,
            current_index: None,
            flags: SessionFlags::default(),
            reverse_forced: false,
            last_result: None,
            rng,
            next_id: 1,
        }
    }

    /// Session with a fixed shuffle seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(&SessionSettings {
            shuffle_seed: Some(seed),
        })
    }

    /// Cards in their current display order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards in insertion order, regardless of shuffling.
    pub fn cards_in_entry_order(&self) -> &[Card] {
        self.original_order.as_deref().unwrap_or(&self.cards)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.current_index.and_then(|idx| self.cards.get(idx))
    }

    pub fn flags(&self) -> SessionFlags {
        self.flags
    }

    /// Whether clicking the card should flip it. Disabled during check mode.
    pub fn flip_enabled(&self) -> bool {
        !self.flags.is_check_mode
    }

    pub fn last_result(&self) -> Option<&QuizResult> {
        self.last_result.as_ref()
    }

    /// Assign an id and append the card to the deck (and to the saved
    /// insertion order while shuffled).
    pub(crate) fn insert(&mut self, new: NewCard) -> CardId {
        let id = CardId(self.next_id);
        self.next_id += 1;

        let card = Card {
            id,
            word: new.word,
            definition: new.definition,
            word_type: new.word_type,
            phonetic: new.phonetic,
            example: new.example,
        };
        if let Some(original) = self.original_order.as_mut() {
            original.push(card.clone());
        }
        self.cards.push(card);

        if self.current_index.is_none() {
            self.current_index = Some(0);
        }
        id
    }

    /// Remove a card from the deck and from the saved insertion order.
    pub(crate) fn remove(&mut self, id: CardId) -> Option<Card> {
        let idx = self.cards.iter().position(|card| card.id == id)?;
        if let Some(original) = self.original_order.as_mut() {
            original.retain(|card| card.id != id);
        }
        Some(self.cards.remove(idx))
    }

    /// Back to the first card, front face up.
    ///
    /// A quiz result belongs to the card it was scored on, so it is dropped
    /// along with the old position.
    pub(crate) fn rewind(&mut self) {
        self.current_index = if self.cards.is_empty() { None } else { Some(0) };
        self.flags.is_flipped = false;
        self.flags.is_showing_result = false;
        self.last_result = None;
    }

    /// Clear every mode flag; used when the deck becomes empty.
    pub(crate) fn reset(&mut self) {
        self.original_order = None;
        self.current_index = None;
        self.flags = SessionFlags::default();
        self.reverse_forced = false;
        self.last_result = None;
    }
}
