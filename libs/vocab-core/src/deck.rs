//! Deck navigation and mutation.

use tracing::{debug, trace};

use crate::parser;
use crate::session::Session;
use crate::types::{CardId, CardView, Face, NewCard, NO_CARDS_MESSAGE};

/// Operations on the deck of a borrowed [`Session`].
///
/// Every operation applies all of its flag resets before returning. Calls
/// that make no sense for the current state (moving past either end,
/// toggling an empty deck) do nothing.
pub struct DeckManager<'a> {
    session: &'a mut Session,
}

impl<'a> DeckManager<'a> {
    pub fn new(session: &'a mut Session) -> Self {
        Self { session }
    }

    /// Parse tab-separated lines and append the resulting cards.
    ///
    /// Returns how many cards were added. The position is left alone; call
    /// [`rewind`](Self::rewind) afterwards to show the first card.
    pub fn add_cards<I, S>(&mut self, lines: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.insert_all(parser::parse_lines(lines))
    }

    /// Parse a pasted block of vocabulary and append the cards.
    pub fn add_cards_from_text(&mut self, text: &str) -> usize {
        self.insert_all(parser::parse(text))
    }

    /// Append one fully annotated card.
    pub fn add_card(&mut self, card: NewCard) -> CardId {
        let id = self.session.insert(card);
        debug!(%id, "added card");
        id
    }

    fn insert_all(&mut self, cards: Vec<NewCard>) -> usize {
        let count = cards.len();
        for card in cards {
            self.session.insert(card);
        }
        debug!(count, total = self.session.len(), "added cards");
        count
    }

    /// Show the first card, front face up.
    pub fn rewind(&mut self) {
        self.session.rewind();
    }

    /// Remove the first card whose word equals `word` exactly.
    ///
    /// Returns the removed card's id, or `None` if no card matched.
    pub fn delete_card(&mut self, word: &str) -> Option<CardId> {
        let id = self
            .session
            .cards
            .iter()
            .find(|card| card.word == word)
            .map(|card| card.id)?;
        self.delete_card_by_id(id).then_some(id)
    }

    /// Remove the card with the given id. Returns whether a card was removed.
    pub fn delete_card_by_id(&mut self, id: CardId) -> bool {
        let Some(card) = self.session.remove(id) else {
            return false;
        };
        debug!(%id, word = %card.word, remaining = self.session.len(), "deleted card");

        if self.session.is_empty() {
            self.session.reset();
        } else {
            self.session.rewind();
        }
        true
    }

    /// Shuffle the deck, or restore entry order if already shuffled.
    pub fn toggle_shuffle(&mut self) {
        if self.session.is_empty() {
            return;
        }

        let session = &mut *self.session;
        match session.original_order.take() {
            Some(original) => {
                session.cards = original;
                session.flags.is_shuffled = false;
            }
            None => {
                session.original_order = Some(session.cards.clone());
                session.rng.shuffle(&mut session.cards);
                session.flags.is_shuffled = true;
            }
        }
        debug!(shuffled = session.flags.is_shuffled, "toggled shuffle");
        session.rewind();
    }

    /// Swap which face counts as the front.
    pub fn toggle_reverse(&mut self) {
        let reversed = !self.session.flags.is_reversed;
        self.set_reversed(reversed);
    }

    /// Set the reverse flag directly. Changing it rewinds to the first card.
    pub fn set_reversed(&mut self, reversed: bool) {
        if self.session.is_empty() || self.session.flags.is_reversed == reversed {
            return;
        }
        self.session.flags.is_reversed = reversed;
        debug!(reversed, "set reverse");
        self.session.rewind();
    }

    /// Move to the next card. Returns whether the position changed.
    pub fn next(&mut self) -> bool {
        match self.session.current_index {
            Some(idx) if idx + 1 < self.session.len() => {
                self.move_to(idx + 1);
                true
            }
            _ => false,
        }
    }

    /// Move to the previous card. Returns whether the position changed.
    pub fn prev(&mut self) -> bool {
        match self.session.current_index {
            Some(idx) if idx > 0 => {
                self.move_to(idx - 1);
                true
            }
            _ => false,
        }
    }

    fn move_to(&mut self, idx: usize) {
        self.session.current_index = Some(idx);
        self.session.flags.is_flipped = false;
        trace!(idx, "moved");
    }

    /// Turn the current card over.
    pub fn flip(&mut self) {
        if self.session.is_empty() {
            return;
        }
        self.session.flags.is_flipped = !self.session.flags.is_flipped;
    }

    /// Derive what should be shown for the current card.
    pub fn current_view(&self) -> CardView {
        current_view(self.session)
    }
}

/// Pure view derivation, usable with a shared borrow of the session.
pub fn current_view(session: &Session) -> CardView {
    let flags = session.flags();
    let has_cards = !session.is_empty();

    let (display_text, face, position_label, progress_percent, can_go_prev, can_go_next) =
        match (session.current_index(), session.current_card()) {
            (Some(idx), Some(card)) => {
                let count = session.len();
                let face = if flags.is_flipped ^ flags.is_reversed {
                    Face::Definition
                } else {
                    Face::Word
                };
                let text = match face {
                    Face::Word => card.word.clone(),
                    Face::Definition => card.definition_face(),
                };
                (
                    text,
                    Some(face),
                    format!("{} / {}", idx + 1, count),
                    (idx + 1) as f64 / count as f64 * 100.0,
                    idx > 0,
                    idx + 1 < count,
                )
            }
            _ => (NO_CARDS_MESSAGE.to_string(), None, String::new(), 0.0, false, false),
        };

    CardView {
        display_text,
        face,
        position_label,
        progress_percent,
        can_go_prev,
        can_go_next,
        can_shuffle: has_cards,
        can_reverse: has_cards,
        can_check: has_cards,
        flip_enabled: session.flip_enabled(),
        is_shuffled: flags.is_shuffled,
        is_reversed: flags.is_reversed,
    }
}
