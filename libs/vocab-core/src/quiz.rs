//! Check mode: type the word for the definition shown.

use tracing::debug;

use crate::deck::DeckManager;
use crate::error::{Result, SessionError};
use crate::matching::compare_guess;
use crate::session::Session;
use crate::types::{AdvanceAction, QuizResult, QuizView};

/// Check-mode lifecycle and guess scoring over a borrowed [`Session`].
pub struct QuizEngine<'a> {
    session: &'a mut Session,
}

impl<'a> QuizEngine<'a> {
    pub fn new(session: &'a mut Session) -> Self {
        Self { session }
    }

    fn deck(&mut self) -> DeckManager<'_> {
        DeckManager::new(self.session)
    }

    /// Start quizzing. The definition face is forced to the front.
    ///
    /// Fails without touching any flag when the deck is empty.
    pub fn enter_check_mode(&mut self) -> Result<()> {
        if self.session.is_empty() {
            return Err(SessionError::InvalidState("cannot enter check mode with an empty deck"));
        }
        if self.session.flags.is_check_mode {
            return Ok(());
        }

        self.session.flags.is_check_mode = true;
        self.session.flags.is_showing_result = false;
        self.session.last_result = None;

        if !self.session.flags.is_reversed {
            self.deck().set_reversed(true);
            self.session.reverse_forced = true;
        }
        debug!(forced_reverse = self.session.reverse_forced, "entered check mode");
        Ok(())
    }

    /// Stop quizzing and go back to the first card.
    pub fn exit_check_mode(&mut self) {
        if !self.session.flags.is_check_mode {
            return;
        }

        self.session.flags.is_check_mode = false;
        self.session.flags.is_showing_result = false;
        self.session.last_result = None;

        if std::mem::take(&mut self.session.reverse_forced) {
            self.deck().set_reversed(false);
        }
        self.session.rewind();
        debug!("exited check mode");
    }

    /// Enter check mode if inactive, exit if active.
    pub fn toggle_check_mode(&mut self) -> Result<()> {
        if self.session.flags.is_check_mode {
            self.exit_check_mode();
            Ok(())
        } else {
            self.enter_check_mode()
        }
    }

    /// Score a guess against the current card's word.
    ///
    /// Returns `None` when not in check mode or while a correct result is
    /// still on screen.
    pub fn submit_guess(&mut self, raw: &str) -> Option<QuizResult> {
        let flags = self.session.flags;
        if !flags.is_check_mode || flags.is_showing_result {
            return None;
        }

        let card = self.session.current_card()?;
        let result = compare_guess(raw, &card.word);
        debug!(word = %card.word, correct = result.is_correct(), "scored guess");

        self.session.flags.is_showing_result = result.is_correct();
        self.session.last_result = Some(result.clone());
        Some(result)
    }

    /// Move past a shown result.
    ///
    /// Returns `None` unless a correct result is on screen. At the last card
    /// the caller is told to exit check mode instead.
    pub fn advance(&mut self) -> Option<AdvanceAction> {
        if !self.session.flags.is_showing_result {
            return None;
        }
        self.session.flags.is_showing_result = false;

        if self.deck().next() {
            self.session.last_result = None;
            Some(AdvanceAction::Advanced)
        } else {
            Some(AdvanceAction::Exit)
        }
    }

    pub fn view(&self) -> QuizView {
        quiz_view(self.session)
    }
}

/// Check-mode view, usable with a shared borrow of the session.
pub fn quiz_view(session: &Session) -> QuizView {
    let flags = session.flags();
    QuizView {
        active: flags.is_check_mode,
        showing_result: flags.is_showing_result,
        result: session.last_result().cloned(),
    }
}
