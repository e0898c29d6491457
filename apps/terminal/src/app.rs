//! Event dispatcher: applies commands to the session and prints the result.

use std::io::Write;

use anyhow::Result;
use tracing::{debug, info};
use vocab_core::{
    current_view, quiz_view, AdvanceAction, DeckManager, ListVisibility, QuizEngine, Session,
};

use crate::keymap::{self, Command};
use crate::render;

/// What the input loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Following lines are vocabulary until a blank line.
    ReadVocabulary,
    Quit,
}

pub struct App<W: Write> {
    session: Session,
    list: ListVisibility,
    json: bool,
    out: W,
}

impl<W: Write> App<W> {
    pub fn new(session: Session, json: bool, out: W) -> Self {
        Self {
            session,
            list: ListVisibility::new(),
            json,
            out,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Parse a line according to the current mode and apply it.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let command = if self.session.flags().is_check_mode {
            keymap::parse_answer(line)
        } else {
            keymap::parse_browse(line)
        };
        self.handle(command)
    }

    /// Add a pasted block of vocabulary and show the first card.
    pub fn add_vocabulary(&mut self, text: &str) -> Result<usize> {
        let mut deck = DeckManager::new(&mut self.session);
        let added = deck.add_cards_from_text(text);
        deck.rewind();
        info!(added, total = self.session.len(), "vocabulary added");

        if !self.json {
            writeln!(self.out, "  added {added} card(s)")?;
        }
        self.show()?;
        Ok(added)
    }

    pub fn handle(&mut self, command: Command) -> Result<Flow> {
        debug!(?command, "handling command");
        match command {
            Command::Flip => {
                if self.session.flip_enabled() {
                    DeckManager::new(&mut self.session).flip();
                }
            }
            Command::Next => {
                DeckManager::new(&mut self.session).next();
            }
            Command::Prev => {
                DeckManager::new(&mut self.session).prev();
            }
            Command::Reverse => DeckManager::new(&mut self.session).toggle_reverse(),
            Command::Shuffle => DeckManager::new(&mut self.session).toggle_shuffle(),
            Command::ToggleCheck => {
                if let Err(err) = QuizEngine::new(&mut self.session).toggle_check_mode() {
                    writeln!(self.out, "  {err}")?;
                    return Ok(Flow::Continue);
                }
            }
            Command::ExitCheck => QuizEngine::new(&mut self.session).exit_check_mode(),
            Command::Add => {
                writeln!(self.out, "  paste word<TAB>definition lines, blank line to finish")?;
                return Ok(Flow::ReadVocabulary);
            }
            Command::Delete(word) => {
                if DeckManager::new(&mut self.session).delete_card(&word).is_none() {
                    writeln!(self.out, "  no card named {word:?}")?;
                }
            }
            Command::List => {
                self.show_list()?;
                return Ok(Flow::Continue);
            }
            Command::ToggleListVisibility => {
                self.list.toggle_visibility();
                self.show_list()?;
                return Ok(Flow::Continue);
            }
            Command::SwitchListMode => {
                self.list.switch_mode();
                self.show_list()?;
                return Ok(Flow::Continue);
            }
            Command::Reveal(word) => {
                let id = self
                    .session
                    .cards_in_entry_order()
                    .iter()
                    .find(|card| card.word == word)
                    .map(|card| card.id);
                if let Some(id) = id {
                    self.list.reveal(id);
                }
                self.show_list()?;
                return Ok(Flow::Continue);
            }
            Command::Answer(text) => return self.answer(&text),
            Command::Help => {
                writeln!(self.out, "{}", keymap::HELP)?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(text) => {
                writeln!(self.out, "  unknown command {text:?} (h for help)")?;
                return Ok(Flow::Continue);
            }
        }
        self.show()?;
        Ok(Flow::Continue)
    }

    /// Enter in the answer box: check the guess, or move past a shown result.
    fn answer(&mut self, text: &str) -> Result<Flow> {
        let mut quiz = QuizEngine::new(&mut self.session);
        if quiz.view().showing_result {
            if quiz.advance() == Some(AdvanceAction::Exit) {
                quiz.exit_check_mode();
            }
        } else {
            quiz.submit_guess(text);
        }
        self.show()?;
        Ok(Flow::Continue)
    }

    pub fn show(&mut self) -> Result<()> {
        let card = current_view(&self.session);
        let quiz = quiz_view(&self.session);

        if self.json {
            writeln!(self.out, "{}", render::frame_json(&card, &quiz)?)?;
            return Ok(());
        }

        writeln!(self.out, "{}", render::card(&card))?;
        if let Some(result) = &quiz.result {
            writeln!(self.out, "{}", render::quiz_result(result))?;
        }
        if quiz.active && !quiz.showing_result {
            write!(self.out, "  answer> ")?;
        } else {
            write!(self.out, "> ")?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn show_list(&mut self) -> Result<()> {
        let entries = self.list.entries(&self.session);
        if self.json {
            writeln!(self.out, "{}", serde_json::to_string(&entries)?)?;
        } else {
            writeln!(self.out, "{}", render::list(&entries, self.list.toggle_label()))?;
        }
        Ok(())
    }
}
