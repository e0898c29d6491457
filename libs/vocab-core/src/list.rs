//! Vocabulary list shown alongside the cards.
//!
//! The list can hide one column at a time so the user can test themselves:
//! in `Definition` mode the definitions are hidden or shown, in `Vocabulary`
//! mode the words are. Single entries can be revealed while their column is
//! hidden.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::session::Session;
use crate::types::CardId;

/// Which column the visibility toggle controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListMode {
    #[default]
    Definition,
    Vocabulary,
}

/// One row of the vocabulary list. Hidden cells are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub id: CardId,
    pub word: Option<String>,
    pub definition: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListVisibility {
    mode: ListMode,
    definitions_visible: bool,
    words_visible: bool,
    revealed: HashSet<CardId>,
}

impl Default for ListVisibility {
    fn default() -> Self {
        Self {
            mode: ListMode::Definition,
            definitions_visible: true,
            words_visible: true,
            revealed: HashSet::new(),
        }
    }
}

impl ListVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ListMode {
        self.mode
    }

    pub fn definitions_visible(&self) -> bool {
        self.definitions_visible
    }

    pub fn words_visible(&self) -> bool {
        self.words_visible
    }

    /// Hide or show the column selected by the current mode.
    pub fn toggle_visibility(&mut self) {
        match self.mode {
            ListMode::Definition => self.definitions_visible = !self.definitions_visible,
            ListMode::Vocabulary => self.words_visible = !self.words_visible,
        }
        self.revealed.clear();
    }

    /// Switch the controlled column. The column being left is shown again.
    pub fn switch_mode(&mut self) {
        self.mode = match self.mode {
            ListMode::Definition => {
                self.definitions_visible = true;
                ListMode::Vocabulary
            }
            ListMode::Vocabulary => {
                self.words_visible = true;
                ListMode::Definition
            }
        };
        self.revealed.clear();
    }

    /// Show a single hidden entry until the column is toggled again.
    pub fn reveal(&mut self, id: CardId) {
        self.revealed.insert(id);
    }

    /// Label for the visibility toggle button.
    pub fn toggle_label(&self) -> &'static str {
        match (self.mode, self.definitions_visible, self.words_visible) {
            (ListMode::Definition, true, _) => "Hide Definition",
            (ListMode::Definition, false, _) => "Show Definition",
            (ListMode::Vocabulary, _, true) => "Hide Vocabulary",
            (ListMode::Vocabulary, _, false) => "Show Vocabulary",
        }
    }

    /// List rows in entry order with hidden cells blanked out.
    pub fn entries(&self, session: &Session) -> Vec<ListEntry> {
        session
            .cards_in_entry_order()
            .iter()
            .map(|card| {
                let revealed = self.revealed.contains(&card.id);
                ListEntry {
                    id: card.id,
                    word: (self.words_visible || revealed).then(|| card.word.clone()),
                    definition: (self.definitions_visible || revealed)
                        .then(|| card.definition.clone()),
                }
            })
            .collect()
    }
}
