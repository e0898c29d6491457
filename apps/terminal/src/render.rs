//! Plain-text and JSON rendering of view models.

use serde::Serialize;
use vocab_core::{CardView, CharMatch, ListEntry, QuizResult, QuizView};

const PROGRESS_WIDTH: usize = 20;

/// Everything shown after a command, for `--json` output.
#[derive(Debug, Serialize)]
pub struct Frame<'a> {
    pub card: &'a CardView,
    pub quiz: &'a QuizView,
}

pub fn frame_json(card: &CardView, quiz: &QuizView) -> serde_json::Result<String> {
    serde_json::to_string(&Frame { card, quiz })
}

fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * PROGRESS_WIDTH as f64).round() as usize;
    let filled = filled.min(PROGRESS_WIDTH);
    format!("{}{}", "#".repeat(filled), "-".repeat(PROGRESS_WIDTH - filled))
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

pub fn card(view: &CardView) -> String {
    if view.face.is_none() {
        return format!("  {}\n  (a to add vocabulary)", view.display_text);
    }
    format!(
        "[{:>9}] {}  shuffle:{} reverse:{}\n\n    {}\n",
        view.position_label,
        progress_bar(view.progress_percent),
        on_off(view.is_shuffled),
        on_off(view.is_reversed),
        view.display_text,
    )
}

/// Wrong characters are bracketed: `c[a]t`.
pub fn char_diff(chars: &[CharMatch]) -> String {
    chars
        .iter()
        .map(|c| {
            if c.matched {
                c.ch.to_string()
            } else {
                format!("[{}]", c.ch)
            }
        })
        .collect()
}

pub fn quiz_result(result: &QuizResult) -> String {
    match result {
        QuizResult::Correct { display_word } => format!("  correct: {display_word}  (enter to continue)"),
        QuizResult::Incorrect { per_character } => {
            format!("  wrong:   {}  (try again)", char_diff(per_character))
        }
    }
}

pub fn list(entries: &[ListEntry], toggle_label: &str) -> String {
    if entries.is_empty() {
        return "  (no vocabulary)".to_string();
    }
    let width = entries
        .iter()
        .filter_map(|e| e.word.as_ref())
        .map(|w| w.chars().count())
        .max()
        .unwrap_or(0)
        .max(5);

    let mut out = String::new();
    for entry in entries {
        let word = entry.word.as_deref().unwrap_or("?????");
        let definition = entry.definition.as_deref().unwrap_or("?????");
        out.push_str(&format!("  {word:<width$}  {definition}\n"));
    }
    out.push_str(&format!("  (v: {toggle_label})"));
    out
}
