//! Maps input lines to session commands.
//!
//! Browsing keys follow the web version's shortcuts: flip, arrows, `r`, `s`,
//! `c`, `a` and Escape. While check mode is active the answer box has focus,
//! so every line is a guess except the two reserved exits.

/// A single user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Flip,
    Next,
    Prev,
    Reverse,
    Shuffle,
    ToggleCheck,
    ExitCheck,
    /// Start reading vocabulary lines until a blank line.
    Add,
    Delete(String),
    List,
    ToggleListVisibility,
    SwitchListMode,
    Reveal(String),
    /// Text typed into the answer box; Enter on a shown result advances.
    Answer(String),
    Help,
    Quit,
    Unknown(String),
}

/// Parse a line typed while browsing cards.
pub fn parse_browse(line: &str) -> Command {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match (head, rest) {
        ("", _) | ("n" | "next" | "right", "") => Command::Next,
        ("f" | "flip" | "space", "") => Command::Flip,
        ("p" | "prev" | "left", "") => Command::Prev,
        ("r" | "reverse", "") => Command::Reverse,
        ("s" | "shuffle", "") => Command::Shuffle,
        ("c" | "check", "") => Command::ToggleCheck,
        ("esc", "") => Command::ExitCheck,
        ("a" | "add", "") => Command::Add,
        ("d" | "del" | "delete", word) if !word.is_empty() => Command::Delete(word.to_string()),
        ("l" | "list", "") => Command::List,
        ("v" | "visibility", "") => Command::ToggleListVisibility,
        ("m" | "mode", "") => Command::SwitchListMode,
        ("show", word) if !word.is_empty() => Command::Reveal(word.to_string()),
        ("h" | "help" | "?", "") => Command::Help,
        ("q" | "quit", "") => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

/// Parse a line typed into the answer box during check mode.
pub fn parse_answer(line: &str) -> Command {
    match line.trim() {
        "esc" => Command::ExitCheck,
        ":quit" => Command::Quit,
        _ => Command::Answer(line.to_string()),
    }
}

pub const HELP: &str = "\
browse:  [enter]/n next   p prev   f flip   r reverse   s shuffle   c check
         a add   d <word> delete   l list   v hide/show   m switch column
         show <word> reveal   q quit
check:   type the word and press enter, enter again to continue
         esc leave check mode   :quit exit";
