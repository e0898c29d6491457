//! Parser for pasted vocabulary.
//!
//! # Format
//! ```text
//! cat	feline animal
//! run	to move fast	to operate
//! ```
//!
//! One card per line, fields separated by tabs. The first field is the word,
//! the remaining fields are joined with `" | "` into the definition. Fields
//! are trimmed, and lines with fewer than two non-empty fields are skipped.

use crate::types::{NewCard, DEFINITION_SEPARATOR};

/// Parse a single line into a card, or `None` if it is not a vocabulary line.
pub fn parse_line(line: &str) -> Option<NewCard> {
    let parts: Vec<&str> = line
        .split('\t')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    match parts.split_first() {
        Some((word, rest)) if !rest.is_empty() => {
            Some(NewCard::new(*word, rest.join(DEFINITION_SEPARATOR)))
        }
        _ => None,
    }
}

/// Parse lines into cards, dropping lines that are not vocabulary.
pub fn parse_lines<I, S>(lines: I) -> Vec<NewCard>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let parsed = parse_line(line.as_ref());
            if parsed.is_none() {
                tracing::debug!(line = line.as_ref(), "skipping non-vocabulary line");
            }
            parsed
        })
        .collect()
}

/// Parse a pasted block of text.
///
/// The block is trimmed as a whole before splitting into lines, so leading
/// and trailing blank lines never reach the line parser.
pub fn parse(content: &str) -> Vec<NewCard> {
    let content = content.trim();
    if content.is_empty() {
        return vec![];
    }
    parse_lines(content.lines())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_single_line() {
        let card = parse_line("cat\tfeline animal").unwrap();
        assert_eq!(card, NewCard::new("cat", "feline animal"));
    }

    #[test]
    fn parse_multiple_definitions() {
        let card = parse_line("run\tto move fast\tto operate").unwrap();
        assert_eq!(card.word, "run");
        assert_eq!(card.definition, "to move fast | to operate");
    }

    #[test]
    fn skip_single_token() {
        assert_eq!(parse_line("onlyoneword"), None);
    }

    #[test]
    fn skip_empty_line() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("\t\t"), None);
    }

    #[test]
    fn extra_tabs_are_ignored() {
        let card = parse_line("\tcat\t\t\tfeline\t").unwrap();
        assert_eq!(card, NewCard::new("cat", "feline"));
    }

    #[test]
    fn whitespace_only_tokens_are_dropped() {
        assert_eq!(parse_line("cat\t   "), None);
    }

    #[test]
    fn fields_are_trimmed() {
        let card = parse_line("cat \t feline \t animal ").unwrap();
        assert_eq!(card, NewCard::new("cat", "feline | animal"));
    }

    #[test]
    fn space_separated_is_not_vocabulary() {
        assert_eq!(parse_line("cat feline animal"), None);
    }

    #[test]
    fn parse_block_skips_noise() {
        let input = "\n\ncat\tfeline\nnoise\ndog\tcanine\n\n";
        let cards = parse(input);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].word, "cat");
        assert_eq!(cards[1].word, "dog");
    }

    #[test]
    fn parse_empty_content() {
        assert!(parse("").is_empty());
        assert!(parse("   \n  ").is_empty());
    }
}
