use std::fmt::{Debug, Display};

use crate::alphabet::{END_MARKER, EPSILON};

/// A sealed input word: the literal symbols to be consumed, followed by the reserved
/// [`END_MARKER`]. The empty word cannot be entered as an empty line in the textual format, it is
/// written as the reserved token `~` instead; [`Input::parse`] performs that mapping, while
/// [`Input::literal`] takes its argument at face value. Note that after sealing the two coincide
/// for a lone `~`: `literal("~")` produces the same `['~', '$']` sequence as [`Input::empty`] and
/// is treated as the empty word by the simulation.
///
/// Sealing happens on construction, so the search never has to reason about a marker-less word.
///
/// # Example
/// ```
/// use nfa_paths::word::Input;
///
/// assert_eq!(Input::literal("ab").symbols(), &['a', 'b', '$']);
/// assert!(Input::parse("~").is_empty_word());
/// assert!(!Input::parse("a").is_empty_word());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Input {
    sealed: Vec<char>,
    text: String,
}

impl Input {
    /// Seals the given literal symbols, appending the end-of-input marker.
    pub fn literal(word: &str) -> Self {
        Self {
            sealed: word.chars().chain(std::iter::once(END_MARKER)).collect(),
            text: word.to_string(),
        }
    }

    /// The empty word, represented by the reserved token `~`.
    pub fn empty() -> Self {
        Self {
            sealed: vec![EPSILON, END_MARKER],
            text: EPSILON.to_string(),
        }
    }

    /// Seals user-entered text, mapping the reserved token `~` to the empty word.
    pub fn parse(text: &str) -> Self {
        if text.chars().eq(std::iter::once(EPSILON)) {
            Self::empty()
        } else {
            Self::literal(text)
        }
    }

    /// The sealed symbol sequence, end-of-input marker included.
    pub fn symbols(&self) -> &[char] {
        &self.sealed
    }

    /// Whether this input denotes the empty word.
    pub fn is_empty_word(&self) -> bool {
        self.sealed == [EPSILON, END_MARKER]
    }

    /// The text this input was sealed from, without the end-of-input marker. For the empty word
    /// this is the reserved token `~`, matching what goes into file names and output records.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.sealed.iter().collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sealing_appends_marker() {
        assert_eq!(Input::literal("ab").symbols(), &['a', 'b', '$']);
        assert_eq!(Input::literal("").symbols(), &['$']);
    }

    #[test]
    fn empty_word_token() {
        assert_eq!(Input::empty().symbols(), &['~', '$']);
        assert_eq!(Input::parse("~"), Input::empty());
        assert_eq!(Input::empty().text(), "~");
        // a lone ~ seals to the same sequence as the empty word, literal or not
        assert!(Input::literal("~").is_empty_word());
        // a longer word containing ~ is taken literally
        assert!(!Input::parse("~a").is_empty_word());
    }
}
