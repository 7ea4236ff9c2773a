use std::fmt::{Debug, Display};

/// The reserved epsilon marker. As a transition label it denotes a transition that consumes no
/// input; as a full input word it denotes the empty word.
pub const EPSILON: char = '~';

/// The reserved end-of-input marker appended to every sealed [`Input`](crate::word::Input). It
/// lets the search distinguish "no symbols remain" from the empty word and must therefore never
/// occur as an alphabet symbol.
pub const END_MARKER: char = '$';

/// Returns whether `chr` is one of the reserved characters and may consequently not be declared
/// as an alphabet symbol or used as a symbol label.
pub fn is_reserved(chr: char) -> bool {
    chr == EPSILON || chr == END_MARKER
}

/// The label of a transition. Either the distinguished epsilon marker, meaning the transition is
/// taken without consuming input, or a single input symbol that must match the next unconsumed
/// character of the word.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// An input-free transition.
    Epsilon,
    /// A transition consuming precisely the given symbol.
    Symbol(char),
}

impl Label {
    /// Returns the symbol carried by `self`, if it is not epsilon.
    pub fn symbol(&self) -> Option<char> {
        match self {
            Label::Epsilon => None,
            Label::Symbol(chr) => Some(*chr),
        }
    }

    /// True if and only if `self` is the epsilon label.
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Label::Epsilon)
    }
}

impl From<char> for Label {
    fn from(chr: char) -> Self {
        if chr == EPSILON {
            Label::Epsilon
        } else {
            Label::Symbol(chr)
        }
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Epsilon => write!(f, "{EPSILON}"),
            Label::Symbol(chr) => write!(f, "{chr}"),
        }
    }
}

impl Debug for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Epsilon => write!(f, "ε"),
            Label::Symbol(chr) => write!(f, "'{chr}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_from_char() {
        assert_eq!(Label::from('a'), Label::Symbol('a'));
        assert_eq!(Label::from('~'), Label::Epsilon);
        assert!(Label::from('~').is_epsilon());
        assert_eq!(Label::Symbol('b').symbol(), Some('b'));
    }

    #[test]
    fn reserved_characters() {
        assert!(is_reserved('~'));
        assert!(is_reserved('$'));
        assert!(!is_reserved('a'));
    }
}
