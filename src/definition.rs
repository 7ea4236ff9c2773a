use std::path::Path;

use itertools::Itertools;
use tracing::{debug, info};

use crate::alphabet::Label;
use crate::nfa::{MalformedDefinition, Nfa, NfaBuilder};

/// Represents the types of errors that can occur when loading an automaton definition from its
/// textual format.
#[derive(Debug)]
pub enum DefinitionError {
    /// The definition file could not be read.
    Io(std::io::Error),
    /// The definition ended before all five metadata lines (name, states, alphabet, start state,
    /// accept states) were seen.
    TruncatedHeader {
        /// How many metadata lines were present.
        lines: usize,
    },
    /// An alphabet symbol or transition label field did not hold exactly one character.
    BadSymbol {
        /// One-based line number of the offending field.
        line: usize,
        /// The field as it appeared in the definition.
        field: String,
    },
    /// A transition line held fewer than the three `source,label,destination` fields.
    MalformedTransition {
        /// One-based line number of the offending record.
        line: usize,
        /// The record as it appeared in the definition.
        text: String,
    },
    /// The parsed fields did not form a valid automaton.
    Malformed(MalformedDefinition),
}

impl std::fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefinitionError::Io(err) => write!(f, "could not read definition: {err}"),
            DefinitionError::TruncatedHeader { lines } => {
                write!(f, "definition holds only {lines} of the 5 metadata lines")
            }
            DefinitionError::BadSymbol { line, field } => {
                write!(f, "line {line}: \"{field}\" is not a single input symbol")
            }
            DefinitionError::MalformedTransition { line, text } => {
                write!(f, "line {line}: \"{text}\" is not a source,label,destination triple")
            }
            DefinitionError::Malformed(err) => write!(f, "invalid automaton: {err}"),
        }
    }
}

impl std::error::Error for DefinitionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DefinitionError::Io(err) => Some(err),
            DefinitionError::Malformed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DefinitionError {
    fn from(err: std::io::Error) -> Self {
        DefinitionError::Io(err)
    }
}

impl From<MalformedDefinition> for DefinitionError {
    fn from(err: MalformedDefinition) -> Self {
        DefinitionError::Malformed(err)
    }
}

/// Splits a metadata line into its non-empty, trimmed fields. Trailing commas are common in
/// hand-written definitions and must not produce phantom empty entries.
fn fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(',').map(str::trim).filter(|field| !field.is_empty())
}

fn single_char(field: &str, line: usize) -> Result<char, DefinitionError> {
    field.chars().exactly_one().map_err(|_| DefinitionError::BadSymbol {
        line,
        field: field.to_string(),
    })
}

/// Parses the CSV-like definition format into a validated [`Nfa`].
///
/// The first five lines are metadata: the machine name, the comma-separated state names, the
/// comma-separated single-character alphabet, the start state and the (possibly empty)
/// comma-separated accept states. Every further non-empty line is one transition record
/// `source,label,destination`, where the reserved label `~` marks an epsilon transition.
/// Transitions keep their file order, which fixes the exploration order of the simulation.
///
/// # Example
/// ```
/// use nfa_paths::prelude::*;
///
/// let nfa = parse_definition("M\nq0,q1\na\nq0\nq1\nq0,a,q1\nq0,~,q1\n").unwrap();
/// assert_eq!(nfa.name(), "M");
/// assert_eq!(nfa.size(), 2);
/// ```
pub fn parse_definition(text: &str) -> Result<Nfa, DefinitionError> {
    let mut lines = text.lines();
    let mut header = Vec::with_capacity(5);
    for _ in 0..5 {
        match lines.next() {
            Some(line) => header.push(line),
            None => return Err(DefinitionError::TruncatedHeader { lines: header.len() }),
        }
    }

    let name = header[0].split(',').next().unwrap_or_default().trim();
    let symbols = fields(header[2])
        .map(|field| single_char(field, 3))
        .collect::<Result<Vec<_>, _>>()?;
    let initial = header[3].split(',').next().unwrap_or_default().trim();

    let mut builder = NfaBuilder::default()
        .named(name)
        .with_states(fields(header[1]))
        .with_symbols(symbols)
        .with_initial(initial)
        .with_accepting(fields(header[4]));

    for (offset, line) in lines.enumerate() {
        let number = offset + 6;
        if line.trim().is_empty() {
            continue;
        }
        // extra fields beyond the triple are tolerated and ignored
        let (source, label, target) = line
            .splitn(4, ',')
            .map(str::trim)
            .take(3)
            .collect_tuple()
            .ok_or_else(|| DefinitionError::MalformedTransition {
                line: number,
                text: line.to_string(),
            })?;
        // `~` is a single character, so Label::from turns it into the epsilon label here
        let label = Label::from(single_char(label, number)?);
        builder = builder.with_transitions([(source, label, target)]);
    }

    debug!("parsed definition of \"{name}\"");
    Ok(builder.build()?)
}

/// Reads and parses an automaton definition from a file.
pub fn load_definition(path: impl AsRef<Path>) -> Result<Nfa, DefinitionError> {
    let path = path.as_ref();
    debug!("loading NFA definition from {}", path.display());
    let nfa = parse_definition(&std::fs::read_to_string(path)?)?;
    info!(
        "loaded NFA \"{}\" with {} states from {}",
        nfa.name(),
        nfa.size(),
        path.display()
    );
    Ok(nfa)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MACHINE: &str = "M1,\nq0,q1,q2,\na,b,\nq0,\nq2,\nq0,a,q1\nq0,~,q2\nq1,b,q2\n";

    #[test]
    fn parses_complete_definition() {
        let nfa = parse_definition(MACHINE).unwrap();
        assert_eq!(nfa.name(), "M1");
        assert_eq!(nfa.size(), 3);
        assert_eq!(nfa.initial(), nfa.state_id("q0").unwrap());
        assert!(nfa.is_accepting(nfa.state_id("q2").unwrap()));
        assert!(nfa.alphabet().contains(&'a') && nfa.alphabet().contains(&'b'));
        assert_eq!(nfa.transitions_from(nfa.initial()).len(), 2);
        assert_eq!(
            nfa.transitions_from(nfa.initial())[1],
            (Label::Epsilon, nfa.state_id("q2").unwrap())
        );
    }

    #[test]
    fn accept_state_line_may_be_empty() {
        let nfa = parse_definition("M\nq0\na\nq0\n\nq0,a,q0\n").unwrap();
        assert!(!nfa.is_accepting(nfa.initial()));
    }

    #[test]
    fn truncated_header_is_rejected() {
        assert!(matches!(
            parse_definition("M\nq0\na\n"),
            Err(DefinitionError::TruncatedHeader { lines: 3 })
        ));
    }

    #[test]
    fn malformed_transition_is_rejected() {
        assert!(matches!(
            parse_definition("M\nq0\na\nq0\nq0\nq0,a\n"),
            Err(DefinitionError::MalformedTransition { line: 6, .. })
        ));
    }

    #[test]
    fn multi_character_symbol_is_rejected() {
        assert!(matches!(
            parse_definition("M\nq0\nab\nq0\nq0\n"),
            Err(DefinitionError::BadSymbol { line: 3, .. })
        ));
        assert!(matches!(
            parse_definition("M\nq0\na\nq0\nq0\nq0,ab,q0\n"),
            Err(DefinitionError::BadSymbol { line: 6, .. })
        ));
    }

    #[test]
    fn undeclared_references_surface_from_construction() {
        assert!(matches!(
            parse_definition("M\nq0\na\nq0\nq0\nq0,a,q9\n"),
            Err(DefinitionError::Malformed(MalformedDefinition::UndeclaredTarget(state))) if state == "q9"
        ));
    }
}
