use bit_set::BitSet;
use tracing::trace;

use crate::alphabet::{is_reserved, Label};
use crate::math::{Bijection, Set};

use super::{MalformedDefinition, Nfa, StateId};

/// Helper struct for the construction of an [`Nfa`]. It accumulates the declared states,
/// alphabet symbols, initial and accepting states and the transition list, and validates all
/// cross references when [`build`](NfaBuilder::build) is called.
///
/// Transitions are kept in the order they are given; the exhaustive search pops its frontier
/// LIFO, so out of a state the last-declared transition is explored first.
///
/// # Example
/// ```
/// use nfa_paths::prelude::*;
///
/// let nfa = NfaBuilder::default()
///     .named("two-way")
///     .with_states(["q0", "q1"])
///     .with_symbols(['a', 'b'])
///     .with_initial("q0")
///     .with_accepting(["q1"])
///     .with_transitions([("q0", 'a', "q1"), ("q0", 'b', "q0"), ("q0", '~', "q1")])
///     .build()
///     .unwrap();
/// assert_eq!(nfa.transitions_from(0).len(), 3);
/// ```
#[derive(Default)]
pub struct NfaBuilder {
    name: String,
    states: Vec<String>,
    symbols: Set<char>,
    initial: Option<String>,
    accepting: Vec<String>,
    transitions: Vec<(String, Label, String)>,
}

impl NfaBuilder {
    /// Sets the display name of the automaton.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Declares states. Ids are assigned in declaration order; duplicate names collapse onto
    /// their first declaration.
    pub fn with_states<S, I>(mut self, states: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Declares alphabet symbols. The alphabet is informational and not enforced at match time,
    /// but reserved characters are rejected on build.
    pub fn with_symbols<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.symbols.extend(symbols);
        self
    }

    /// Sets the initial state, which must be one of the declared states.
    pub fn with_initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declares accepting states, which must all be declared states. May be left empty.
    pub fn with_accepting<S, I>(mut self, states: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        self.accepting.extend(states.into_iter().map(Into::into));
        self
    }

    /// Adds transitions as `(source, label, target)` triples. Labels can be given as plain
    /// `char`s, where the reserved `~` denotes an epsilon transition.
    pub fn with_transitions<S, T, L, I>(mut self, transitions: I) -> Self
    where
        S: Into<String>,
        T: Into<String>,
        L: Into<Label>,
        I: IntoIterator<Item = (S, L, T)>,
    {
        self.transitions.extend(
            transitions
                .into_iter()
                .map(|(source, label, target)| (source.into(), label.into(), target.into())),
        );
        self
    }

    /// Validates the accumulated definition and creates an [`Nfa`] from it.
    pub fn build(self) -> Result<Nfa, MalformedDefinition> {
        for &chr in &self.symbols {
            if is_reserved(chr) {
                return Err(MalformedDefinition::ReservedSymbol(chr));
            }
        }

        let mut states: Bijection<String, StateId> = Bijection::new();
        for name in &self.states {
            if !states.contains_left(name) {
                let id = states.len() as StateId;
                states.insert(name.clone(), id);
            }
        }

        let initial = match self.initial {
            None => return Err(MalformedDefinition::NoInitial),
            Some(name) => *states
                .get_by_left(&name)
                .ok_or(MalformedDefinition::UndeclaredInitial(name))?,
        };

        let mut accepting = BitSet::with_capacity(states.len());
        for name in self.accepting {
            let id = *states
                .get_by_left(&name)
                .ok_or(MalformedDefinition::UndeclaredAccepting(name))?;
            accepting.insert(id as usize);
        }

        let mut edges = vec![Vec::new(); states.len()];
        for (source, label, target) in self.transitions {
            if let Some(chr) = label.symbol() {
                if is_reserved(chr) {
                    return Err(MalformedDefinition::ReservedSymbol(chr));
                }
            }
            let source = *states
                .get_by_left(&source)
                .ok_or(MalformedDefinition::UndeclaredSource(source))?;
            let target = *states
                .get_by_left(&target)
                .ok_or(MalformedDefinition::UndeclaredTarget(target))?;
            edges[source as usize].push((label, target));
        }

        trace!(
            "built NFA \"{}\" with {} states and {} transitions",
            self.name,
            states.len(),
            edges.iter().map(Vec::len).sum::<usize>()
        );

        Ok(Nfa {
            name: self.name,
            states,
            alphabet: self.symbols,
            initial,
            accepting,
            edges,
        })
    }
}
