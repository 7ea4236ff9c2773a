use bit_set::BitSet;

use crate::alphabet::Label;
use crate::math::{Bijection, Set};

mod builder;
pub use builder::NfaBuilder;

/// Interned state identifier. States are numbered in declaration order starting from zero; the
/// mapping back to the declared name is held by the owning [`Nfa`].
pub type StateId = u32;

/// Represents the types of errors that can occur when constructing an [`Nfa`] from its parts.
/// All of them are reference errors among the declared sets; a definition that passes
/// construction never fails later, the simulation itself is total.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum MalformedDefinition {
    /// No initial state was given.
    NoInitial,
    /// The initial state does not occur in the declared state set.
    UndeclaredInitial(String),
    /// An accepting state does not occur in the declared state set.
    UndeclaredAccepting(String),
    /// A transition leaves a state that does not occur in the declared state set.
    UndeclaredSource(String),
    /// A transition enters a state that does not occur in the declared state set.
    UndeclaredTarget(String),
    /// A reserved character (`~` or `$`) was declared as an alphabet symbol or used as a
    /// symbol label.
    ReservedSymbol(char),
}

impl std::fmt::Display for MalformedDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedDefinition::NoInitial => write!(f, "no initial state was given"),
            MalformedDefinition::UndeclaredInitial(state) => {
                write!(f, "initial state \"{state}\" is not a declared state")
            }
            MalformedDefinition::UndeclaredAccepting(state) => {
                write!(f, "accepting state \"{state}\" is not a declared state")
            }
            MalformedDefinition::UndeclaredSource(state) => {
                write!(f, "transition source \"{state}\" is not a declared state")
            }
            MalformedDefinition::UndeclaredTarget(state) => {
                write!(f, "transition target \"{state}\" is not a declared state")
            }
            MalformedDefinition::ReservedSymbol(chr) => {
                write!(f, "'{chr}' is reserved and cannot be used as an input symbol")
            }
        }
    }
}

impl std::error::Error for MalformedDefinition {}

/// A nondeterministic finite automaton, immutable after construction. State names are interned
/// into [`StateId`]s and the outgoing transitions of every state are kept in declaration order,
/// which the exhaustive search depends on for reproducible exploration order.
///
/// Construction (through [`NfaBuilder`]) validates that the initial state, every accepting state
/// and both endpoints of every transition are declared states. The alphabet on the other hand is
/// informational: matching during simulation is driven solely by the transition labels.
///
/// Since an `Nfa` holds no interior mutability, a single instance can back any number of
/// concurrent [`simulate`](Nfa::simulate) calls.
#[derive(Debug, Clone)]
pub struct Nfa {
    name: String,
    states: Bijection<String, StateId>,
    alphabet: Set<char>,
    initial: StateId,
    accepting: BitSet,
    edges: Vec<Vec<(Label, StateId)>>,
}

impl Nfa {
    /// The display name of the automaton. It has no semantic effect on simulation.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number of declared states.
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    /// The interned id of the initial state.
    pub fn initial(&self) -> StateId {
        self.initial
    }

    /// The declared alphabet. Informational only, matching is driven by the transition labels.
    pub fn alphabet(&self) -> &Set<char> {
        &self.alphabet
    }

    /// Returns whether the given state belongs to the accepting set.
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains(state as usize)
    }

    /// The outgoing transitions of `state` in declaration order. States without outgoing
    /// transitions yield an empty slice, this is not an error.
    pub fn transitions_from(&self, state: StateId) -> &[(Label, StateId)] {
        &self.edges[state as usize]
    }

    /// Resolves an interned state id back to its declared name.
    ///
    /// # Panics
    /// If `state` was not produced by this automaton.
    pub fn state_name(&self, state: StateId) -> &str {
        self.states
            .get_by_right(&state)
            .expect("state id must belong to this automaton")
    }

    /// Looks up the interned id of a declared state name.
    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.states.get_by_left(name).copied()
    }

    /// Iterates over all states as `(id, name)` pairs in declaration order.
    pub fn states(&self) -> impl Iterator<Item = (StateId, &str)> + '_ {
        (0..self.size() as StateId).map(|q| (q, self.state_name(q)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Label;

    fn scaffold() -> NfaBuilder {
        NfaBuilder::default()
            .named("M")
            .with_states(["q0", "q1"])
            .with_symbols(['a'])
            .with_initial("q0")
            .with_accepting(["q1"])
    }

    #[test]
    fn lookup_after_construction() {
        let nfa = scaffold()
            .with_transitions([("q0", 'a', "q1"), ("q0", '~', "q1")])
            .build()
            .unwrap();

        assert_eq!(nfa.name(), "M");
        assert_eq!(nfa.size(), 2);
        assert_eq!(nfa.state_id("q0"), Some(nfa.initial()));
        assert_eq!(nfa.state_name(1), "q1");
        assert!(nfa.is_accepting(1));
        assert!(!nfa.is_accepting(0));

        let q1 = nfa.state_id("q1").unwrap();
        assert_eq!(
            nfa.transitions_from(nfa.initial()),
            &[(Label::Symbol('a'), q1), (Label::Epsilon, q1)]
        );
        // no outgoing transitions is fine
        assert!(nfa.transitions_from(q1).is_empty());
    }

    #[test]
    fn construction_rejects_undeclared_references() {
        assert_eq!(
            NfaBuilder::default()
                .with_states(["q0"])
                .with_initial("q7")
                .build()
                .unwrap_err(),
            MalformedDefinition::UndeclaredInitial("q7".to_string())
        );
        assert_eq!(
            scaffold()
                .with_transitions([("q0", 'a', "q9")])
                .build()
                .unwrap_err(),
            MalformedDefinition::UndeclaredTarget("q9".to_string())
        );
        assert_eq!(
            scaffold()
                .with_transitions([("qx", 'a', "q1")])
                .build()
                .unwrap_err(),
            MalformedDefinition::UndeclaredSource("qx".to_string())
        );
        assert_eq!(
            scaffold().with_accepting(["q2"]).build().unwrap_err(),
            MalformedDefinition::UndeclaredAccepting("q2".to_string())
        );
        assert_eq!(
            NfaBuilder::default().with_states(["q0"]).build().unwrap_err(),
            MalformedDefinition::NoInitial
        );
    }

    #[test]
    fn construction_rejects_reserved_symbols() {
        assert_eq!(
            scaffold().with_symbols(['$']).build().unwrap_err(),
            MalformedDefinition::ReservedSymbol('$')
        );
        assert_eq!(
            scaffold().with_symbols(['~']).build().unwrap_err(),
            MalformedDefinition::ReservedSymbol('~')
        );
        assert_eq!(
            scaffold()
                .with_transitions([("q0", Label::Symbol('$'), "q1")])
                .build()
                .unwrap_err(),
            MalformedDefinition::ReservedSymbol('$')
        );
    }

    #[test]
    fn duplicate_state_declarations_collapse() {
        let nfa = NfaBuilder::default()
            .with_states(["q0", "q1", "q0"])
            .with_initial("q0")
            .build()
            .unwrap();
        assert_eq!(nfa.size(), 2);
    }
}
