//! Library for exhaustively enumerating the runs of a nondeterministic finite automaton (NFA) on a single input word.
//!
//! An NFA here is a named machine with a finite set of states, a single-character alphabet, one
//! initial state, a (possibly empty) set of accepting states and a transition relation. A
//! transition is labelled either with an input symbol or with the distinguished epsilon marker
//! `~`, in which case taking it consumes no input. Because a state may have several outgoing
//! transitions with the same label, a single input word can induce many distinct runs; this crate
//! enumerates all of them with an explicit, vector-backed depth-first search and reports how many
//! runs exist in total, how many of them are accepting, and the exact state sequence of every
//! accepting run.
//!
//! The central type is [`Nfa`](nfa::Nfa), which is immutable after construction and interns state
//! names into small integer [`StateId`](nfa::StateId)s. It is built either through the fluent
//! [`NfaBuilder`](nfa::NfaBuilder) or by [parsing](definition::parse_definition) the CSV-like
//! definition format (five metadata lines followed by one `source,label,destination` triple per
//! line). Input words are sealed into an [`Input`](word::Input), which appends the reserved
//! end-of-input marker `$` so that the search can tell "no symbols remain" apart from the empty
//! word, and [`Nfa::simulate`](nfa::Nfa::simulate) produces a
//! [`SimulationResult`](run::SimulationResult).
//!
//! Two counting rules are worth spelling out. A run that reaches end-of-input is counted towards
//! the total number of runs only if its last step consumed a symbol; a run whose final step was an
//! epsilon transition does not inflate the total, though it still counts as accepting when it ends
//! in an accepting state. And the empty word, written as the reserved token `~`, is accepted
//! immediately when the initial state is accepting, without engaging the search at all.
//!
//! # Example
//! ```
//! use nfa_paths::prelude::*;
//!
//! let nfa = NfaBuilder::default()
//!     .named("M")
//!     .with_states(["q0", "q1"])
//!     .with_symbols(['a'])
//!     .with_initial("q0")
//!     .with_accepting(["q1"])
//!     .with_transitions([("q0", 'a', "q1")])
//!     .build()
//!     .unwrap();
//!
//! let result = nfa.simulate(&Input::literal("a"));
//! assert_eq!(result.total_paths, 1);
//! assert_eq!(result.accepting_paths, 1);
//! ```
//!
//! The search explores exactly what the naive stack walk visits: a cycle made entirely of epsilon
//! transitions never shrinks the remaining input, so [`Nfa::simulate`](nfa::Nfa::simulate) does
//! not terminate on automata where such a cycle is reachable. The bounded variant
//! [`Nfa::simulate_bounded`](nfa::Nfa::simulate_bounded) caps the number of explored runs and
//! gives up cleanly instead.
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude makes using this crate easier, `use nfa_paths::prelude::*;` should be enough.
pub mod prelude {
    pub use super::{
        alphabet::{Label, END_MARKER, EPSILON},
        definition::{load_definition, parse_definition, DefinitionError},
        math,
        nfa::{MalformedDefinition, Nfa, NfaBuilder, StateId},
        report::Report,
        run::SimulationResult,
        word::Input,
    };
}

/// Small mathematical building blocks (set and bijection aliases) used throughout the crate.
pub mod math;

/// Transition labels and the reserved characters of the textual format.
pub mod alphabet;

/// Sealed input words, including the empty-word token and the end-of-input marker.
pub mod word;

/// The automaton model: interned states, validated construction, transition lookup.
pub mod nfa;

/// The exhaustive depth-first run enumeration and its result type.
pub mod run;

/// Parsing of the CSV-like automaton definition format.
pub mod definition;

/// Rendering of simulation results as CSV records and terminal tables.
pub mod report;
