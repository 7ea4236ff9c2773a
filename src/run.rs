use itertools::Itertools;
use tracing::{debug, trace};

use crate::alphabet::Label;
use crate::nfa::{Nfa, StateId};
use crate::word::Input;

/// One entry of the search frontier: a partial run that still has to be explored. Each entry owns
/// its own copy of the path, since nondeterministic branching extends the same prefix in several
/// mutually exclusive ways.
#[derive(Clone)]
struct Run {
    state: StateId,
    /// Position of the next unconsumed symbol in the sealed word.
    pos: usize,
    /// Whether the step that produced this entry was an epsilon transition.
    epsilon_step: bool,
    path: Vec<StateId>,
}

impl Run {
    fn extended(&self, state: StateId, pos: usize, epsilon_step: bool) -> Self {
        let mut path = self.path.clone();
        path.push(state);
        Self {
            state,
            pos,
            epsilon_step,
            path,
        }
    }
}

/// The outcome of exhaustively simulating an [`Nfa`] on one input word. Two simulations of the
/// same automaton on the same input produce identical results, there is no hidden state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    /// Number of runs that reached end-of-input through a final non-epsilon step. Runs whose last
    /// step was an epsilon transition are deliberately excluded, so input-free completions do not
    /// inflate this count.
    pub total_paths: usize,
    /// Number of runs that reached end-of-input in an accepting state, regardless of how their
    /// last step consumed.
    pub accepting_paths: usize,
    /// The state sequence of every accepting run, in the order the search completed them. For a
    /// fixed transition declaration order this order is fully reproducible.
    pub accept_sequences: Vec<Vec<StateId>>,
}

impl SimulationResult {
    /// Resolves the accepting sequences back to state names via the automaton that produced
    /// this result.
    pub fn named_sequences<'a>(&self, nfa: &'a Nfa) -> Vec<Vec<&'a str>> {
        self.accept_sequences
            .iter()
            .map(|path| path.iter().map(|&q| nfa.state_name(q)).collect())
            .collect()
    }
}

impl Nfa {
    /// Exhaustively enumerates every run of this automaton on `input` and returns the aggregate
    /// counts together with all accepting state sequences.
    ///
    /// The search keeps an explicit stack of partial runs and pops it LIFO, so it proceeds
    /// depth-first with the last-declared transition out of a state explored first. A run is
    /// complete when only the end-of-input marker remains; completed runs are still expanded,
    /// because an epsilon transition can extend them without consuming anything. The empty word
    /// (the reserved `~` token) is handled up front: it is accepted immediately precisely if the
    /// initial state is accepting, without engaging the search.
    ///
    /// A cycle consisting solely of epsilon transitions never consumes input, so on automata
    /// where such a cycle is reachable this method does not return; use
    /// [`simulate_bounded`](Nfa::simulate_bounded) to guard against that.
    ///
    /// # Example
    /// ```
    /// use nfa_paths::prelude::*;
    ///
    /// let nfa = NfaBuilder::default()
    ///     .with_states(["q0", "q1"])
    ///     .with_symbols(['a'])
    ///     .with_initial("q0")
    ///     .with_accepting(["q1"])
    ///     .with_transitions([("q0", 'a', "q1"), ("q1", 'a', "q1")])
    ///     .build()
    ///     .unwrap();
    /// let result = nfa.simulate(&Input::literal("aa"));
    /// assert_eq!(result.accept_sequences, vec![vec![0, 1, 1]]);
    /// ```
    pub fn simulate(&self, input: &Input) -> SimulationResult {
        self.explore(input, None)
            .expect("the unbounded search cannot be abandoned")
    }

    /// Like [`simulate`](Nfa::simulate), but gives up and returns `None` once more than `budget`
    /// partial runs have been taken off the frontier. This bounds the otherwise unbounded
    /// exploration of epsilon cycles; a `None` means the search was abandoned, not that the
    /// input was rejected.
    pub fn simulate_bounded(&self, input: &Input, budget: usize) -> Option<SimulationResult> {
        self.explore(input, Some(budget))
    }

    fn explore(&self, input: &Input, budget: Option<usize>) -> Option<SimulationResult> {
        let word = input.symbols();
        let mut total_paths = 0;
        let mut accepting_paths = 0;
        let mut accept_sequences = Vec::new();

        // The empty word never runs the search machinery: it is accepted immediately iff the
        // initial state is accepting, and that completion counts towards both tallies.
        if input.is_empty_word() && self.is_accepting(self.initial()) {
            total_paths += 1;
            accepting_paths += 1;
            accept_sequences.push(vec![self.initial()]);
        }

        let mut frontier = vec![Run {
            state: self.initial(),
            pos: 0,
            epsilon_step: false,
            path: vec![self.initial()],
        }];
        let mut popped = 0usize;

        while let Some(run) = frontier.pop() {
            popped += 1;
            if budget.is_some_and(|limit| popped > limit) {
                debug!("abandoning search on {:?} after {popped} popped runs", input);
                return None;
            }

            // Only the end-of-input marker remains, this run is complete. Accepting runs are
            // recorded unconditionally, but only a non-epsilon final step contributes to the
            // total. Expansion below still happens, an epsilon step can extend a complete run.
            if run.pos + 1 == word.len() {
                if self.is_accepting(run.state) {
                    accepting_paths += 1;
                    trace!(
                        "accepting run [{}]",
                        run.path.iter().map(|&q| self.state_name(q)).join(",")
                    );
                    accept_sequences.push(run.path.clone());
                }
                if !run.epsilon_step {
                    total_paths += 1;
                }
            }

            for &(label, target) in self.transitions_from(run.state) {
                match label {
                    Label::Epsilon => frontier.push(run.extended(target, run.pos, true)),
                    Label::Symbol(sym) if word[run.pos] == sym => {
                        frontier.push(run.extended(target, run.pos + 1, false))
                    }
                    // dead branch, the next symbol does not match
                    Label::Symbol(_) => {}
                }
            }
        }

        debug!(
            "simulation of {:?} on \"{}\" finished, {total_paths} total and {accepting_paths} accepting runs",
            self.name(),
            input
        );
        Some(SimulationResult {
            total_paths,
            accepting_paths,
            accept_sequences,
        })
    }
}
