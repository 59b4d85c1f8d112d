use std::collections::hash_map::Entry;
use std::collections::VecDeque;
use std::fmt::Display;
use std::hash::BuildHasherDefault;

use crate::error::EngineError;
use crate::execution_profile::ThreadLocalParams;
use crate::{IntMap, IntSet};

pub use symbol::{Symbol, ALPHABET_SIZE};

pub type State = usize;
/// Targets of a state, indexed by [`Symbol::index`].
pub type Transitions = [State; ALPHABET_SIZE];

mod analyze;
mod builder;
mod generate;
mod operation;
mod symbol;

/// Represent a deterministic finite automaton over the alphabet `{a, b}`.
///
/// A well-formed automaton has its start state among its states, a transition row for every
/// state whose targets are all states of the automaton, and an acceptance flag for every state.
/// The empty automaton, built with [`Dfa::new_empty`], has no state at all and no start state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dfa {
    states: Vec<State>,
    transitions: IntMap<State, Transitions>,
    accepting: IntMap<State, bool>,
    start_state: Option<State>,
}

impl Display for Dfa {
    fn fmt(&self, sb: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(sb, "digraph Automaton {{")?;
        writeln!(sb, "\trankdir = LR;")?;
        for from_state in self.states_iter() {
            write!(sb, "\t{}", from_state)?;
            if self.is_accepting(&from_state) {
                writeln!(sb, "\t[shape=doublecircle,label=\"{}\"];", from_state)?;
            } else {
                writeln!(sb, "\t[shape=circle,label=\"{}\"];", from_state)?;
            }

            if self.start_state == Some(from_state) {
                writeln!(sb, "\tinitial [shape=plaintext,label=\"\"];")?;
                writeln!(sb, "\tinitial -> {}", from_state)?;
            }
            if let Some(transitions) = self.transitions.get(&from_state) {
                for symbol in Symbol::ALL {
                    writeln!(
                        sb,
                        "\t{} -> {} [label=\"{}\"]",
                        from_state,
                        transitions[symbol.index()],
                        symbol
                    )?;
                }
            }
        }
        write!(sb, "}}")
    }
}

impl Dfa {
    #[inline]
    pub fn states_iter(&self) -> impl Iterator<Item = State> + '_ {
        self.states.iter().copied()
    }

    #[inline]
    pub fn get_states(&self) -> &[State] {
        &self.states
    }

    #[inline]
    pub fn get_number_of_states(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn get_start_state(&self) -> Option<State> {
        self.start_state
    }

    #[inline]
    pub fn has_state(&self, state: State) -> bool {
        self.states.binary_search(&state).is_ok()
    }

    /// A state without acceptance entry reads as rejecting.
    #[inline]
    pub fn is_accepting(&self, state: &State) -> bool {
        self.accepting.get(state).copied().unwrap_or(false)
    }

    pub fn get_accept_states(&self) -> IntSet<State> {
        self.states_iter()
            .filter(|state| self.is_accepting(state))
            .collect()
    }

    #[inline]
    pub fn get_transition(&self, from_state: State, symbol: Symbol) -> Option<State> {
        self.transitions
            .get(&from_state)
            .map(|transitions| transitions[symbol.index()])
    }

    /// Whether this is the empty automaton, the one without start state.
    ///
    /// An automaton with no state but a start state is not empty, it is malformed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start_state.is_none()
    }

    pub(crate) fn checked_start_state(&self) -> Result<State, EngineError> {
        match self.start_state {
            None => Err(EngineError::EmptyAutomaton),
            Some(state) if self.has_state(state) => Ok(state),
            Some(state) => Err(EngineError::StartStateNotFound(state)),
        }
    }

    pub(crate) fn checked_transitions(&self, from_state: State) -> Result<&Transitions, EngineError> {
        self.transitions
            .get(&from_state)
            .ok_or(EngineError::MissingTransitions(from_state))
    }

    pub(crate) fn checked_target(&self, from_state: State, symbol: Symbol) -> Result<State, EngineError> {
        let to_state = self.checked_transitions(from_state)?[symbol.index()];
        if self.has_state(to_state) {
            Ok(to_state)
        } else {
            Err(EngineError::TransitionTargetNotFound(
                from_state, symbol, to_state,
            ))
        }
    }

    pub(crate) fn checked_accepting(&self, state: State) -> Result<bool, EngineError> {
        self.accepting
            .get(&state)
            .copied()
            .ok_or(EngineError::MissingAcceptance(state))
    }

    /// Check every invariant of a well-formed automaton and return the first violation found.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.is_empty() && self.states.is_empty() {
            return Ok(());
        }
        self.checked_start_state()?;
        for state in self.states_iter() {
            for symbol in Symbol::ALL {
                self.checked_target(state, symbol)?;
            }
            self.checked_accepting(state)?;
        }
        Ok(())
    }

    /// Run `word` from the start state and tell whether it ends in an accepting state.
    ///
    /// # Example:
    ///
    /// ```
    /// use dfamin::{dfa::{Dfa, Symbol}, EngineError};
    ///
    /// let mut dfa = Dfa::new_empty();
    /// let s0 = dfa.new_state(false);
    /// let s1 = dfa.new_state(true);
    /// dfa.add_transition(s0, Symbol::A, s1);
    ///
    /// assert_eq!(Ok(true), dfa.accepts("aba"));
    /// assert_eq!(Ok(false), dfa.accepts("bbb"));
    /// assert_eq!(Err(EngineError::InvalidSymbol('c')), dfa.accepts("abc"));
    /// ```
    pub fn accepts(&self, word: &str) -> Result<bool, EngineError> {
        if self.is_empty() {
            return Err(EngineError::EmptyAutomaton);
        }
        self.accepts_symbols(&Symbol::parse_word(word)?)
    }

    pub fn accepts_symbols(&self, word: &[Symbol]) -> Result<bool, EngineError> {
        let mut current_state = self.checked_start_state()?;
        for symbol in word {
            current_state = self.checked_target(current_state, *symbol)?;
        }
        self.checked_accepting(current_state)
    }

    #[inline]
    pub fn to_dot(&self) {
        println!("{}", self);
    }
}
