use std::fmt::{self};

use crate::dfa::{State, Symbol};

#[derive(Debug, PartialEq, Eq)]
pub enum EngineError {
    StartStateNotFound(State),
    MissingTransitions(State),
    TransitionTargetNotFound(State, Symbol, State),
    MissingAcceptance(State),
    InvalidSymbol(char),
    EmptyAutomaton,
    OperationTimeOutError,
    AutomatonHasTooManyStates,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::StartStateNotFound(state) => write!(f, "The start state {state} is not a state of the automaton."),
            EngineError::MissingTransitions(state) => write!(f, "The state {state} has no transitions."),
            EngineError::TransitionTargetNotFound(from, symbol, to) => write!(f, "The transition {from} --{symbol}--> {to} leads to an unknown state."),
            EngineError::MissingAcceptance(state) => write!(f, "The state {state} is not marked as accepting or rejecting."),
            EngineError::InvalidSymbol(c) => write!(f, "The symbol '{c}' is not part of the alphabet."),
            EngineError::EmptyAutomaton => write!(f, "The operation is not defined on the empty automaton."),
            EngineError::OperationTimeOutError => write!(f, "The operation took too much time."),
            EngineError::AutomatonHasTooManyStates => write!(f, "The automaton has too many states."),
        }
    }
}

impl std::error::Error for EngineError {}

impl EngineError {
    /// Determine if the error comes from an automaton breaking one of its invariants.
    pub fn is_malformed_automaton(&self) -> bool {
        match self {
            EngineError::StartStateNotFound(_) => true,
            EngineError::MissingTransitions(_) => true,
            EngineError::TransitionTargetNotFound(_, _, _) => true,
            EngineError::MissingAcceptance(_) => true,
            EngineError::InvalidSymbol(_) => false,
            EngineError::EmptyAutomaton => false,
            EngineError::OperationTimeOutError => false,
            EngineError::AutomatonHasTooManyStates => false,
        }
    }
}
