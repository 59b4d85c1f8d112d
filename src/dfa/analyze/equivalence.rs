use ahash::AHashSet;

use super::*;

impl Dfa {
    /// Tell whether `self` and `other` recognize the same language by exploring their product.
    ///
    /// The empty automaton behaves as a rejecting sink, so it is equivalent to any automaton
    /// accepting no word.
    pub fn is_equivalent_of(&self, other: &Dfa) -> Result<bool, EngineError> {
        if self == other {
            return Ok(true);
        }
        let execution_profile = ThreadLocalParams::get_execution_profile();

        let initial_pair = (self.start_state_or_sink()?, other.start_state_or_sink()?);
        let mut seen = AHashSet::with_capacity(
            self.get_number_of_states() + other.get_number_of_states(),
        );
        let mut worklist = VecDeque::new();
        seen.insert(initial_pair);
        worklist.push_back(initial_pair);

        while let Some((self_state, other_state)) = worklist.pop_front() {
            execution_profile.assert_not_timed_out()?;
            if self.is_accepting_or_sink(self_state)? != other.is_accepting_or_sink(other_state)? {
                return Ok(false);
            }
            for symbol in Symbol::ALL {
                let pair = (
                    self.target_or_sink(self_state, symbol)?,
                    other.target_or_sink(other_state, symbol)?,
                );
                if seen.insert(pair) {
                    worklist.push_back(pair);
                }
            }
        }
        Ok(true)
    }

    fn start_state_or_sink(&self) -> Result<Option<State>, EngineError> {
        if self.is_empty() {
            Ok(None)
        } else {
            self.checked_start_state().map(Some)
        }
    }

    fn target_or_sink(&self, state: Option<State>, symbol: Symbol) -> Result<Option<State>, EngineError> {
        match state {
            Some(state) => self.checked_target(state, symbol).map(Some),
            None => Ok(None),
        }
    }

    fn is_accepting_or_sink(&self, state: Option<State>) -> Result<bool, EngineError> {
        match state {
            Some(state) => self.checked_accepting(state),
            None => Ok(false),
        }
    }
}
