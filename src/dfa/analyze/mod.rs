use super::*;

mod depth;
mod equivalence;

impl Dfa {
    /// States reachable from the start state, in breadth-first discovery order with the symbols
    /// taken in [`Symbol::ALL`] order. The start state comes first.
    pub fn get_reachable_states(&self) -> Result<Vec<State>, EngineError> {
        if self.is_empty() {
            return Ok(vec![]);
        }
        let start_state = self.checked_start_state()?;
        let execution_profile = ThreadLocalParams::get_execution_profile();

        let len = self.get_number_of_states();
        let mut seen: IntSet<State> =
            IntSet::with_capacity_and_hasher(len, BuildHasherDefault::default());
        let mut order = Vec::with_capacity(len);
        let mut worklist = VecDeque::with_capacity(len);

        seen.insert(start_state);
        worklist.push_back(start_state);
        while let Some(state) = worklist.pop_front() {
            execution_profile.assert_not_timed_out()?;
            order.push(state);
            for symbol in Symbol::ALL {
                let to_state = self.checked_target(state, symbol)?;
                if seen.insert(to_state) {
                    worklist.push_back(to_state);
                }
            }
        }

        Ok(order)
    }

    /// States from which an accepting state can be reached.
    pub fn get_live_states(&self) -> Result<IntSet<State>, EngineError> {
        self.get_live_states_among(&self.states)
    }

    /// Live states of the sub-automaton made of `states`, which has to be closed under the
    /// transitions (every successor of a member is a member).
    pub(crate) fn get_live_states_among(&self, states: &[State]) -> Result<IntSet<State>, EngineError> {
        let execution_profile = ThreadLocalParams::get_execution_profile();

        let mut states_map: IntMap<State, IntSet<State>> =
            IntMap::with_capacity_and_hasher(states.len(), BuildHasherDefault::default());
        let mut worklist = VecDeque::with_capacity(states.len());
        let mut live: IntSet<State> =
            IntSet::with_capacity_and_hasher(states.len(), BuildHasherDefault::default());

        for &from_state in states {
            for symbol in Symbol::ALL {
                let to_state = self.checked_target(from_state, symbol)?;
                match states_map.entry(to_state) {
                    Entry::Occupied(mut o) => {
                        o.get_mut().insert(from_state);
                    }
                    Entry::Vacant(v) => {
                        let mut new_states = IntSet::default();
                        new_states.insert(from_state);
                        v.insert(new_states);
                    }
                };
            }
            if self.checked_accepting(from_state)? && live.insert(from_state) {
                worklist.push_back(from_state);
            }
        }

        while let Some(live_state) = worklist.pop_front() {
            execution_profile.assert_not_timed_out()?;
            if let Some(states) = states_map.get(&live_state) {
                for state in states {
                    if live.insert(*state) {
                        worklist.push_back(*state);
                    }
                }
            }
        }

        Ok(live)
    }
}
