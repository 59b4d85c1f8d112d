use std::cmp;

use super::*;

impl Dfa {
    /// Returns the largest shortest-path distance from the start state to a state reachable
    /// from it. States that cannot be reached are ignored.
    ///
    /// Fails with [`EngineError::EmptyAutomaton`] on the empty automaton, and with the matching
    /// malformed-automaton error on any defect of a reachable state.
    pub fn get_depth(&self) -> Result<usize, EngineError> {
        let start_state = self.checked_start_state()?;

        let len = self.get_number_of_states();
        let mut distances: IntMap<State, usize> =
            IntMap::with_capacity_and_hasher(len, BuildHasherDefault::default());
        let mut worklist = VecDeque::with_capacity(len);
        let mut depth = 0;

        distances.insert(start_state, 0);
        worklist.push_back((start_state, 0));
        while let Some((state, distance)) = worklist.pop_front() {
            depth = cmp::max(depth, distance);
            self.checked_accepting(state)?;
            for symbol in Symbol::ALL {
                let to_state = self.checked_target(state, symbol)?;
                if let Entry::Vacant(v) = distances.entry(to_state) {
                    v.insert(distance + 1);
                    worklist.push_back((to_state, distance + 1));
                }
            }
        }

        Ok(depth)
    }
}
