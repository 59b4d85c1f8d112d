use log::debug;

use super::*;

mod canonicalize;
mod minimize;

impl Dfa {
    /// Returns a copy of `self` restricted to the states that are both reachable from the start
    /// state and able to reach an accepting state, renumbered from `0`.
    ///
    /// Transitions leaving the kept states are redirected to a single rejecting trap state, only
    /// added when such a transition exists. If no state is kept the empty automaton is returned.
    pub fn prune(&self) -> Result<Dfa, EngineError> {
        if self.is_empty() {
            return Ok(Dfa::new_empty());
        }
        let execution_profile = ThreadLocalParams::get_execution_profile();
        execution_profile.assert_max_number_of_states(self.get_number_of_states())?;

        let reachable_states = self.get_reachable_states()?;
        let live_states = self.get_live_states_among(&reachable_states)?;

        let valid_states: Vec<State> = reachable_states
            .into_iter()
            .filter(|state| live_states.contains(state))
            .collect();
        if valid_states.is_empty() {
            debug!(
                "No state out of {} can reach an accepting state, the automaton is empty.",
                self.get_number_of_states()
            );
            return Ok(Dfa::new_empty());
        }

        let mut new_states: IntMap<State, State> =
            IntMap::with_capacity_and_hasher(valid_states.len(), BuildHasherDefault::default());
        let mut pruned = Dfa::new_empty();
        for &state in &valid_states {
            new_states.insert(state, pruned.new_state(self.checked_accepting(state)?));
        }

        let mut trap_state = None;
        for &from_state in &valid_states {
            let new_from_state = new_states[&from_state];
            for symbol in Symbol::ALL {
                let to_state = self.checked_target(from_state, symbol)?;
                let new_to_state = match new_states.get(&to_state) {
                    Some(new_to_state) => *new_to_state,
                    None => *trap_state.get_or_insert_with(|| pruned.new_state(false)),
                };
                pruned.add_transition(new_from_state, symbol, new_to_state);
            }
        }
        pruned.set_start_state(new_states[&self.checked_start_state()?]);

        if let Some(trap_state) = trap_state {
            debug!("Redirected the removed transitions to the trap state {trap_state}.");
        }
        debug!(
            "Pruned the automaton from {} to {} states.",
            self.get_number_of_states(),
            pruned.get_number_of_states()
        );
        Ok(pruned)
    }
}
