use super::*;

impl Dfa {
    /// The empty automaton: no state, no start state, it rejects every word including the empty one.
    #[inline]
    pub fn new_empty() -> Self {
        Self {
            states: vec![],
            transitions: IntMap::default(),
            accepting: IntMap::default(),
            start_state: None,
        }
    }

    /// A single accepting state looping on every symbol.
    #[inline]
    pub fn new_total() -> Self {
        let mut dfa = Self::new_empty();
        dfa.new_state(true);
        dfa
    }

    /// Assemble an automaton from its raw parts without checking any invariant, use
    /// [`Dfa::validate`] to find out whether the result is well-formed.
    pub fn from_parts(
        states: impl IntoIterator<Item = State>,
        accepting: impl IntoIterator<Item = (State, bool)>,
        transitions: impl IntoIterator<Item = (State, Transitions)>,
        start_state: State,
    ) -> Self {
        let mut states: Vec<State> = states.into_iter().collect();
        states.sort_unstable();
        states.dedup();

        Self {
            states,
            transitions: transitions.into_iter().collect(),
            accepting: accepting.into_iter().collect(),
            start_state: Some(start_state),
        }
    }

    /// Same as [`Dfa::from_parts`] with the states `0..transitions.len()`, the row `i` of
    /// `transitions` and the flag `i` of `accepting` belonging to the state `i`.
    pub fn from_table(accepting: &[bool], transitions: &[Transitions], start_state: State) -> Self {
        Self::from_parts(
            0..transitions.len(),
            accepting.iter().copied().enumerate(),
            transitions.iter().copied().enumerate(),
            start_state,
        )
    }

    #[inline]
    fn assert_state_exists(&self, state: State) {
        if !self.has_state(state) {
            panic!("The state {} does not exist", state);
        }
    }

    /// Add a state looping on every symbol. The first state added becomes the start state.
    pub fn new_state(&mut self, accepting: bool) -> State {
        let new_state = self.states.last().map_or(0, |state| state + 1);
        self.states.push(new_state);
        self.transitions.insert(new_state, [new_state; ALPHABET_SIZE]);
        self.accepting.insert(new_state, accepting);
        if self.start_state.is_none() {
            self.start_state = Some(new_state);
        }
        new_state
    }

    #[inline]
    pub fn set_accepting(&mut self, state: State, accepting: bool) {
        self.assert_state_exists(state);
        self.accepting.insert(state, accepting);
    }

    #[inline]
    pub fn set_start_state(&mut self, state: State) {
        self.assert_state_exists(state);
        self.start_state = Some(state);
    }

    pub fn add_transition(&mut self, from_state: State, symbol: Symbol, to_state: State) {
        self.assert_state_exists(from_state);
        self.assert_state_exists(to_state);
        self.transitions
            .entry(from_state)
            .or_insert([from_state; ALPHABET_SIZE])[symbol.index()] = to_state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() -> Result<(), String> {
        let mut dfa = Dfa::new_empty();
        let s0 = dfa.new_state(false);
        let s1 = dfa.new_state(true);

        assert_eq!((0, 1), (s0, s1));
        assert_eq!(Some(s0), dfa.get_start_state());
        assert_eq!(Some(s1), dfa.get_transition(s1, Symbol::A));
        assert_eq!(Some(s1), dfa.get_transition(s1, Symbol::B));

        dfa.add_transition(s0, Symbol::B, s1);
        dfa.set_start_state(s1);
        dfa.set_accepting(s0, true);

        assert_eq!(Some(s0), dfa.get_transition(s0, Symbol::A));
        assert_eq!(Some(s1), dfa.get_transition(s0, Symbol::B));
        assert_eq!(Some(s1), dfa.get_start_state());
        assert_eq!(2, dfa.get_accept_states().len());
        assert_eq!(Ok(()), dfa.validate());
        Ok(())
    }

    #[test]
    fn test_from_parts() -> Result<(), String> {
        let dfa = Dfa::from_parts(
            [7, 3, 7],
            [(3, true), (7, false)],
            [(3, [3, 7]), (7, [7, 3])],
            7,
        );
        assert_eq!(&[3, 7], dfa.get_states());
        assert_eq!(Ok(()), dfa.validate());

        let mut dfa = dfa;
        assert_eq!(8, dfa.new_state(false));
        Ok(())
    }

    #[test]
    #[should_panic(expected = "The state 3 does not exist")]
    fn test_add_transition_to_unknown_state() {
        let mut dfa = Dfa::new_empty();
        let s0 = dfa.new_state(false);
        dfa.add_transition(s0, Symbol::A, 3);
    }
}
