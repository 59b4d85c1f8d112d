use super::*;

impl Dfa {
    /// Returns a copy of `self` whose states are numbered from `0` in breadth-first order from
    /// the start state, following the symbols in [`Symbol::ALL`] order. States that can not be
    /// reached from the start state come last, in their original order.
    ///
    /// Two automata that only differ by the naming of their states have the same canonical form.
    pub fn canonicalize(&self) -> Result<Dfa, EngineError> {
        if self.is_empty() {
            return Ok(Dfa::new_empty());
        }
        let mut order = self.get_reachable_states()?;
        if order.len() < self.get_number_of_states() {
            let reachable: IntSet<State> = order.iter().copied().collect();
            order.extend(self.states_iter().filter(|state| !reachable.contains(state)));
        }

        let mut new_states: IntMap<State, State> =
            IntMap::with_capacity_and_hasher(order.len(), BuildHasherDefault::default());
        let mut canonical = Dfa::new_empty();
        for &state in &order {
            new_states.insert(state, canonical.new_state(self.checked_accepting(state)?));
        }
        for &from_state in &order {
            for symbol in Symbol::ALL {
                let to_state = self.checked_target(from_state, symbol)?;
                canonical.add_transition(new_states[&from_state], symbol, new_states[&to_state]);
            }
        }
        Ok(canonical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize() -> Result<(), String> {
        let dfa_1 = Dfa::from_table(
            &[true, false, false],
            &[[0, 0], [2, 1], [0, 2]],
            1,
        );
        let dfa_2 = Dfa::from_parts(
            [3, 5, 9],
            [(3, false), (5, false), (9, true)],
            [(3, [9, 3]), (5, [3, 5]), (9, [9, 9])],
            5,
        );
        let canonical = dfa_1.canonicalize().unwrap();

        assert_eq!(canonical, dfa_2.canonicalize().unwrap());
        assert_eq!(
            Dfa::from_table(&[false, false, true], &[[1, 0], [2, 1], [2, 2]], 0),
            canonical
        );
        assert_eq!(canonical, canonical.canonicalize().unwrap());
        Ok(())
    }

    #[test]
    fn test_canonicalize_keeps_unreachable_states() -> Result<(), String> {
        let dfa = Dfa::from_table(&[true, false, true], &[[0, 0], [1, 1], [0, 1]], 1);
        let canonical = dfa.canonicalize().unwrap();

        assert_eq!(3, canonical.get_number_of_states());
        assert!(!canonical.is_accepting(&0));
        assert!(canonical.is_accepting(&1));
        assert!(canonical.is_accepting(&2));
        assert_eq!(Some(1), canonical.get_transition(2, Symbol::A));
        assert_eq!(Some(0), canonical.get_transition(2, Symbol::B));
        Ok(())
    }
}
