use std::cmp;

use ahash::AHashSet;
use rand::Rng;

use super::*;

impl Dfa {
    /// Generate a random automaton with a number of states picked in `min_states..=max_states`.
    ///
    /// Every state is accepting with probability one half, every transition target and the start
    /// state are drawn uniformly. The result always has a start state: the empty automaton only
    /// comes from [`Dfa::new_empty`].
    ///
    /// # Example:
    ///
    /// ```
    /// use dfamin::dfa::Dfa;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let dfa = Dfa::generate_random(&mut rng, 16, 64);
    ///
    /// assert!((16..=64).contains(&dfa.get_number_of_states()));
    /// assert!(dfa.validate().is_ok());
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `min_states` is 0 or `min_states > max_states`.
    pub fn generate_random<R: Rng>(rng: &mut R, min_states: usize, max_states: usize) -> Dfa {
        assert!(min_states > 0, "A random automaton needs at least one state");
        let number_of_states = rng.gen_range(min_states..=max_states);

        let mut dfa = Dfa::new_empty();
        for _ in 0..number_of_states {
            dfa.new_state(rng.gen_bool(0.5));
        }
        for from_state in 0..number_of_states {
            for symbol in Symbol::ALL {
                dfa.add_transition(from_state, symbol, rng.gen_range(0..number_of_states));
            }
        }
        dfa.set_start_state(rng.gen_range(0..number_of_states));
        dfa
    }

    /// Generate at most `number` distinct words whose length is picked in `1..=max_length`.
    pub fn generate_words<R: Rng>(rng: &mut R, number: usize, max_length: usize) -> AHashSet<String> {
        let mut words = AHashSet::with_capacity(cmp::min(number, 1000));
        if max_length == 0 {
            if number > 0 {
                words.insert(String::new());
            }
            return words;
        }
        for _ in 0..number {
            let length = rng.gen_range(1..=max_length);
            let word = (0..length)
                .map(|_| Symbol::ALL[rng.gen_range(0..ALPHABET_SIZE)].to_char())
                .collect();
            words.insert(word);
        }
        words
    }
}
