use dfamin::dfa::{Dfa, Symbol};
use rand::{rngs::StdRng, SeedableRng};

const MAX_WORD_LENGTH: usize = 8;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn all_words(max_length: usize) -> Vec<Vec<Symbol>> {
    let mut words = vec![vec![]];
    let mut last_layer = vec![vec![]];
    for _ in 0..max_length {
        let mut layer = Vec::with_capacity(last_layer.len() * Symbol::ALL.len());
        for word in &last_layer {
            for symbol in Symbol::ALL {
                let mut new_word: Vec<Symbol> = word.clone();
                new_word.push(symbol);
                layer.push(new_word);
            }
        }
        words.extend(layer.iter().cloned());
        last_layer = layer;
    }
    words
}

fn membership(dfa: &Dfa, word: &[Symbol]) -> bool {
    if dfa.is_empty() {
        false
    } else {
        dfa.accepts_symbols(word).unwrap()
    }
}

fn assert_same_language(dfa_1: &Dfa, dfa_2: &Dfa) {
    for word in all_words(MAX_WORD_LENGTH) {
        assert_eq!(
            membership(dfa_1, &word),
            membership(dfa_2, &word),
            "{:?}",
            word
        );
    }
    assert!(dfa_1.is_equivalent_of(dfa_2).unwrap());
}

fn assert_pipeline(dfa: &Dfa) {
    let pruned = dfa.prune().unwrap();
    let minimized = pruned.minimize().unwrap();
    println!(
        "States: {} -> {} -> {}",
        dfa.get_number_of_states(),
        pruned.get_number_of_states(),
        minimized.get_number_of_states()
    );

    assert!(pruned.validate().is_ok());
    assert!(minimized.validate().is_ok());
    assert!(pruned.get_number_of_states() <= dfa.get_number_of_states() + 1);
    assert!(minimized.get_number_of_states() <= pruned.get_number_of_states());

    assert_same_language(dfa, &pruned);
    assert_same_language(dfa, &minimized);

    let pruned_twice = pruned.prune().unwrap();
    assert_eq!(pruned.canonicalize().unwrap(), pruned_twice.canonicalize().unwrap());

    let minimized_twice = minimized.minimize().unwrap();
    assert_eq!(minimized, minimized_twice);

    if !minimized.is_empty() {
        assert!(minimized.get_depth().unwrap() < minimized.get_number_of_states());
    }
}

#[test]
fn test_random_pipeline() {
    init();
    let mut rng = StdRng::seed_from_u64(20241019);
    for _ in 0..100 {
        let dfa = Dfa::generate_random(&mut rng, 16, 64);
        assert_pipeline(&dfa);
    }
}

#[test]
fn test_random_small_pipeline() {
    init();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let dfa = Dfa::generate_random(&mut rng, 1, 6);
        assert_pipeline(&dfa);
    }
}

#[test]
fn test_minimization_is_independent_of_naming() {
    init();
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..50 {
        let dfa = Dfa::generate_random(&mut rng, 8, 32);
        let minimized = dfa.prune().unwrap().minimize().unwrap();

        // Same automaton with every state shifted and the listing reversed.
        let shifted = Dfa::from_parts(
            dfa.get_states().iter().rev().map(|state| state + 100),
            dfa.states_iter()
                .map(|state| (state + 100, dfa.is_accepting(&state))),
            dfa.states_iter().map(|state| {
                (
                    state + 100,
                    Symbol::ALL.map(|symbol| dfa.get_transition(state, symbol).unwrap() + 100),
                )
            }),
            dfa.get_start_state().unwrap() + 100,
        );
        let shifted_minimized = shifted.prune().unwrap().minimize().unwrap();

        assert_eq!(minimized, shifted_minimized);
        assert_eq!(minimized, shifted.minimize().unwrap().prune().unwrap().minimize().unwrap());
    }
}

#[test]
fn test_random_words() {
    init();
    let mut rng = StdRng::seed_from_u64(5);
    let dfa = Dfa::generate_random(&mut rng, 16, 64);
    let minimized = dfa.prune().unwrap().minimize().unwrap();

    for word in Dfa::generate_words(&mut rng, 200, 10) {
        let symbols = Symbol::parse_word(&word).unwrap();
        assert_eq!(membership(&dfa, &symbols), membership(&minimized, &symbols), "'{word}'");
    }
}

#[test]
fn test_depth_examples() {
    let dfa = Dfa::from_table(
        &[false, false, false, true],
        &[[1, 0], [2, 0], [3, 0], [3, 3]],
        0,
    );
    assert_eq!(Ok(3), dfa.get_depth());
    let minimized = dfa.prune().unwrap().minimize().unwrap();
    assert_eq!(4, minimized.get_number_of_states());
    assert_eq!(Ok(3), minimized.get_depth());

    let dfa = Dfa::from_table(&[false, true, true], &[[1, 1], [0, 0], [2, 2]], 0);
    assert_eq!(Ok(1), dfa.get_depth());
}
