//! Deterministic finite automata over the two-letter alphabet `{a, b}`.
//!
//! The usual pipeline is [`dfa::Dfa::prune`] followed by [`dfa::Dfa::minimize`]:
//!
//! ```
//! use dfamin::dfa::{Dfa, Symbol};
//!
//! let mut dfa = Dfa::new_empty();
//! let s0 = dfa.new_state(false);
//! let s1 = dfa.new_state(true);
//! let s2 = dfa.new_state(true);
//! dfa.add_transition(s0, Symbol::A, s1);
//! dfa.add_transition(s0, Symbol::B, s2);
//!
//! let minimized = dfa.prune().unwrap().minimize().unwrap();
//!
//! assert_eq!(2, minimized.get_number_of_states());
//! assert!(minimized.accepts("ab").unwrap());
//! assert!(!minimized.accepts("").unwrap());
//! ```
use std::{
    collections::{HashMap, HashSet},
    hash::BuildHasherDefault,
};

use nohash_hasher::NoHashHasher;

pub mod dfa;
pub mod error;
pub mod execution_profile;

pub use error::EngineError;

type IntMap<Key, Value> = HashMap<Key, Value, BuildHasherDefault<NoHashHasher<Key>>>;
type IntSet<Key> = HashSet<Key, BuildHasherDefault<NoHashHasher<Key>>>;
