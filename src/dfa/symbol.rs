use std::fmt::Display;

use crate::error::EngineError;

pub const ALPHABET_SIZE: usize = 2;

/// A letter of the alphabet `{a, b}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    A,
    B,
}

impl Symbol {
    pub const ALL: [Symbol; ALPHABET_SIZE] = [Symbol::A, Symbol::B];

    /// Position of the symbol in a transition row.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Symbol::A => 0,
            Symbol::B => 1,
        }
    }

    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Symbol::A => 'a',
            Symbol::B => 'b',
        }
    }

    pub fn parse_word(word: &str) -> Result<Vec<Symbol>, EngineError> {
        word.chars().map(Symbol::try_from).collect()
    }
}

impl TryFrom<char> for Symbol {
    type Error = EngineError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'a' => Ok(Symbol::A),
            'b' => Ok(Symbol::B),
            _ => Err(EngineError::InvalidSymbol(c)),
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
