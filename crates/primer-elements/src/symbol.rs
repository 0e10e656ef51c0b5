//! Symbols: `$` followed by an identifier

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use primer_core::{
    anchored, to_offsets, Accessible, Lexical, Ordered, PrimitiveError, PrimitiveResult,
    Searchable, Sequential, IDENTIFIER,
};

static IDENTIFIER_ONLY: Lazy<Regex> = Lazy::new(|| anchored(&IDENTIFIER));
static SYMBOL: Lazy<Regex> =
    Lazy::new(|| anchored(&format!(r"\$(?P<identifier>{})", *IDENTIFIER)));

/// Named symbol
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    /// Build from the identifier, without the leading `$`.
    pub fn new(identifier: &str) -> PrimitiveResult<Self> {
        if !IDENTIFIER_ONLY.is_match(identifier) {
            return Err(PrimitiveError::illegal_value(
                "Symbol",
                format!("{identifier:?} is not an identifier"),
            ));
        }
        Ok(Symbol(identifier.to_string()))
    }

    pub fn from_source(source: &str) -> PrimitiveResult<Self> {
        SYMBOL
            .captures(source)
            .map(|captures| Symbol(captures["identifier"].to_string()))
            .ok_or_else(|| PrimitiveError::illegal_source("Symbol", source))
    }

    #[inline]
    pub fn as_intrinsic(&self) -> &str {
        &self.0
    }

    pub fn concatenate(&self, other: &Symbol) -> Symbol {
        Symbol(format!("{}{}", self.0, other.0))
    }
}

impl Sequential<char> for Symbol {
    fn as_array(&self) -> Vec<char> {
        self.0.chars().collect()
    }

    fn get_size(&self) -> usize {
        self.0.chars().count()
    }

    fn is_empty(&self) -> bool {
        false
    }
}

impl Accessible<char> for Symbol {
    fn get_values(&self, first: isize, last: isize) -> PrimitiveResult<Self> {
        let characters = self.as_array();
        let range = to_offsets(first, last, characters.len())?;
        Symbol::new(&characters[range].iter().collect::<String>())
    }
}

impl Searchable<char> for Symbol {}

impl Ordered for Symbol {
    fn is_before(&self, other: &Self) -> bool {
        self < other
    }
}

impl Lexical for Symbol {
    fn as_source(&self) -> String {
        format!("${}", self.0)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol(${})", self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_source() {
        let symbol = Symbol::from_source("$foo-Bar2").unwrap();
        assert_eq!(symbol.as_intrinsic(), "foo-Bar2");
        assert_eq!(symbol.as_source(), "$foo-Bar2");
        for source in ["foo", "$", "$2foo", "$foo bar", "$-foo"] {
            assert!(Symbol::from_source(source).is_err(), "{source}");
        }
        assert!(Symbol::new("9lives").is_err());
    }

    #[test]
    fn test_symbol_sequence() {
        let symbol = Symbol::new("foobar").unwrap();
        assert_eq!(symbol.get_size(), 6);
        assert_eq!(symbol.get_value(1), Ok('f'));
        assert_eq!(symbol.get_value(-1), Ok('r'));
        assert_eq!(symbol.get_values(4, 6), Symbol::new("bar"));
        assert_eq!(symbol.get_index(&'o'), 2);
        assert!(symbol.contains_value(&'b'));
        assert!(!symbol.contains_any(&['x', 'y']));
        assert!(symbol.contains_all(&['f', 'r']));
        assert!(Symbol::new("a1").unwrap().get_values(2, 2).is_err());
    }

    #[test]
    fn test_symbol_ordering() {
        let a = Symbol::new("alpha").unwrap();
        let b = Symbol::new("beta").unwrap();
        assert!(a.is_before(&b));
        assert!(!b.is_before(&a));
        assert_eq!(a.concatenate(&b), Symbol::new("alphabeta").unwrap());
    }
}
