//! Identifiers: letters and digits joined by single hyphens

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use primer_core::{
    anchored, to_offsets, Accessible, Lexical, Ordered, PrimitiveError, PrimitiveResult,
    Searchable, Sequential, DIGIT, LETTER,
};

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| anchored(&format!(r"{LETTER}(?:-?(?:{LETTER}|{DIGIT}))*")));

/// Identifier such as `bali-nebula` or `v2`
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// The source text of an identifier is the identifier itself.
    pub fn from_source(source: &str) -> PrimitiveResult<Self> {
        if !IDENTIFIER.is_match(source) {
            return Err(PrimitiveError::illegal_source("Identifier", source));
        }
        Ok(Identifier(source.to_string()))
    }

    #[inline]
    pub fn as_intrinsic(&self) -> &str {
        &self.0
    }

    pub fn concatenate(&self, other: &Identifier) -> Identifier {
        Identifier(format!("{}{}", self.0, other.0))
    }
}

impl Sequential<char> for Identifier {
    fn as_array(&self) -> Vec<char> {
        self.0.chars().collect()
    }

    fn get_size(&self) -> usize {
        self.0.chars().count()
    }
}

impl Accessible<char> for Identifier {
    /// Fails when the slice starts with a digit or ends with a hyphen.
    fn get_values(&self, first: isize, last: isize) -> PrimitiveResult<Self> {
        let characters = self.as_array();
        let range = to_offsets(first, last, characters.len())?;
        Identifier::from_source(&characters[range].iter().collect::<String>())
    }
}

impl Searchable<char> for Identifier {}

impl Ordered for Identifier {
    fn is_before(&self, other: &Self) -> bool {
        self < other
    }
}

impl Lexical for Identifier {
    fn as_source(&self) -> String {
        self.0.clone()
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({})", self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
