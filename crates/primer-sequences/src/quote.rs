//! Quotes: double-quoted text
//!
//! Any text can be quoted; control characters, backslashes and double
//! quotes are escaped in the source text.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use primer_core::{
    anchored, quote, to_offsets, unquote, Accessible, Lexical, Ordered, PrimitiveError,
    PrimitiveResult, Searchable, Sequential, CHARACTER,
};

static QUOTE: Lazy<Regex> = Lazy::new(|| anchored(&format!(r#""(?:{})*""#, *CHARACTER)));

/// Immutable text
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Quote(String);

impl Quote {
    pub fn new(text: impl Into<String>) -> Self {
        Quote(text.into())
    }

    pub fn from_source(source: &str) -> PrimitiveResult<Self> {
        let illegal = || PrimitiveError::illegal_source("Quote", source);
        if !QUOTE.is_match(source) {
            return Err(illegal());
        }
        let text = unquote(source).ok_or_else(illegal)?;
        // Escapes the formatter never writes, such as `\u0041`, are not canonical.
        if quote(&text) != source {
            return Err(illegal());
        }
        Ok(Quote(text))
    }

    #[inline]
    pub fn as_intrinsic(&self) -> &str {
        &self.0
    }

    pub fn concatenate(&self, other: &Quote) -> Quote {
        Quote(format!("{}{}", self.0, other.0))
    }
}

impl Sequential<char> for Quote {
    fn as_array(&self) -> Vec<char> {
        self.0.chars().collect()
    }

    fn get_size(&self) -> usize {
        self.0.chars().count()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Accessible<char> for Quote {
    fn get_values(&self, first: isize, last: isize) -> PrimitiveResult<Self> {
        let characters = self.as_array();
        let range = to_offsets(first, last, characters.len())?;
        Ok(Quote(characters[range].iter().collect()))
    }
}

impl Searchable<char> for Quote {}

impl Ordered for Quote {
    fn is_before(&self, other: &Self) -> bool {
        self < other
    }
}

impl Lexical for Quote {
    fn as_source(&self) -> String {
        quote(&self.0)
    }
}

impl From<&str> for Quote {
    fn from(text: &str) -> Self {
        Quote(text.to_string())
    }
}

impl fmt::Debug for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quote({})", self.as_source())
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_source())
    }
}
