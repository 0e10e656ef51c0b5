//! Patterns: regular expressions as values
//!
//! Source text is a quoted expression followed by `?`, as in `"c(.+t)"?`,
//! or one of the literals `none` and `any`.

use std::fmt;
use std::hash::{Hash, Hasher};

use once_cell::sync::Lazy;
use regex::Regex;

use primer_core::{
    anchored, quote, to_offsets, unquote, Accessible, Lexical, PrimitiveError, PrimitiveResult,
    Sequential, CHARACTER,
};

const NONE: &str = "^none$";
const ANY: &str = ".*";

static PATTERN: Lazy<Regex> =
    Lazy::new(|| anchored(&format!(r#"none|any|(?P<quoted>"(?:{})*")\?"#, *CHARACTER)));

/// Compiled regular expression
#[derive(Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(expression: &str) -> PrimitiveResult<Self> {
        Regex::new(expression)
            .map(Pattern)
            .map_err(|error| PrimitiveError::illegal_value("Pattern", error.to_string()))
    }

    /// Matches only the literal text `none`.
    pub fn none() -> Self {
        static PATTERN: Lazy<Pattern> =
            Lazy::new(|| Pattern(Regex::new(NONE).expect("pattern constants are well formed")));
        PATTERN.clone()
    }

    /// Matches any text.
    pub fn any() -> Self {
        static PATTERN: Lazy<Pattern> =
            Lazy::new(|| Pattern(Regex::new(ANY).expect("pattern constants are well formed")));
        PATTERN.clone()
    }

    pub fn from_source(source: &str) -> PrimitiveResult<Self> {
        let illegal = || PrimitiveError::illegal_source("Pattern", source);
        let captures = PATTERN.captures(source).ok_or_else(illegal)?;
        match captures.name("quoted") {
            None if source == "none" => Ok(Pattern::none()),
            None => Ok(Pattern::any()),
            Some(quoted) => {
                let expression = unquote(quoted.as_str()).ok_or_else(illegal)?;
                // The constant expressions are only written as `none` and `any`.
                let constant = expression == NONE || expression == ANY;
                if constant || quote(&expression) != quoted.as_str() {
                    return Err(illegal());
                }
                Regex::new(&expression).map(Pattern).map_err(|_| illegal())
            }
        }
    }

    #[inline]
    pub fn as_intrinsic(&self) -> &str {
        self.0.as_str()
    }

    #[inline]
    pub fn as_regex(&self) -> &Regex {
        &self.0
    }

    pub fn matches_text(&self, text: &str) -> bool {
        self.0.is_match(text)
    }

    /// The whole match followed by each capture group, empty when the text
    /// does not match. Groups that took no part in the match are empty
    /// strings.
    pub fn get_matches(&self, text: &str) -> Vec<String> {
        self.0.captures(text).map_or_else(Vec::new, |captures| {
            captures
                .iter()
                .map(|group| group.map_or_else(String::new, |group| group.as_str().to_string()))
                .collect()
        })
    }
}

impl Sequential<char> for Pattern {
    fn as_array(&self) -> Vec<char> {
        self.as_intrinsic().chars().collect()
    }

    fn get_size(&self) -> usize {
        self.as_intrinsic().chars().count()
    }
}

impl Accessible<char> for Pattern {
    /// Fails when the slice is not itself a regular expression.
    fn get_values(&self, first: isize, last: isize) -> PrimitiveResult<Self> {
        let characters = self.as_array();
        let range = to_offsets(first, last, characters.len())?;
        Pattern::new(&characters[range].iter().collect::<String>())
    }
}

impl Lexical for Pattern {
    fn as_source(&self) -> String {
        match self.as_intrinsic() {
            NONE => "none".to_string(),
            ANY => "any".to_string(),
            expression => format!("{}?", quote(expression)),
        }
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_intrinsic() == other.as_intrinsic()
    }
}

impl Eq for Pattern {}

impl Hash for Pattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_intrinsic().hash(state);
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({})", self.as_source())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_source())
    }
}
