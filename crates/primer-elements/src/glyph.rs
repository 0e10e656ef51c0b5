//! Single unicode characters

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use primer_core::{
    anchored, escape_glyph, unescape, Discrete, Lexical, PrimitiveError, PrimitiveResult,
    CONTROL, ESCAPE,
};

static GLYPH: Lazy<Regex> =
    Lazy::new(|| anchored(&format!(r"'(?P<glyph>{}|[^{CONTROL}])'", *ESCAPE)));

/// A single code point
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Glyph(char);

impl Glyph {
    pub const MINIMUM: Glyph = Glyph('\0');
    pub const MAXIMUM: Glyph = Glyph(char::MAX);

    #[inline]
    pub fn new(character: char) -> Self {
        Glyph(character)
    }

    pub fn from_integer(code: i64) -> PrimitiveResult<Self> {
        u32::try_from(code)
            .ok()
            .and_then(char::from_u32)
            .map(Glyph)
            .ok_or_else(|| {
                PrimitiveError::illegal_value("Glyph", format!("{code} is not a code point"))
            })
    }

    pub fn from_source(source: &str) -> PrimitiveResult<Self> {
        let illegal = || PrimitiveError::illegal_source("Glyph", source);
        let captures = GLYPH.captures(source).ok_or_else(illegal)?;
        let text = &captures["glyph"];
        let mut characters = text.chars();
        let character = match (characters.next(), characters.next()) {
            (Some(character), None) => character,
            _ => {
                let resolved = unescape(text).ok_or_else(illegal)?;
                let mut characters = resolved.chars();
                match (characters.next(), characters.next()) {
                    (Some(character), None) => character,
                    _ => return Err(illegal()),
                }
            }
        };
        let glyph = Glyph(character);
        // A raw backslash or an escaped printable character is not canonical.
        if glyph.as_source() != source {
            return Err(illegal());
        }
        Ok(glyph)
    }

    #[inline]
    pub fn as_intrinsic(self) -> char {
        self.0
    }

    // Keep the glyph when the case mapping expands to several characters.
    fn single(mut mapping: impl Iterator<Item = char>, fallback: char) -> char {
        match (mapping.next(), mapping.next()) {
            (Some(character), None) => character,
            _ => fallback,
        }
    }

    pub fn to_lowercase(self) -> Self {
        Glyph(Self::single(self.0.to_lowercase(), self.0))
    }

    pub fn to_uppercase(self) -> Self {
        Glyph(Self::single(self.0.to_uppercase(), self.0))
    }
}

impl Discrete for Glyph {
    fn as_boolean(&self) -> bool {
        self.0 != '\0'
    }

    fn as_integer(&self) -> i64 {
        i64::from(u32::from(self.0))
    }

    fn is_defined(&self) -> bool {
        true
    }

    fn is_minimum(&self) -> bool {
        self.0 == '\0'
    }

    fn is_zero(&self) -> bool {
        self.0 == '\0'
    }

    fn is_maximum(&self) -> bool {
        self.0 == char::MAX
    }
}

impl Lexical for Glyph {
    fn as_source(&self) -> String {
        format!("'{}'", escape_glyph(self.0))
    }
}

impl From<char> for Glyph {
    fn from(character: char) -> Self {
        Glyph(character)
    }
}

impl fmt::Debug for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Glyph({})", self.as_source())
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_source())
    }
}
