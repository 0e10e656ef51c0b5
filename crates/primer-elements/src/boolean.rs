//! Booleans and their logical algebra

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use primer_core::{Discrete, Lexical, PrimitiveError, PrimitiveResult};

/// Two-valued truth
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Boolean(bool);

impl Boolean {
    pub const FALSE: Boolean = Boolean(false);
    pub const TRUE: Boolean = Boolean(true);

    #[inline]
    pub fn new(value: bool) -> Self {
        Boolean(value)
    }

    pub fn from_source(source: &str) -> PrimitiveResult<Self> {
        match source {
            "false" => Ok(Boolean::FALSE),
            "true" => Ok(Boolean::TRUE),
            _ => Err(PrimitiveError::illegal_source("Boolean", source)),
        }
    }

    #[inline]
    pub fn as_intrinsic(self) -> bool {
        self.0
    }

    pub fn and(self, other: Boolean) -> Self {
        Boolean(self.0 && other.0)
    }

    /// First and not second.
    pub fn san(self, other: Boolean) -> Self {
        Boolean(self.0 && !other.0)
    }

    pub fn ior(self, other: Boolean) -> Self {
        Boolean(self.0 || other.0)
    }

    pub fn xor(self, other: Boolean) -> Self {
        self.san(other).ior(other.san(self))
    }
}

impl Not for Boolean {
    type Output = Boolean;
    fn not(self) -> Boolean {
        Boolean(!self.0)
    }
}

impl BitAnd for Boolean {
    type Output = Boolean;
    fn bitand(self, other: Boolean) -> Boolean {
        self.and(other)
    }
}

impl BitOr for Boolean {
    type Output = Boolean;
    fn bitor(self, other: Boolean) -> Boolean {
        self.ior(other)
    }
}

impl BitXor for Boolean {
    type Output = Boolean;
    fn bitxor(self, other: Boolean) -> Boolean {
        self.xor(other)
    }
}

impl Discrete for Boolean {
    fn as_boolean(&self) -> bool {
        self.0
    }

    fn as_integer(&self) -> i64 {
        i64::from(self.0)
    }

    fn is_defined(&self) -> bool {
        true
    }

    fn is_minimum(&self) -> bool {
        !self.0
    }

    fn is_zero(&self) -> bool {
        !self.0
    }

    fn is_maximum(&self) -> bool {
        self.0
    }
}

impl Lexical for Boolean {
    fn as_source(&self) -> String {
        self.0.to_string()
    }
}

impl From<bool> for Boolean {
    fn from(value: bool) -> Self {
        Boolean(value)
    }
}

impl fmt::Debug for Boolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Boolean({})", self.0)
    }
}

impl fmt::Display for Boolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: Boolean = Boolean::TRUE;
    const F: Boolean = Boolean::FALSE;

    #[test]
    fn test_boolean_source() {
        assert_eq!(Boolean::from_source("true"), Ok(T));
        assert_eq!(Boolean::from_source("false"), Ok(F));
        assert_eq!(T.as_source(), "true");
        assert!(Boolean::from_source("True").is_err());
        assert!(Boolean::from_source("").is_err());
    }

    #[test]
    fn test_boolean_aspects() {
        assert_eq!(T.as_integer(), 1);
        assert_eq!(F.as_integer(), 0);
        assert!(T.is_maximum());
        assert!(F.is_minimum());
        assert!(F.is_zero());
    }

    #[test]
    fn test_boolean_algebra() {
        assert_eq!(!T, F);
        assert_eq!(T.and(F), F);
        assert_eq!(T & T, T);
        assert_eq!(T.san(F), T);
        assert_eq!(T.san(T), F);
        assert_eq!(F.san(T), F);
        assert_eq!(F | T, T);
        assert_eq!(F.ior(F), F);
        assert_eq!(T ^ F, T);
        assert_eq!(T.xor(T), F);
        assert_eq!(F.xor(F), F);
    }
}
