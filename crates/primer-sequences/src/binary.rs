//! Binary strings
//!
//! Source text is base64 (standard alphabet, no padding) between `'>` and
//! `<'`, one indented line per chunk:
//!
//! ```text
//! '>
//!     AAECAwQ
//! <'
//! ```
//!
//! The empty string is `'><'`. Bitwise operations pad the shorter operand
//! with zero bytes.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine as _;
use bytes::Bytes;
use once_cell::sync::Lazy;
use regex::Regex;

use primer_core::{
    anchored, to_offsets, Accessible, Lexical, PrimitiveError, PrimitiveResult, Searchable,
    Sequential, SourceLayout, BASE64, EOL,
};

static CANONICAL: Lazy<Regex> = Lazy::new(|| grammar(&SourceLayout::default()));

fn grammar(layout: &SourceLayout) -> Regex {
    let indent = layout.indent();
    let width = layout.binary_width();
    anchored(&format!(
        r"'><'|'>(?:{EOL}{indent}{BASE64}{{{width}}})*{EOL}{indent}{BASE64}{{2,{width}}}{EOL}<'"
    ))
}

/// Immutable byte string
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Binary(Bytes);

impl Binary {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Binary(bytes.into())
    }

    pub fn from_source(source: &str) -> PrimitiveResult<Self> {
        Binary::from_source_with(source, &SourceLayout::default())
    }

    /// Parse text written with a non-canonical layout.
    pub fn from_source_with(source: &str, layout: &SourceLayout) -> PrimitiveResult<Self> {
        let illegal = || PrimitiveError::illegal_source("Binary", source);
        let matched = if layout.is_canonical() {
            CANONICAL.is_match(source)
        } else {
            grammar(layout).is_match(source)
        };
        if !matched {
            return Err(illegal());
        }
        let encoded: String = source[2..source.len() - 2].split_whitespace().collect();
        // Rejects trailing bits, so every accepted text is the canonical one.
        let bytes = STANDARD_NO_PAD.decode(encoded).map_err(|_| illegal())?;
        Ok(Binary(Bytes::from(bytes)))
    }

    #[inline]
    pub fn as_intrinsic(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn as_bytes(&self) -> Bytes {
        self.0.clone()
    }

    pub fn as_source_with(&self, layout: &SourceLayout) -> String {
        if self.0.is_empty() {
            return "'><'".to_string();
        }
        let encoded = STANDARD_NO_PAD.encode(&self.0);
        let indent = layout.indent();
        let mut source = String::with_capacity(encoded.len() * 2);
        source.push_str("'>");
        for line in encoded.as_bytes().chunks(layout.binary_width()) {
            source.push('\n');
            source.push_str(&indent);
            source.extend(line.iter().map(|&byte| char::from(byte)));
        }
        source.push_str("\n<'");
        source
    }

    pub fn concatenate(&self, other: &Binary) -> Binary {
        let mut bytes = Vec::with_capacity(self.0.len() + other.0.len());
        bytes.extend_from_slice(&self.0);
        bytes.extend_from_slice(&other.0);
        Binary(Bytes::from(bytes))
    }

    fn combine(&self, other: &Binary, operation: impl Fn(u8, u8) -> u8) -> Binary {
        let size = self.0.len().max(other.0.len());
        let byte = |bytes: &Bytes, offset: usize| bytes.get(offset).copied().unwrap_or(0);
        let combined: Vec<u8> = (0..size)
            .map(|offset| operation(byte(&self.0, offset), byte(&other.0, offset)))
            .collect();
        Binary(Bytes::from(combined))
    }

    pub fn and(&self, other: &Binary) -> Binary {
        self.combine(other, |a, b| a & b)
    }

    /// Bits of the first that are clear in the second.
    pub fn san(&self, other: &Binary) -> Binary {
        self.combine(other, |a, b| a & !b)
    }

    pub fn ior(&self, other: &Binary) -> Binary {
        self.combine(other, |a, b| a | b)
    }

    pub fn xor(&self, other: &Binary) -> Binary {
        self.combine(other, |a, b| a ^ b)
    }
}

impl Not for &Binary {
    type Output = Binary;
    fn not(self) -> Binary {
        Binary(self.0.iter().map(|byte| !byte).collect::<Vec<u8>>().into())
    }
}

impl BitAnd for &Binary {
    type Output = Binary;
    fn bitand(self, other: &Binary) -> Binary {
        self.and(other)
    }
}

impl BitOr for &Binary {
    type Output = Binary;
    fn bitor(self, other: &Binary) -> Binary {
        self.ior(other)
    }
}

impl BitXor for &Binary {
    type Output = Binary;
    fn bitxor(self, other: &Binary) -> Binary {
        self.xor(other)
    }
}

impl Sequential<u8> for Binary {
    fn as_array(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    #[inline]
    fn get_size(&self) -> usize {
        self.0.len()
    }
}

impl Accessible<u8> for Binary {
    fn get_values(&self, first: isize, last: isize) -> PrimitiveResult<Self> {
        let range = to_offsets(first, last, self.0.len())?;
        Ok(Binary(self.0.slice(range)))
    }
}

impl Searchable<u8> for Binary {}

impl Lexical for Binary {
    fn as_source(&self) -> String {
        self.as_source_with(&SourceLayout::default())
    }
}

impl From<Vec<u8>> for Binary {
    fn from(bytes: Vec<u8>) -> Self {
        Binary(Bytes::from(bytes))
    }
}

impl From<&[u8]> for Binary {
    fn from(bytes: &[u8]) -> Self {
        Binary(Bytes::copy_from_slice(bytes))
    }
}

impl fmt::Debug for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Binary({} bytes)", self.0.len())
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_source())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary(bytes: &[u8]) -> Binary {
        Binary::from(bytes)
    }

    #[test]
    fn test_binary_source() {
        let source = "'>\n    abcd1234\n<'";
        let value = Binary::from_source(source).unwrap();
        assert_eq!(value.get_size(), 6);
        assert_eq!(value.as_source(), source);
        assert_eq!(Binary::from_source("'><'"), Ok(Binary::default()));
        assert_eq!(Binary::default().as_source(), "'><'");
        for source in [
            "'>\n    abd\n<'",
            "'>\n    a\n<'",
            "'>\n  abcd1234\n<'",
            "'>abcd<'",
            "'>\n    abcd====\n<'",
            "'>\n\n<'",
        ] {
            assert!(Binary::from_source(source).is_err(), "{source:?}");
        }
    }

    #[test]
    fn test_binary_long_lines() {
        let value = Binary::new((0..=255u8).collect::<Vec<u8>>());
        let source = value.as_source();
        let lines: Vec<&str> = source.lines().collect();
        assert_eq!(lines.first(), Some(&"'>"));
        assert_eq!(lines.last(), Some(&"<'"));
        for line in &lines[1..lines.len() - 2] {
            assert_eq!(line.len(), 64);
        }
        assert_eq!(Binary::from_source(&source), Ok(value));
    }

    #[test]
    fn test_binary_layouts() {
        let value = Binary::new(vec![7u8; 40]);
        let layout = SourceLayout::narrow();
        let source = value.as_source_with(&layout);
        assert!(source.starts_with("'>\n  "));
        assert_eq!(Binary::from_source_with(&source, &layout), Ok(value.clone()));
        assert!(Binary::from_source(&source).is_err());
        let nested = value.as_source_with(&SourceLayout::nested(1));
        assert!(nested.contains("\n        "));
    }

    #[test]
    fn test_binary_algebra() {
        let v1 = binary(&[0, 1, 2, 3, 4]);
        let v2 = binary(&[3, 0, 1, 2]);
        assert_eq!(!&v1, binary(&[0xff, 0xfe, 0xfd, 0xfc, 0xfb]));
        assert_eq!(v1.and(&v2), binary(&[0, 0, 0, 2, 0]));
        assert_eq!(v1.san(&v2), binary(&[0, 1, 2, 1, 4]));
        assert_eq!(&v1 | &v2, binary(&[3, 1, 3, 3, 4]));
        assert_eq!(&v1 ^ &v2, binary(&[3, 1, 3, 1, 4]));
        assert_eq!(v2.san(&v1), binary(&[3, 0, 1, 0, 0]));
        assert_eq!(&v2 & &v1, v1.and(&v2));
    }

    #[test]
    fn test_binary_sequence() {
        let first = Binary::from_source("'>\n    abcd\n<'").unwrap();
        let second = Binary::from_source("'>\n    12345678\n<'").unwrap();
        let both = first.concatenate(&second);
        assert_eq!(both.as_source(), "'>\n    abcd12345678\n<'");
        assert_eq!(both.get_value(1), Ok(first.as_intrinsic()[0]));
        assert_eq!(both.get_value(-1), Ok(second.as_intrinsic()[5]));
        assert_eq!(both.get_values(1, 3), Ok(first.clone()));
        assert_eq!(both.get_values(4, -1), Ok(second));
        assert!(both.get_values(0, 2).is_err());
        let v1 = binary(&[0, 1, 2, 3, 4]);
        assert_eq!(v1.get_index(&3), 4);
        assert_eq!(v1.get_index(&9), 0);
        assert!(v1.contains_all(&[0, 4]));
        assert!(!v1.contains_any(&[5, 6]));
        assert!(Binary::default().is_empty());
    }
}
