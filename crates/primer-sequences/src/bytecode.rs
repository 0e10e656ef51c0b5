//! Bytecode: runs of 16-bit instructions
//!
//! Source text shares the binary delimiters, with each instruction written
//! as `:` and four lower case hex digits, a fixed number per line.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use primer_core::{
    anchored, to_offsets, Accessible, Lexical, PrimitiveError, PrimitiveResult, Searchable,
    Sequential, SourceLayout, BASE16, EOL,
};

static CANONICAL: Lazy<Regex> = Lazy::new(|| grammar(&SourceLayout::default()));

fn grammar(layout: &SourceLayout) -> Regex {
    let indent = layout.indent();
    let width = layout.bytecode_width();
    let instruction = format!(":{BASE16}{{4}}");
    anchored(&format!(
        r"'><'|'>(?:{EOL}{indent}(?:{instruction}){{{width}}})*{EOL}{indent}(?:{instruction}){{1,{width}}}{EOL}<'"
    ))
}

/// Immutable sequence of instructions
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Bytecode(Vec<u16>);

impl Bytecode {
    pub fn new(instructions: Vec<u16>) -> Self {
        Bytecode(instructions)
    }

    pub fn from_source(source: &str) -> PrimitiveResult<Self> {
        Bytecode::from_source_with(source, &SourceLayout::default())
    }

    pub fn from_source_with(source: &str, layout: &SourceLayout) -> PrimitiveResult<Self> {
        let illegal = || PrimitiveError::illegal_source("Bytecode", source);
        let matched = if layout.is_canonical() {
            CANONICAL.is_match(source)
        } else {
            grammar(layout).is_match(source)
        };
        if !matched {
            return Err(illegal());
        }
        source[2..source.len() - 2]
            .split(|character: char| character == ':' || character.is_whitespace())
            .filter(|digits| !digits.is_empty())
            .map(|digits| u16::from_str_radix(digits, 16).map_err(|_| illegal()))
            .collect::<PrimitiveResult<Vec<u16>>>()
            .map(Bytecode)
    }

    #[inline]
    pub fn as_intrinsic(&self) -> &[u16] {
        &self.0
    }

    pub fn as_source_with(&self, layout: &SourceLayout) -> String {
        if self.0.is_empty() {
            return "'><'".to_string();
        }
        let indent = layout.indent();
        let mut source = String::from("'>");
        for line in self.0.chunks(layout.bytecode_width()) {
            source.push('\n');
            source.push_str(&indent);
            for instruction in line {
                source.push_str(&format!(":{instruction:04x}"));
            }
        }
        source.push_str("\n<'");
        source
    }

    pub fn concatenate(&self, other: &Bytecode) -> Bytecode {
        Bytecode([self.0.as_slice(), other.0.as_slice()].concat())
    }
}

impl Sequential<u16> for Bytecode {
    fn as_array(&self) -> Vec<u16> {
        self.0.clone()
    }

    #[inline]
    fn get_size(&self) -> usize {
        self.0.len()
    }
}

impl Accessible<u16> for Bytecode {
    fn get_values(&self, first: isize, last: isize) -> PrimitiveResult<Self> {
        let range = to_offsets(first, last, self.0.len())?;
        Ok(Bytecode(self.0[range].to_vec()))
    }
}

impl Searchable<u16> for Bytecode {}

impl Lexical for Bytecode {
    fn as_source(&self) -> String {
        self.as_source_with(&SourceLayout::default())
    }
}

impl From<Vec<u16>> for Bytecode {
    fn from(instructions: Vec<u16>) -> Self {
        Bytecode(instructions)
    }
}

impl fmt::Debug for Bytecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bytecode({:04x?})", self.0)
    }
}

impl fmt::Display for Bytecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_source())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytecode_source() {
        let source = "'>\n    :abcd:1234\n<'";
        let bytecode = Bytecode::from_source(source).unwrap();
        assert_eq!(bytecode.get_size(), 2);
        assert_eq!(bytecode.as_intrinsic(), &[0xabcd, 0x1234]);
        assert_eq!(bytecode.as_source(), source);
        assert_eq!(Bytecode::from_source("'><'"), Ok(Bytecode::default()));
        for source in [
            "'>\n    :ABCD\n<'",
            "'>\n    :abc\n<'",
            "'>\n    abcd\n<'",
            "'>\n:abcd\n<'",
            "'>\n    \n<'",
        ] {
            assert!(Bytecode::from_source(source).is_err(), "{source:?}");
        }
    }

    #[test]
    fn test_bytecode_lines() {
        let bytecode = Bytecode::new((0..13).collect());
        let source = bytecode.as_source();
        let lines: Vec<&str> = source.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1].matches(':').count(), 12);
        assert_eq!(lines[2], "    :000c");
        assert_eq!(Bytecode::from_source(&source), Ok(bytecode.clone()));

        let layout = SourceLayout::narrow();
        let narrow = bytecode.as_source_with(&layout);
        assert_eq!(narrow.lines().count(), 5);
        assert_eq!(Bytecode::from_source_with(&narrow, &layout), Ok(bytecode));
    }

    #[test]
    fn test_bytecode_sequence() {
        let first = Bytecode::new(vec![1, 2]);
        let second = Bytecode::new(vec![3]);
        let both = first.concatenate(&second);
        assert_eq!(both.as_intrinsic(), &[1, 2, 3]);
        assert_eq!(both.get_value(-1), Ok(3));
        assert_eq!(both.get_values(1, 2), Ok(first));
        assert_eq!(both.get_index(&3), 3);
        assert!(both.contains_value(&2));
    }
}
