//! Narratives: multi-line text blocks
//!
//! Source text is the lines between `">` and `<"`, each on its own line:
//!
//! ```text
//! ">
//! first line
//!     second line
//! <"
//! ```
//!
//! Lines keep their own indentation. A delimiter inside a line is escaped
//! (`\">` and `<\"`); an empty narrative is `"><"`.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use primer_core::{
    anchored, to_offsets, Accessible, Lexical, PrimitiveError, PrimitiveResult, Searchable,
    Sequential, EOL,
};

static NARRATIVE: Lazy<Regex> =
    Lazy::new(|| anchored(&format!(r#""><"|">(?:{EOL}[^\n]*)+{EOL}<""#)));

fn escape_line(line: &str) -> String {
    line.replace("\">", "\\\">").replace("<\"", "<\\\"")
}

fn unescape_line(line: &str) -> String {
    line.replace("\\\">", "\">").replace("<\\\"", "<\"")
}

/// Immutable block of text lines
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Narrative(Vec<String>);

impl Narrative {
    /// Lines must not contain line breaks, nor the text `<\"` which reads
    /// back as an escaped delimiter.
    pub fn new(lines: Vec<String>) -> PrimitiveResult<Self> {
        for line in &lines {
            if line.contains('\n') {
                return Err(PrimitiveError::illegal_value(
                    "Narrative",
                    format!("{line:?} spans more than one line"),
                ));
            }
            if unescape_line(&escape_line(line)) != *line {
                return Err(PrimitiveError::illegal_value(
                    "Narrative",
                    format!("{line:?} contains an escaped delimiter"),
                ));
            }
        }
        Ok(Narrative(lines))
    }

    /// Split text on its line breaks.
    pub fn from_text(text: &str) -> PrimitiveResult<Self> {
        Narrative::new(text.split('\n').map(str::to_string).collect())
    }

    pub fn from_source(source: &str) -> PrimitiveResult<Self> {
        let illegal = || PrimitiveError::illegal_source("Narrative", source);
        if !NARRATIVE.is_match(source) {
            return Err(illegal());
        }
        let body = &source[2..source.len() - 2];
        let narrative = if body.is_empty() {
            Narrative::default()
        } else {
            let lines = &body[1..body.len() - 1];
            Narrative(lines.split('\n').map(unescape_line).collect())
        };
        // Unescaped delimiters and stray escapes would not survive a round trip.
        if narrative.as_source() != source {
            return Err(illegal());
        }
        Ok(narrative)
    }

    #[inline]
    pub fn as_intrinsic(&self) -> &[String] {
        &self.0
    }

    /// The lines joined with line breaks.
    pub fn as_text(&self) -> String {
        self.0.join("\n")
    }

    pub fn concatenate(&self, other: &Narrative) -> Narrative {
        Narrative([self.0.as_slice(), other.0.as_slice()].concat())
    }
}

impl Sequential<String> for Narrative {
    fn as_array(&self) -> Vec<String> {
        self.0.clone()
    }

    #[inline]
    fn get_size(&self) -> usize {
        self.0.len()
    }
}

impl Accessible<String> for Narrative {
    fn get_values(&self, first: isize, last: isize) -> PrimitiveResult<Self> {
        let range = to_offsets(first, last, self.0.len())?;
        Ok(Narrative(self.0[range].to_vec()))
    }
}

impl Searchable<String> for Narrative {}

impl Lexical for Narrative {
    fn as_source(&self) -> String {
        if self.0.is_empty() {
            return "\"><\"".to_string();
        }
        let mut source = String::from("\">");
        for line in &self.0 {
            source.push('\n');
            source.push_str(&escape_line(line));
        }
        source.push_str("\n<\"");
        source
    }
}

impl fmt::Debug for Narrative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Narrative({} lines)", self.0.len())
    }
}

impl fmt::Display for Narrative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_source())
    }
}
