//! Grammar fragments for canonical source text
//!
//! Every type's source grammar is assembled from these fragments. Atomic
//! fragments are plain string constants; composite fragments are built once
//! on first use. Each fragment is a self-contained regular expression that
//! can be dropped into an alternation without extra grouping.

use once_cell::sync::Lazy;
use regex::Regex;

pub const BASE10: &str = r"[0-9]";
pub const BASE16: &str = r"[0-9a-f]";
pub const BASE32: &str = r"[A-Z2-7]";
pub const BASE64: &str = r"[A-Za-z0-9+/]";
pub const CONTROL: &str = r"\p{Cc}";
pub const DIGIT: &str = r"\p{Nd}";
pub const LETTER: &str = r"(?:\p{Ll}|\p{Lu})";
pub const EOL: &str = r"\n";
pub const SIGN: &str = r"[+-]";
pub const ORDINAL: &str = r"(?:[1-9][0-9]*)";
pub const FRACTION: &str = r"(?:\.[0-9]+)";
pub const TRANSCENDENTAL: &str = r"(?:e|pi|π|tau|τ|phi|φ)";
pub const UNICODE: &str = r"(?:u[0-9a-f]{4}|U[0-9a-f]{8})";

/// Backslash escape sequence: `\a \b \f \n \r \t \v \\` or a unicode escape.
pub static ESCAPE: Lazy<String> = Lazy::new(|| format!(r"(?:\\(?:{UNICODE}|[abfnrtv\\]))"));

/// Exponent suffix without leading zeros, e.g. `E-10`.
pub static EXPONENT: Lazy<String> = Lazy::new(|| format!(r"(?:E{SIGN}?{ORDINAL})"));

/// Unsigned magnitude token.
pub static AMPLITUDE: Lazy<String> = Lazy::new(|| {
    format!(
        r"(?:0{FRACTION}|{ORDINAL}{FRACTION}?{exponent}?|{TRANSCENDENTAL})",
        exponent = *EXPONENT
    )
});

/// Signed magnitude token.
pub static FLOAT: Lazy<String> = Lazy::new(|| format!(r"(?:{SIGN}?{})", *AMPLITUDE));

/// Signed or unsigned infinity.
pub static INFINITY: Lazy<String> = Lazy::new(|| format!(r"(?:{SIGN}?(?:infinity|∞))"));

/// Any real value including zero, the infinities and `undefined`.
pub static REAL: Lazy<String> =
    Lazy::new(|| format!(r"(?:{}|0|{}|undefined)", *FLOAT, *INFINITY));

/// A purely imaginary value.
pub static IMAGINARY: Lazy<String> = Lazy::new(|| format!(r"(?:{}i)", *FLOAT));

/// Letter followed by letters, digits or hyphens.
pub static IDENTIFIER: Lazy<String> =
    Lazy::new(|| format!(r"(?:{LETTER}(?:{LETTER}|{DIGIT}|-)*)"));

/// One character of a double-quoted literal.
pub static CHARACTER: Lazy<String> =
    Lazy::new(|| format!(r#"(?:{}|\\"|[^"\\{CONTROL}])"#, *ESCAPE));

/// Compile a grammar that must match the entire text.
///
/// Grammars are assembled from the fragments above, so a compile failure is
/// a defect in this crate rather than in caller input.
pub fn anchored(grammar: &str) -> Regex {
    Regex::new(&format!("^(?:{grammar})$")).expect("source grammars are well formed")
}
