//! Backslash escapes for quoted literals
//!
//! Glyphs, quotes and patterns share one escape vocabulary:
//! `\a \b \f \n \r \t \v \\ \"` plus `\uXXXX` and `\UXXXXXXXX` in lower
//! case hex. Control characters are always escaped on output so that the
//! text never contains raw control codes.

/// Append the escaped form of a control character, returning false when
/// the character needs no escaping.
fn push_control(character: char, text: &mut String) -> bool {
    let escape = match character {
        '\u{7}' => "\\a",
        '\u{8}' => "\\b",
        '\u{c}' => "\\f",
        '\n' => "\\n",
        '\r' => "\\r",
        '\t' => "\\t",
        '\u{b}' => "\\v",
        c if c.is_control() => {
            let code = c as u32;
            if code <= 0xffff {
                text.push_str(&format!("\\u{code:04x}"));
            } else {
                text.push_str(&format!("\\U{code:08x}"));
            }
            return true;
        }
        _ => return false,
    };
    text.push_str(escape);
    true
}

/// Escape a single glyph. A backslash doubles; quote characters stay
/// literal.
pub fn escape_glyph(character: char) -> String {
    let mut text = String::new();
    if character == '\\' {
        text.push_str("\\\\");
    } else if !push_control(character, &mut text) {
        text.push(character);
    }
    text
}

/// Wrap text in double quotes, escaping control characters, backslashes
/// and embedded double quotes.
pub fn quote(unquoted: &str) -> String {
    let mut text = String::with_capacity(unquoted.len() + 2);
    text.push('"');
    for character in unquoted.chars() {
        match character {
            '\\' => text.push_str("\\\\"),
            '"' => text.push_str("\\\""),
            c => {
                if !push_control(c, &mut text) {
                    text.push(c);
                }
            }
        }
    }
    text.push('"');
    text
}

fn hex_character(characters: &mut std::str::Chars<'_>, width: usize) -> Option<char> {
    let digits: String = characters.take(width).collect();
    if digits.len() != width {
        return None;
    }
    u32::from_str_radix(&digits, 16).ok().and_then(char::from_u32)
}

/// Resolve every backslash escape in the text.
///
/// Returns `None` for a dangling backslash, an unknown escape or a code
/// point that is not a valid character.
pub fn unescape(escaped: &str) -> Option<String> {
    let mut text = String::with_capacity(escaped.len());
    let mut characters = escaped.chars();
    while let Some(character) = characters.next() {
        if character != '\\' {
            text.push(character);
            continue;
        }
        let resolved = match characters.next()? {
            'a' => '\u{7}',
            'b' => '\u{8}',
            'f' => '\u{c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\u{b}',
            '\\' => '\\',
            '"' => '"',
            'u' => hex_character(&mut characters, 4)?,
            'U' => hex_character(&mut characters, 8)?,
            _ => return None,
        };
        text.push(resolved);
    }
    Some(text)
}

/// Strip the surrounding double quotes and resolve escapes.
pub fn unquote(quoted: &str) -> Option<String> {
    let inner = quoted.strip_prefix('"')?.strip_suffix('"')?;
    unescape(inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("a\"b"), r#""a\"b""#);
        assert_eq!(quote("tab\there"), r#""tab\there""#);
        assert_eq!(quote("back\\slash"), r#""back\\slash""#);
        assert_eq!(quote("\u{1}"), r#""\u0001""#);
        assert_eq!(quote("本"), "\"本\"");
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote(r#""a\"b""#).as_deref(), Some("a\"b"));
        assert_eq!(unquote(r#""é\U0001f600""#).as_deref(), Some("é😀"));
        assert_eq!(unquote(r#""\q""#), None);
        assert_eq!(unquote(r#""\ud800""#), None);
        assert_eq!(unquote("no quotes"), None);
    }

    #[test]
    fn test_escape_glyph() {
        assert_eq!(escape_glyph('\n'), "\\n");
        assert_eq!(escape_glyph('\\'), "\\\\");
        assert_eq!(escape_glyph('\''), "'");
        assert_eq!(escape_glyph('\u{7f}'), "\\u007f");
    }
}
