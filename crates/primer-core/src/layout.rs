//! Source layout configuration
//!
//! Multi-line literals (binary strings, bytecode) are written one chunk per
//! indented line. The default layout is the canonical one; other layouts
//! exist for literals embedded deeper in a document.

/// Line layout for multi-line literals
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLayout {
    /// Spaces before each content line
    pub indentation: usize,
    /// Base64 characters per binary line
    pub binary_line_width: usize,
    /// Instructions per bytecode line
    pub bytecode_line_width: usize,
}

impl Default for SourceLayout {
    fn default() -> Self {
        SourceLayout {
            indentation: 4,
            binary_line_width: 60,
            bytecode_line_width: 12,
        }
    }
}

impl SourceLayout {
    /// Layout for a literal nested `depth` blocks deep
    pub fn nested(depth: usize) -> Self {
        SourceLayout {
            indentation: 4 * (depth + 1),
            ..Default::default()
        }
    }

    /// Layout for narrow terminals and side-by-side diffs
    pub fn narrow() -> Self {
        SourceLayout {
            indentation: 2,
            binary_line_width: 32,
            bytecode_line_width: 6,
        }
    }

    /// Whether this is the canonical layout.
    pub fn is_canonical(&self) -> bool {
        *self == SourceLayout::default()
    }

    /// Leading whitespace for a content line.
    pub fn indent(&self) -> String {
        " ".repeat(self.indentation)
    }

    /// Binary line width, rounded down to whole base64 quanta.
    #[inline]
    pub fn binary_width(&self) -> usize {
        (self.binary_line_width / 4).max(1) * 4
    }

    /// Bytecode line width, never empty.
    #[inline]
    pub fn bytecode_width(&self) -> usize {
        self.bytecode_line_width.max(1)
    }
}
