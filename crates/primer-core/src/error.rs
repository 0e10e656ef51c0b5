//! Error types for primitive value construction

use thiserror::Error;

/// Failures raised while constructing a primitive value.
///
/// Arithmetic and logical operations never fail; only constructors and
/// indexed accessors do.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrimitiveError {
    #[error("An illegal string was passed to the {kind} constructor: {text:?}")]
    IllegalSource { kind: &'static str, text: String },

    #[error("An illegal value was passed to the {kind} constructor: {reason}")]
    IllegalValue { kind: &'static str, reason: String },

    #[error("A tag must be at least eight bytes long, got {0}")]
    TagTooShort(usize),

    #[error("Index {index} is out of range for a sequence of size {size}")]
    IndexOutOfRange { index: isize, size: usize },
}

impl PrimitiveError {
    /// Reject a source string, logging the offending text.
    pub fn illegal_source(kind: &'static str, text: &str) -> Self {
        tracing::debug!(kind, text, "rejected source text");
        PrimitiveError::IllegalSource {
            kind,
            text: text.to_string(),
        }
    }

    /// Reject an intrinsic value that violates a constructor precondition.
    pub fn illegal_value(kind: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::debug!(kind, %reason, "rejected intrinsic value");
        PrimitiveError::IllegalValue { kind, reason }
    }
}

/// Result type for primitive construction
pub type PrimitiveResult<T> = Result<T, PrimitiveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_source_names_text() {
        let error = PrimitiveError::illegal_source("Number", "1.2.3");
        assert_eq!(
            error.to_string(),
            "An illegal string was passed to the Number constructor: \"1.2.3\""
        );
    }

    #[test]
    fn test_tag_too_short_message() {
        assert_eq!(
            PrimitiveError::TagTooShort(4).to_string(),
            "A tag must be at least eight bytes long, got 4"
        );
    }
}
