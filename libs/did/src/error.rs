//! Error types for identifier construction.

use thiserror::Error;

/// Errors that can occur when constructing a [`Did`](crate::Did).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DidError {
    /// More than two positional and keyword arguments combined.
    #[error("constructor takes at most 2 arguments, given {given}")]
    TooManyArguments { given: usize },

    /// A keyword other than `scope` or `name` next to a positional argument.
    #[error("constructor got unexpected keyword argument '{keyword}'")]
    UnexpectedKeyword { keyword: String },

    /// The positional argument is not a string while a keyword is also given.
    #[error("positional argument must be a string when a keyword argument is given, got {actual}")]
    InvalidPositionalType { actual: &'static str },

    /// The input is not a mapping, sequence, string, or identifier.
    #[error("cannot build identifier from {actual}")]
    UnsupportedInputType { actual: String },

    /// A sequence input does not have exactly two elements.
    #[error("construction from a sequence requires exactly 2 elements, got {len}")]
    InvalidArity { len: usize },

    /// A bare string with neither a separator nor a known implicit scope.
    #[error("identifier '{input}' has no scope and none can be inferred")]
    AmbiguousIdentifier { input: String },

    /// Scope or name contains the scope separator after construction.
    #[error("identifier has invalid format after construction: '{did}'")]
    InvalidFormat { did: String },
}

impl DidError {
    /// Returns true if the failure happened while normalizing constructor arguments.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            DidError::TooManyArguments { .. }
                | DidError::UnexpectedKeyword { .. }
                | DidError::InvalidPositionalType { .. }
        )
    }

    /// Returns true if the constructed scope or name broke the separator invariant.
    pub fn is_format_error(&self) -> bool {
        matches!(self, DidError::InvalidFormat { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_errors_classified() {
        assert!(DidError::TooManyArguments { given: 3 }.is_argument_error());
        assert!(DidError::UnexpectedKeyword {
            keyword: "foo".into()
        }
        .is_argument_error());
        assert!(DidError::InvalidPositionalType { actual: "sequence" }.is_argument_error());
        assert!(!DidError::InvalidArity { len: 3 }.is_argument_error());
    }

    #[test]
    fn test_message_names_input() {
        let err = DidError::AmbiguousIdentifier {
            input: "plainname".into(),
        };
        assert!(err.to_string().contains("plainname"));
        assert!(!err.is_format_error());
    }
}
