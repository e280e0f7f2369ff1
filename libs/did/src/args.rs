//! Constructor argument normalization.
//!
//! Callers that receive identifier parts loosely (positional values plus
//! optional `scope`/`name`/`did` keywords) collect them in [`DidArgs`], which
//! reduces the combination to exactly one [`DidInput`] before any parsing.
//!
//! | positional | keywords          | logical input                     |
//! |------------|-------------------|-----------------------------------|
//! | 0          | `did`             | the `did` value                   |
//! | 0          | anything else     | all keywords as a mapping         |
//! | 1          | none              | the positional value              |
//! | 1 (string) | `scope` or `name` | `(scope, name)` pair              |
//! | 2          | none              | `(first, second)` pair            |

use std::collections::BTreeMap;

use crate::input::{NAME_KEY, SCOPE_KEY};
use crate::{Did, DidError, DidInput, DidValue, ImplicitScopes};

/// Keyword carrying a complete identifier in any shape.
pub const DID_KEYWORD: &str = "did";

/// Upper bound on positional and keyword arguments combined.
pub const MAX_ARGUMENTS: usize = 2;

/// Positional and keyword arguments for building a [`Did`].
#[derive(Debug, Clone, Default)]
pub struct DidArgs {
    positional: Vec<DidValue>,
    keywords: BTreeMap<String, DidValue>,
}

impl DidArgs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument.
    #[must_use]
    pub fn arg(mut self, value: impl Into<DidValue>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Sets a keyword argument, replacing an earlier one with the same key.
    #[must_use]
    pub fn kwarg(mut self, key: impl Into<String>, value: impl Into<DidValue>) -> Self {
        self.keywords.insert(key.into(), value.into());
        self
    }

    /// Total number of positional and keyword arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positional.len() + self.keywords.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reduces the arguments to a single input shape.
    pub fn normalize(self) -> Result<DidInput, DidError> {
        let given = self.len();
        if given > MAX_ARGUMENTS {
            return Err(DidError::TooManyArguments { given });
        }

        let Self {
            positional,
            mut keywords,
        } = self;
        let mut positional = positional.into_iter();

        let value = match (positional.next(), positional.next()) {
            (None, _) => match keywords.remove(DID_KEYWORD) {
                Some(did) => did,
                None => DidValue::Mapping(keywords),
            },
            (Some(first), None) => match keywords.into_iter().next() {
                None => first,
                Some((key, value)) => {
                    let text = match first {
                        DidValue::Text(text) => text,
                        other => {
                            return Err(DidError::InvalidPositionalType {
                                actual: other.type_name(),
                            })
                        }
                    };
                    match key.as_str() {
                        SCOPE_KEY => DidValue::Sequence(vec![value, DidValue::Text(text)]),
                        NAME_KEY => DidValue::Sequence(vec![DidValue::Text(text), value]),
                        _ => return Err(DidError::UnexpectedKeyword { keyword: key }),
                    }
                }
            },
            (Some(first), Some(second)) => DidValue::Sequence(vec![first, second]),
        };

        DidInput::try_from(value)
    }

    /// Normalizes and builds with the default implicit scope table.
    pub fn build(self) -> Result<Did, DidError> {
        Did::from_input(self.normalize()?)
    }

    /// Normalizes and builds with a caller-supplied implicit scope table.
    pub fn build_with(self, scopes: &ImplicitScopes) -> Result<Did, DidError> {
        Did::from_input_with(self.normalize()?, scopes)
    }
}
