//! The data identifier type and its construction pipeline.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use crate::{DidError, DidInput, DidValue, ImplicitScopes};

static DEFAULT_SCOPES: LazyLock<ImplicitScopes> = LazyLock::new(ImplicitScopes::default);

/// A data identifier: a `scope` and a `name`.
///
/// Neither half contains [`Did::SCOPE_SEPARATOR`], so the canonical
/// `scope:name` rendering always splits back into the same pair.
/// Equality, ordering, and hashing all go through that rendering, which is
/// also why a `Did` compares equal to the plain string it renders as.
#[derive(Debug, Clone, Default)]
pub struct Did {
    scope: String,
    name: String,
}

impl Did {
    /// Separates scope from name in the canonical rendering.
    pub const SCOPE_SEPARATOR: char = ':';

    /// Separates the segments an implicit scope is built from.
    pub const IMPLICIT_SCOPE_SEPARATOR: char = '.';

    /// Stripped once from the end of a constructed name.
    const TRAILING_SEPARATOR: char = '/';

    /// Builds an identifier from an explicit scope and name.
    pub fn new(scope: impl Into<String>, name: impl Into<String>) -> Result<Self, DidError> {
        Self::from_input((scope.into(), name.into()))
    }

    /// Parses `scope:name`, or a bare name carrying an implicit scope.
    pub fn parse(s: &str) -> Result<Self, DidError> {
        Self::from_input(s)
    }

    /// Parses with a caller-supplied implicit scope table.
    pub fn parse_with(s: &str, scopes: &ImplicitScopes) -> Result<Self, DidError> {
        Self::from_input_with(s, scopes)
    }

    /// Builds an identifier from any input shape, using the default
    /// implicit scope table.
    pub fn from_input(input: impl Into<DidInput>) -> Result<Self, DidError> {
        Self::from_input_with(input, &DEFAULT_SCOPES)
    }

    /// Builds an identifier from any input shape.
    pub fn from_input_with(
        input: impl Into<DidInput>,
        scopes: &ImplicitScopes,
    ) -> Result<Self, DidError> {
        let input = input.into();
        tracing::trace!(shape = input.type_name(), "constructing identifier");

        let (scope, mut name) = match input {
            DidInput::Mapping { scope, name } => {
                let name = name.unwrap_or_default();
                let scope = match scope.filter(|s| !s.is_empty()) {
                    Some(scope) => scope,
                    None => scopes.resolve(&name).unwrap_or_default(),
                };
                (scope, name)
            }
            DidInput::Sequence(items) => {
                let [scope, name]: [String; 2] = items
                    .try_into()
                    .map_err(|items: Vec<String>| DidError::InvalidArity { len: items.len() })?;
                (scope, name)
            }
            DidInput::Text(text) => match text.split_once(Self::SCOPE_SEPARATOR) {
                Some((scope, name)) => (scope.to_string(), name.to_string()),
                None => match scopes.resolve(&text).filter(|s| !s.is_empty()) {
                    Some(scope) => (scope, text),
                    None => {
                        tracing::debug!(input = %text, "rejecting identifier without scope");
                        return Err(DidError::AmbiguousIdentifier { input: text });
                    }
                },
            },
            DidInput::Did(did) => (did.scope, did.name),
        };

        if name.ends_with(Self::TRAILING_SEPARATOR) {
            name.pop();
        }

        let did = Self { scope, name };
        if !did.is_valid_format() {
            tracing::debug!(did = %did, "rejecting identifier with separator in scope or name");
            return Err(DidError::InvalidFormat {
                did: did.to_string(),
            });
        }
        Ok(did)
    }

    /// The scope half.
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// The name half.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn has_scope(&self) -> bool {
        !self.scope.is_empty()
    }

    #[must_use]
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    /// Consumes the identifier, returning `(scope, name)`.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.scope, self.name)
    }

    /// True when neither half contains the scope separator.
    ///
    /// Always true for a constructed identifier.
    #[must_use]
    pub fn is_valid_format(&self) -> bool {
        !self.scope.contains(Self::SCOPE_SEPARATOR) && !self.name.contains(Self::SCOPE_SEPARATOR)
    }

    /// The canonical rendering: `scope:name`, or whichever half is set.
    #[must_use]
    pub fn canonical(&self) -> Cow<'_, str> {
        match (self.has_scope(), self.has_name()) {
            (true, true) => Cow::Owned(format!(
                "{}{}{}",
                self.scope,
                Self::SCOPE_SEPARATOR,
                self.name
            )),
            (true, false) => Cow::Borrowed(&self.scope),
            _ => Cow::Borrowed(&self.name),
        }
    }
}

impl std::fmt::Display for Did {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl std::str::FromStr for Did {
    type Err = DidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Did {
    type Error = DidError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Did {
    type Error = DidError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_input(s)
    }
}

impl TryFrom<DidValue> for Did {
    type Error = DidError;

    fn try_from(value: DidValue) -> Result<Self, Self::Error> {
        Self::from_input(DidInput::try_from(value)?)
    }
}

// =============================================================================
// Equality, ordering, hashing
// =============================================================================

impl PartialEq for Did {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Did {}

impl PartialOrd for Did {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Did {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().cmp(&other.canonical())
    }
}

impl Hash for Did {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must match `str::hash` so a Did and its rendering share a bucket.
        let canonical = self.canonical();
        let rendered: &str = &canonical;
        rendered.hash(state);
    }
}

impl PartialEq<str> for Did {
    fn eq(&self, other: &str) -> bool {
        *self.canonical() == *other
    }
}

impl PartialEq<&str> for Did {
    fn eq(&self, other: &&str) -> bool {
        *self.canonical() == **other
    }
}

impl PartialEq<String> for Did {
    fn eq(&self, other: &String) -> bool {
        *self.canonical() == **other
    }
}

impl PartialEq<Did> for str {
    fn eq(&self, other: &Did) -> bool {
        other == self
    }
}

impl PartialEq<Did> for &str {
    fn eq(&self, other: &Did) -> bool {
        other == *self
    }
}

impl PartialEq<Did> for String {
    fn eq(&self, other: &Did) -> bool {
        other == self
    }
}

/// Best-effort comparison: strings compare by rendering, other shapes are
/// coerced into an identifier first and are unequal if that fails.
impl PartialEq<DidValue> for Did {
    fn eq(&self, other: &DidValue) -> bool {
        match other {
            DidValue::Text(s) => self == s,
            DidValue::Did(did) => self == did,
            value => Did::try_from(value.clone()).is_ok_and(|did| *self == did),
        }
    }
}

impl PartialEq<Did> for DidValue {
    fn eq(&self, other: &Did) -> bool {
        other == self
    }
}

// =============================================================================
// Serde
// =============================================================================

impl serde::Serialize for Did {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.canonical())
    }
}

impl<'de> serde::Deserialize<'de> for Did {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = DidValue::deserialize(deserializer)?;
        Self::try_from(value).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================
