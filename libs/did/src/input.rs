//! Input shapes accepted by the identifier constructor.
//!
//! [`DidValue`] is the loosely-typed value a caller hands over (a JSON
//! document, a CLI flag, a keyword argument). [`DidInput`] is the closed set
//! of shapes the constructor actually dispatches on. Converting one into the
//! other is where unsupported shapes get rejected.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{Did, DidError};

/// Mapping key holding the scope.
pub const SCOPE_KEY: &str = "scope";

/// Mapping key holding the name.
pub const NAME_KEY: &str = "name";

/// A value of any shape offered as identifier input.
///
/// Only `Text`, `Sequence`, `Mapping`, and `Did` can become an identifier.
/// The remaining variants exist so that callers working with dynamic data
/// get an [`DidError::UnsupportedInputType`] instead of a parse failure
/// somewhere upstream.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DidValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Sequence(Vec<DidValue>),
    Mapping(BTreeMap<String, DidValue>),
    Null,
    #[serde(skip_deserializing)]
    Did(Did),
}

impl DidValue {
    /// Short name of the value's shape, used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            DidValue::Text(_) => "string",
            DidValue::Integer(_) => "integer",
            DidValue::Float(_) => "float",
            DidValue::Bool(_) => "bool",
            DidValue::Sequence(_) => "sequence",
            DidValue::Mapping(_) => "mapping",
            DidValue::Null => "null",
            DidValue::Did(_) => "identifier",
        }
    }

    /// Returns the string content for `Text` values.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DidValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for DidValue {
    fn from(s: &str) -> Self {
        DidValue::Text(s.to_string())
    }
}

impl From<String> for DidValue {
    fn from(s: String) -> Self {
        DidValue::Text(s)
    }
}

impl From<i64> for DidValue {
    fn from(n: i64) -> Self {
        DidValue::Integer(n)
    }
}

impl From<bool> for DidValue {
    fn from(b: bool) -> Self {
        DidValue::Bool(b)
    }
}

impl From<Vec<DidValue>> for DidValue {
    fn from(items: Vec<DidValue>) -> Self {
        DidValue::Sequence(items)
    }
}

impl From<BTreeMap<String, DidValue>> for DidValue {
    fn from(map: BTreeMap<String, DidValue>) -> Self {
        DidValue::Mapping(map)
    }
}

impl From<Did> for DidValue {
    fn from(did: Did) -> Self {
        DidValue::Did(did)
    }
}

impl<A, B> From<(A, B)> for DidValue
where
    A: Into<String>,
    B: Into<String>,
{
    fn from((scope, name): (A, B)) -> Self {
        DidValue::Sequence(vec![
            DidValue::Text(scope.into()),
            DidValue::Text(name.into()),
        ])
    }
}

/// The normalized input the constructor dispatches on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DidInput {
    /// `scope:name`, or a bare name with an implicit scope.
    Text(String),
    /// Ordered `[scope, name]`; any other length is rejected.
    Sequence(Vec<String>),
    /// Named fields; absent fields default to empty.
    Mapping {
        scope: Option<String>,
        name: Option<String>,
    },
    /// An already-constructed identifier.
    Did(Did),
}

impl DidInput {
    /// Short name of the input's shape.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            DidInput::Text(_) => "string",
            DidInput::Sequence(_) => "sequence",
            DidInput::Mapping { .. } => "mapping",
            DidInput::Did(_) => "identifier",
        }
    }
}

fn mapping_field(map: &mut BTreeMap<String, DidValue>, key: &str) -> Result<Option<String>, DidError> {
    match map.remove(key) {
        None => Ok(None),
        Some(DidValue::Text(s)) => Ok(Some(s)),
        Some(other) => Err(DidError::UnsupportedInputType {
            actual: format!("{} in mapping field '{}'", other.type_name(), key),
        }),
    }
}

impl TryFrom<DidValue> for DidInput {
    type Error = DidError;

    fn try_from(value: DidValue) -> Result<Self, Self::Error> {
        match value {
            DidValue::Mapping(mut map) => {
                let scope = mapping_field(&mut map, SCOPE_KEY)?;
                let name = mapping_field(&mut map, NAME_KEY)?;
                Ok(DidInput::Mapping { scope, name })
            }
            DidValue::Sequence(items) => {
                if items.len() != 2 {
                    return Err(DidError::InvalidArity { len: items.len() });
                }
                items
                    .into_iter()
                    .map(|item| match item {
                        DidValue::Text(s) => Ok(s),
                        other => Err(DidError::UnsupportedInputType {
                            actual: format!("{} in sequence", other.type_name()),
                        }),
                    })
                    .collect::<Result<Vec<_>, _>>()
                    .map(DidInput::Sequence)
            }
            DidValue::Text(s) => Ok(DidInput::Text(s)),
            DidValue::Did(did) => Ok(DidInput::Did(did)),
            other => Err(DidError::UnsupportedInputType {
                actual: other.type_name().to_string(),
            }),
        }
    }
}

impl From<&str> for DidInput {
    fn from(s: &str) -> Self {
        DidInput::Text(s.to_string())
    }
}

impl From<String> for DidInput {
    fn from(s: String) -> Self {
        DidInput::Text(s)
    }
}

impl From<Vec<String>> for DidInput {
    fn from(items: Vec<String>) -> Self {
        DidInput::Sequence(items)
    }
}

impl<A, B> From<(A, B)> for DidInput
where
    A: Into<String>,
    B: Into<String>,
{
    fn from((scope, name): (A, B)) -> Self {
        DidInput::Sequence(vec![scope.into(), name.into()])
    }
}

impl From<Did> for DidInput {
    fn from(did: Did) -> Self {
        DidInput::Did(did)
    }
}

impl From<&Did> for DidInput {
    fn from(did: &Did) -> Self {
        DidInput::Did(did.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(entries: &[(&str, DidValue)]) -> DidValue {
        DidValue::Mapping(
            entries
                .iter()
                .map(|(k, v)| ((*k).to_string(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn test_mapping_reads_known_keys() {
        let value = mapping(&[
            ("scope", "data17".into()),
            ("name", "file.root".into()),
            ("extra", DidValue::Integer(5)),
        ]);
        let input = DidInput::try_from(value).unwrap();
        assert_eq!(
            input,
            DidInput::Mapping {
                scope: Some("data17".into()),
                name: Some("file.root".into()),
            }
        );
    }

    #[test]
    fn test_mapping_missing_keys() {
        let input = DidInput::try_from(mapping(&[])).unwrap();
        assert_eq!(
            input,
            DidInput::Mapping {
                scope: None,
                name: None
            }
        );
    }

    #[test]
    fn test_mapping_non_string_field() {
        let err = DidInput::try_from(mapping(&[("scope", true.into())])).unwrap_err();
        assert!(matches!(err, DidError::UnsupportedInputType { .. }));
    }

    #[test]
    fn test_sequence_arity_checked_before_element_types() {
        let value = DidValue::Sequence(vec![DidValue::Integer(1), DidValue::Integer(2), DidValue::Integer(3)]);
        assert_eq!(
            DidInput::try_from(value).unwrap_err(),
            DidError::InvalidArity { len: 3 }
        );
    }

    #[test]
    fn test_sequence_non_string_element() {
        let value = DidValue::Sequence(vec!["a".into(), DidValue::Integer(2)]);
        assert!(matches!(
            DidInput::try_from(value).unwrap_err(),
            DidError::UnsupportedInputType { .. }
        ));
    }

    #[test]
    fn test_scalar_shapes_unsupported() {
        for value in [DidValue::Integer(1), DidValue::Float(1.5), DidValue::Bool(false), DidValue::Null] {
            let name = value.type_name();
            assert_eq!(
                DidInput::try_from(value).unwrap_err(),
                DidError::UnsupportedInputType {
                    actual: name.to_string()
                }
            );
        }
    }

    #[test]
    fn test_value_from_json() {
        let value: DidValue = serde_json::from_str(r#"{"scope": "a", "name": ["x", 1, null]}"#).unwrap();
        let DidValue::Mapping(map) = value else {
            panic!("expected mapping");
        };
        assert_eq!(map["scope"], DidValue::Text("a".into()));
        assert_eq!(
            map["name"],
            DidValue::Sequence(vec!["x".into(), DidValue::Integer(1), DidValue::Null])
        );
    }
}
