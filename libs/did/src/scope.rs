//! Implicit scope resolution.
//!
//! Some names carry their scope as a dotted prefix, e.g. `user.jdoe.dataset`
//! lives in scope `user.jdoe`. The first dot-separated segment selects a
//! prefix kind, and the kind says how many leading segments form the scope.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Did;

/// Table of recognized implicit-scope kinds.
///
/// Maps a prefix kind (the first dot-separated segment of a name) to the
/// number of leading segments that make up the scope. A count of zero
/// means the kind is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImplicitScopes {
    kinds: BTreeMap<String, usize>,
}

impl ImplicitScopes {
    /// Segment count for the built-in `user` kind.
    pub const USER_SEGMENTS: usize = 2;

    /// Segment count for the built-in `group` kind.
    pub const GROUP_SEGMENTS: usize = 2;

    /// A table that recognizes no kinds.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            kinds: BTreeMap::new(),
        }
    }

    /// Adds or replaces a kind.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>, segments: usize) -> Self {
        self.kinds.insert(kind.into(), segments);
        self
    }

    /// Number of leading segments forming the scope for `kind`, or 0.
    #[must_use]
    pub fn segments_for(&self, kind: &str) -> usize {
        self.kinds.get(kind).copied().unwrap_or(0)
    }

    /// Iterates over the configured kinds in sorted order.
    pub fn kinds(&self) -> impl Iterator<Item = (&str, usize)> {
        self.kinds.iter().map(|(k, n)| (k.as_str(), *n))
    }

    /// Infers a scope from `name`, if its prefix kind is recognized.
    ///
    /// Only the scope is derived; callers keep `name` unchanged.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<String> {
        let mut segments = name.split(Did::IMPLICIT_SCOPE_SEPARATOR);
        let kind = segments.next()?;
        let count = self.segments_for(kind);
        if count == 0 {
            return None;
        }

        let mut scope = String::from(kind);
        for segment in segments.take(count - 1) {
            scope.push(Did::IMPLICIT_SCOPE_SEPARATOR);
            scope.push_str(segment);
        }

        tracing::trace!(did_name = name, kind, %scope, "resolved implicit scope");
        Some(scope)
    }
}

impl Default for ImplicitScopes {
    fn default() -> Self {
        Self::empty()
            .with_kind("user", Self::USER_SEGMENTS)
            .with_kind("group", Self::GROUP_SEGMENTS)
    }
}
