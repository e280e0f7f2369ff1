//! # catalog-did
//!
//! Data identifiers (DIDs) for the catalog: a `scope` plus a `name`, written
//! `scope:name`.
//!
//! ## Design Principles
//!
//! - Every accepted input shape collapses to one canonical `(scope, name)`
//! - Neither half may contain the scope separator, so rendering is reversible
//! - Equality and hashing follow the canonical rendering, including against
//!   plain strings
//! - Construction is pure: no I/O and no global mutable state
//!
//! ## Input Shapes
//!
//! - `"scope:name"` splits on the first `:`
//! - `"user.jdoe.file"` takes its scope from a recognized dotted prefix
//!   (see [`ImplicitScopes`])
//! - `("scope", "name")` is taken verbatim
//! - `{scope, name}` mappings fall back to the implicit scope when `scope`
//!   is missing or empty
//! - an existing [`Did`] is copied
//!
//! [`DidArgs`] reduces loose positional/keyword arguments to one of these
//! shapes before parsing.
//!
//! ## Pipeline
//!
//! normalize arguments → dispatch on shape → resolve implicit scope (when
//! applicable) → strip one trailing `/` from the name → validate separators

mod args;
mod did;
mod error;
mod input;
mod scope;

pub use args::{DidArgs, DID_KEYWORD, MAX_ARGUMENTS};
pub use did::Did;
pub use error::DidError;
pub use input::{DidInput, DidValue, NAME_KEY, SCOPE_KEY};
pub use scope::ImplicitScopes;
