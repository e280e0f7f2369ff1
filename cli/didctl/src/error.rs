//! Error handling and display for the CLI.

use catalog_did::DidError;
use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{failed} of {total} identifiers could not be constructed")]
    Rejected { failed: usize, total: usize },
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(hint) = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<DidError>())
        .and_then(hint_for)
    {
        eprintln!("\n{}", format!("Hint: {hint}").yellow());
    }
}

/// A suggestion for fixing the input behind `err`, if there is one.
pub fn hint_for(err: &DidError) -> Option<&'static str> {
    match err {
        DidError::AmbiguousIdentifier { .. } => Some(
            "Write the identifier as `scope:name`, or use a name with a known \
             implicit scope prefix (see `did scopes`).",
        ),
        DidError::InvalidFormat { .. } => {
            Some("Only one `:` is allowed, separating the scope from the name.")
        }
        DidError::TooManyArguments { .. } => {
            Some("Pass at most two of: positional values, --scope, --name, --did.")
        }
        DidError::UnexpectedKeyword { .. } => {
            Some("Next to a single positional value, use either --scope or --name.")
        }
        DidError::InvalidArity { .. } => Some("A list identifier must be [scope, name]."),
        DidError::InvalidPositionalType { .. } | DidError::UnsupportedInputType { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_for_ambiguous() {
        let err = DidError::AmbiguousIdentifier {
            input: "plain".into(),
        };
        assert!(hint_for(&err).unwrap().contains("scope:name"));
    }

    #[test]
    fn test_no_hint_for_unsupported() {
        let err = DidError::UnsupportedInputType {
            actual: "null".into(),
        };
        assert!(hint_for(&err).is_none());
    }

    #[test]
    fn test_did_error_found_through_context() {
        let err = anyhow::Error::new(DidError::InvalidArity { len: 3 }).context("cannot build");
        let found = err.chain().find_map(|cause| cause.downcast_ref::<DidError>());
        assert_eq!(found, Some(&DidError::InvalidArity { len: 3 }));
    }
}
