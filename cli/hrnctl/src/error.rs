//! Error display for the CLI.

use colored::Colorize;
use hrn_name::{ErrorKind, NameError};

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(hint) = err.downcast_ref::<NameError>().and_then(hint) {
        eprintln!("\n{}", format!("Hint: {hint}").yellow());
    }
}

fn hint(err: &NameError) -> Option<&'static str> {
    match err.kind() {
        ErrorKind::Structural => {
            Some("Names look like `namespace/type/name[/type/name...]`, or `organization/ID` / `project/ID`.")
        }
        ErrorKind::Namespace => Some(
            "Namespaces use lowercase letters and '-', and cannot be `organization` or `project`.",
        ),
        ErrorKind::TypeSegment => Some("Types use lowercase letters and '-'."),
        ErrorKind::NameSegment => {
            Some("Names start with a letter or digit and may contain letters, digits, '_', '.' and '-'.")
        }
        ErrorKind::StackBounds => Some("Pop at least one part, and leave at least one behind."),
        ErrorKind::Semantic | ErrorKind::PatternMismatch => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_by_kind() {
        assert!(hint(&NameError::Structural).is_some());
        assert!(hint(&NameError::InvalidType("X".into())).is_some());
        assert!(hint(&NameError::MissingGeo).is_none());
    }
}
