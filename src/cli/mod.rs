pub mod commands;
pub mod handlers;
use crate::error::Error;

// Re-export commonly used items
pub use commands::{ComplianceCommands, ProvenanceCommands};
pub use handlers::{handle_compliance_command, handle_provenance_command};

pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CLI_NAME: &str = "slsa-grafeas";

pub fn format_error(error: &Error) -> String {
    match error {
        Error::TypeMismatch { .. } => format!("Conversion error: {error}"),
        Error::Validation(msg) => format!("Validation error: {msg}"),
        Error::Serialization(msg) => format!("Serialization error: {msg}"),
        Error::InitializationError(msg) => format!("Initialization error: {msg}"),
        Error::Io(err) => format!("IO error: {err}"),
        Error::Json(err) => format!("JSON error: {err}"),
        Error::Yaml(err) => format!("YAML error: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::in_toto::value::ValueError;

    #[test]
    fn test_format_type_mismatch() {
        let err = Error::type_mismatch(
            "invocation.parameters",
            ValueError::NotAnObject { shape: "string" },
        );

        let formatted = format_error(&err);

        assert!(formatted.starts_with("Conversion error: "));
        assert!(formatted.contains("invocation.parameters (string)"));
        assert!(formatted.contains("expected a JSON object, found string"));
    }

    #[test]
    fn test_format_validation() {
        let err = Error::Validation("missing field `predicate`".to_string());
        assert_eq!(
            format_error(&err),
            "Validation error: missing field `predicate`"
        );
    }
}
