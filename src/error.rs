use thiserror::Error;

use crate::in_toto::value::ValueError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unable to convert {field} ({shape}) to a protobuf Struct: {source}")]
    TypeMismatch {
        field: String,
        shape: &'static str,
        #[source]
        source: ValueError,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Initialization error: {0}")]
    InitializationError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Wraps an adapter failure with the name of the statement field it came from.
    pub fn type_mismatch(field: &str, source: ValueError) -> Self {
        Error::TypeMismatch {
            field: field.to_string(),
            shape: source.shape(),
            source,
        }
    }
}
