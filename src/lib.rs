//! # slsa-grafeas
//!
//! Software supply chain provenance to Grafeas converter
//!
//! Translates in-toto Statements carrying a SLSA v0.2 provenance predicate
//! into the Grafeas `InTotoStatement` protobuf message, ready to be handed to
//! a metadata store. The Grafeas compliance note and occurrence messages that
//! live next to provenance are exposed as well.
//!
//! ## Installation
//!
//! ```bash
//! cargo install slsa-grafeas
//! ```
//!
//! ## Quick Start
//!
//! Convert a provenance statement and print it as proto3 JSON:
//! ```bash
//! slsa-grafeas provenance convert --input provenance.json
//! ```
//!
//! From a library:
//! ```
//! use slsa_grafeas::in_toto::parse_statement_json;
//! use slsa_grafeas::slsa::converter::to_proto;
//!
//! let statement = parse_statement_json(r#"{
//!     "_type": "https://in-toto.io/Statement/v0.2",
//!     "subject": [{"name": "pkg", "digest": {"sha256": "ab12"}}],
//!     "predicateType": "https://slsa.dev/provenance/v0.2",
//!     "predicate": {"builder": {"id": "https://example/builder"}}
//! }"#).unwrap();
//!
//! let proto = to_proto(Some(statement)).unwrap().unwrap();
//! assert_eq!(proto.subject[0].name, "pkg");
//! ```

pub mod cli;
pub mod compliance;
pub mod error;
pub mod grafeas;
pub mod in_toto;
pub mod slsa;
#[cfg(test)]
mod tests;

// Re-export error types
pub use error::{Error, Result};

/// How statement input files are encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    #[default]
    Json,
    Yaml,
    /// DSSE envelope (JSON) whose payload is the statement
    Envelope,
}

/// How converted messages are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputEncoding {
    /// proto3 JSON mapping
    #[default]
    Json,
    /// Hex-encoded protobuf wire bytes
    Proto,
}

/// Conversion configuration options
#[derive(Debug, Clone)]
pub struct Config {
    pub input_format: InputFormat,
    pub output_encoding: OutputEncoding,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_format: InputFormat::default(),
            output_encoding: OutputEncoding::default(),
            pretty: true,
        }
    }
}

/// Initialize logging for the CLI
///
/// # Examples
///
/// ```
/// use slsa_grafeas::init_logging;
///
/// // Initialize with default settings
/// let result = init_logging();
/// // Note: This might fail if already initialized
/// assert!(result.is_ok() || result.is_err());
/// ```
pub fn init_logging() -> Result<()> {
    env_logger::try_init().map_err(|e| Error::InitializationError(e.to_string()))
}
