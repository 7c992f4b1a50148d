//! # in-toto Statement Decoding
//!
//! This module holds the source side of the conversion: the in-toto Statement
//! carrying a SLSA v0.2 provenance predicate, as produced by build systems,
//! plus the decoders that turn JSON, YAML or a DSSE envelope into it.
//!
//! ## Key Components
//!
//! - **[`ProvenanceStatement`]**: statement header, subjects and predicate
//! - **Decoders**: [`parse_statement_json`], [`parse_statement_slice`],
//!   [`parse_statement_yaml`] and [`parse_statement_envelope`]
//! - **[`value`]**: the adapter from open-ended JSON payloads to protobuf `Struct`
//! - **[`dsse`]**: Dead Simple Signing Envelope unwrapping
//!
//! The Rust types make `predicate` and `predicate.builder` mandatory, so a
//! statement missing either never decodes. Signatures are not checked.
//!
//! ## Examples
//!
//! ```
//! use slsa_grafeas::in_toto::parse_statement_json;
//!
//! let json = r#"{
//!     "_type": "https://in-toto.io/Statement/v0.1",
//!     "subject": [{"name": "pkg", "digest": {"sha256": "ab12"}}],
//!     "predicateType": "https://slsa.dev/provenance/v0.2",
//!     "predicate": {"builder": {"id": "https://example/builder"}}
//! }"#;
//!
//! let statement = parse_statement_json(json).unwrap();
//! assert_eq!(statement.subject.len(), 1);
//! assert_eq!(statement.predicate.builder.id, "https://example/builder");
//! ```

use crate::error::{Error, Result};
use crate::slsa::{PREDICATE_SLSA_PROVENANCE_V02, ProvenancePredicate};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};
use std::collections::HashMap;

pub mod dsse;
pub mod value;

use dsse::Envelope;

pub const STATEMENT_TYPE_V01: &str = "https://in-toto.io/Statement/v0.1";
pub const STATEMENT_TYPE_V02: &str = "https://in-toto.io/Statement/v0.2";
pub const STATEMENT_TYPE_V1: &str = "https://in-toto.io/Statement/v1";

pub const DSSE_PAYLOAD_TYPE: &str = "application/vnd.in-toto+json";

/// Algorithm name (`sha256`, `sha1`, ...) to lowercase hex digest.
pub type DigestSet = HashMap<String, String>;

/// An artifact the statement makes claims about.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    #[serde(default)]
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub digest: DigestSet,
}

/// An in-toto Statement whose predicate is SLSA provenance v0.2.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceStatement {
    #[serde(rename = "_type", default)]
    pub type_: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub subject: Vec<Subject>,
    #[serde(rename = "predicateType", default)]
    pub predicate_type: String,
    pub predicate: ProvenancePredicate,
}

/// Decodes a statement from a JSON string.
///
/// # Errors
///
/// Returns a `Validation` error if the input is not JSON or lacks a required
/// field (`predicate`, `predicate.builder`), or a field has the wrong type.
pub fn parse_statement_json(json: &str) -> Result<ProvenanceStatement> {
    parse_statement_slice(json.as_bytes())
}

/// Decodes a statement from JSON bytes.
pub fn parse_statement_slice(bytes: &[u8]) -> Result<ProvenanceStatement> {
    let statement: ProvenanceStatement = serde_json::from_slice(bytes)
        .map_err(|e| Error::Validation(format!("Invalid provenance statement: {e}")))?;

    check_statement_types(&statement);

    Ok(statement)
}

/// Decodes a statement from a YAML document.
pub fn parse_statement_yaml(yaml: &str) -> Result<ProvenanceStatement> {
    let statement: ProvenanceStatement = serde_yaml::from_str(yaml)
        .map_err(|e| Error::Validation(format!("Invalid provenance statement: {e}")))?;

    check_statement_types(&statement);

    Ok(statement)
}

/// Decodes a statement carried as the payload of a DSSE envelope.
///
/// The envelope must be structurally complete and declare the in-toto
/// payload type. Signatures are carried but not verified.
pub fn parse_statement_envelope(bytes: &[u8]) -> Result<ProvenanceStatement> {
    let envelope: Envelope = serde_json::from_slice(bytes)
        .map_err(|e| Error::Validation(format!("Invalid DSSE envelope: {e}")))?;

    if !envelope.validate() {
        return Err(Error::Validation(
            "DSSE envelope is missing its payload, payload type or signatures".to_string(),
        ));
    }

    if envelope.payload_type() != DSSE_PAYLOAD_TYPE {
        return Err(Error::Validation(format!(
            "Unsupported DSSE payload type '{}', expected '{}'",
            envelope.payload_type(),
            DSSE_PAYLOAD_TYPE
        )));
    }

    debug!(
        "Unwrapped DSSE envelope with {} signature(s)",
        envelope.signature_count()
    );

    parse_statement_slice(envelope.payload())
}

// Unknown statement or predicate types are still converted; the caller owns that policy
fn check_statement_types(statement: &ProvenanceStatement) {
    let known_statement = [STATEMENT_TYPE_V01, STATEMENT_TYPE_V02, STATEMENT_TYPE_V1];
    if !known_statement.contains(&statement.type_.as_str()) {
        warn!("Unrecognized in-toto statement type '{}'", statement.type_);
    }

    if statement.predicate_type != PREDICATE_SLSA_PROVENANCE_V02 {
        warn!(
            "Predicate type '{}' is not SLSA provenance v0.2",
            statement.predicate_type
        );
    }

    debug!(
        "Decoded statement with {} subject(s) from builder '{}'",
        statement.subject.len(),
        statement.predicate.builder.id
    );
}
