//! # SLSA Provenance v0.2
//!
//! This module models the SLSA (Supply-chain Levels for Software Artifacts)
//! v0.2 provenance predicate and converts statements carrying it into the
//! Grafeas `InTotoStatement` message.
//!
//! ## Overview
//!
//! A v0.2 predicate records:
//! - Who built the artifact (`builder.id`)
//! - What kicked off the build (`invocation`: config source, parameters, environment)
//! - How the build was configured (`buildConfig`)
//! - When it ran and how complete the record is (`metadata`)
//! - What went into it (`materials`)
//!
//! `parameters`, `environment` and `buildConfig` have no fixed schema and are
//! kept as raw JSON until conversion.
//!
//! ## Key Components
//!
//! - [`converter`] - Statement to `InTotoStatement` translation
//! - [`cli`] - File based conversion used by the `provenance convert` command
//! - [`PREDICATE_SLSA_PROVENANCE_V02`] - Predicate type URI for v0.2
//!
//! ## Examples
//!
//! ```
//! use slsa_grafeas::in_toto::parse_statement_json;
//! use slsa_grafeas::slsa::converter::to_proto;
//!
//! let statement = parse_statement_json(r#"{
//!     "_type": "https://in-toto.io/Statement/v0.2",
//!     "predicateType": "https://slsa.dev/provenance/v0.2",
//!     "predicate": {"builder": {"id": "https://example/builder"}}
//! }"#).unwrap();
//!
//! let proto = to_proto(Some(statement)).unwrap().unwrap();
//! assert_eq!(proto.slsa_provenance_zero_two().builder.id, "https://example/builder");
//! ```
pub mod cli;
pub mod converter;

use crate::in_toto::DigestSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{DefaultOnNull, serde_as};

/// The SLSA v0.2 build provenance in-toto predicate type URI.
///
/// ```
/// use slsa_grafeas::slsa::PREDICATE_SLSA_PROVENANCE_V02;
///
/// assert_eq!(PREDICATE_SLSA_PROVENANCE_V02, "https://slsa.dev/provenance/v0.2");
/// ```
pub const PREDICATE_SLSA_PROVENANCE_V02: &str = "https://slsa.dev/provenance/v0.2";

#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvenancePredicate {
    pub builder: ProvenanceBuilder,
    #[serde(default)]
    pub build_type: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub invocation: ProvenanceInvocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_config: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ProvenanceMetadata>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub materials: Vec<ProvenanceMaterial>,
}

/// Identity of the platform that ran the build.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceBuilder {
    #[serde(default)]
    pub id: String,
}

#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvenanceInvocation {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub config_source: ConfigSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Value>,
}

#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSource {
    #[serde(default)]
    pub uri: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub digest: DigestSet,
    #[serde(default)]
    pub entry_point: String,
}

#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvenanceMetadata {
    // in-toto-golang writes `buildInvocationID`
    #[serde(default, alias = "buildInvocationID")]
    pub build_invocation_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_started_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_finished_on: Option<DateTime<Utc>>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub completeness: ProvenanceComplete,
    #[serde(default)]
    pub reproducible: bool,
}

/// Which parts of the invocation the builder claims to have fully recorded.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceComplete {
    #[serde(default)]
    pub parameters: bool,
    #[serde(default)]
    pub environment: bool,
    #[serde(default)]
    pub materials: bool,
}

#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceMaterial {
    #[serde(default)]
    pub uri: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub digest: DigestSet,
}
