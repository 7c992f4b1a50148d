//! Grafeas message types generated from `proto/` at build time.
//!
//! Wire encoding and JSON mapping for these messages come from the `protobuf`
//! and `protobuf-json-mapping` crates; nothing in this crate hand-writes them.

include!(concat!(env!("OUT_DIR"), "/grafeas/mod.rs"));

// rust-protobuf keeps the snake case of the one-of name
pub use compliance::compliance_note::Compliance_type as ComplianceType;
pub use compliance::{ComplianceNote, ComplianceOccurrence, ComplianceVersion, NonCompliantFile};
pub use intoto_statement::{InTotoStatement, Subject};
pub use severity::Severity;
pub use slsa_provenance_zero_two::SlsaProvenanceZeroTwo;
