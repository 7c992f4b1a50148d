//! # Compliance Notes and Occurrences
//!
//! Builders and accessors for the Grafeas compliance messages stored next to
//! provenance. A [`ComplianceNote`] describes a check; exactly one check kind
//! is set through the `compliance_type` one-of (only CIS benchmarks exist
//! today). A [`ComplianceOccurrence`] records why one resource failed that
//! check, either as a list of files or as free text, modelled here by
//! [`NonCompliance`].
//!
//! ## Examples
//!
//! ```
//! use slsa_grafeas::compliance::{
//!     NonCompliance, make_cis_benchmark_note, make_compliance_occurrence,
//!     make_compliance_version, non_compliance,
//! };
//! use slsa_grafeas::grafeas::Severity;
//!
//! let note = make_cis_benchmark_note(
//!     "1.1.1 Ensure mounting of cramfs is disabled",
//!     None,
//!     &[make_compliance_version("cpe:/o:debian:debian_linux:12", "1.0.0")],
//!     None,
//!     None,
//!     1,
//!     Severity::LOW,
//!     None,
//! );
//! assert!(note.has_cis_benchmark());
//!
//! let occurrence = make_compliance_occurrence(NonCompliance::Reason("module loaded".into()));
//! assert_eq!(non_compliance(&occurrence), Some(NonCompliance::Reason("module loaded".into())));
//! ```

use crate::error::{Error, Result};
use crate::grafeas::compliance::compliance_note::CisBenchmark;
use crate::grafeas::{
    ComplianceNote, ComplianceOccurrence, ComplianceType, ComplianceVersion, NonCompliantFile,
    Severity,
};

use protobuf::EnumOrUnknown;

/// Why a resource failed a compliance check.
#[derive(Clone, Debug, PartialEq)]
pub enum NonCompliance {
    Files(Vec<NonCompliantFile>),
    Reason(String),
}

pub fn make_compliance_version(cpe_uri: &str, version: &str) -> ComplianceVersion {
    let mut result = ComplianceVersion::new();
    result.cpe_uri = cpe_uri.to_string();
    result.version = version.to_string();

    result
}

/// Builds a note whose check kind is a CIS benchmark.
#[allow(clippy::too_many_arguments)]
pub fn make_cis_benchmark_note(
    title: &str,
    description: Option<&str>,
    versions: &[ComplianceVersion],
    rationale: Option<&str>,
    remediation: Option<&str>,
    profile_level: i32,
    severity: Severity,
    scan_instructions: Option<&[u8]>,
) -> ComplianceNote {
    let mut benchmark = CisBenchmark::new();
    benchmark.profile_level = profile_level;
    benchmark.severity = EnumOrUnknown::new(severity);

    let mut note = ComplianceNote::new();
    note.title = title.to_string();
    note.version = versions.to_vec();
    note.set_cis_benchmark(benchmark);

    // these fields are optional
    if let Some(description) = description {
        note.description = description.to_string();
    }
    if let Some(rationale) = rationale {
        note.rationale = rationale.to_string();
    }
    if let Some(remediation) = remediation {
        note.remediation = remediation.to_string();
    }
    if let Some(scan_instructions) = scan_instructions {
        note.scan_instructions = scan_instructions.to_vec();
    }

    note
}

/// Returns the active check kind of a note.
///
/// # Errors
///
/// Returns a `Validation` error when no check kind is set, which happens for
/// notes decoded from messages that predate or omit the one-of.
pub fn compliance_check(note: &ComplianceNote) -> Result<&ComplianceType> {
    note.compliance_type.as_ref().ok_or_else(|| {
        Error::Validation(format!(
            "Compliance note '{}' has no compliance type",
            note.title
        ))
    })
}

pub fn make_non_compliant_file(
    path: &str,
    display_command: Option<&str>,
    reason: &str,
) -> NonCompliantFile {
    let mut file = NonCompliantFile::new();
    file.path = path.to_string();
    file.reason = reason.to_string();
    if let Some(display_command) = display_command {
        file.display_command = display_command.to_string();
    }

    file
}

pub fn make_compliance_occurrence(non_compliance: NonCompliance) -> ComplianceOccurrence {
    let mut occurrence = ComplianceOccurrence::new();
    match non_compliance {
        NonCompliance::Files(files) => occurrence.non_compliant_files = files,
        NonCompliance::Reason(reason) => occurrence.non_compliance_reason = reason,
    }

    occurrence
}

/// Reads back why an occurrence failed.
///
/// Files win over a reason when a decoded message carries both; an
/// occurrence with neither yields `None`.
pub fn non_compliance(occurrence: &ComplianceOccurrence) -> Option<NonCompliance> {
    if !occurrence.non_compliant_files.is_empty() {
        return Some(NonCompliance::Files(occurrence.non_compliant_files.clone()));
    }

    if !occurrence.non_compliance_reason.is_empty() {
        return Some(NonCompliance::Reason(
            occurrence.non_compliance_reason.clone(),
        ));
    }

    None
}

/// Parses a severity name, ignoring case.
pub fn parse_severity(name: &str) -> Result<Severity> {
    match name.to_lowercase().as_str() {
        "unspecified" | "severity_unspecified" => Ok(Severity::SEVERITY_UNSPECIFIED),
        "minimal" => Ok(Severity::MINIMAL),
        "low" => Ok(Severity::LOW),
        "medium" => Ok(Severity::MEDIUM),
        "high" => Ok(Severity::HIGH),
        "critical" => Ok(Severity::CRITICAL),
        _ => Err(Error::Validation(format!(
            "Invalid severity '{name}'. Valid options are: minimal, low, medium, high, critical, unspecified"
        ))),
    }
}
