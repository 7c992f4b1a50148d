//! Translation of SLSA v0.2 provenance statements into Grafeas messages.
//!
//! The conversion is a single synchronous pass over an owned statement. It
//! never logs, never performs I/O and allocates nothing but its output, so it
//! can be called from any number of threads at once.
//!
//! Presence rules:
//! - `parameters`, `environment` and `buildConfig` keep their absence: no
//!   payload gives an unset `Struct`, `{}` gives an empty one.
//! - An absent `metadata` gives an unset `SlsaMetadata`; absent timestamps
//!   inside it give unset `Timestamp`s.
//! - `subject` and `materials` are always sequences, possibly empty.

use crate::error::{Error, Result};
use crate::grafeas::intoto_statement::{self, InTotoStatement};
use crate::grafeas::slsa_provenance_zero_two::SlsaProvenanceZeroTwo;
use crate::grafeas::slsa_provenance_zero_two::slsa_provenance_zero_two::{
    SlsaBuilder, SlsaCompleteness, SlsaConfigSource, SlsaInvocation, SlsaMaterial, SlsaMetadata,
};
use crate::in_toto::value::to_proto_struct;
use crate::in_toto::{ProvenanceStatement, Subject};
use crate::slsa::{
    ConfigSource, ProvenanceComplete, ProvenanceInvocation, ProvenanceMaterial,
    ProvenanceMetadata, ProvenancePredicate,
};

use chrono::{DateTime, Utc};
use protobuf::MessageField;
use protobuf::well_known_types::struct_::Struct;
use protobuf::well_known_types::timestamp::Timestamp;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Converts a statement into its Grafeas `InTotoStatement`.
///
/// An absent statement is not an error: `Ok(None)` is returned so the caller
/// can tell "nothing to store" apart from a failed conversion.
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] when `invocation.parameters`,
/// `invocation.environment` or `buildConfig` is present but is not a JSON
/// object that a protobuf `Struct` can hold. No partial result is produced.
///
/// # Examples
///
/// ```
/// use slsa_grafeas::slsa::converter::to_proto;
///
/// assert!(to_proto(None).unwrap().is_none());
/// ```
pub fn to_proto(statement: Option<ProvenanceStatement>) -> Result<Option<InTotoStatement>> {
    statement.map(InTotoStatement::try_from).transpose()
}

impl TryFrom<ProvenanceStatement> for InTotoStatement {
    type Error = Error;

    fn try_from(statement: ProvenanceStatement) -> Result<Self> {
        let ProvenanceStatement {
            type_,
            subject,
            predicate_type,
            predicate,
        } = statement;

        let predicate = convert_predicate(predicate)?;

        let mut result = InTotoStatement::new();
        result.type_ = type_;
        result.subject = convert_subject(subject);
        result.predicate_type = predicate_type;
        result.set_slsa_provenance_zero_two(predicate);

        Ok(result)
    }
}

fn convert_predicate(predicate: ProvenancePredicate) -> Result<SlsaProvenanceZeroTwo> {
    let ProvenancePredicate {
        builder,
        build_type,
        invocation,
        build_config,
        metadata,
        materials,
    } = predicate;
    let ProvenanceInvocation {
        config_source,
        parameters,
        environment,
    } = invocation;

    let parameters = convert_struct("invocation.parameters", parameters)?;
    let build_config = convert_struct("buildConfig", build_config)?;
    let environment = convert_struct("invocation.environment", environment)?;

    let mut slsa_builder = SlsaBuilder::new();
    slsa_builder.id = builder.id;

    let mut slsa_invocation = SlsaInvocation::new();
    slsa_invocation.config_source = MessageField::some(convert_config_source(config_source));
    slsa_invocation.parameters = MessageField::from_option(parameters);
    slsa_invocation.environment = MessageField::from_option(environment);

    let mut provenance = SlsaProvenanceZeroTwo::new();
    provenance.builder = MessageField::some(slsa_builder);
    provenance.build_type = build_type;
    provenance.invocation = MessageField::some(slsa_invocation);
    provenance.build_config = MessageField::from_option(build_config);
    provenance.metadata = MessageField::from_option(metadata.map(convert_metadata));
    provenance.materials = convert_materials(materials);

    Ok(provenance)
}

fn convert_struct(field: &str, input: Option<serde_json::Value>) -> Result<Option<Struct>> {
    to_proto_struct(input).map_err(|e| Error::type_mismatch(field, e))
}

fn convert_subject(subjects: Vec<Subject>) -> Vec<intoto_statement::Subject> {
    subjects
        .into_iter()
        .map(|subject| {
            let mut result = intoto_statement::Subject::new();
            result.name = subject.name;
            result.digest = subject.digest;
            result
        })
        .collect()
}

fn convert_config_source(config_source: ConfigSource) -> SlsaConfigSource {
    let mut result = SlsaConfigSource::new();
    result.uri = config_source.uri;
    result.digest = config_source.digest;
    result.entry_point = config_source.entry_point;

    result
}

fn convert_metadata(metadata: ProvenanceMetadata) -> SlsaMetadata {
    let ProvenanceComplete {
        parameters,
        environment,
        materials,
    } = metadata.completeness;

    let mut completeness = SlsaCompleteness::new();
    completeness.parameters = parameters;
    completeness.environment = environment;
    completeness.materials = materials;

    let mut result = SlsaMetadata::new();
    result.build_invocation_id = metadata.build_invocation_id;
    result.build_started_on =
        MessageField::from_option(metadata.build_started_on.map(convert_time));
    result.build_finished_on =
        MessageField::from_option(metadata.build_finished_on.map(convert_time));
    result.completeness = MessageField::some(completeness);
    result.reproducible = metadata.reproducible;

    result
}

fn convert_materials(materials: Vec<ProvenanceMaterial>) -> Vec<SlsaMaterial> {
    materials
        .into_iter()
        .map(|material| {
            let mut result = SlsaMaterial::new();
            result.uri = material.uri;
            result.digest = material.digest;
            result
        })
        .collect()
}

/// Converts an instant into a protobuf `Timestamp` without losing precision.
pub fn convert_time(time: DateTime<Utc>) -> Timestamp {
    // chrono reports a leap second as nanos >= 1e9
    let nanos = time.timestamp_subsec_nanos();

    let mut timestamp = Timestamp::new();
    timestamp.seconds = time.timestamp() + i64::from(nanos / NANOS_PER_SECOND);
    timestamp.nanos = (nanos % NANOS_PER_SECOND) as i32;

    timestamp
}
