use crate::error::Result;
use crate::grafeas::InTotoStatement;
use crate::slsa::cli::{convert_provenance, encode_message, read_statement};
use crate::slsa::converter::to_proto;
use crate::tests::common::{BUILDER_ID, sample_statement, sample_statement_json};
use crate::{Config, InputFormat, OutputEncoding};
use protobuf::Message;
use serde_json::json;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_encode_json_field_names() -> Result<()> {
    let proto = to_proto(Some(sample_statement()))?.unwrap();
    let config = Config {
        pretty: false,
        ..Config::default()
    };

    let encoded = encode_message(&proto, &config)?;
    let value: serde_json::Value = serde_json::from_str(&encoded)?;

    assert_eq!(value["_type"], "https://in-toto.io/Statement/v0.2");
    assert_eq!(value["predicateType"], "https://slsa.dev/provenance/v0.2");
    assert_eq!(value["subject"][0]["digest"]["sha256"], "ab12cd34");
    let provenance = &value["slsaProvenanceZeroTwo"];
    assert_eq!(provenance["builder"]["id"], BUILDER_ID);
    assert_eq!(provenance["invocation"]["parameters"], json!({}));
    assert!(provenance.get("buildConfig").is_none());
    assert!(provenance.get("metadata").is_none());
    assert_eq!(provenance["materials"][0]["digest"]["sha1"], "deadbeef");

    Ok(())
}

#[test]
fn test_encode_pretty_json_is_multiline() -> Result<()> {
    let proto = to_proto(Some(sample_statement()))?.unwrap();

    let encoded = encode_message(&proto, &Config::default())?;

    assert!(encoded.lines().count() > 1);
    Ok(())
}

#[test]
fn test_encode_proto_hex_decodes() -> Result<()> {
    let proto = to_proto(Some(sample_statement()))?.unwrap();
    let config = Config {
        output_encoding: OutputEncoding::Proto,
        ..Config::default()
    };

    let encoded = encode_message(&proto, &config)?;
    let bytes = hex::decode(encoded.trim()).unwrap();
    let decoded = InTotoStatement::parse_from_bytes(&bytes).unwrap();

    assert_eq!(decoded, proto);
    Ok(())
}

#[test]
fn test_read_statement_yaml() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("provenance.yaml");
    let value: serde_json::Value = serde_json::from_str(&sample_statement_json())?;
    fs::write(&path, serde_yaml::to_string(&value)?)?;

    let statement = read_statement(&path, InputFormat::Yaml)?;

    assert_eq!(statement, sample_statement());
    Ok(())
}

#[test]
fn test_convert_provenance_proto_output() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("provenance.json");
    let output = dir.path().join("statement.hex");
    fs::write(&input, sample_statement_json())?;
    let config = Config {
        output_encoding: OutputEncoding::Proto,
        ..Config::default()
    };

    let proto = convert_provenance(&input, Some(output.clone()), &config)?;

    let written = fs::read_to_string(output)?;
    let decoded = InTotoStatement::parse_from_bytes(&hex::decode(written.trim()).unwrap()).unwrap();
    assert_eq!(decoded, proto);

    Ok(())
}

#[test]
fn test_convert_provenance_matches_direct_conversion() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("provenance.json");
    let output = dir.path().join("statement.json");
    fs::write(&input, sample_statement_json())?;

    let proto = convert_provenance(&input, Some(output.clone()), &Config::default())?;

    assert_eq!(proto, InTotoStatement::try_from(sample_statement())?);
    let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(output)?)?;
    assert_eq!(written["slsaProvenanceZeroTwo"]["builder"]["id"], BUILDER_ID);
    Ok(())
}

#[test]
fn test_convert_provenance_rejects_scalar_environment() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("provenance.json");
    let output = dir.path().join("statement.json");
    let mut value: serde_json::Value = serde_json::from_str(&sample_statement_json())?;
    value["predicate"]["invocation"]["environment"] = json!(true);
    fs::write(&input, value.to_string())?;

    let result = convert_provenance(&input, Some(output.clone()), &Config::default());

    assert!(result.is_err());
    assert!(!output.exists());
    Ok(())
}
