use crate::error::{Error, Result};
use crate::grafeas::InTotoStatement;
use crate::in_toto::{self, ProvenanceStatement};
use crate::{Config, InputFormat, OutputEncoding};

use log::{debug, info};
use protobuf::MessageFull;
use serde_json::to_string_pretty;
use std::fs;
use std::path::{Path, PathBuf};

/// Decodes a statement file according to the configured input format.
pub fn read_statement(input_path: &Path, format: InputFormat) -> Result<ProvenanceStatement> {
    let bytes = fs::read(input_path)?;
    debug!(
        "Read {} bytes of {:?} input from {}",
        bytes.len(),
        format,
        input_path.display()
    );

    match format {
        InputFormat::Json => in_toto::parse_statement_slice(&bytes),
        InputFormat::Yaml => {
            let text = String::from_utf8(bytes)
                .map_err(|e| Error::Validation(format!("YAML input is not UTF-8: {e}")))?;
            in_toto::parse_statement_yaml(&text)
        }
        InputFormat::Envelope => in_toto::parse_statement_envelope(&bytes),
    }
}

/// Renders a message as proto3 JSON or as hex-encoded wire bytes.
pub fn encode_message<M: MessageFull>(message: &M, config: &Config) -> Result<String> {
    match config.output_encoding {
        OutputEncoding::Json => {
            let json = protobuf_json_mapping::print_to_string(message)
                .map_err(|e| Error::Serialization(e.to_string()))?;
            if !config.pretty {
                return Ok(json);
            }
            // protobuf-json-mapping has no pretty printer
            let value: serde_json::Value = serde_json::from_str(&json)?;
            Ok(to_string_pretty(&value)?)
        }
        OutputEncoding::Proto => {
            let bytes = message
                .write_to_bytes()
                .map_err(|e| Error::Serialization(e.to_string()))?;
            Ok(hex::encode(bytes))
        }
    }
}

/// Reads a provenance statement, converts it and writes the Grafeas message.
///
/// Output goes to `output_path` when given, stdout otherwise.
pub fn convert_provenance(
    input_path: &Path,
    output_path: Option<PathBuf>,
    config: &Config,
) -> Result<InTotoStatement> {
    let statement = read_statement(input_path, config.input_format)?;

    let proto = InTotoStatement::try_from(statement)?;

    let encoded = encode_message(&proto, config)?;

    match output_path {
        Some(path) => {
            fs::write(&path, format!("{encoded}\n"))?;
            info!("Wrote converted statement to {}", path.display());
        }
        None => println!("{encoded}"),
    }

    Ok(proto)
}
