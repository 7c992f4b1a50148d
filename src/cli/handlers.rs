use crate::error::{Error, Result};

use super::commands::{ComplianceCommands, ProvenanceCommands};
use crate::compliance::{self, NonCompliance};
use crate::grafeas::{ComplianceVersion, NonCompliantFile};
use crate::slsa::cli::{convert_provenance, encode_message};
use crate::{Config, OutputEncoding};

use log::debug;
use std::fs;

pub fn handle_provenance_command(cmd: ProvenanceCommands) -> Result<()> {
    match cmd {
        ProvenanceCommands::Convert {
            input,
            format,
            encoding,
            output,
            compact,
        } => {
            let config = Config {
                input_format: format.to_input_format(),
                output_encoding: encoding.to_output_encoding(),
                pretty: !compact,
            };
            debug!("Converting {} with {:?}", input.display(), config);

            convert_provenance(&input, output, &config).map(|_| ())
        }
    }
}

pub fn handle_compliance_command(cmd: ComplianceCommands) -> Result<()> {
    match cmd {
        ComplianceCommands::Note {
            title,
            description,
            versions,
            rationale,
            remediation,
            profile_level,
            severity,
            scan_instructions,
            compact,
        } => {
            let versions = parse_versions(&versions)?;

            let scan_instructions = match scan_instructions {
                Some(path) => Some(fs::read(path)?),
                None => None,
            };

            let note = compliance::make_cis_benchmark_note(
                &title,
                description.as_deref(),
                &versions,
                rationale.as_deref(),
                remediation.as_deref(),
                profile_level,
                compliance::parse_severity(&severity)?,
                scan_instructions.as_deref(),
            );

            println!("{}", encode_message(&note, &json_config(compact))?);
            Ok(())
        }
        ComplianceCommands::Occurrence {
            files,
            reason,
            compact,
        } => {
            let non_compliance = match reason {
                Some(reason) => NonCompliance::Reason(reason),
                None => NonCompliance::Files(parse_files(&files)?),
            };

            let occurrence = compliance::make_compliance_occurrence(non_compliance);

            println!("{}", encode_message(&occurrence, &json_config(compact))?);
            Ok(())
        }
    }
}

fn json_config(compact: bool) -> Config {
    Config {
        output_encoding: OutputEncoding::Json,
        pretty: !compact,
        ..Config::default()
    }
}

fn parse_versions(pairs: &[String]) -> Result<Vec<ComplianceVersion>> {
    let mut versions = Vec::new();
    for pair in pairs {
        let (cpe_uri, version) = split_pair(pair, "CPE_URI=VERSION")?;
        versions.push(compliance::make_compliance_version(cpe_uri, version));
    }

    Ok(versions)
}

fn parse_files(pairs: &[String]) -> Result<Vec<NonCompliantFile>> {
    let mut files = Vec::new();
    for pair in pairs {
        let (path, reason) = split_pair(pair, "PATH=REASON")?;
        files.push(compliance::make_non_compliant_file(path, None, reason));
    }

    Ok(files)
}

fn split_pair<'a>(pair: &'a str, expected: &str) -> Result<(&'a str, &'a str)> {
    pair.split_once('=').ok_or_else(|| {
        Error::Validation(format!("Invalid value '{pair}', expected {expected}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::{EncodingChoice, InputFormatChoice};
    use crate::tests::common::sample_statement_json;
    use tempfile::tempdir;

    #[test]
    fn test_split_pair() {
        assert_eq!(
            split_pair("/etc/passwd=mode 0666", "PATH=REASON").unwrap(),
            ("/etc/passwd", "mode 0666")
        );
        assert!(split_pair("no-separator", "PATH=REASON").is_err());
    }

    #[test]
    fn test_parse_files() {
        let files = parse_files(&["/tmp=world writable".to_string()]).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "/tmp");
        assert_eq!(files[0].reason, "world writable");
    }

    #[test]
    fn test_handle_provenance_convert_to_file() -> Result<()> {
        let dir = tempdir()?;
        let input = dir.path().join("provenance.json");
        let output = dir.path().join("statement.json");
        fs::write(&input, sample_statement_json())?;

        handle_provenance_command(ProvenanceCommands::Convert {
            input,
            format: InputFormatChoice::Json,
            encoding: EncodingChoice::Json,
            output: Some(output.clone()),
            compact: true,
        })?;

        let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(output)?)?;
        assert_eq!(written["_type"], "https://in-toto.io/Statement/v0.2");
        assert_eq!(
            written["slsaProvenanceZeroTwo"]["builder"]["id"],
            "https://example/builder"
        );

        Ok(())
    }

    #[test]
    fn test_handle_provenance_convert_missing_file() {
        let dir = tempdir().unwrap();

        let result = handle_provenance_command(ProvenanceCommands::Convert {
            input: dir.path().join("missing.json"),
            format: InputFormatChoice::Json,
            encoding: EncodingChoice::Json,
            output: None,
            compact: false,
        });

        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_handle_compliance_note_bad_version_pair() {
        let result = handle_compliance_command(ComplianceCommands::Note {
            title: "check".to_string(),
            description: None,
            versions: vec!["cpe:/o:debian:debian_linux:12".to_string()],
            rationale: None,
            remediation: None,
            profile_level: 1,
            severity: "low".to_string(),
            scan_instructions: None,
            compact: true,
        });

        assert!(matches!(result, Err(Error::Validation(msg)) if msg.contains("CPE_URI=VERSION")));
    }

    #[test]
    fn test_handle_compliance_note_bad_severity() {
        let result = handle_compliance_command(ComplianceCommands::Note {
            title: "check".to_string(),
            description: None,
            versions: vec![],
            rationale: None,
            remediation: None,
            profile_level: 1,
            severity: "extreme".to_string(),
            scan_instructions: None,
            compact: true,
        });

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_handle_compliance_occurrence() {
        let result = handle_compliance_command(ComplianceCommands::Occurrence {
            files: vec!["/etc/shadow=readable by group".to_string()],
            reason: None,
            compact: true,
        });

        assert!(result.is_ok());
    }
}
