use clap::Subcommand;
use std::path::PathBuf;

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum InputFormatChoice {
    Json,
    Yaml,
    Envelope,
}

impl InputFormatChoice {
    pub fn to_input_format(&self) -> crate::InputFormat {
        match self {
            InputFormatChoice::Json => crate::InputFormat::Json,
            InputFormatChoice::Yaml => crate::InputFormat::Yaml,
            InputFormatChoice::Envelope => crate::InputFormat::Envelope,
        }
    }
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum EncodingChoice {
    Json,
    Proto,
}

impl EncodingChoice {
    pub fn to_output_encoding(&self) -> crate::OutputEncoding {
        match self {
            EncodingChoice::Json => crate::OutputEncoding::Json,
            EncodingChoice::Proto => crate::OutputEncoding::Proto,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ProvenanceCommands {
    /// Convert an in-toto SLSA v0.2 statement into a Grafeas InTotoStatement
    Convert {
        /// Path to the statement file
        #[arg(long = "input")]
        input: PathBuf,

        /// Input format (default: json)
        #[arg(
            long = "format",
            value_enum,
            default_value = "json",
            env = "SLSA_GRAFEAS_INPUT_FORMAT"
        )]
        format: InputFormatChoice,

        /// Output encoding: proto3 JSON or hex-encoded wire bytes (default: json)
        #[arg(
            long = "encoding",
            value_enum,
            default_value = "json",
            env = "SLSA_GRAFEAS_ENCODING"
        )]
        encoding: EncodingChoice,

        /// Write to this file instead of stdout
        #[arg(long = "output")]
        output: Option<PathBuf>,

        /// Emit JSON on a single line
        #[arg(long = "compact")]
        compact: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ComplianceCommands {
    /// Create a CIS benchmark compliance note
    Note {
        /// Title of the compliance check
        #[arg(long = "title")]
        title: String,

        /// Optional description
        #[arg(long = "description")]
        description: Option<String>,

        /// Applicable versions as CPE_URI=VERSION pairs (comma-separated)
        #[arg(long = "versions", num_args = 1.., value_delimiter = ',')]
        versions: Vec<String>,

        /// Why the check exists
        #[arg(long = "rationale")]
        rationale: Option<String>,

        /// How to fix a failing resource
        #[arg(long = "remediation")]
        remediation: Option<String>,

        /// CIS profile level
        #[arg(long = "profile-level")]
        profile_level: i32,

        /// Severity: minimal, low, medium, high, critical
        #[arg(long = "severity", default_value = "unspecified")]
        severity: String,

        /// File holding scanner-specific instructions
        #[arg(long = "scan-instructions")]
        scan_instructions: Option<PathBuf>,

        /// Emit JSON on a single line
        #[arg(long = "compact")]
        compact: bool,
    },
    /// Create a compliance occurrence for a failing resource
    Occurrence {
        /// Non-compliant files as PATH=REASON pairs (comma-separated)
        #[arg(
            long = "files",
            num_args = 1..,
            value_delimiter = ',',
            conflicts_with = "reason",
            required_unless_present = "reason"
        )]
        files: Vec<String>,

        /// Free-text reason the resource is not compliant
        #[arg(long = "reason")]
        reason: Option<String>,

        /// Emit JSON on a single line
        #[arg(long = "compact")]
        compact: bool,
    },
}
