use clap::{Parser, Subcommand};
use slsa_grafeas::{
    cli::{
        self,
        commands::{ComplianceCommands, ProvenanceCommands},
    },
    error::Result,
};

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// SLSA provenance commands
    Provenance {
        #[command(subcommand)]
        command: ProvenanceCommands,
    },
    /// Compliance note and occurrence commands
    Compliance {
        #[command(subcommand)]
        command: ComplianceCommands,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    slsa_grafeas::init_logging()?;

    // Parse command line arguments
    let cli = Cli::parse();

    // Handle commands
    let result = match cli.command {
        Commands::Provenance { command } => cli::handlers::handle_provenance_command(command),
        Commands::Compliance { command } => cli::handlers::handle_compliance_command(command),
    };

    // Format and display any errors
    if let Err(ref e) = result {
        eprintln!("{}", cli::format_error(e));
    }

    result
}
