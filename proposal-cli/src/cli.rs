use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::{commands, config::AppConfig, error::CliError};
use commands::*;

#[derive(Debug, Parser)]
#[command(name = "carbon-proposal")]
#[command(about = "Fill in a carbon footprint reduction proposal and render it to PDF")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the proposal fields with their labels
    Fields,

    /// Print a proposal as JSON, ready to edit and pass back with --input
    Template {
        /// Start from empty fields instead of the example text
        #[arg(long)]
        blank: bool,
    },

    /// Show the proposal as a labelled form
    Show {
        #[command(flatten)]
        record: RecordArgs,
    },

    /// Render the proposal to carbon-footprint-project.pdf
    Generate {
        #[command(flatten)]
        record: RecordArgs,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Fill in the proposal field by field, then render it
    Fill {
        #[command(flatten)]
        target: TargetArgs,
    },
}

/// Where the proposal fields come from
#[derive(Debug, Clone, Default, Args)]
pub struct RecordArgs {
    /// JSON file with proposal fields; missing fields keep the example text
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override one field, e.g. --set budget="€750,000". `\n` starts a new line
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,
}

/// Where the request goes and where the document lands
#[derive(Debug, Clone, Default, Args)]
pub struct TargetArgs {
    /// Directory to save the PDF into
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Base URL of the PDF rendering service
    #[arg(long)]
    pub base_url: Option<String>,
}

impl Cli {
    pub async fn run(&self, config: &AppConfig) -> Result<(), CliError> {
        match &self.command {
            Some(Commands::Fields) => list_fields(),
            Some(Commands::Template { blank }) => print_template(*blank),
            Some(Commands::Show { record }) => show_proposal(record),
            Some(Commands::Generate { record, target }) => {
                generate_proposal(config, record, target).await
            }
            Some(Commands::Fill { target }) => fill_proposal(config, target).await,
            None => {
                println!("carbon-proposal - render carbon footprint project proposals to PDF");
                println!("Run 'carbon-proposal --help' for usage information.");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate_with_overrides() {
        let cli = Cli::try_parse_from([
            "carbon-proposal",
            "generate",
            "--set",
            "organization=Acme",
            "-s",
            "budget=€750,000",
            "--output-dir",
            "out",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Generate { record, target }) => {
                assert_eq!(record.overrides, vec!["organization=Acme", "budget=€750,000"]);
                assert_eq!(target.output_dir, Some(PathBuf::from("out")));
                assert_eq!(target.base_url, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["carbon-proposal", "fields", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Fields)));
    }
}
