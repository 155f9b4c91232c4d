//! CLI argument parsing.
//!
//! The binary is a thin demo consumer of the engine: it parses a command
//! line, runs the requested analysis, and prints the result as colored text
//! or JSON. All correction logic lives in the library.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Propose corrections for mistyped shell commands.
///
/// shellmend inspects a command line and suggests a fixed or safer
/// alternative: typo correction against per-tool vocabularies, short-flag
/// cluster expansion, destructive-command warnings, and output-driven
/// diagnosis of failing commands.
#[derive(Parser, Debug)]
#[command(name = "shellmend")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a command line and print the proposed correction
    Check {
        /// The command line to analyze (quoting is optional)
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,

        /// Plain-text history file to enable the history fallback
        #[arg(long)]
        history_file: Option<PathBuf>,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },

    /// Expand a short-flag cluster into its long-option equivalents
    Expand {
        /// The command line containing the cluster
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },

    /// Execute a failing command and derive a fix from its output
    ///
    /// This really runs the command (under a timeout). Interactive and
    /// destructive commands are refused.
    Diagnose {
        /// The command line to execute and diagnose
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,

        /// Override the execution budget in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored text
    Pretty,
    /// One JSON object on stdout
    Json,
}

impl Command {
    /// The space-joined command line argument of any subcommand.
    #[must_use]
    pub fn command_line(&self) -> String {
        match self {
            Self::Check { command, .. }
            | Self::Expand { command, .. }
            | Self::Diagnose { command, .. } => command.join(" "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_check_with_unquoted_command() {
        let cli = Cli::try_parse_from(["shellmend", "check", "gti", "status"]).unwrap();
        assert_eq!(cli.command.command_line(), "gti status");
    }

    #[test]
    fn parses_diagnose_with_timeout_override() {
        let cli =
            Cli::try_parse_from(["shellmend", "diagnose", "--timeout-secs", "10", "git", "push"])
                .unwrap();
        match cli.command {
            Command::Diagnose { timeout_secs, .. } => assert_eq!(timeout_secs, Some(10)),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn json_format_flag() {
        let cli =
            Cli::try_parse_from(["shellmend", "check", "--format", "json", "gti"]).unwrap();
        match cli.command {
            Command::Check { format, .. } => assert_eq!(format, OutputFormat::Json),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn missing_command_is_an_error() {
        assert!(Cli::try_parse_from(["shellmend", "check"]).is_err());
    }
}
