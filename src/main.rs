#![forbid(unsafe_code)]
//! shellmend binary: demo consumer of the correction engine.
//!
//! Exit codes:
//!   - 0: analysis ran; no issue, or an ordinary correction was proposed
//!   - 1: the analysis itself could not run (refused or failed diagnosis)
//!   - 2: the command was flagged dangerous

use clap::Parser;
use colored::Colorize;
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;

use shellmend::cli::{Cli, Command, OutputFormat};
use shellmend::{Correction, DiagnoseError, Engine, EngineConfig, REGISTRY};

// Build metadata from vergen (set by build.rs)
const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
const BUILD_TIMESTAMP: Option<&str> = option_env!("VERGEN_BUILD_TIMESTAMP");
const RUSTC_SEMVER: Option<&str> = option_env!("VERGEN_RUSTC_SEMVER");

/// Disable colors when stderr is not a terminal (e.g. piped to a file).
fn configure_colors() {
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    configure_colors();
    tracing::debug!(
        version = PKG_VERSION,
        build = BUILD_TIMESTAMP.unwrap_or("unknown"),
        rustc = RUSTC_SEMVER.unwrap_or("unknown"),
        "starting"
    );

    let cli = Cli::parse();
    let line = cli.command.command_line();

    match cli.command {
        Command::Check {
            history_file,
            format,
            ..
        } => {
            let mut engine = Engine::with_config(EngineConfig::load());
            if let Some(path) = history_file {
                engine = engine.with_history(read_history(&path));
            }
            let result = engine.analyze(&line);
            report(&line, result.as_ref(), format)
        }
        Command::Expand { format, .. } => {
            let engine = Engine::with_config(EngineConfig::load());
            let result = engine.explain_flags(&line);
            report(&line, result.as_ref(), format)
        }
        Command::Diagnose {
            timeout_secs,
            format,
            ..
        } => {
            let mut config = EngineConfig::load();
            if let Some(secs) = timeout_secs {
                config.exec_timeout_secs = secs;
            }
            let engine = Engine::with_config(config);
            match engine.diagnose(&line) {
                Ok(result) => report(&line, result.as_ref(), format),
                Err(e) => {
                    report_diagnose_error(&e, format);
                    match e {
                        DiagnoseError::RefusedDangerous(_) => ExitCode::from(2),
                        _ => ExitCode::from(1),
                    }
                }
            }
        }
    }
}

/// Load a plain-text history file, one command per line. Missing or
/// unreadable files are treated as empty history.
fn read_history(path: &Path) -> Vec<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(ToString::to_string)
            .collect(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read history file");
            Vec::new()
        }
    }
}

fn report(line: &str, correction: Option<&Correction>, format: OutputFormat) -> ExitCode {
    match format {
        OutputFormat::Json => {
            let json = match correction {
                Some(c) => serde_json::to_string(c).expect("correction serializes"),
                None => "null".to_string(),
            };
            println!("{json}");
        }
        OutputFormat::Pretty => print_pretty(line, correction),
    }
    match correction {
        Some(c) if c.dangerous => ExitCode::from(2),
        _ => ExitCode::SUCCESS,
    }
}

fn print_pretty(line: &str, correction: Option<&Correction>) {
    let Some(c) = correction else {
        println!("{} {line}", "ok:".green().bold());
        return;
    };

    if c.dangerous {
        println!("{} {line}", "dangerous:".red().bold());
        println!("  {}", c.explanation.red());
        return;
    }

    println!("{} {}", "suggest:".yellow().bold(), c.corrected.bold());
    println!(
        "  {} (confidence {:.0}%)",
        c.explanation.dimmed(),
        c.confidence * 100.0
    );
    if let Some(root) = c.corrected.split_whitespace().next() {
        if let Some(alt) = REGISTRY.modern_alternative(root) {
            println!(
                "  {} {} - {}",
                "tip: consider".dimmed(),
                alt.modern.cyan(),
                alt.reason.dimmed()
            );
        }
    }
}

fn report_diagnose_error(error: &DiagnoseError, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({ "error": error.to_string() });
            println!("{json}");
        }
        OutputFormat::Pretty => {
            eprintln!("{} {error}", "cannot diagnose:".red().bold());
        }
    }
}
