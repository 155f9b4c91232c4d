//! Pipeline orchestration.
//!
//! The engine wires the analysis stages into the fixed order the rest of
//! the system relies on:
//!
//! 1. **Safety detector** - destructive commands short-circuit everything.
//! 2. **Sentence corrector** - token-level typo fixes.
//! 3. **Short-flag decoder** - only when expand-for-review is enabled.
//! 4. **History fallback** - whole-sentence match against prior commands.
//!
//! Each stage returns either "no issue" or a single best [`Correction`];
//! the pipeline stops at the first hit.
//!
//! [`Engine::diagnose`] is the separate, opt-in execute-and-diagnose path:
//! it runs the command under a timeout and matches the captured output
//! against the rule table. It performs a real process execution and is
//! never invoked implicitly.
//!
//! The corpus stages are pure functions over read-only tables; an `Engine`
//! is `Send + Sync` and safe to share across threads. Diagnosis blocks on a
//! subprocess; callers fanning out over many candidates should bound their
//! own concurrency.

use crate::config::EngineConfig;
use crate::correction::Correction;
use crate::exec::{self, ExecError};
use crate::history::HistoryMatcher;
use crate::{rules, safety, sentence, shortflags};

/// Why a diagnostic run could not produce a diagnosis.
///
/// These are refusals and infrastructure failures, not negative results: a
/// command that executed fine but matched no rule yields `Ok(None)` from
/// [`Engine::diagnose`], not an error.
#[derive(Debug)]
pub enum DiagnoseError {
    /// The root command is interactive and would hang a captive run.
    RefusedInteractive,
    /// The command matched the destructive-command detector; the engine
    /// never executes flagged commands. Carries the safety correction.
    RefusedDangerous(Correction),
    /// The child exceeded the execution budget and was killed.
    Timeout,
    /// Spawning or waiting on the child failed.
    Exec(ExecError),
}

impl std::fmt::Display for DiagnoseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RefusedInteractive => {
                write!(f, "refusing to run an interactive command for diagnosis")
            }
            Self::RefusedDangerous(c) => {
                write!(f, "refusing to run a destructive command: {}", c.explanation)
            }
            Self::Timeout => write!(f, "command did not finish within the execution budget"),
            Self::Exec(e) => write!(f, "cannot diagnose: {e}"),
        }
    }
}

impl std::error::Error for DiagnoseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Exec(e) => Some(e),
            _ => None,
        }
    }
}

/// The correction-inference engine.
///
/// Holds the configuration and the optional history list; all vocabulary
/// lives in the process-wide corpus registry.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
    history: Vec<String>,
}

impl Engine {
    /// Create an engine with default configuration and no history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with explicit configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            history: Vec::new(),
        }
    }

    /// Supply the prior-command list used by the history fallback.
    #[must_use]
    pub fn with_history(mut self, history: Vec<String>) -> Self {
        self.history = history;
        self
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyze a command line and propose at most one correction.
    ///
    /// Purely advisory: nothing is executed, and the caller decides what to
    /// do with the proposal. Returns `None` for an empty command or when no
    /// stage finds an issue.
    #[must_use]
    pub fn analyze(&self, command: &str) -> Option<Correction> {
        let command = command.trim();
        if command.is_empty() {
            return None;
        }

        if let Some(c) = safety::check_dangerous(command) {
            return Some(c);
        }
        if let Some(c) = sentence::correct_sentence(command) {
            return Some(c);
        }
        if self.config.expand_short_flags {
            if let Some(c) = shortflags::expand_for_review(command) {
                return Some(c);
            }
        }
        if !self.history.is_empty() {
            let matcher = HistoryMatcher::new(self.history.clone())
                .with_max_distance(self.config.history_max_distance);
            if let Some(c) = matcher.closest(command) {
                return Some(c);
            }
        }
        None
    }

    /// Decode a short-flag cluster for review, regardless of pipeline
    /// configuration. This is the expand-for-review entry point.
    #[must_use]
    pub fn explain_flags(&self, command: &str) -> Option<Correction> {
        shortflags::expand_for_review(command.trim())
    }

    /// Execute the command under the configured timeout and match its
    /// output against the rule table.
    ///
    /// This performs a real process execution: it is non-idempotent and
    /// potentially consequential. Dangerous and interactive commands are
    /// refused before anything is spawned. A missing executable defers to
    /// the typo corrector, since this engine only handles executable but
    /// semantically wrong invocations.
    pub fn diagnose(&self, command: &str) -> Result<Option<Correction>, DiagnoseError> {
        let command = command.trim();
        if command.is_empty() {
            return Ok(None);
        }

        if let Some(c) = safety::check_dangerous(command) {
            tracing::warn!("diagnosis refused: destructive command");
            return Err(DiagnoseError::RefusedDangerous(c));
        }
        if rules::is_interactive(command) {
            tracing::debug!("diagnosis refused: interactive root");
            return Err(DiagnoseError::RefusedInteractive);
        }

        let captured = match exec::run_captured(command, self.config.exec_timeout()) {
            Ok(captured) => captured,
            Err(ExecError::NotFound) => {
                tracing::debug!("executable missing; deferring to the typo corrector");
                return Ok(sentence::correct_sentence(command));
            }
            Err(ExecError::Timeout) => return Err(DiagnoseError::Timeout),
            Err(e) => return Err(DiagnoseError::Exec(e)),
        };

        if captured.success() && captured.output.is_empty() {
            return Ok(None); // nothing to diagnose
        }
        Ok(rules::evaluate(command, &captured.output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safety_short_circuits_typo_correction() {
        // "rm -rf /" would otherwise be fair game for token analysis.
        let engine = Engine::new();
        let c = engine.analyze("rm -rf /").unwrap();
        assert!(c.dangerous);
        assert!(c.is_warn_only());
    }

    #[test]
    fn sentence_stage_runs_after_safety() {
        let engine = Engine::new();
        let c = engine.analyze("gti status").unwrap();
        assert_eq!(c.corrected, "git status");
        assert!(!c.dangerous);
    }

    #[test]
    fn clean_command_yields_nothing() {
        let engine = Engine::new();
        assert!(engine.analyze("git status").is_none());
        assert!(engine.analyze("").is_none());
    }

    #[test]
    fn history_is_the_last_resort() {
        let engine = Engine::new().with_history(vec![
            "terraform plan -out=tfplan".to_string(),
        ]);
        // No corpus stage knows this sentence; history does.
        let c = engine.analyze("terraform plam -out=tfplan").unwrap();
        assert_eq!(c.corrected, "terraform plan -out=tfplan");
    }

    #[test]
    fn flag_expansion_requires_opt_in() {
        let engine = Engine::new();
        assert!(engine.analyze("docker run -it ubuntu").is_none());
        // The review entry point works regardless.
        assert!(engine.explain_flags("docker run -it ubuntu").is_some());

        let config = EngineConfig {
            expand_short_flags: true,
            ..EngineConfig::default()
        };
        let engine = Engine::with_config(config);
        let c = engine.analyze("docker run -it ubuntu").unwrap();
        assert_eq!(c.corrected, "docker run --interactive --tty ubuntu");
    }

    #[test]
    fn diagnose_refuses_dangerous_commands() {
        let engine = Engine::new();
        assert!(matches!(
            engine.diagnose("rm -rf /"),
            Err(DiagnoseError::RefusedDangerous(_))
        ));
    }

    #[test]
    fn diagnose_refuses_interactive_roots() {
        let engine = Engine::new();
        assert!(matches!(
            engine.diagnose("vim notes.txt"),
            Err(DiagnoseError::RefusedInteractive)
        ));
    }

    #[test]
    fn diagnose_defers_missing_executables_to_the_corrector() {
        let engine = Engine::new();
        // "gti" does not exist as a binary; the typo corrector takes over.
        let c = engine.diagnose("gti status").unwrap().unwrap();
        assert_eq!(c.corrected, "git status");
    }

    #[cfg(unix)]
    #[test]
    fn diagnose_finds_nothing_on_silent_success() {
        let engine = Engine::new();
        assert!(engine.diagnose("true").unwrap().is_none());
    }
}
