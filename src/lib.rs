#![cfg_attr(not(test), forbid(unsafe_code))]
//! shellmend - correction-inference engine for mistyped shell commands.
//!
//! Given a typed command line, the engine proposes at most one corrected or
//! safer alternative. It classifies tokens, looks them up against
//! context-specific corpora with bounded edit-distance search, decodes
//! short-flag clusters, detects destructive commands, and (opt-in) runs the
//! command under a timeout to match its error output against a rule table.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          Engine                              │
//! │        (fixed-order pipeline, first hit wins)                │
//! └──────────────────────────────────────────────────────────────┘
//!        │            │             │               │
//!        ▼            ▼             ▼               ▼
//! ┌──────────┐ ┌────────────┐ ┌───────────┐ ┌─────────────┐
//! │  Safety  │ │  Sentence  │ │ ShortFlag │ │   History   │
//! │ detector │ │ corrector  │ │  decoder  │ │  fallback   │
//! └──────────┘ └────────────┘ └───────────┘ └─────────────┘
//!                    │              │
//!                    ▼              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Corpus Registry                          │
//! │   roots · subcommands · long flags · short-flag tables       │
//! └──────────────────────────────────────────────────────────────┘
//!
//! (separate, opt-in)
//! ┌──────────┐     ┌──────────┐     ┌──────────────┐
//! │ diagnose │ ──> │   exec   │ ──> │  rule table  │
//! └──────────┘     └──────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use shellmend::Engine;
//!
//! let engine = Engine::new();
//! if let Some(correction) = engine.analyze("gti status") {
//!     println!("did you mean: {}", correction.corrected);
//! }
//! ```
//!
//! All proposals are advisory. The engine never applies a correction, and a
//! correction flagged dangerous must never be executed without explicit
//! user confirmation.

pub mod cli;
pub mod config;
pub mod corpus;
pub mod correction;
pub mod distance;
pub mod engine;
pub mod exec;
pub mod history;
pub mod rules;
pub mod safety;
pub mod sentence;
pub mod shortflags;

// Re-export commonly used types
pub use config::EngineConfig;
pub use correction::{Correction, TokenFix};
pub use corpus::{CorpusRegistry, ModernAlternative, ShortFlag, ToolCorpus, REGISTRY};
pub use distance::{best_match, confidence, damerau_levenshtein, max_distance_for_len, CorpusMatch};
pub use engine::{DiagnoseError, Engine};
pub use exec::{run_captured, CapturedOutput, ExecError};
pub use history::HistoryMatcher;
pub use rules::{evaluate as evaluate_rules, is_interactive, Rule, RULES};
pub use safety::check_dangerous;
pub use sentence::correct_sentence;
pub use shortflags::{decode_cluster, expand_for_review, ClusterExpansion};
