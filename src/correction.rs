//! Core value types produced by the correction engine.
//!
//! A [`Correction`] is the single output of every analysis stage. It is an
//! immutable value: constructed once, never mutated, and handed to the
//! presentation layer as-is. The engine never formats or applies corrections
//! itself.

use serde::{Deserialize, Serialize};

/// A proposed correction for a typed command line.
///
/// # Invariants
///
/// - `confidence` is always within `[0.0, 1.0]`.
/// - `dangerous = true` implies `confidence >= 0.95` (exact destructive
///   matches carry `1.0`, regex heuristics `0.95`).
/// - An empty `corrected` with `dangerous = true` means "warn, do not
///   rewrite" - there is no safe replacement to offer.
/// - A dangerous correction must never be applied without explicit user
///   confirmation. This type only carries the advice; enforcement belongs to
///   the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Correction {
    /// The command exactly as the user typed it.
    pub command: String,

    /// The proposed replacement. Empty when there is no safe rewrite.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub corrected: String,

    /// Certainty that the proposal is right, in `[0.0, 1.0]`.
    pub confidence: f64,

    /// Human-readable reason for the proposal.
    pub explanation: String,

    /// True when the command matched the destructive-command detector.
    #[serde(default)]
    pub dangerous: bool,
}

impl Correction {
    /// Create an ordinary (non-dangerous) correction.
    ///
    /// Confidence is clamped into `[0.0, 1.0]`.
    #[must_use]
    pub fn new(
        command: impl Into<String>,
        corrected: impl Into<String>,
        confidence: f64,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            command: command.into(),
            corrected: corrected.into(),
            confidence: confidence.clamp(0.0, 1.0),
            explanation: explanation.into(),
            dangerous: false,
        }
    }

    /// Create a warn-only dangerous correction (no rewrite offered).
    #[must_use]
    pub fn dangerous(
        command: impl Into<String>,
        confidence: f64,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            command: command.into(),
            corrected: String::new(),
            confidence: confidence.clamp(0.0, 1.0),
            explanation: explanation.into(),
            dangerous: true,
        }
    }

    /// True when this correction offers no replacement text.
    #[must_use]
    pub fn is_warn_only(&self) -> bool {
        self.corrected.is_empty()
    }
}

/// A single token-level fix found by the sentence corrector.
///
/// Ephemeral: used only to aggregate the explanation and confidence of the
/// final [`Correction`], never exposed past the sentence module's boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenFix {
    /// The token as typed.
    pub original: String,
    /// The corpus entry it was corrected to.
    pub corrected: String,
    /// Edit distance at which the fix was found.
    pub distance: usize,
}

impl TokenFix {
    /// Render the `original -> corrected` pair for explanation strings.
    #[must_use]
    pub fn describe(&self) -> String {
        format!("{} -> {}", self.original, self.corrected)
    }
}
