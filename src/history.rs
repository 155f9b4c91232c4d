//! Whole-sentence fuzzy matching against prior commands.
//!
//! Consulted only when no structural stage (safety, token-level, flags)
//! produced a correction. The caller owns history storage; this module only
//! sees an ordered list of previously issued command strings.

use crate::correction::Correction;
use crate::distance::damerau_levenshtein;

/// Default absolute edit-distance cutoff for history matches.
pub const DEFAULT_MAX_DISTANCE: usize = 5;

/// Baseline confidence for a distance-1 history match.
const BASELINE: f64 = 0.9;
/// Confidence lost per additional edit.
const STEP: f64 = 0.12;
/// Confidence floor for accepted matches.
const FLOOR: f64 = 0.3;

/// Fuzzy matcher over a caller-supplied history list.
#[derive(Debug, Clone, Default)]
pub struct HistoryMatcher {
    entries: Vec<String>,
    max_distance: usize,
}

impl HistoryMatcher {
    /// Create a matcher over `entries` with the default cutoff.
    #[must_use]
    pub fn new(entries: Vec<String>) -> Self {
        Self {
            entries,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }

    /// Override the absolute distance cutoff.
    #[must_use]
    pub fn with_max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// True when there is nothing to match against.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the closest history entry to `input`.
    ///
    /// Never returns a match at or beyond the cutoff, and never an entry
    /// identical to the input (distance 0 is excluded: re-running a known
    /// command is not a correction).
    #[must_use]
    pub fn closest(&self, input: &str) -> Option<Correction> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        let input_len = input.chars().count();

        let mut best: Option<(&str, usize)> = None;
        for entry in &self.entries {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            // Same length pre-filter as the corpus matcher.
            if input_len.abs_diff(entry.chars().count()) >= self.max_distance {
                continue;
            }
            let dist = damerau_levenshtein(input, entry);
            if dist == 0 || dist >= self.max_distance {
                continue;
            }
            if best.map_or(true, |(_, d)| dist < d) {
                best = Some((entry, dist));
            }
        }

        let (entry, distance) = best?;
        #[allow(clippy::cast_precision_loss)]
        let conf = (BASELINE - STEP * (distance - 1) as f64).max(FLOOR);
        tracing::debug!(distance, "history fallback matched");
        Some(Correction::new(
            input,
            entry,
            conf,
            "similar to a previously run command",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(entries: &[&str]) -> HistoryMatcher {
        HistoryMatcher::new(entries.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn finds_the_closest_prior_command() {
        let m = matcher(&["git push origin main", "cargo build --release"]);
        let c = m.closest("git push orgin main").unwrap();
        assert_eq!(c.corrected, "git push origin main");
        assert!(c.confidence > 0.8);
    }

    #[test]
    fn identical_entries_are_excluded() {
        let m = matcher(&["git status"]);
        assert!(m.closest("git status").is_none());
    }

    #[test]
    fn cutoff_is_exclusive() {
        let m = matcher(&["abcde"]).with_max_distance(3);
        // Distance exactly 3 must be rejected.
        assert!(m.closest("abxyz").is_none());
        // Distance 2 is accepted.
        assert!(m.closest("abxde").is_some());
    }

    #[test]
    fn confidence_decreases_with_distance() {
        let m = matcher(&["docker compose up --build"]);
        let near = m.closest("docker compose up --buildd").unwrap();
        let far = m.closest("docker compose upp --biuldd").unwrap();
        assert!(near.confidence > far.confidence);
        assert!(far.confidence >= FLOOR);
    }

    #[test]
    fn empty_history_matches_nothing() {
        assert!(matcher(&[]).closest("git status").is_none());
        assert!(matcher(&[]).is_empty());
    }
}
