//! Destructive-command detection.
//!
//! Runs before every other stage and short-circuits the pipeline: once a
//! command is flagged dangerous, no typo, flag, or history correction is
//! attempted, and the rule engine must refuse to execute it.
//!
//! Three checks, in order:
//! 1. Case-insensitive exact-or-prefix match against the curated pattern
//!    table (confidence 1.0).
//! 2. Regex for a recursive delete of a root-like path (confidence 0.95).
//! 3. Regex for a redirect onto a raw disk device (confidence 0.95).
//!
//! A keyword gate (Aho-Corasick over the handful of substrings every
//! destructive pattern requires) rejects the overwhelming majority of
//! commands before any table or regex work. The gate must not change
//! results; a test asserts gated and ungated checks agree.

use aho_corasick::AhoCorasick;
use regex::Regex;
use std::sync::LazyLock;

use crate::correction::Correction;

/// A curated destructive pattern, matched exact-or-prefix after
/// normalization (lowercase, collapsed whitespace).
#[derive(Debug, Clone, Copy)]
pub struct DangerPattern {
    /// Stable name for logging and tests.
    pub name: &'static str,
    /// Normalized pattern text.
    pub pattern: &'static str,
    /// Human-readable reason shown to the user.
    pub reason: &'static str,
}

/// Macro to declare a destructive pattern row.
macro_rules! danger_pattern {
    ($name:literal, $pattern:literal, $reason:literal) => {
        DangerPattern {
            name: $name,
            pattern: $pattern,
            reason: $reason,
        }
    };
}

/// The fixed destructive-pattern table. Order is significant: first match
/// wins, so more specific entries come first.
static DANGER_PATTERNS: &[DangerPattern] = &[
    danger_pattern!(
        "rm-rf-root",
        "rm -rf /",
        "recursively deletes from the filesystem root; this is unrecoverable"
    ),
    danger_pattern!(
        "rm-fr-root",
        "rm -fr /",
        "recursively deletes from the filesystem root; this is unrecoverable"
    ),
    danger_pattern!(
        "rm-rf-star",
        "rm -rf *",
        "force-deletes everything in the current directory"
    ),
    danger_pattern!(
        "sudo-rm-rf-root",
        "sudo rm -rf /",
        "recursively deletes from the filesystem root; this is unrecoverable"
    ),
    danger_pattern!(
        "sudo-rm-fr-root",
        "sudo rm -fr /",
        "recursively deletes from the filesystem root; this is unrecoverable"
    ),
    danger_pattern!(
        "dd-zero-disk",
        "dd if=/dev/zero of=/dev/",
        "overwrites a raw disk device with zeros, destroying all data"
    ),
    danger_pattern!(
        "dd-random-disk",
        "dd if=/dev/random of=/dev/",
        "overwrites a raw disk device with random data, destroying all data"
    ),
    danger_pattern!(
        "dd-urandom-disk",
        "dd if=/dev/urandom of=/dev/",
        "overwrites a raw disk device with random data, destroying all data"
    ),
    danger_pattern!(
        "fork-bomb",
        ":(){ :|:& };:",
        "fork bomb; spawns processes until the system is unusable"
    ),
    danger_pattern!(
        "fork-bomb-compact",
        ":(){:|:&};:",
        "fork bomb; spawns processes until the system is unusable"
    ),
    danger_pattern!(
        "chmod-root",
        "chmod -r 777 /",
        "makes the entire filesystem world-writable"
    ),
    danger_pattern!(
        "mkfs-device",
        "mkfs",
        "formats a filesystem, destroying its contents"
    ),
    danger_pattern!(
        "wipefs-all",
        "wipefs -a",
        "erases filesystem signatures from a device"
    ),
    danger_pattern!(
        "shred-device",
        "shred /dev/",
        "securely overwrites a raw device, destroying all data"
    ),
    danger_pattern!(
        "mv-to-devnull",
        "mv /* /dev/null",
        "moves the filesystem root into /dev/null, destroying it"
    ),
];

/// Substrings at least one of which appears in every destructive pattern
/// and every regex heuristic below. Used only for the quick gate.
static GATE_KEYWORDS: &[&str] = &["rm ", "rm\t", "dd ", "mkfs", "chmod", ":()", "/dev/", "wipefs", "shred"];

static DANGER_GATE: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(GATE_KEYWORDS)
        .expect("danger gate automaton must build")
});

/// Recursive delete aimed at `/` or `/*`, in any flag spelling that
/// includes recursion (`-r`, `-rf`, `-fr`, `-r -f`, `--recursive`).
static ROOT_DELETE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:sudo\s+)?rm\s+(?:(?:-[a-z]+|--recursive|--force|--no-preserve-root)\s+)*(?:-[a-z]*r[a-z]*|--recursive)(?:\s+(?:-[a-z]+|--recursive|--force|--no-preserve-root))*\s+/\*?\s*$",
    )
    .expect("root-delete regex must compile")
});

/// Shell output redirection onto a raw disk device.
static DISK_REDIRECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r">\s*/dev/(?:sd[a-z]\d*|hd[a-z]\d*|nvme\d+n\d+(?:p\d+)?|mmcblk\d+(?:p\d+)?|disk\d+)\b")
        .expect("disk-redirect regex must compile")
});

/// Confidence for curated-table hits.
const TABLE_CONFIDENCE: f64 = 1.0;
/// Confidence for the regex heuristics.
const HEURISTIC_CONFIDENCE: f64 = 0.95;

/// Check a command against the destructive-command detector.
///
/// Returns a warn-only [`Correction`] (`dangerous = true`, no rewrite) on a
/// hit. The caller must never auto-apply or execute a flagged command.
#[must_use]
pub fn check_dangerous(command: &str) -> Option<Correction> {
    if !DANGER_GATE.is_match(command) {
        return None;
    }
    check_dangerous_ungated(command)
}

/// The detector without its keyword gate. Exposed for the gate-equivalence
/// test; production callers use [`check_dangerous`].
#[must_use]
pub(crate) fn check_dangerous_ungated(command: &str) -> Option<Correction> {
    let normalized = normalize(command);

    for dp in DANGER_PATTERNS {
        if matches_exact_or_prefix(&normalized, dp.pattern) {
            tracing::warn!(pattern = dp.name, "destructive command detected");
            return Some(Correction::dangerous(command, TABLE_CONFIDENCE, dp.reason));
        }
    }

    if ROOT_DELETE_RE.is_match(&normalized) {
        tracing::warn!(pattern = "root-delete-heuristic", "destructive command detected");
        return Some(Correction::dangerous(
            command,
            HEURISTIC_CONFIDENCE,
            "recursively deletes a root-like path; this is unrecoverable",
        ));
    }

    if DISK_REDIRECT_RE.is_match(&normalized) {
        tracing::warn!(pattern = "disk-redirect-heuristic", "destructive command detected");
        return Some(Correction::dangerous(
            command,
            HEURISTIC_CONFIDENCE,
            "redirects output onto a raw disk device, corrupting it",
        ));
    }

    None
}

/// Lowercase and collapse whitespace runs to single spaces.
fn normalize(command: &str) -> String {
    command
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Exact-or-prefix match with a token boundary: a prefix hit only counts
/// when the pattern ends at a separator (or supplies its own, e.g. a
/// trailing `/` or `=`), so `mkfs` matches `mkfs.ext4` but a hypothetical
/// `rm -r` entry would not match `rm -rf`.
fn matches_exact_or_prefix(normalized: &str, pattern: &str) -> bool {
    if normalized == pattern {
        return true;
    }
    if !normalized.starts_with(pattern) {
        return false;
    }
    let boundary = pattern
        .chars()
        .last()
        .is_some_and(|c| matches!(c, '/' | '=' | '.' | ':'));
    boundary
        || normalized[pattern.len()..]
            .chars()
            .next()
            .is_some_and(|c| c == ' ' || c == '.')
}
