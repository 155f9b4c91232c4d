//! Short-flag cluster decoding.
//!
//! A cluster like `docker run -it` packs several one-character flags into a
//! single token. Decoding expands the cluster into its long-option
//! equivalents for a given root command, so an ambiguous cluster can be
//! explained before it is run.
//!
//! Decoding is an expand-for-review operation: the engine only emits an
//! expansion [`Correction`] when the caller asked for it, never as a silent
//! rewrite. Clusters are skipped entirely by the sentence corrector.

use crate::correction::Correction;
use crate::corpus::{ShortFlag, REGISTRY};

/// Fixed confidence for cluster expansions.
///
/// The mapping is table-driven rather than inferred, but the user may have
/// meant a different tool's flags; 0.80 reflects that.
pub const EXPANSION_CONFIDENCE: f64 = 0.80;

/// A decoded short-flag cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterExpansion {
    /// The cluster token as typed (e.g. `-it`).
    pub original: String,
    /// Space-joined long options for the known characters.
    pub expansion: String,
    /// Per-character detail for the known characters, in cluster order.
    pub known: Vec<ShortFlag>,
    /// Characters with no entry in the root's table, in cluster order.
    pub unknown: Vec<char>,
}

impl ClusterExpansion {
    /// Human description of the known flags, one clause per flag.
    #[must_use]
    pub fn describe(&self) -> String {
        self.known
            .iter()
            .map(|f| format!("-{} {} ({})", f.ch, f.long, f.description))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// True if `token` is a short-flag cluster: a dash, not a double dash, and
/// more than one character after the dash.
#[must_use]
pub fn is_cluster(token: &str) -> bool {
    let mut chars = token.chars();
    if chars.next() != Some('-') {
        return false;
    }
    match chars.next() {
        None | Some('-') => false,
        Some(_) => chars.next().is_some(),
    }
}

/// Decode a cluster token against `root`'s short-flag table.
///
/// Returns `None` when the token is not a cluster or the root has no
/// short-flag table at all (the decoder is a no-op for such roots).
/// Character lookup is case-sensitive.
#[must_use]
pub fn decode_cluster(root: &str, token: &str) -> Option<ClusterExpansion> {
    if !is_cluster(token) {
        return None;
    }
    let table = REGISTRY.short_flags(root);
    if table.is_empty() {
        return None;
    }

    let mut known = Vec::new();
    let mut unknown = Vec::new();
    for ch in token.chars().skip(1) {
        match table.iter().find(|f| f.ch == ch) {
            Some(flag) => known.push(*flag),
            None => unknown.push(ch),
        }
    }

    let expansion = known
        .iter()
        .map(|f| f.long)
        .collect::<Vec<_>>()
        .join(" ");

    Some(ClusterExpansion {
        original: token.to_string(),
        expansion,
        known,
        unknown,
    })
}

/// Expand the first decodable cluster in `command` into a review
/// [`Correction`].
///
/// The corrected text is the command with the cluster replaced by its full
/// expansion. Emitted only when at least one character decoded; a cluster of
/// entirely unknown characters yields nothing.
#[must_use]
pub fn expand_for_review(command: &str) -> Option<Correction> {
    // Quick reject: no dash, no cluster.
    memchr::memchr(b'-', command.as_bytes())?;
    let tokens: Vec<&str> = command.split_whitespace().collect();
    let root = tokens.first()?.to_lowercase();

    for (idx, token) in tokens.iter().enumerate().skip(1) {
        let Some(decoded) = decode_cluster(&root, token) else {
            continue;
        };
        if decoded.known.is_empty() {
            continue;
        }

        let mut corrected: Vec<&str> = tokens.clone();
        corrected[idx] = &decoded.expansion;
        let explanation = decoded
            .known
            .iter()
            .map(|f| format!("-{} -> {}", f.ch, f.long))
            .collect::<Vec<_>>()
            .join(", ");

        return Some(Correction::new(
            command,
            corrected.join(" "),
            EXPANSION_CONFIDENCE,
            explanation,
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cluster_shape() {
        assert!(is_cluster("-it"));
        assert!(is_cluster("-rf"));
        assert!(!is_cluster("-i")); // single short flag, not a cluster
        assert!(!is_cluster("--interactive"));
        assert!(!is_cluster("git"));
        assert!(!is_cluster("-"));
    }

    #[test]
    fn docker_it_decodes_fully() {
        let decoded = decode_cluster("docker", "-it").unwrap();
        assert_eq!(decoded.expansion, "--interactive --tty");
        assert!(decoded.unknown.is_empty());
        assert_eq!(decoded.known.len(), 2);
    }

    #[test]
    fn unknown_characters_are_recorded_separately() {
        let decoded = decode_cluster("docker", "-iZ").unwrap();
        assert_eq!(decoded.expansion, "--interactive");
        assert_eq!(decoded.unknown, vec!['Z']);
    }

    #[test]
    fn case_sensitivity_distinguishes_publish_variants() {
        let lower = decode_cluster("docker", "-pt").unwrap();
        assert!(lower.expansion.contains("--publish"));
        let upper = decode_cluster("docker", "-Pt").unwrap();
        assert!(upper.expansion.contains("--publish-all"));
    }

    #[test]
    fn root_without_table_is_noop() {
        assert!(decode_cluster("cd", "-it").is_none());
    }

    #[test]
    fn review_expansion_replaces_cluster_in_place() {
        let c = expand_for_review("docker run -it ubuntu").unwrap();
        assert_eq!(c.corrected, "docker run --interactive --tty ubuntu");
        assert!((c.confidence - EXPANSION_CONFIDENCE).abs() < f64::EPSILON);
        assert!(c.explanation.contains("-i -> --interactive"));
        assert!(c.explanation.contains("-t -> --tty"));
    }

    #[test]
    fn review_skips_fully_unknown_clusters() {
        assert!(expand_for_review("docker run -ZZ ubuntu").is_none());
    }

    #[test]
    fn review_requires_a_decodable_root() {
        assert!(expand_for_review("mysteriouscmd -it").is_none());
    }
}
