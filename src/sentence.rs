//! Token classification and sentence-level correction.
//!
//! Splits a command line into whitespace tokens, classifies each one (root,
//! subcommand, long flag, short-flag cluster, path/URL, numeric, free
//! token), routes it to the corpus that applies, and aggregates the
//! per-token fixes into a single [`Correction`].
//!
//! Classification decides the corpus, the corpus decides the fix:
//!
//! - Token 0 is the root and matches against the root vocabulary. A
//!   corrected root becomes the lookup context for the rest of the pass.
//! - `--name` and `--name=value` match the bare name against the root's
//!   long-flag set; prefix and `=value` suffix are preserved.
//! - Short flags and clusters are never touched here; the cluster decoder
//!   owns them.
//! - Paths, URLs, numerics, and assignments are literals; literals are
//!   never "corrected".
//! - The first non-flag argument tries the root's subcommand corpus before
//!   the global vocabulary; later arguments go straight to the global
//!   vocabulary.

use smallvec::SmallVec;

use crate::correction::{Correction, TokenFix};
use crate::corpus::REGISTRY;
use crate::distance::{best_match, confidence, CorpusMatch};

/// Confidence for the missing-prefix heuristic (`status` -> `git status`).
const MISSING_PREFIX_CONFIDENCE: f64 = 0.78;

/// Tools whose subcommands are commonly typed bare by mistake.
const PREFIX_PARENTS: &[&str] = &["git", "docker", "kubectl"];

/// Correct a whole command line. Returns `None` when nothing needed fixing.
///
/// Zero detected fixes yield `None`, never a zero-confidence correction.
#[must_use]
pub fn correct_sentence(command: &str) -> Option<Correction> {
    let tokens: Vec<&str> = command.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }
    // Lowercase once; every corpus lookup reuses the cached form.
    let lower: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();

    let mut fixes: SmallVec<[TokenFix; 4]> = SmallVec::new();
    let mut corrected: Vec<String> = tokens.iter().map(ToString::to_string).collect();

    // Token 0: the root. A fix here changes the context for every later
    // lookup in this pass.
    let root: String = match best_match(&lower[0], REGISTRY.roots().iter().copied()) {
        CorpusMatch::Near {
            candidate,
            distance,
        } => {
            fixes.push(TokenFix {
                original: tokens[0].to_string(),
                corrected: candidate.to_string(),
                distance,
            });
            corrected[0] = candidate.to_string();
            candidate.to_string()
        }
        CorpusMatch::Exact | CorpusMatch::None => lower[0].clone(),
    };

    let subcommands = REGISTRY.subcommands(&root);
    let long_flags = REGISTRY.long_flags(&root);

    for i in 1..tokens.len() {
        let token = tokens[i];
        let lt = &lower[i];

        if let Some(bare) = lt.strip_prefix("--") {
            // Long flag: fix the bare name, keep the prefix and any =value.
            // The name is matched lowercased; the value keeps its case.
            let name = bare.split_once('=').map_or(bare, |(n, _)| n);
            let value = token.split_once('=').map(|(_, v)| v);
            if name.is_empty() {
                continue; // bare "--" separator
            }
            if let CorpusMatch::Near {
                candidate,
                distance,
            } = best_match(name, long_flags.iter().copied())
            {
                let rebuilt = match value {
                    Some(v) => format!("--{candidate}={v}"),
                    None => format!("--{candidate}"),
                };
                fixes.push(TokenFix {
                    original: token.to_string(),
                    corrected: rebuilt.clone(),
                    distance,
                });
                corrected[i] = rebuilt;
            }
            continue;
        }
        if lt.starts_with('-') {
            continue; // short flag or cluster; the decoder owns these
        }
        if is_literal(lt) {
            continue;
        }

        // First non-flag argument prefers the root's subcommand corpus.
        let fix = if i == 1 && !subcommands.is_empty() {
            match best_match(lt, subcommands.iter().copied()) {
                CorpusMatch::Exact => continue,
                near @ CorpusMatch::Near { .. } => near,
                CorpusMatch::None => best_match(lt, REGISTRY.global_vocabulary().iter().copied()),
            }
        } else {
            best_match(lt, REGISTRY.global_vocabulary().iter().copied())
        };

        if let CorpusMatch::Near {
            candidate,
            distance,
        } = fix
        {
            // Preserve shouting-case conventions (env-var-like tokens).
            let replacement = if is_shouting(token) {
                candidate.to_uppercase()
            } else {
                candidate.to_string()
            };
            fixes.push(TokenFix {
                original: token.to_string(),
                corrected: replacement.clone(),
                distance,
            });
            corrected[i] = replacement;
        }
    }

    if fixes.is_empty() {
        return missing_prefix(command, &root);
    }

    let corrected_text = corrected.join(" ");
    if corrected_text == command.trim() {
        return None;
    }

    // Per-fix confidence is computed over the whole typed command: the
    // longer the surrounding context, the more certain a small edit is.
    #[allow(clippy::cast_precision_loss)]
    let mean = fixes
        .iter()
        .map(|f| confidence(command, f.distance))
        .sum::<f64>()
        / fixes.len() as f64;
    let explanation = fixes
        .iter()
        .map(TokenFix::describe)
        .collect::<Vec<_>>()
        .join(", ");

    tracing::debug!(fixes = fixes.len(), confidence = mean, "sentence corrected");
    Some(Correction::new(command, corrected_text, mean, explanation))
}

/// Missing-prefix heuristic: the user typed a bare subcommand of a common
/// parent tool (`status` instead of `git status`).
fn missing_prefix(command: &str, root: &str) -> Option<Correction> {
    // Only when the root is not itself a known command.
    if REGISTRY.roots().contains(&root) {
        return None;
    }
    for parent in PREFIX_PARENTS {
        if REGISTRY.subcommands(parent).contains(&root) {
            return Some(Correction::new(
                command,
                format!("{parent} {}", command.trim()),
                MISSING_PREFIX_CONFIDENCE,
                format!("{root} is a {parent} subcommand; did you mean {parent} {root}?"),
            ));
        }
    }
    None
}

/// Literal arguments are never corrected: filesystem paths, URLs, numbers,
/// and NAME=value assignments.
fn is_literal(token: &str) -> bool {
    token.starts_with('/')
        || token.starts_with("./")
        || token.starts_with("../")
        || token.starts_with('~')
        || token.contains("://")
        || token.starts_with("http")
        || token.contains('=')
        || token.parse::<f64>().is_ok()
}

/// True for tokens typed entirely in uppercase (with at least one letter).
fn is_shouting(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_alphabetic())
        && token
            .chars()
            .all(|c| !c.is_ascii_alphabetic() || c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_typo_with_subcommand_context() {
        let c = correct_sentence("gti status").unwrap();
        assert_eq!(c.corrected, "git status");
        assert!(c.confidence > 0.8, "confidence {}", c.confidence);
        assert!(c.explanation.contains("gti -> git"));
    }

    #[test]
    fn corrected_root_provides_subcommand_corpus() {
        // Both the root and the subcommand are misspelled; the corrected
        // root supplies the corpus that fixes the subcommand.
        let c = correct_sentence("gti sttaus").unwrap();
        assert_eq!(c.corrected, "git status");
        assert_eq!(c.explanation, "gti -> git, sttaus -> status");
    }

    #[test]
    fn long_flag_fix_preserves_value_suffix() {
        let c = correct_sentence("git log --onelien").unwrap();
        assert_eq!(c.corrected, "git log --oneline");

        let c = correct_sentence("docker run --nmae=web nginx").unwrap();
        assert_eq!(c.corrected, "docker run --name=web nginx");

        // The value keeps its case even though the name is case-folded.
        let c = correct_sentence("docker run --nmae=Web nginx").unwrap();
        assert_eq!(c.corrected, "docker run --name=Web nginx");
    }

    #[test]
    fn short_flags_and_clusters_are_left_alone() {
        assert!(correct_sentence("docker run -it ubuntu").is_none());
        assert!(correct_sentence("ls -la").is_none());
    }

    #[test]
    fn literals_are_never_corrected() {
        assert!(correct_sentence("git add ./sttaus").is_none());
        assert!(correct_sentence("curl https://example.com/instal").is_none());
        assert!(correct_sentence("kill 4217").is_none());
        assert!(correct_sentence("docker run -e MODE=instal nginx").is_none());
        assert!(correct_sentence("cat ~/instal.txt").is_none());
    }

    #[test]
    fn shouting_case_is_preserved() {
        let c = correct_sentence("npm INSTAL").unwrap();
        assert_eq!(c.corrected, "npm INSTALL");
    }

    #[test]
    fn exact_command_yields_no_correction() {
        assert!(correct_sentence("git status").is_none());
        assert!(correct_sentence("docker ps").is_none());
        assert!(correct_sentence("cargo build --release").is_none());
    }

    #[test]
    fn idempotence_on_corrected_output() {
        let c = correct_sentence("gti sttaus").unwrap();
        assert!(correct_sentence(&c.corrected).is_none());
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(correct_sentence("").is_none());
        assert!(correct_sentence("   ").is_none());
    }

    #[test]
    fn missing_prefix_heuristic() {
        let c = correct_sentence("status -s").unwrap();
        assert_eq!(c.corrected, "git status -s");
        assert!((c.confidence - MISSING_PREFIX_CONFIDENCE).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_prefix_skips_known_roots() {
        // "ps" is a docker subcommand but also a real command.
        assert!(correct_sentence("ps aux").is_none());
    }

    #[test]
    fn confidence_is_mean_of_fixes() {
        let cmd = "gti sttaus";
        let c = correct_sentence(cmd).unwrap();
        let expected =
            (crate::distance::confidence(cmd, 1) + crate::distance::confidence(cmd, 2)) / 2.0;
        assert!((c.confidence - expected).abs() < 1e-9);
    }
}
