//! Bounded nearest-neighbor search over a corpus.
//!
//! The matcher is the hot path of the engine: it runs for every token of
//! every analyzed command line, so it is allocation-light and aggressively
//! pre-filtered:
//!
//! 1. An adaptive threshold derived from token length keeps short tokens
//!    from being "corrected" into unrelated short commands (`ls` must never
//!    silently become `ln`).
//! 2. A length pre-filter skips candidates whose length differs from the
//!    token by more than the threshold. Edit distance is lower-bounded by
//!    the length difference, so this cannot change results.
//! 3. Distance 0 short-circuits: an exact corpus member is never a typo.
//!
//! Ties are broken by corpus iteration order (first minimum wins). This is
//! deterministic but corpus-order-dependent; tests rely on it.

/// Minimum confidence assigned to any accepted match.
pub const CONFIDENCE_FLOOR: f64 = 0.3;

/// Outcome of matching a token against a corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusMatch<'a> {
    /// The token is already a corpus member. Never report a correction.
    Exact,
    /// The closest candidate within the adaptive threshold.
    Near {
        /// The corpus entry the token was matched to.
        candidate: &'a str,
        /// Edit distance between token and candidate.
        distance: usize,
    },
    /// No candidate within the threshold.
    None,
}

impl<'a> CorpusMatch<'a> {
    /// Return the matched candidate for a `Near` outcome.
    #[must_use]
    pub const fn candidate(&self) -> Option<&'a str> {
        match self {
            Self::Near { candidate, .. } => Some(candidate),
            Self::Exact | Self::None => None,
        }
    }
}

/// Maximum tolerated edit distance for a token of `len` characters.
///
/// Short tokens tolerate fewer edits: a 2-character token one edit away from
/// half the corpus would otherwise produce constant false positives.
#[inline]
#[must_use]
pub const fn max_distance_for_len(len: usize) -> usize {
    if len <= 3 {
        1
    } else if len <= 6 {
        2
    } else {
        3
    }
}

/// Confidence that correcting `original` at `distance` edits is right.
///
/// `clamp(1 - 1.5 * d / (len + 1), 0.3)`: shorter originals are penalized
/// more per edit, reflecting lower certainty.
#[must_use]
pub fn confidence(original: &str, distance: usize) -> f64 {
    let len = original.chars().count();
    #[allow(clippy::cast_precision_loss)]
    let raw = 1.0 - 1.5 * distance as f64 / (len as f64 + 1.0);
    raw.clamp(CONFIDENCE_FLOOR, 1.0)
}

/// Find the best corpus entry for `token` within the adaptive threshold.
///
/// Returns [`CorpusMatch::Exact`] as soon as a distance-0 candidate is seen;
/// an exact corpus member must never be reported as a typo.
#[must_use]
pub fn best_match<'a, I>(token: &str, corpus: I) -> CorpusMatch<'a>
where
    I: IntoIterator<Item = &'a str>,
{
    let token_len = token.chars().count();
    let max_distance = max_distance_for_len(token_len);
    let mut best: Option<(&'a str, usize)> = None;

    for candidate in corpus {
        let cand_len = candidate.chars().count();
        // Length pre-filter: |len(t) - len(c)| lower-bounds the distance.
        if token_len.abs_diff(cand_len) > max_distance {
            continue;
        }

        let dist = damerau_levenshtein(token, candidate);
        if dist == 0 {
            return CorpusMatch::Exact;
        }
        if dist <= max_distance && best.map_or(true, |(_, d)| dist < d) {
            best = Some((candidate, dist));
        }
    }

    match best {
        Some((candidate, distance)) => CorpusMatch::Near {
            candidate,
            distance,
        },
        None => CorpusMatch::None,
    }
}

/// Damerau-Levenshtein distance (optimal string alignment variant).
///
/// Counts insertions, deletions, substitutions, and adjacent transpositions.
/// `gti -> git` is one edit, not two.
#[must_use]
pub fn damerau_levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Three rolling rows: transposition lookups reach back two rows.
    let width = b.len() + 1;
    let mut prev2: Vec<usize> = vec![0; width];
    let mut prev: Vec<usize> = (0..width).collect();
    let mut curr: Vec<usize> = vec![0; width];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut d = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                d = d.min(prev2[j - 2] + 1); // adjacent transposition
            }
            curr[j] = d;
        }
        std::mem::swap(&mut prev2, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn distance_basics() {
        assert_eq!(damerau_levenshtein("git", "git"), 0);
        assert_eq!(damerau_levenshtein("gti", "git"), 1); // transposition
        assert_eq!(damerau_levenshtein("cat", "car"), 1);
        assert_eq!(damerau_levenshtein("", "abc"), 3);
        assert_eq!(damerau_levenshtein("abc", ""), 3);
        assert_eq!(damerau_levenshtein("sttaus", "status"), 2);
    }

    #[test]
    fn adaptive_threshold_buckets() {
        assert_eq!(max_distance_for_len(1), 1);
        assert_eq!(max_distance_for_len(3), 1);
        assert_eq!(max_distance_for_len(4), 2);
        assert_eq!(max_distance_for_len(6), 2);
        assert_eq!(max_distance_for_len(7), 3);
        assert_eq!(max_distance_for_len(40), 3);
    }

    #[test]
    fn exact_member_is_never_a_typo() {
        let corpus = ["git", "grep", "go"];
        assert_eq!(best_match("git", corpus), CorpusMatch::Exact);
    }

    #[test]
    fn short_tokens_do_not_cross_correct() {
        // "ls" is one edit from "ln", but an exact member short-circuits
        // before any near candidate is considered.
        let corpus = ["ln", "ls"];
        assert_eq!(best_match("ls", corpus), CorpusMatch::Exact);
    }

    #[test]
    fn near_match_within_threshold() {
        let corpus = ["docker", "kubectl"];
        match best_match("dokcer", corpus) {
            CorpusMatch::Near {
                candidate,
                distance,
            } => {
                assert_eq!(candidate, "docker");
                assert_eq!(distance, 1);
            }
            other => panic!("expected near match, got {other:?}"),
        }
    }

    #[test]
    fn beyond_threshold_is_no_match() {
        let corpus = ["git"];
        // 3-char token tolerates a single edit; "xyz" needs three.
        assert_eq!(best_match("xyz", corpus), CorpusMatch::None);
    }

    #[test]
    fn tie_break_is_corpus_order() {
        // Both candidates are one edit from "cae"; the earlier one wins.
        let corpus = ["cat", "car"];
        assert_eq!(best_match("cae", corpus).candidate(), Some("cat"));
        let corpus = ["car", "cat"];
        assert_eq!(best_match("cae", corpus).candidate(), Some("car"));
    }

    #[test]
    fn confidence_floor_and_shape() {
        assert!((confidence("status", 0) - 1.0).abs() < f64::EPSILON);
        let one = confidence("status", 1);
        let two = confidence("status", 2);
        assert!(one > two);
        assert!((CONFIDENCE_FLOOR..=1.0).contains(&one));
        // Heavily edited short token bottoms out at the floor.
        assert!((confidence("ls", 3) - CONFIDENCE_FLOOR).abs() < f64::EPSILON);
    }

    proptest! {
        #[test]
        fn threshold_monotone_in_length(len in 0usize..64) {
            prop_assert!(max_distance_for_len(len) <= max_distance_for_len(len + 1));
            prop_assert!((1..=3).contains(&max_distance_for_len(len)));
        }

        #[test]
        fn confidence_bounded_and_decreasing(
            token in "[a-z]{1,16}",
            d in 0usize..8,
        ) {
            let c = confidence(&token, d);
            prop_assert!((CONFIDENCE_FLOOR..=1.0).contains(&c));
            prop_assert!(confidence(&token, d + 1) <= c);
        }

        #[test]
        fn prefilter_never_changes_results(
            token in "[a-z]{1,10}",
            corpus in proptest::collection::vec("[a-z]{1,10}", 0..12),
        ) {
            let refs: Vec<&str> = corpus.iter().map(String::as_str).collect();
            let max = max_distance_for_len(token.chars().count());
            // Unfiltered reference scan.
            let mut reference = CorpusMatch::None;
            let mut best = usize::MAX;
            for &c in &refs {
                let d = damerau_levenshtein(&token, c);
                if d == 0 { reference = CorpusMatch::Exact; break; }
                if d <= max && d < best {
                    best = d;
                    reference = CorpusMatch::Near { candidate: c, distance: d };
                }
            }
            prop_assert_eq!(best_match(&token, refs.iter().copied()), reference);
        }
    }
}
