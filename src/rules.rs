//! Output-driven correction rules.
//!
//! Each rule pairs a match predicate over (command, captured output) with a
//! rewrite that derives replacement commands from concrete error text.
//! Rules are evaluated in declaration order and the first match wins; its
//! first candidate is returned at confidence 1.0, because it is lifted from
//! observed output rather than estimated.
//!
//! Rules never run a process themselves; the engine owns execution and
//! hands the captured output in.

use regex::Regex;
use std::sync::LazyLock;

use crate::correction::Correction;

/// Roots that would hang a non-interactive diagnostic run: editors, pagers,
/// remote shells, database clients, language REPLs.
pub const INTERACTIVE_ROOTS: &[&str] = &[
    "vim", "vi", "nvim", "nano", "emacs", "less", "more", "man", "top", "htop", "ssh", "mysql",
    "psql", "sqlite3", "mongo", "mongosh", "redis-cli", "python", "python3", "ipython", "node",
    "irb", "ghci", "tmux", "screen", "watch", "ftp", "telnet",
];

/// True when the command's root would block waiting for a terminal.
#[must_use]
pub fn is_interactive(command: &str) -> bool {
    command
        .split_whitespace()
        .next()
        .is_some_and(|root| INTERACTIVE_ROOTS.contains(&root.to_lowercase().as_str()))
}

/// An output-driven rewrite rule.
pub struct Rule {
    /// Stable rule name for logging and tests.
    pub name: &'static str,
    /// Human-readable explanation attached to the correction.
    pub explanation: &'static str,
    matches: fn(&str, &str) -> bool,
    rewrite: fn(&str, &str) -> Vec<String>,
}

impl Rule {
    /// Does this rule apply to the command and its captured output?
    #[must_use]
    pub fn matches(&self, command: &str, output: &str) -> bool {
        (self.matches)(command, output)
    }

    /// Candidate replacement commands, best first.
    #[must_use]
    pub fn rewrite(&self, command: &str, output: &str) -> Vec<String> {
        (self.rewrite)(command, output)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// The ordered rule table. More specific rules come first; the
/// privilege-escalation rule is last because its trigger text appears in
/// many unrelated failures.
pub static RULES: &[Rule] = &[
    Rule {
        name: "git-set-upstream",
        explanation: "git printed the exact push invocation it needs",
        matches: |cmd, out| cmd.starts_with("git push") && out.contains("--set-upstream"),
        rewrite: |_, out| {
            SET_UPSTREAM_RE
                .find(out)
                .map(|m| vec![m.as_str().to_string()])
                .unwrap_or_default()
        },
    },
    Rule {
        name: "git-most-similar",
        explanation: "git suggested the most similar command",
        matches: |cmd, out| {
            cmd.starts_with("git ") && out.contains("The most similar command")
        },
        rewrite: |cmd, out| {
            suggestion_after(out, &MOST_SIMILAR_RE)
                .map(|sub| vec![replace_token(cmd, 1, &sub)])
                .unwrap_or_default()
        },
    },
    Rule {
        name: "did-you-mean",
        explanation: "the tool suggested a close subcommand",
        matches: |_, out| DID_YOU_MEAN_RE.is_match(out),
        rewrite: |cmd, out| {
            suggestion_after(out, &DID_YOU_MEAN_RE)
                .map(|sub| vec![replace_token(cmd, 1, &sub)])
                .unwrap_or_default()
        },
    },
    Rule {
        name: "node-missing-module",
        explanation: "a required module is not installed",
        matches: |_, out| MISSING_MODULE_RE.is_match(out),
        rewrite: |cmd, out| {
            MISSING_MODULE_RE
                .captures(out)
                .map(|c| vec![format!("npm install {} && {cmd}", &c[1])])
                .unwrap_or_default()
        },
    },
    Rule {
        name: "port-in-use",
        explanation: "the port is held by another process; free it and retry",
        matches: |_, out| {
            let lower = out.to_lowercase();
            lower.contains("address already in use") || lower.contains("eaddrinuse")
        },
        rewrite: |cmd, out| {
            PORT_RE
                .captures(out)
                .map(|c| vec![format!("kill -9 $(lsof -ti:{}) && {cmd}", &c[1])])
                .unwrap_or_default()
        },
    },
    Rule {
        name: "permission-denied",
        explanation: "the operation needs elevated privileges",
        matches: |cmd, out| {
            !cmd.starts_with("sudo ") && out.to_lowercase().contains("permission denied")
        },
        rewrite: |cmd, _| vec![format!("sudo {cmd}")],
    },
];

static SET_UPSTREAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"git push --set-upstream \S+ \S+").expect("set-upstream regex must compile")
});

static MOST_SIMILAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"The most similar command(?:s are| is)?\s*\n?\s*([A-Za-z0-9][A-Za-z0-9_-]*)")
        .expect("most-similar regex must compile")
});

static DID_YOU_MEAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[Dd]id you mean(?: this| one of these)?\??:?\s*\n?\s*[`'\x22]?([A-Za-z0-9][A-Za-z0-9_-]*)")
        .expect("did-you-mean regex must compile")
});

static MISSING_MODULE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Cannot find module '([^']+)'").expect("missing-module regex must compile")
});

static PORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:port\s*:?\s*|:)(\d{2,5})").expect("port regex must compile")
});

fn suggestion_after(output: &str, re: &Regex) -> Option<String> {
    re.captures(output).map(|c| c[1].to_string())
}

/// Replace token `index` of `command`, preserving the remaining tokens.
/// Falls back to replacing the root when the command has no token there.
fn replace_token(command: &str, index: usize, replacement: &str) -> String {
    let mut tokens: Vec<&str> = command.split_whitespace().collect();
    if index < tokens.len() {
        tokens[index] = replacement;
    } else if let Some(first) = tokens.first_mut() {
        *first = replacement;
    }
    tokens.join(" ")
}

/// Evaluate the rule table against a command and its captured output.
///
/// First matching rule wins; its first candidate becomes the correction at
/// confidence 1.0. Returns `None` when no rule applies or the matching
/// rule's rewrite produced no candidate.
#[must_use]
pub fn evaluate(command: &str, output: &str) -> Option<Correction> {
    for rule in RULES {
        if !rule.matches(command, output) {
            continue;
        }
        let candidate = rule.rewrite(command, output).into_iter().next()?;
        tracing::debug!(rule = rule.name, "output rule matched");
        return Some(Correction::new(command, candidate, 1.0, rule.explanation));
    }
    None
}
