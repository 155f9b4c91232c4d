//! Static corpora of known-valid command vocabulary.
//!
//! This module provides the read-only tables every analysis consults:
//! root commands, per-root subcommands, per-root long flags, per-root
//! short-flag tables, a global fallback vocabulary, and modern-tool
//! alternatives for legacy utilities.
//!
//! # Organization
//!
//! Vocabulary is organized into per-tool-family files, one file per family:
//! - [`git`] - git
//! - [`containers`] - docker
//! - [`kubernetes`] - kubectl
//! - [`package_managers`] - npm, cargo, pip
//! - [`system`] - coreutils and common unix tools
//!
//! All tables are built once at first use behind [`REGISTRY`] and shared by
//! every analysis; nothing is ever added or removed at runtime. Adding
//! support for a new tool is purely additive data, never logic.

pub mod containers;
pub mod git;
pub mod kubernetes;
pub mod package_managers;
pub mod system;

use std::collections::HashMap;
use std::sync::LazyLock;

/// A single short flag: one character mapped to its long-option spelling.
///
/// Characters are case-sensitive: `docker run -p` publishes a port while
/// `-P` publishes all exposed ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortFlag {
    /// The flag character as it appears in a cluster.
    pub ch: char,
    /// Long-option equivalent, including leading dashes.
    pub long: &'static str,
    /// One-line human description.
    pub description: &'static str,
}

/// Macro to declare a short-flag table row.
#[macro_export]
macro_rules! short_flag {
    ($ch:literal, $long:literal, $desc:literal) => {
        $crate::corpus::ShortFlag {
            ch: $ch,
            long: $long,
            description: $desc,
        }
    };
}

/// Vocabulary for a single root command.
#[derive(Debug, Clone)]
pub struct ToolCorpus {
    /// The root command this corpus describes (lowercase).
    pub root: &'static str,
    /// Known subcommands, in preference order (earlier wins ties).
    pub subcommands: &'static [&'static str],
    /// Known long-flag names, without leading dashes.
    pub long_flags: &'static [&'static str],
    /// Short-flag table for cluster decoding. Empty if the tool has none.
    pub short_flags: &'static [ShortFlag],
}

impl ToolCorpus {
    /// Look up a short flag by character. Case-sensitive.
    #[must_use]
    pub fn short_flag(&self, ch: char) -> Option<&ShortFlag> {
        self.short_flags.iter().find(|f| f.ch == ch)
    }
}

/// A modern replacement suggestion for a legacy tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModernAlternative {
    /// The legacy tool name.
    pub legacy: &'static str,
    /// The suggested modern replacement.
    pub modern: &'static str,
    /// Why the replacement is worth considering.
    pub reason: &'static str,
}

/// Roots recognized without a dedicated corpus.
///
/// These participate in root-typo correction but have no subcommand or flag
/// tables of their own.
const EXTRA_ROOTS: &[&str] = &[
    "ls", "cd", "pwd", "cat", "echo", "mkdir", "rmdir", "touch", "mv", "cp", "rm", "ln", "chmod",
    "chown", "ps", "kill", "top", "htop", "df", "du", "find", "sed", "awk", "zip", "unzip", "ssh",
    "scp", "rsync", "wget", "ping", "man", "make", "gcc", "python", "python3", "node", "npx",
    "java", "go", "rustc", "vim", "nano", "code", "tmux", "systemctl", "journalctl", "brew",
    "apt", "apt-get", "yum", "dnf", "pacman", "sudo", "yarn", "pnpm", "pip3", "helm", "terraform",
    "ansible", "aws", "gcloud", "az", "gh", "jq", "head", "tail", "less", "more", "sort", "uniq",
    "wc", "which", "env", "export", "history", "clear", "exit",
];

/// Fallback vocabulary for argument tokens whose root has no specific corpus.
const GLOBAL_VOCABULARY: &[&str] = &[
    "install", "uninstall", "update", "upgrade", "remove", "status", "start", "stop", "restart",
    "reload", "enable", "disable", "list", "search", "info", "show", "help", "version", "build",
    "test", "run", "clean", "init", "config", "push", "pull", "commit", "clone", "deploy",
    "login", "logout", "fetch", "checkout", "branch", "merge", "apply", "delete", "create",
    "describe", "logs", "exec", "publish", "release", "format", "lint", "watch", "serve",
];

/// Modern-tool alternatives surfaced as advisory suggestions.
const MODERN_ALTERNATIVES: &[ModernAlternative] = &[
    ModernAlternative {
        legacy: "ls",
        modern: "eza",
        reason: "git-aware listing with tree view and sane colors",
    },
    ModernAlternative {
        legacy: "cat",
        modern: "bat",
        reason: "syntax highlighting and paging",
    },
    ModernAlternative {
        legacy: "grep",
        modern: "rg",
        reason: "faster recursive search with gitignore support",
    },
    ModernAlternative {
        legacy: "find",
        modern: "fd",
        reason: "simpler syntax and faster traversal",
    },
    ModernAlternative {
        legacy: "du",
        modern: "dust",
        reason: "readable usage tree at a glance",
    },
    ModernAlternative {
        legacy: "df",
        modern: "duf",
        reason: "grouped, colored filesystem overview",
    },
    ModernAlternative {
        legacy: "top",
        modern: "btop",
        reason: "richer process view with mouse support",
    },
    ModernAlternative {
        legacy: "ps",
        modern: "procs",
        reason: "readable columns and built-in search",
    },
    ModernAlternative {
        legacy: "sed",
        modern: "sd",
        reason: "literal-by-default find and replace",
    },
    ModernAlternative {
        legacy: "diff",
        modern: "delta",
        reason: "syntax-highlighted side-by-side diffs",
    },
    ModernAlternative {
        legacy: "man",
        modern: "tldr",
        reason: "example-first condensed pages",
    },
    ModernAlternative {
        legacy: "dig",
        modern: "dog",
        reason: "colored DNS output with sensible defaults",
    },
    ModernAlternative {
        legacy: "time",
        modern: "hyperfine",
        reason: "statistical benchmarking with warmup runs",
    },
];

/// Empty slices returned for roots without registered vocabulary.
const NO_SUBCOMMANDS: &[&str] = &[];
const NO_SHORT_FLAGS: &[ShortFlag] = &[];

/// Process-wide corpus registry.
///
/// Built once on first access. All lookups are pure and lock-free; the
/// registry is shared freely across threads.
pub static REGISTRY: LazyLock<CorpusRegistry> = LazyLock::new(CorpusRegistry::build);

/// Read-only registry of every corpus the engine knows about.
#[derive(Debug)]
pub struct CorpusRegistry {
    tools: HashMap<&'static str, ToolCorpus>,
    roots: Vec<&'static str>,
    alternatives: HashMap<&'static str, ModernAlternative>,
}

impl CorpusRegistry {
    fn build() -> Self {
        let mut tools = HashMap::new();
        let mut roots = Vec::new();

        let packs = [
            git::create_corpora(),
            containers::create_corpora(),
            kubernetes::create_corpora(),
            package_managers::create_corpora(),
            system::create_corpora(),
        ];
        for corpus in packs.into_iter().flatten() {
            debug_assert!(!corpus.root.is_empty(), "corpus root must not be empty");
            debug_assert!(
                corpus.subcommands.iter().all(|s| !s.is_empty())
                    && corpus.long_flags.iter().all(|f| !f.is_empty()),
                "corpora must not contain the empty string"
            );
            roots.push(corpus.root);
            tools.insert(corpus.root, corpus);
        }

        for &root in EXTRA_ROOTS {
            if !tools.contains_key(root) {
                roots.push(root);
            }
        }

        let alternatives = MODERN_ALTERNATIVES
            .iter()
            .map(|alt| (alt.legacy, *alt))
            .collect();

        Self {
            tools,
            roots,
            alternatives,
        }
    }

    /// The full root-command vocabulary.
    #[must_use]
    pub fn roots(&self) -> &[&'static str] {
        &self.roots
    }

    /// The corpus registered for a root, if any. Keys are lowercase.
    #[must_use]
    pub fn tool(&self, root: &str) -> Option<&ToolCorpus> {
        self.tools.get(root)
    }

    /// Subcommand vocabulary for a root. Empty if none registered.
    #[must_use]
    pub fn subcommands(&self, root: &str) -> &[&'static str] {
        self.tool(root).map_or(NO_SUBCOMMANDS, |t| t.subcommands)
    }

    /// Long-flag vocabulary for a root (names without dashes).
    #[must_use]
    pub fn long_flags(&self, root: &str) -> &[&'static str] {
        self.tool(root).map_or(NO_SUBCOMMANDS, |t| t.long_flags)
    }

    /// Short-flag table for a root. Empty if the root has none.
    #[must_use]
    pub fn short_flags(&self, root: &str) -> &[ShortFlag] {
        self.tool(root).map_or(NO_SHORT_FLAGS, |t| t.short_flags)
    }

    /// Fallback vocabulary for tokens whose root has no specific corpus.
    #[must_use]
    pub fn global_vocabulary(&self) -> &'static [&'static str] {
        GLOBAL_VOCABULARY
    }

    /// Modern replacement for a legacy tool, if one is curated.
    #[must_use]
    pub fn modern_alternative(&self, legacy: &str) -> Option<&ModernAlternative> {
        self.alternatives.get(legacy)
    }
}
